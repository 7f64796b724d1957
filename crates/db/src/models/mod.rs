//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts (with `validator` constraints
//!   on required fields)
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod bid;
pub mod contact;
pub mod project;
pub mod rfq;
pub mod subcategory;
pub mod user;
