//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every query is scoped by
//! the owning `user_id`.

pub mod bid_repo;
pub mod contact_repo;
pub mod project_repo;
pub mod rfq_repo;
pub mod subcategory_repo;
pub mod user_repo;

pub use bid_repo::BidRepo;
pub use contact_repo::ContactRepo;
pub use project_repo::ProjectRepo;
pub use rfq_repo::RfqRepo;
pub use subcategory_repo::SubcategoryRepo;
pub use user_repo::UserRepo;
