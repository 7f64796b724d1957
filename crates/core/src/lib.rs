//! Pure domain logic for the estimating back office.
//!
//! This crate has no database, async, or I/O dependencies. It provides:
//!
//! - Enumerated contact, RFQ, and bid types with string conversions
//! - The RFQ status state machine and its transition rules
//! - The contact import reconciliation planner (header normalization,
//!   match-key construction, row classification)
//! - RFQ e-mail composition and company grouping helpers

pub mod bid;
pub mod contact_type;
pub mod error;
pub mod import;
pub mod mail;
pub mod rfq;
pub mod rfq_status;
pub mod types;
