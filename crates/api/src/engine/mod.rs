//! The two core engines: RFQ lifecycle and contact import reconciliation.
//!
//! Engines orchestrate repositories against the pure logic in
//! `estapp_core`; handlers stay thin adapters over them.

pub mod import;
pub mod rfq;
