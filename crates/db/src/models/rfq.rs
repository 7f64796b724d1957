//! RFQ entity model and DTOs.

use chrono::NaiveDate;
use estapp_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An RFQ row from the `rfqs` table.
///
/// `status` holds one of the canonical
/// [`estapp_core::rfq_status::RfqStatus`] names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rfq {
    pub id: DbId,
    pub user_id: DbId,
    pub project_id: Option<DbId>,
    pub contact_id: Option<DbId>,
    pub subject: String,
    pub message: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An RFQ row joined with the identity fields of its contact, as needed
/// for company grouping and message composition.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RfqWithContact {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub contact_id: Option<DbId>,
    pub subject: String,
    pub status: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_company: Option<String>,
    pub contact_type: Option<String>,
}

/// DTO for creating a single RFQ via the form flow.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRfq {
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    pub message: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub project_id: Option<DbId>,
    pub contact_id: Option<DbId>,
}
