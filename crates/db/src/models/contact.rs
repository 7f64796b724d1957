//! Contact entity model and DTOs.

use estapp_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A contact row from the `contacts` table.
///
/// `contact_type` holds one of the canonical
/// [`estapp_core::contact_type::ContactType`] names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contact_type: String,
    pub sub_category: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Identity slice used by the import reconciler for match-key lookup.
#[derive(Debug, Clone, FromRow)]
pub struct ContactIdentity {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
}

/// DTO for creating a new contact.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContact {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Defaults to `OTHER` if omitted.
    pub contact_type: Option<String>,
    pub sub_category: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing contact. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContact {
    pub name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contact_type: Option<String>,
    pub sub_category: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
}
