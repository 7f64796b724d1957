//! Subcategory entity model and DTOs.

use estapp_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A subcategory row from the `subcategories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subcategory {
    pub id: DbId,
    pub user_id: DbId,
    pub contact_type: String,
    pub name: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
}

/// DTO for creating a subcategory under a contact type.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSubcategory {
    pub contact_type: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}
