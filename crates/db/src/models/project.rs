//! Project entity model and DTOs.

use chrono::NaiveDate;
use estapp_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub file_url: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub bid_due_date: Option<NaiveDate>,
    pub rfq_due_date: Option<NaiveDate>,
    pub archived: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub file_url: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub bid_due_date: Option<NaiveDate>,
    pub rfq_due_date: Option<NaiveDate>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub file_url: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub bid_due_date: Option<NaiveDate>,
    pub rfq_due_date: Option<NaiveDate>,
}
