//! Bid and bid line item models and DTOs.

use chrono::NaiveDate;
use estapp_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A bid row from the `bids` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Bid {
    pub id: DbId,
    pub user_id: DbId,
    pub project_id: Option<DbId>,
    pub name: String,
    pub status: String,
    pub due_date: Option<NaiveDate>,
    pub total_amount: Option<f64>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A line item row from the `bid_line_items` table.
///
/// `total_price` is written by the repository as `quantity * unit_price`;
/// callers never supply it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BidLineItem {
    pub id: DbId,
    pub bid_id: DbId,
    pub sort_order: i32,
    pub description: String,
    pub quantity: f64,
    pub unit: Option<String>,
    pub unit_price: f64,
    pub total_price: f64,
}

/// A bid together with its line items.
#[derive(Debug, Clone, Serialize)]
pub struct BidWithItems {
    #[serde(flatten)]
    pub bid: Bid,
    pub line_items: Vec<BidLineItem>,
}

/// DTO for one line item on a create/update request. No `total_price`
/// field: the stored value is always derived.
#[derive(Debug, Clone, Deserialize)]
pub struct BidLineItemInput {
    pub sort_order: Option<i32>,
    pub description: String,
    pub quantity: f64,
    pub unit: Option<String>,
    pub unit_price: f64,
}

/// DTO for creating a new bid.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBid {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub project_id: Option<DbId>,
    pub status: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    #[serde(default)]
    pub line_items: Vec<BidLineItemInput>,
}

/// DTO for updating an existing bid. `line_items`, when present, replaces
/// the full item list.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBid {
    pub name: Option<String>,
    pub project_id: Option<DbId>,
    pub status: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub line_items: Option<Vec<BidLineItemInput>>,
}
