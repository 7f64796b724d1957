//! User entity model.
//!
//! Single-tenant: every operation runs as the default user, which is
//! created on first use (see `UserRepo::get_or_create_default`).

use estapp_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Email of the implicit single-tenant account.
pub const DEFAULT_USER_EMAIL: &str = "default@estapp.local";

/// Display name of the implicit single-tenant account.
pub const DEFAULT_USER_NAME: &str = "Default User";

/// A user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
