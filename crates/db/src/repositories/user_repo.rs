//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{User, DEFAULT_USER_EMAIL, DEFAULT_USER_NAME};

/// Provides lookup for the single-tenant default user.
pub struct UserRepo;

impl UserRepo {
    /// Return the default user, creating it on first use.
    ///
    /// A single upsert round trip so concurrent first requests cannot race
    /// into duplicate accounts.
    pub async fn get_or_create_default(pool: &PgPool) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, name) VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_users_email
             DO UPDATE SET email = EXCLUDED.email
             RETURNING id, email, name, created_at, updated_at",
        )
        .bind(DEFAULT_USER_EMAIL)
        .bind(DEFAULT_USER_NAME)
        .fetch_one(pool)
        .await
    }
}
