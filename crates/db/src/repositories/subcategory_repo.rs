//! Repository for the `subcategories` table.

use estapp_core::types::DbId;
use sqlx::PgPool;

use crate::models::subcategory::Subcategory;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, contact_type, name, sort_order, created_at";

/// Provides operations for per-type subcategory lists.
pub struct SubcategoryRepo;

impl SubcategoryRepo {
    /// List all subcategories for a user, grouped by contact type and
    /// ordered by sort position.
    pub async fn list(pool: &PgPool, user_id: DbId) -> Result<Vec<Subcategory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM subcategories
             WHERE user_id = $1 ORDER BY contact_type, sort_order"
        );
        sqlx::query_as::<_, Subcategory>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Append a subcategory at the end of its contact type's list.
    ///
    /// Returns `None` when (user, type, name) already exists; the
    /// `uq_subcategories_user_type_name` constraint makes the
    /// check-then-insert a single statement.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        contact_type: &str,
        name: &str,
    ) -> Result<Option<Subcategory>, sqlx::Error> {
        let query = format!(
            "INSERT INTO subcategories (user_id, contact_type, name, sort_order)
             SELECT $1, $2, $3, COALESCE(MAX(sort_order), 0) + 1
             FROM subcategories WHERE user_id = $1 AND contact_type = $2
             ON CONFLICT ON CONSTRAINT uq_subcategories_user_type_name DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subcategory>(&query)
            .bind(user_id)
            .bind(contact_type)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a subcategory. Returns `true` if a row owned by `user_id`
    /// was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM subcategories WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
