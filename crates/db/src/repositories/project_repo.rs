//! Repository for the `projects` table.

use estapp_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, description, location, file_url, due_date, \
                       bid_due_date, rfq_due_date, archived, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (user_id, name, description, location, file_url,
                                   due_date, bid_due_date, rfq_due_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.location)
            .bind(&input.file_url)
            .bind(input.due_date)
            .bind(input.bid_due_date)
            .bind(input.rfq_due_date)
            .fetch_one(pool)
            .await
    }

    /// List projects for a user, most recently created first.
    ///
    /// `archived` filters to one side of the archive partition; `None`
    /// lists everything.
    pub async fn list(
        pool: &PgPool,
        user_id: DbId,
        archived: Option<bool>,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE user_id = $1 AND ($2::boolean IS NULL OR archived = $2)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .bind(archived)
            .fetch_all(pool)
            .await
    }

    /// Find a project by ID, scoped to the owning user.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row owned by `user_id` matches `id`.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                location = COALESCE($5, location),
                file_url = COALESCE($6, file_url),
                due_date = COALESCE($7, due_date),
                bid_due_date = COALESCE($8, bid_due_date),
                rfq_due_date = COALESCE($9, rfq_due_date),
                updated_at = now()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.location)
            .bind(&input.file_url)
            .bind(input.due_date)
            .bind(input.bid_due_date)
            .bind(input.rfq_due_date)
            .fetch_optional(pool)
            .await
    }

    /// Flip the archive flag. Returns `true` if a row owned by `user_id`
    /// was updated.
    pub async fn set_archived(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        archived: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET archived = $3, updated_at = now()
             WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .bind(archived)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a project. Returns `true` if a row owned by `user_id` was
    /// removed. The project's RFQs go with it (ON DELETE CASCADE).
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
