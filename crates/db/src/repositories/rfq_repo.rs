//! Repository for the `rfqs` table.

use estapp_core::types::DbId;
use sqlx::PgPool;

use crate::models::rfq::{CreateRfq, Rfq, RfqWithContact};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, project_id, contact_id, subject, message, due_date, \
                       status, created_at, updated_at";

/// Join used for company grouping and message composition.
const WITH_CONTACT: &str = "SELECT r.id, r.project_id, r.contact_id, r.subject, r.status,
            c.name AS contact_name, c.email AS contact_email,
            c.company AS contact_company, c.contact_type AS contact_type
     FROM rfqs r
     JOIN contacts c ON c.id = r.contact_id";

/// Provides CRUD and lifecycle operations for RFQs.
pub struct RfqRepo;

impl RfqRepo {
    /// Insert a single RFQ in `DRAFT` status, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateRfq,
    ) -> Result<Rfq, sqlx::Error> {
        let query = format!(
            "INSERT INTO rfqs (user_id, project_id, contact_id, subject, message, due_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rfq>(&query)
            .bind(user_id)
            .bind(input.project_id)
            .bind(input.contact_id)
            .bind(&input.subject)
            .bind(&input.message)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Bulk-insert `DRAFT` RFQs for a project, one per contact id, with a
    /// shared subject.
    ///
    /// Deduplication against existing RFQs is handled by the
    /// `uq_rfqs_user_project_contact` constraint: conflicting rows are
    /// dropped from the insert, not errors. Returns the number of rows
    /// actually inserted.
    pub async fn create_many_drafts(
        pool: &PgPool,
        user_id: DbId,
        project_id: DbId,
        contact_ids: &[DbId],
        subject: &str,
    ) -> Result<u64, sqlx::Error> {
        if contact_ids.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query(
            "INSERT INTO rfqs (user_id, project_id, contact_id, subject)
             SELECT $1, $2, cid, $4 FROM UNNEST($3::bigint[]) AS cid
             ON CONFLICT ON CONSTRAINT uq_rfqs_user_project_contact DO NOTHING",
        )
        .bind(user_id)
        .bind(project_id)
        .bind(contact_ids)
        .bind(subject)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Find an RFQ by ID, scoped to the owning user.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Rfq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rfqs WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Rfq>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Write a new status. The caller is responsible for having validated
    /// the transition; this is only the state write.
    pub async fn set_status(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        status: &str,
    ) -> Result<Option<Rfq>, sqlx::Error> {
        let query = format!(
            "UPDATE rfqs SET status = $3, updated_at = now()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rfq>(&query)
            .bind(id)
            .bind(user_id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// List a project's RFQs joined with contact identity, oldest first.
    /// RFQs without a contact reference are excluded.
    pub async fn list_by_project_with_contact(
        pool: &PgPool,
        user_id: DbId,
        project_id: DbId,
    ) -> Result<Vec<RfqWithContact>, sqlx::Error> {
        let query =
            format!("{WITH_CONTACT} WHERE r.user_id = $1 AND r.project_id = $2 ORDER BY r.created_at");
        sqlx::query_as::<_, RfqWithContact>(&query)
            .bind(user_id)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Of the given ids, return the rows that qualify for a batch send:
    /// owned by the user, on the project, still `DRAFT`, and with a
    /// deliverable contact address.
    pub async fn list_sendable(
        pool: &PgPool,
        user_id: DbId,
        project_id: DbId,
        ids: &[DbId],
    ) -> Result<Vec<RfqWithContact>, sqlx::Error> {
        let query = format!(
            "{WITH_CONTACT}
             WHERE r.user_id = $1 AND r.project_id = $2 AND r.id = ANY($3)
               AND r.status = 'DRAFT' AND c.email IS NOT NULL AND c.email <> ''
             ORDER BY r.created_at"
        );
        sqlx::query_as::<_, RfqWithContact>(&query)
            .bind(user_id)
            .bind(project_id)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Transition every qualifying id in the batch to `SENT` (same
    /// predicate as [`RfqRepo::list_sendable`]); non-qualifying ids are
    /// silently excluded. Returns the number of rows updated.
    pub async fn mark_batch_sent(
        pool: &PgPool,
        user_id: DbId,
        project_id: DbId,
        ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE rfqs r SET status = 'SENT', updated_at = now()
             FROM contacts c
             WHERE c.id = r.contact_id
               AND r.user_id = $1 AND r.project_id = $2 AND r.id = ANY($3)
               AND r.status = 'DRAFT' AND c.email IS NOT NULL AND c.email <> ''",
        )
        .bind(user_id)
        .bind(project_id)
        .bind(ids)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
