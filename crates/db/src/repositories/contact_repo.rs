//! Repository for the `contacts` table.

use estapp_core::import::ContactFields;
use estapp_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::{Contact, ContactIdentity, CreateContact, UpdateContact};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, company, email, phone, contact_type, \
                       sub_category, location, notes, created_at, updated_at";

/// Provides CRUD and bulk-import operations for contacts.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact, returning the created row.
    ///
    /// If `contact_type` is `None` in the input, defaults to `OTHER`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateContact,
    ) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (user_id, name, company, email, phone, contact_type,
                                   sub_category, location, notes)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'OTHER'), $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.company)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.contact_type)
            .bind(&input.sub_category)
            .bind(&input.location)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Bulk-insert contacts from an import plan, returning the number of
    /// rows the database reports as inserted.
    pub async fn create_many(
        pool: &PgPool,
        user_id: DbId,
        rows: &[ContactFields],
    ) -> Result<u64, sqlx::Error> {
        if rows.is_empty() {
            return Ok(0);
        }

        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        let companies: Vec<Option<&str>> = rows.iter().map(|r| r.company.as_deref()).collect();
        let emails: Vec<Option<&str>> = rows.iter().map(|r| r.email.as_deref()).collect();
        let phones: Vec<Option<&str>> = rows.iter().map(|r| r.phone.as_deref()).collect();
        let types: Vec<&str> = rows.iter().map(|r| r.contact_type.as_str()).collect();
        let sub_categories: Vec<Option<&str>> =
            rows.iter().map(|r| r.sub_category.as_deref()).collect();
        let locations: Vec<Option<&str>> = rows.iter().map(|r| r.location.as_deref()).collect();
        let notes: Vec<Option<&str>> = rows.iter().map(|r| r.notes.as_deref()).collect();

        let result = sqlx::query(
            "INSERT INTO contacts (user_id, name, company, email, phone, contact_type,
                                   sub_category, location, notes)
             SELECT $1, * FROM UNNEST($2::text[], $3::text[], $4::text[], $5::text[],
                                      $6::text[], $7::text[], $8::text[], $9::text[])",
        )
        .bind(user_id)
        .bind(&names)
        .bind(&companies)
        .bind(&emails)
        .bind(&phones)
        .bind(&types)
        .bind(&sub_categories)
        .bind(&locations)
        .bind(&notes)
        .execute(pool)
        .await?;
        tracing::debug!(
            requested = rows.len(),
            inserted = result.rows_affected(),
            "bulk contact insert"
        );
        Ok(result.rows_affected())
    }

    /// List all contacts for a user, ordered by name.
    pub async fn list(pool: &PgPool, user_id: DbId) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE user_id = $1 ORDER BY name");
        sqlx::query_as::<_, Contact>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List the identity slice (id, name, email) of every contact for a
    /// user, as consumed by the import reconciler.
    pub async fn list_identities(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ContactIdentity>, sqlx::Error> {
        sqlx::query_as::<_, ContactIdentity>(
            "SELECT id, name, email FROM contacts WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Find a contact by ID, scoped to the owning user.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a contact. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row owned by `user_id` matches `id`.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateContact,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE contacts SET
                name = COALESCE($3, name),
                company = COALESCE($4, company),
                email = COALESCE($5, email),
                phone = COALESCE($6, phone),
                contact_type = COALESCE($7, contact_type),
                sub_category = COALESCE($8, sub_category),
                location = COALESCE($9, location),
                notes = COALESCE($10, notes),
                updated_at = now()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.company)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.contact_type)
            .bind(&input.sub_category)
            .bind(&input.location)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite every imported field of a contact with the row payload.
    ///
    /// Unlike [`ContactRepo::update`], `None` values clear the stored
    /// field: an import row is the full new truth for the contact.
    pub async fn replace_fields(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        fields: &ContactFields,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE contacts SET
                name = $3, company = $4, email = $5, phone = $6, contact_type = $7,
                sub_category = $8, location = $9, notes = $10, updated_at = now()
             WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .bind(&fields.name)
        .bind(&fields.company)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(fields.contact_type.as_str())
        .bind(&fields.sub_category)
        .bind(&fields.location)
        .bind(&fields.notes)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a contact. Returns `true` if a row owned by `user_id` was
    /// removed. RFQs referencing the contact keep a null `contact_id`
    /// (ON DELETE SET NULL).
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
