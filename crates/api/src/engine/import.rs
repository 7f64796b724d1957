//! Spreadsheet import engine.
//!
//! Bridges the pure reconciliation planner in `estapp_core::import` to
//! storage: fetches the caller's existing contacts, builds the plan, then
//! applies it (one bulk insert, individual field replacements) and folds
//! the outcome into an [`ImportSummary`].

use estapp_core::import::{self, ExistingContact, ImportSummary, RawRow};
use estapp_core::types::DbId;
use estapp_db::repositories::ContactRepo;
use indexmap::IndexMap;
use sqlx::PgPool;

use crate::error::AppResult;

/// Structural error returned when the upload parses to zero rows.
pub const EMPTY_SHEET: &str = "The spreadsheet appears to be empty.";

/// A parsed spreadsheet row as it arrives over the wire. `IndexMap`
/// preserves the column order of the uploaded file.
pub type WireRow = IndexMap<String, String>;

/// Import a batch of spreadsheet rows for a user.
///
/// An empty batch is a structural error (summary with a single error and
/// zero counts), distinct from a batch whose rows all fail row-level
/// validation. Updates are applied row by row; the batch is not
/// transactional, and `created` reflects what storage reports inserted.
pub async fn import_contacts(
    pool: &PgPool,
    user_id: DbId,
    rows: &[WireRow],
) -> AppResult<ImportSummary> {
    if rows.is_empty() {
        return Ok(ImportSummary {
            created: 0,
            updated: 0,
            skipped: 0,
            errors: vec![EMPTY_SHEET.to_string()],
        });
    }

    let raw: Vec<RawRow> = rows
        .iter()
        .map(|r| r.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .collect();

    let existing: Vec<ExistingContact> = ContactRepo::list_identities(pool, user_id)
        .await?
        .into_iter()
        .map(|c| ExistingContact { id: c.id, name: c.name, email: c.email })
        .collect();

    let plan = import::build_plan(&raw, &existing);

    let created = ContactRepo::create_many(pool, user_id, &plan.to_create).await?;

    let mut updated = 0u64;
    for (id, fields) in &plan.to_update {
        if ContactRepo::replace_fields(pool, user_id, *id, fields).await? {
            updated += 1;
        }
    }

    let skipped = plan.errors.len() as u64;
    let mut errors = plan.errors;
    errors.extend(plan.warnings);

    tracing::info!(
        rows = rows.len(),
        created,
        updated,
        skipped,
        "contact import applied"
    );

    Ok(ImportSummary { created, updated, skipped, errors })
}
