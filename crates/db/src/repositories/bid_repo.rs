//! Repository for the `bids` and `bid_line_items` tables.

use estapp_core::bid::line_total;
use estapp_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::bid::{Bid, BidLineItem, BidLineItemInput, BidWithItems, CreateBid, UpdateBid};

/// Column list shared across bid queries to avoid repetition.
const COLUMNS: &str = "id, user_id, project_id, name, status, due_date, total_amount, \
                       notes, created_at, updated_at";

const ITEM_COLUMNS: &str =
    "id, bid_id, sort_order, description, quantity, unit, unit_price, total_price";

/// Provides CRUD operations for bids with their line items.
pub struct BidRepo;

impl BidRepo {
    /// Insert a new bid and its line items in one transaction.
    ///
    /// Line totals and the bid's `total_amount` are derived from
    /// `quantity * unit_price`; caller-supplied totals do not exist in the
    /// input shape.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateBid,
    ) -> Result<BidWithItems, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let total: f64 = input
            .line_items
            .iter()
            .map(|i| line_total(i.quantity, i.unit_price))
            .sum();

        let query = format!(
            "INSERT INTO bids (user_id, project_id, name, status, due_date, total_amount, notes)
             VALUES ($1, $2, $3, COALESCE($4, 'DRAFT'), $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let bid = sqlx::query_as::<_, Bid>(&query)
            .bind(user_id)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.status)
            .bind(input.due_date)
            .bind(total)
            .bind(&input.notes)
            .fetch_one(&mut *tx)
            .await?;

        let line_items = Self::insert_items(&mut tx, bid.id, &input.line_items).await?;
        tx.commit().await?;

        Ok(BidWithItems { bid, line_items })
    }

    /// List all bids for a user, most recently created first (without
    /// line items).
    pub async fn list(pool: &PgPool, user_id: DbId) -> Result<Vec<Bid>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM bids WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Bid>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a bid with its line items, scoped to the owning user.
    pub async fn find_with_items(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<BidWithItems>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bids WHERE id = $1 AND user_id = $2");
        let Some(bid) = sqlx::query_as::<_, Bid>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let items_query = format!(
            "SELECT {ITEM_COLUMNS} FROM bid_line_items WHERE bid_id = $1 ORDER BY sort_order, id"
        );
        let line_items = sqlx::query_as::<_, BidLineItem>(&items_query)
            .bind(id)
            .fetch_all(pool)
            .await?;

        Ok(Some(BidWithItems { bid, line_items }))
    }

    /// Update a bid. Only non-`None` scalar fields are applied; a present
    /// `line_items` list replaces the stored items wholesale and
    /// recomputes `total_amount`.
    ///
    /// Returns `None` if no row owned by `user_id` matches `id`.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateBid,
    ) -> Result<Option<BidWithItems>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE bids SET
                name = COALESCE($3, name),
                project_id = COALESCE($4, project_id),
                status = COALESCE($5, status),
                due_date = COALESCE($6, due_date),
                notes = COALESCE($7, notes),
                updated_at = now()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        let Some(mut bid) = sqlx::query_as::<_, Bid>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(input.project_id)
            .bind(&input.status)
            .bind(input.due_date)
            .bind(&input.notes)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let line_items = match &input.line_items {
            Some(items) => {
                sqlx::query("DELETE FROM bid_line_items WHERE bid_id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
                let inserted = Self::insert_items(&mut tx, id, items).await?;

                let total: f64 = inserted.iter().map(|i| i.total_price).sum();
                let total_query = format!(
                    "UPDATE bids SET total_amount = $2 WHERE id = $1 RETURNING {COLUMNS}"
                );
                bid = sqlx::query_as::<_, Bid>(&total_query)
                    .bind(id)
                    .bind(total)
                    .fetch_one(&mut *tx)
                    .await?;
                inserted
            }
            None => {
                let items_query = format!(
                    "SELECT {ITEM_COLUMNS} FROM bid_line_items
                     WHERE bid_id = $1 ORDER BY sort_order, id"
                );
                sqlx::query_as::<_, BidLineItem>(&items_query)
                    .bind(id)
                    .fetch_all(&mut *tx)
                    .await?
            }
        };

        tx.commit().await?;
        Ok(Some(BidWithItems { bid, line_items }))
    }

    /// Delete a bid (line items cascade). Returns `true` if a row owned by
    /// `user_id` was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bids WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_items(
        tx: &mut Transaction<'_, Postgres>,
        bid_id: DbId,
        items: &[BidLineItemInput],
    ) -> Result<Vec<BidLineItem>, sqlx::Error> {
        let mut inserted = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let sort_order = item.sort_order.unwrap_or(i as i32);
            let query = format!(
                "INSERT INTO bid_line_items (bid_id, sort_order, description, quantity,
                                             unit, unit_price, total_price)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)
                 RETURNING {ITEM_COLUMNS}"
            );
            let row = sqlx::query_as::<_, BidLineItem>(&query)
                .bind(bid_id)
                .bind(sort_order)
                .bind(&item.description)
                .bind(item.quantity)
                .bind(&item.unit)
                .bind(item.unit_price)
                .bind(line_total(item.quantity, item.unit_price))
                .fetch_one(&mut **tx)
                .await?;
            inserted.push(row);
        }
        Ok(inserted)
    }
}
