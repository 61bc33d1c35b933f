//! Repository for the `items` table.

use qadesk_core::status::SEND_SENT;
use qadesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::item::{Item, NewItem, UpdateItem};

/// Column list for `items` queries.
const COLUMNS: &str = "\
    id, kind, platform, version, label, description, priority, is_required, \
    department, reported_by, assignee_ids, dev_status, fix_status, \
    review_status, send_status, planning_link, note, created_by, \
    created_at, updated_at";

/// Provides CRUD operations for tracked items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the full row.
    pub async fn create(pool: &PgPool, input: &NewItem) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items \
                (kind, platform, version, label, description, priority, \
                 is_required, department, reported_by, assignee_ids, \
                 dev_status, fix_status, review_status, planning_link, \
                 note, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&input.kind)
            .bind(&input.platform)
            .bind(&input.version)
            .bind(&input.label)
            .bind(&input.description)
            .bind(&input.priority)
            .bind(input.is_required)
            .bind(&input.department)
            .bind(&input.reported_by)
            .bind(&input.assignee_ids)
            .bind(&input.dev_status)
            .bind(&input.fix_status)
            .bind(&input.review_status)
            .bind(&input.planning_link)
            .bind(&input.note)
            .bind(&input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find an item by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the full rows for a set of ids. Missing ids are simply absent
    /// from the result.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Item>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List all items of one kind, optionally restricted to a platform.
    ///
    /// Returns the full unfiltered collection, newest first; carry-forward
    /// filtering happens above the repository.
    pub async fn list(
        pool: &PgPool,
        kind: &str,
        platform: Option<&str>,
    ) -> Result<Vec<Item>, sqlx::Error> {
        match platform {
            Some(platform) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM items \
                     WHERE kind = $1 AND platform = $2 \
                     ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, Item>(&query)
                    .bind(kind)
                    .bind(platform)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM items WHERE kind = $1 ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, Item>(&query)
                    .bind(kind)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Partially update an item. Unset fields keep their current value.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateItem,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET \
                 platform = COALESCE($2, platform), \
                 version = COALESCE($3, version), \
                 label = COALESCE($4, label), \
                 description = COALESCE($5, description), \
                 priority = COALESCE($6, priority), \
                 is_required = COALESCE($7, is_required), \
                 department = COALESCE($8, department), \
                 reported_by = COALESCE($9, reported_by), \
                 assignee_ids = COALESCE($10, assignee_ids), \
                 dev_status = COALESCE($11, dev_status), \
                 fix_status = COALESCE($12, fix_status), \
                 review_status = COALESCE($13, review_status), \
                 send_status = COALESCE($14, send_status), \
                 planning_link = COALESCE($15, planning_link), \
                 note = COALESCE($16, note), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&input.platform)
            .bind(&input.version)
            .bind(&input.label)
            .bind(&input.description)
            .bind(&input.priority)
            .bind(input.is_required)
            .bind(&input.department)
            .bind(&input.reported_by)
            .bind(&input.assignee_ids)
            .bind(&input.dev_status)
            .bind(&input.fix_status)
            .bind(&input.review_status)
            .bind(&input.send_status)
            .bind(&input.planning_link)
            .bind(&input.note)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Advance every given item's send status to `sent` in one batch
    /// update. Returns the number of rows touched.
    pub async fn mark_sent(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("UPDATE items SET send_status = $2, updated_at = now() WHERE id = ANY($1)")
                .bind(ids)
                .bind(SEND_SENT)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }
}
