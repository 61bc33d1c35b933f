//! Repository for the `send_logs` table.
//!
//! Insert and list only. The send log is an append-only audit trail;
//! no update or delete methods exist on purpose.

use sqlx::PgPool;

use crate::models::send_log::{CreateSendLog, SendLog};

/// Column list for `send_logs` queries.
const COLUMNS: &str = "\
    id, sent_at, sent_by, sent_by_email, send_type, target_classification, \
    target_space, item_count, item_summary, success, error_message";

/// Provides append and read access to the send log.
pub struct SendLogRepo;

impl SendLogRepo {
    /// Append one dispatch attempt to the log.
    pub async fn create(pool: &PgPool, input: &CreateSendLog) -> Result<SendLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO send_logs \
                (sent_by, sent_by_email, send_type, target_classification, \
                 target_space, item_count, item_summary, success, error_message) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SendLog>(&query)
            .bind(&input.sent_by)
            .bind(&input.sent_by_email)
            .bind(&input.send_type)
            .bind(&input.target_classification)
            .bind(&input.target_space)
            .bind(input.item_count)
            .bind(&input.item_summary)
            .bind(input.success)
            .bind(&input.error_message)
            .fetch_one(pool)
            .await
    }

    /// List the most recent log rows, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<SendLog>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM send_logs ORDER BY sent_at DESC, id DESC LIMIT $1");
        sqlx::query_as::<_, SendLog>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
