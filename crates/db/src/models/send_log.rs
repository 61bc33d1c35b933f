//! Send log entity model.
//!
//! The audit trail of dispatch attempts. Rows are inserted by the
//! dispatch engine and never updated or deleted.

use qadesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `send_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SendLog {
    pub id: DbId,
    pub sent_at: Timestamp,
    pub sent_by: String,
    pub sent_by_email: String,
    pub send_type: String,
    pub target_classification: String,
    pub target_space: String,
    pub item_count: i32,
    pub item_summary: String,
    pub success: bool,
    pub error_message: Option<String>,
}

/// Insert payload for a send log row.
#[derive(Debug, Clone)]
pub struct CreateSendLog {
    pub sent_by: String,
    pub sent_by_email: String,
    pub send_type: String,
    pub target_classification: String,
    pub target_space: String,
    pub item_count: i32,
    pub item_summary: String,
    pub success: bool,
    pub error_message: Option<String>,
}

/// Query parameters for listing send logs.
#[derive(Debug, Deserialize)]
pub struct SendLogListParams {
    pub limit: Option<i64>,
}
