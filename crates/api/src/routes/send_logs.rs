//! Route definition for the dispatch audit trail.

use axum::routing::get;
use axum::Router;

use crate::handlers::send_logs;
use crate::state::AppState;

/// ```text
/// GET /send-logs    -> list_send_logs (limit optional, newest first)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/send-logs", get(send_logs::list_send_logs))
}
