//! Route definition for the dispatch endpoint.

use axum::routing::post;
use axum::Router;

use crate::handlers::send;
use crate::state::AppState;

/// ```text
/// POST /send    -> send_items
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/send", post(send::send_items))
}
