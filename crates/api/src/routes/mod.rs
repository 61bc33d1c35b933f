pub mod developers;
pub mod health;
pub mod items;
pub mod send;
pub mod send_logs;
pub mod versions;
pub mod webhooks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /items                        list, create
/// /items/{id}                   get, update, delete
///
/// /versions                     list, create
/// /versions/{id}                delete
/// /versions/{id}/current        mark current (PUT)
///
/// /developers                   list, create
/// /developers/{id}              get, update, delete
///
/// /webhooks                     list, create
/// /webhooks/{id}                update, delete
/// /webhooks/{id}/test           test send (POST)
///
/// /send                         dispatch a batch (POST)
/// /send-logs                    audit trail (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/items", items::router())
        .nest("/versions", versions::router())
        .nest("/developers", developers::router())
        .nest("/webhooks", webhooks::router())
        .merge(send::router())
        .merge(send_logs::router())
}
