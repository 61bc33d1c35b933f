//! Route definitions for the developer roster.

use axum::routing::get;
use axum::Router;

use crate::handlers::developers;
use crate::state::AppState;

/// Developer routes mounted at `/developers`.
///
/// ```text
/// GET    /        -> list_developers (active_only/platform optional)
/// POST   /        -> create_developer
/// GET    /{id}    -> get_developer
/// PUT    /{id}    -> update_developer
/// DELETE /{id}    -> delete_developer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(developers::list_developers).post(developers::create_developer),
        )
        .route(
            "/{id}",
            get(developers::get_developer)
                .put(developers::update_developer)
                .delete(developers::delete_developer),
        )
}
