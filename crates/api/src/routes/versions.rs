//! Route definitions for the version registry.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::versions;
use crate::state::AppState;

/// Version registry routes mounted at `/versions`.
///
/// ```text
/// GET    /                 -> list_versions (platform required)
/// POST   /                 -> create_version
/// DELETE /{id}             -> delete_version
/// PUT    /{id}/current     -> set_current_version
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(versions::list_versions).post(versions::create_version),
        )
        .route("/{id}", delete(versions::delete_version))
        .route("/{id}/current", put(versions::set_current_version))
}
