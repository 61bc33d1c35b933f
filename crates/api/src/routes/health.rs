use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database does not answer.
    pub status: &'static str,
    /// Crate version, for checking what a deployment is running.
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health -- liveness probe with a database ping. Unauthenticated,
/// since deploy tooling polls it.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = qadesk_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mounted at the root, outside `/api/v1` and outside auth.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
