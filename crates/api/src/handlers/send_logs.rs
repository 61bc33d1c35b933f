//! Read access to the dispatch audit trail.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use qadesk_db::models::send_log::SendLogListParams;
use qadesk_db::repositories::SendLogRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 500;

/// List the most recent dispatch attempts, newest first.
pub async fn list_send_logs(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<SendLogListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let logs = SendLogRepo::list_recent(&state.pool, limit).await?;
    Ok(Json(DataResponse { data: logs }))
}
