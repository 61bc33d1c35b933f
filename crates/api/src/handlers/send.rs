//! The dispatch endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::dispatch::{dispatch, DispatchRequest};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Dispatch a batch of items to the configured chat spaces.
pub async fn send_items(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(req): Json<DispatchRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = dispatch(
        &state.pool,
        state.sender.as_ref(),
        &state.config,
        &auth,
        &req,
    )
    .await?;
    Ok(Json(DataResponse { data: outcome }))
}
