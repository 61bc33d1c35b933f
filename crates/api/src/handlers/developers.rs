//! Handlers for the developer roster.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use qadesk_core::error::CoreError;
use qadesk_core::platform::validate_platform;
use qadesk_core::types::DbId;
use qadesk_db::models::developer::{CreateDeveloper, DeveloperListParams, UpdateDeveloper};
use qadesk_db::repositories::DeveloperRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// List developers, optionally restricted to active ones on a platform.
/// A platform filter always includes shared developers as well.
pub async fn list_developers(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<DeveloperListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref platform) = params.platform {
        validate_platform(platform)?;
    }
    let developers =
        DeveloperRepo::list(&state.pool, params.active_only, params.platform.as_deref()).await?;
    Ok(Json(DataResponse { data: developers }))
}

/// Register a developer.
pub async fn create_developer(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateDeveloper>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(CoreError::Validation("Name must not be empty".into()).into());
    }
    validate_platform(&input.platform)?;

    let developer = DeveloperRepo::create(&state.pool, &input).await?;

    tracing::info!(
        developer_id = developer.id,
        name = %developer.name,
        created_by = %auth.email,
        "Developer registered",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: developer })))
}

/// Get a developer by ID.
pub async fn get_developer(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let developer = DeveloperRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Developer",
            id,
        }))?;
    Ok(Json(DataResponse { data: developer }))
}

/// Partially update a developer, including the active toggle.
/// Deactivation never clears existing item assignments.
pub async fn update_developer(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDeveloper>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref name) = input.name {
        if name.trim().is_empty() {
            return Err(CoreError::Validation("Name must not be empty".into()).into());
        }
    }
    if let Some(ref platform) = input.platform {
        validate_platform(platform)?;
    }

    let developer = DeveloperRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Developer",
            id,
        }))?;

    tracing::info!(developer_id = id, updated_by = %auth.email, "Developer updated");

    Ok(Json(DataResponse { data: developer }))
}

/// Delete a developer. Orphaned assignment ids resolve to nothing and the
/// item renders as unassigned.
pub async fn delete_developer(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DeveloperRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Developer",
            id,
        }));
    }

    tracing::info!(developer_id = id, deleted_by = %auth.email, "Developer deleted");

    Ok(StatusCode::NO_CONTENT)
}
