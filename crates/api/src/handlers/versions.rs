//! Handlers for the per-platform version registry.
//!
//! Ordering matters here: listing returns newest-first, and that order is
//! what the item list uses to decide which versions count as "older" when
//! carrying unresolved items forward.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use qadesk_core::error::CoreError;
use qadesk_core::platform::validate_platform;
use qadesk_core::types::DbId;
use qadesk_db::models::app_version::{AppVersionListParams, CreateAppVersion};
use qadesk_db::repositories::VersionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// List a platform's versions, newest first.
pub async fn list_versions(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<AppVersionListParams>,
) -> AppResult<impl IntoResponse> {
    validate_platform(&params.platform)?;
    let versions = VersionRepo::list_for_platform(&state.pool, &params.platform).await?;
    Ok(Json(DataResponse { data: versions }))
}

/// Register a new version string for a platform.
pub async fn create_version(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateAppVersion>,
) -> AppResult<impl IntoResponse> {
    validate_platform(&input.platform)?;
    if input.version.trim().is_empty() {
        return Err(CoreError::Validation("Version must not be empty".into()).into());
    }

    let version = VersionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        version_id = version.id,
        platform = %version.platform,
        version = %version.version,
        created_by = %auth.email,
        "Version registered",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: version })))
}

#[derive(Debug, Deserialize)]
pub struct SetCurrentRequest {
    pub is_current: bool,
}

/// Mark a version as the platform's current one. The flip is atomic over
/// the whole platform, so at most one version is current at any time.
pub async fn set_current_version(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetCurrentRequest>,
) -> AppResult<impl IntoResponse> {
    if !input.is_current {
        return Err(CoreError::Validation(
            "Un-marking a current version is not supported; mark another version instead".into(),
        )
        .into());
    }

    let existing = VersionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AppVersion",
            id,
        }))?;

    let updated = VersionRepo::set_current(&state.pool, &existing.platform, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AppVersion",
            id,
        }))?;

    tracing::info!(
        version_id = id,
        platform = %updated.platform,
        version = %updated.version,
        updated_by = %auth.email,
        "Current version changed",
    );

    Ok(Json(DataResponse { data: updated }))
}

/// Delete a version row. Items referencing its label keep it as a plain
/// string and degrade gracefully in the carry-forward view.
pub async fn delete_version(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = VersionRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "AppVersion",
            id,
        }));
    }

    tracing::info!(version_id = id, deleted_by = %auth.email, "Version deleted");

    Ok(StatusCode::NO_CONTENT)
}
