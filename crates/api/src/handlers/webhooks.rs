//! Handlers for webhook configs.
//!
//! One active config per target classification is the expected shape.
//! It is not enforced at the database level; dispatch picks the lowest id
//! deterministically if an operator registers duplicates.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use qadesk_core::error::CoreError;
use qadesk_core::platform::validate_webhook_target;
use qadesk_core::types::DbId;
use qadesk_db::models::webhook_config::{CreateWebhookConfig, UpdateWebhookConfig};
use qadesk_db::repositories::WebhookConfigRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// List all webhook configs ordered by space name.
pub async fn list_webhooks(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let configs = WebhookConfigRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: configs }))
}

/// Register a webhook config for a target classification.
pub async fn create_webhook(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateWebhookConfig>,
) -> AppResult<impl IntoResponse> {
    if input.space_name.trim().is_empty() {
        return Err(CoreError::Validation("Space name must not be empty".into()).into());
    }
    if input.webhook_url.trim().is_empty() {
        return Err(CoreError::Validation("Webhook URL must not be empty".into()).into());
    }
    validate_webhook_target(&input.target_platform)?;

    let config = WebhookConfigRepo::create(&state.pool, &input).await?;

    tracing::info!(
        webhook_id = config.id,
        space = %config.space_name,
        webhook_target = %config.target_platform,
        created_by = %auth.email,
        "Webhook config registered",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: config })))
}

/// Partially update a webhook config, including the active toggle.
pub async fn update_webhook(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWebhookConfig>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref name) = input.space_name {
        if name.trim().is_empty() {
            return Err(CoreError::Validation("Space name must not be empty".into()).into());
        }
    }
    if let Some(ref url) = input.webhook_url {
        if url.trim().is_empty() {
            return Err(CoreError::Validation("Webhook URL must not be empty".into()).into());
        }
    }
    if let Some(ref target) = input.target_platform {
        validate_webhook_target(target)?;
    }

    let config = WebhookConfigRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WebhookConfig",
            id,
        }))?;

    tracing::info!(webhook_id = id, updated_by = %auth.email, "Webhook config updated");

    Ok(Json(DataResponse { data: config }))
}

#[derive(Debug, Serialize)]
pub struct TestSendResult {
    pub success: bool,
    pub error: Option<String>,
}

/// Post a fixed test message to the config's URL so operators can verify
/// a space before relying on it. Not recorded in the send log.
pub async fn test_webhook(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let config = WebhookConfigRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WebhookConfig",
            id,
        }))?;

    let text = format!(
        "Test message from the QA release desk for space '{}'.",
        config.space_name
    );
    let result = match state.sender.send(&config.webhook_url, &text).await {
        Ok(()) => TestSendResult {
            success: true,
            error: None,
        },
        Err(reason) => TestSendResult {
            success: false,
            error: Some(reason),
        },
    };

    tracing::info!(
        webhook_id = id,
        space = %config.space_name,
        success = result.success,
        tested_by = %auth.email,
        "Webhook test send",
    );

    Ok(Json(DataResponse { data: result }))
}

/// Delete a webhook config. Dispatches targeting its classification will
/// skip it (bugs) or fail with not found (dev tasks) from then on.
pub async fn delete_webhook(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = WebhookConfigRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "WebhookConfig",
            id,
        }));
    }

    tracing::info!(webhook_id = id, deleted_by = %auth.email, "Webhook config deleted");

    Ok(StatusCode::NO_CONTENT)
}
