//! Handlers for tracked items (dev tasks and bugs).
//!
//! The list endpoint is where the carry-forward view materializes: with a
//! selected version it returns exact matches plus unresolved items from
//! older versions, each annotated with its origin version. Row edits are
//! plain last-write-wins updates; there is deliberately no optimistic
//! concurrency on this low-traffic internal tool.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use qadesk_core::carry_forward::{compute_working_set, WorkingSetEntry};
use qadesk_core::completion::is_fully_reviewed;
use qadesk_core::error::CoreError;
use qadesk_core::kind::ItemKind;
use qadesk_core::status::{
    validate_dev_status, validate_fix_status, validate_priority, validate_review_status,
    validate_send_status, DEV_PENDING, FIX_UNFIXED, PRIORITY_NORMAL, REVIEW_PRE,
};
use qadesk_core::types::DbId;
use qadesk_db::models::item::{CreateItem, Item, ItemListParams, NewItem, UpdateItem};
use qadesk_db::repositories::{DeveloperRepo, ItemRepo, VersionRepo};
use qadesk_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// An item as returned by the API: the row plus derived, non-persisted
/// presentation fields.
#[derive(Debug, Serialize)]
pub struct ItemView {
    #[serde(flatten)]
    pub item: Item,
    /// Resolved assignee display names; empty renders as "unassigned".
    pub assignee_names: Vec<String>,
    /// The completion gate: fixed and reviewed. Always false for dev tasks.
    pub fully_reviewed: bool,
    /// Origin version when the item was carried forward from an older
    /// release. Never written back to the row.
    pub carried_from: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /items
// ---------------------------------------------------------------------------

/// List one kind's items, applying the carry-forward view when a version
/// is selected.
pub async fn list_items(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ItemListParams>,
) -> AppResult<impl IntoResponse> {
    let kind = ItemKind::parse(&params.kind)?;

    // Shared and server bugs live on a single fixed platform; the two
    // app-platform kinds take an optional filter.
    let platform = match kind.allowed_platforms() {
        [single] => Some(*single),
        _ => params.platform.as_deref(),
    };
    if let Some(p) = platform {
        kind.validate_platform(p)?;
    }

    let selected_version = params.version.as_deref().filter(|v| !v.is_empty());
    if selected_version.is_some() && platform.is_none() {
        return Err(CoreError::Validation(
            "A platform is required when filtering by version".into(),
        )
        .into());
    }

    let items = ItemRepo::list(&state.pool, kind.as_str(), platform).await?;

    let entries = match (selected_version, platform) {
        (Some(version), Some(platform)) => {
            let registry: Vec<String> = VersionRepo::list_for_platform(&state.pool, platform)
                .await?
                .into_iter()
                .map(|v| v.version)
                .collect();
            compute_working_set(items, Some(version), &registry, kind.status_field())
        }
        _ => compute_working_set(items, None, &[], kind.status_field()),
    };

    let views = build_views(&state.pool, entries).await?;
    Ok(Json(DataResponse { data: views }))
}

// ---------------------------------------------------------------------------
// POST /items
// ---------------------------------------------------------------------------

/// Create an item with kind-appropriate defaults.
pub async fn create_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateItem>,
) -> AppResult<impl IntoResponse> {
    let kind = ItemKind::parse(&input.kind)?;
    kind.validate_platform(&input.platform)?;
    if input.label.trim().is_empty() {
        return Err(CoreError::Validation("Label must not be empty".into()).into());
    }

    let new_item = match kind {
        ItemKind::DevTask => {
            reject_bug_fields(&input)?;
            let dev_status = input.dev_status.clone().unwrap_or_else(|| DEV_PENDING.into());
            validate_dev_status(&dev_status)?;
            NewItem {
                priority: None,
                dev_status: Some(dev_status),
                fix_status: None,
                review_status: None,
                ..base_new_item(&input, &auth)
            }
        }
        _ => {
            if input.dev_status.is_some() {
                return Err(
                    CoreError::Validation("dev_status is only valid for dev tasks".into()).into(),
                );
            }
            let priority = input
                .priority
                .clone()
                .unwrap_or_else(|| PRIORITY_NORMAL.into());
            let fix_status = input.fix_status.clone().unwrap_or_else(|| FIX_UNFIXED.into());
            let review_status = input
                .review_status
                .clone()
                .unwrap_or_else(|| REVIEW_PRE.into());
            validate_priority(&priority)?;
            validate_fix_status(&fix_status)?;
            validate_review_status(&review_status)?;
            NewItem {
                priority: Some(priority),
                dev_status: None,
                fix_status: Some(fix_status),
                review_status: Some(review_status),
                ..base_new_item(&input, &auth)
            }
        }
    };

    let item = ItemRepo::create(&state.pool, &new_item).await?;

    tracing::info!(
        item_id = item.id,
        kind = %item.kind,
        platform = %item.platform,
        created_by = %auth.email,
        "Item created",
    );

    let view = build_single_view(&state.pool, item).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

// ---------------------------------------------------------------------------
// GET /items/{id}
// ---------------------------------------------------------------------------

/// Get a single item by ID.
pub async fn get_item(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;

    let view = build_single_view(&state.pool, item).await?;
    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// PUT /items/{id}
// ---------------------------------------------------------------------------

/// Partially update an item. Concurrent edits are last-write-wins.
pub async fn update_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateItem>,
) -> AppResult<impl IntoResponse> {
    let current = ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;
    let kind = ItemKind::parse(&current.kind)?;

    if let Some(ref platform) = input.platform {
        kind.validate_platform(platform)?;
    }
    if let Some(ref label) = input.label {
        if label.trim().is_empty() {
            return Err(CoreError::Validation("Label must not be empty".into()).into());
        }
    }
    if let Some(ref s) = input.dev_status {
        if kind != ItemKind::DevTask {
            return Err(
                CoreError::Validation("dev_status is only valid for dev tasks".into()).into(),
            );
        }
        validate_dev_status(s)?;
    }
    if kind == ItemKind::DevTask
        && (input.priority.is_some() || input.fix_status.is_some() || input.review_status.is_some())
    {
        return Err(CoreError::Validation(
            "priority, fix_status and review_status are only valid for bug items".into(),
        )
        .into());
    }
    if let Some(ref p) = input.priority {
        validate_priority(p)?;
    }
    if let Some(ref s) = input.fix_status {
        validate_fix_status(s)?;
    }
    if let Some(ref s) = input.review_status {
        validate_review_status(s)?;
    }
    if let Some(ref s) = input.send_status {
        validate_send_status(s)?;
    }

    let updated = ItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;

    tracing::info!(item_id = id, updated_by = %auth.email, "Item updated");

    let view = build_single_view(&state.pool, updated).await?;
    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// DELETE /items/{id}
// ---------------------------------------------------------------------------

/// Delete an item. Hard delete; assignments simply disappear with the row.
pub async fn delete_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ItemRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Item", id }));
    }

    tracing::info!(item_id = id, deleted_by = %auth.email, "Item deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn base_new_item(input: &CreateItem, auth: &AuthUser) -> NewItem {
    NewItem {
        kind: input.kind.clone(),
        platform: input.platform.clone(),
        version: input.version.clone(),
        label: input.label.trim().to_string(),
        description: input.description.clone(),
        priority: None,
        is_required: input.is_required,
        department: input.department.clone(),
        reported_by: input.reported_by.clone(),
        assignee_ids: input.assignee_ids.clone(),
        dev_status: None,
        fix_status: None,
        review_status: None,
        planning_link: input.planning_link.clone(),
        note: input.note.clone(),
        created_by: auth.email.clone(),
    }
}

fn reject_bug_fields(input: &CreateItem) -> Result<(), CoreError> {
    if input.priority.is_some() || input.fix_status.is_some() || input.review_status.is_some() {
        return Err(CoreError::Validation(
            "priority, fix_status and review_status are only valid for bug items".into(),
        ));
    }
    Ok(())
}

async fn build_single_view(pool: &DbPool, item: Item) -> Result<ItemView, AppError> {
    let id = item.id;
    let entry = WorkingSetEntry {
        item,
        carried_from: None,
    };
    build_views(pool, vec![entry])
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::InternalError(format!("Lost view for item {id}")))
}

/// Attach assignee names and the completion gate to working-set entries.
async fn build_views(
    pool: &DbPool,
    entries: Vec<WorkingSetEntry<Item>>,
) -> Result<Vec<ItemView>, sqlx::Error> {
    let mut ids: Vec<DbId> = entries
        .iter()
        .flat_map(|e| e.item.assignee_ids.clone())
        .collect();
    ids.sort_unstable();
    ids.dedup();

    let names: HashMap<DbId, String> = DeveloperRepo::names_by_ids(pool, &ids)
        .await?
        .into_iter()
        .collect();

    Ok(entries
        .into_iter()
        .map(|entry| {
            let assignee_names = entry
                .item
                .assignee_ids
                .iter()
                .filter_map(|id| names.get(id).cloned())
                .collect();
            let fully_reviewed = is_fully_reviewed(
                entry.item.fix_status.as_deref().unwrap_or(""),
                entry.item.review_status.as_deref().unwrap_or(""),
            );
            ItemView {
                item: entry.item,
                assignee_names,
                fully_reviewed,
                carried_from: entry.carried_from,
            }
        })
        .collect())
}
