//! The dispatch engine.
//!
//! Takes a user-selected set of item ids, resolves the webhook targets for
//! the requested classification, delivers one formatted message per
//! configured target, advances send-status only when every attempted
//! delivery succeeded, and appends a send log row for every dispatch that
//! reached the delivery stage.

use std::collections::HashMap;

use qadesk_core::error::CoreError;
use qadesk_core::kind::ItemKind;
use qadesk_core::message::{
    build_item_summary, format_bug_message, format_dev_task_message, BugLine, DevTaskLine,
};
use qadesk_core::platform::resolve_targets;
use qadesk_core::status::PRIORITY_NORMAL;
use qadesk_core::types::DbId;
use qadesk_db::models::item::Item;
use qadesk_db::models::send_log::CreateSendLog;
use qadesk_db::repositories::{DeveloperRepo, ItemRepo, SendLogRepo, WebhookConfigRepo};
use qadesk_db::DbPool;
use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::notify::NotificationSender;

/// Dispatch request body.
#[derive(Debug, Deserialize)]
pub struct DispatchRequest {
    pub item_ids: Vec<DbId>,
    pub kind: String,
    pub classification: String,
}

/// Dispatch result reported to the caller.
#[derive(Debug, Serialize)]
pub struct DispatchOutcome {
    pub success: bool,
    pub count: usize,
}

/// Run one dispatch end to end.
///
/// Failure semantics: a missing webhook config is a hard 404 for dev
/// tasks (single target, no fallback) but a silent skip for bug kinds
/// (shared fan-out tolerates partial config). Delivery failures never
/// abort the loop; they downgrade the overall outcome, which blocks the
/// send-status advance for the entire batch while the send log row is
/// written regardless.
pub async fn dispatch(
    pool: &DbPool,
    sender: &dyn NotificationSender,
    config: &ServerConfig,
    actor: &AuthUser,
    req: &DispatchRequest,
) -> AppResult<DispatchOutcome> {
    if req.item_ids.is_empty() {
        return Err(CoreError::Validation("No items selected for dispatch".into()).into());
    }
    if req.classification.is_empty() {
        return Err(CoreError::Validation("Missing dispatch classification".into()).into());
    }

    let kind = ItemKind::parse(&req.kind)?;

    // Dev task sends are strictly single-target: the classification must
    // name one of the kind's own platforms, never the shared fan-out.
    // Rejecting here also guarantees the missing-config 404 below can only
    // fire before the first delivery.
    if kind == ItemKind::DevTask {
        kind.validate_platform(&req.classification)?;
    }
    let targets = resolve_targets(&req.classification)?;

    let items = ItemRepo::find_by_ids(pool, &req.item_ids).await?;
    if items.is_empty() {
        return Err(CoreError::NotFound {
            entity: "Item",
            id: req.item_ids[0],
        }
        .into());
    }

    // The ids come from the client; the shared table would happily hand
    // back rows of another kind, which would then flow through the wrong
    // template and be logged under the wrong send type.
    if let Some(mismatch) = items.iter().find(|i| i.kind != kind.as_str()) {
        return Err(CoreError::Validation(format!(
            "Item {} has kind '{}', expected '{}'; a batch must be a single kind",
            mismatch.id,
            mismatch.kind,
            kind.as_str()
        ))
        .into());
    }

    let names = assignee_names(pool, &items).await?;

    // All items of a batch are assumed to share one version; the message
    // header takes the first item's by convention.
    let version = items[0].version.clone();
    if items.iter().any(|i| i.version != version) {
        tracing::warn!(
            version = %version,
            count = items.len(),
            "Dispatched batch spans multiple versions; message header uses the first"
        );
    }

    let mut success = true;
    let mut error_message: Option<String> = None;
    let mut spaces: Vec<String> = Vec::new();

    for target in &targets {
        let Some(webhook) = WebhookConfigRepo::find_active_for_target(pool, target).await? else {
            if kind == ItemKind::DevTask {
                // Single-target sends have no fallback.
                return Err(AppError::NotFound(format!(
                    "No active webhook config for target '{target}'"
                )));
            }
            tracing::debug!(
                webhook_target = %target,
                "No active webhook config; skipping fan-out target"
            );
            continue;
        };

        let text = match kind {
            ItemKind::DevTask => {
                let lines: Vec<DevTaskLine> =
                    items.iter().map(|i| dev_task_line(i, &names)).collect();
                format_dev_task_message(&lines, target, &version, &config.app_url)
            }
            _ => {
                let lines: Vec<BugLine> = items.iter().map(|i| bug_line(i, &names)).collect();
                format_bug_message(&lines, kind.message_heading(), &version, &config.app_url)
            }
        };

        if let Err(reason) = sender.send(&webhook.webhook_url, &text).await {
            tracing::warn!(
                webhook_target = %target,
                space = %webhook.space_name,
                %reason,
                "Webhook delivery failed"
            );
            success = false;
            error_message.get_or_insert(reason);
        }
        spaces.push(webhook.space_name);
    }

    if success {
        ItemRepo::mark_sent(pool, &req.item_ids).await?;
    }

    // The audit row is written whether or not delivery succeeded.
    SendLogRepo::create(
        pool,
        &CreateSendLog {
            sent_by: actor.subject.clone(),
            sent_by_email: actor.email.clone(),
            send_type: kind.as_str().to_string(),
            target_classification: targets.join("+"),
            target_space: spaces.join(", "),
            item_count: items.len() as i32,
            item_summary: build_item_summary(items.iter().map(|i| i.label.as_str())),
            success,
            error_message,
        },
    )
    .await?;

    tracing::info!(
        kind = kind.as_str(),
        classification = %req.classification,
        count = items.len(),
        success,
        "Dispatch completed"
    );

    Ok(DispatchOutcome {
        success,
        count: items.len(),
    })
}

/// Resolve assignee display names for every item in the batch.
async fn assignee_names(
    pool: &DbPool,
    items: &[Item],
) -> Result<HashMap<DbId, String>, sqlx::Error> {
    let mut ids: Vec<DbId> = items.iter().flat_map(|i| i.assignee_ids.clone()).collect();
    ids.sort_unstable();
    ids.dedup();
    let rows = DeveloperRepo::names_by_ids(pool, &ids).await?;
    Ok(rows.into_iter().collect())
}

fn resolve(names: &HashMap<DbId, String>, ids: &[DbId]) -> Vec<String> {
    ids.iter().filter_map(|id| names.get(id).cloned()).collect()
}

fn dev_task_line(item: &Item, names: &HashMap<DbId, String>) -> DevTaskLine {
    DevTaskLine {
        label: item.label.clone(),
        description: item.description.clone(),
        assignees: resolve(names, &item.assignee_ids),
        department: item.department.clone(),
        requester: item.reported_by.clone(),
        is_required: item.is_required,
    }
}

fn bug_line(item: &Item, names: &HashMap<DbId, String>) -> BugLine {
    BugLine {
        priority: item
            .priority
            .clone()
            .unwrap_or_else(|| PRIORITY_NORMAL.to_string()),
        location: item.label.clone(),
        description: item.description.clone(),
        reporter: item.reported_by.clone(),
        assignees: resolve(names, &item.assignee_ids),
    }
}
