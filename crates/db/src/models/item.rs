//! The generic tracked item: dev tasks and the three bug kinds share one
//! row shape, discriminated by `kind`.

use qadesk_core::carry_forward::WorkflowItem;
use qadesk_core::kind::ItemKind;
use qadesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `items` table.
///
/// `dev_status` is populated for dev tasks; `priority`, `fix_status` and
/// `review_status` for bug kinds. The other family's columns stay NULL.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub kind: String,
    pub platform: String,
    pub version: String,
    pub label: String,
    pub description: String,
    pub priority: Option<String>,
    pub is_required: bool,
    pub department: String,
    pub reported_by: String,
    pub assignee_ids: Vec<DbId>,
    pub dev_status: Option<String>,
    pub fix_status: Option<String>,
    pub review_status: Option<String>,
    pub send_status: String,
    pub planning_link: String,
    pub note: String,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl WorkflowItem for Item {
    fn item_version(&self) -> &str {
        &self.version
    }

    fn workflow_status(&self) -> &str {
        let status = match ItemKind::parse(&self.kind) {
            Ok(ItemKind::DevTask) => self.dev_status.as_deref(),
            // Bug kinds, and unknown kinds, which then count as unresolved.
            _ => self.fix_status.as_deref(),
        };
        status.unwrap_or("")
    }
}

/// DTO for creating an item. Status fields may be omitted; the handler
/// fills kind-appropriate defaults before insert.
#[derive(Debug, Deserialize)]
pub struct CreateItem {
    pub kind: String,
    pub platform: String,
    #[serde(default)]
    pub version: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub priority: Option<String>,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub reported_by: String,
    #[serde(default)]
    pub assignee_ids: Vec<DbId>,
    pub dev_status: Option<String>,
    pub fix_status: Option<String>,
    pub review_status: Option<String>,
    #[serde(default)]
    pub planning_link: String,
    #[serde(default)]
    pub note: String,
}

/// Fully resolved insert payload, built by the handler after validation
/// and defaulting.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub kind: String,
    pub platform: String,
    pub version: String,
    pub label: String,
    pub description: String,
    pub priority: Option<String>,
    pub is_required: bool,
    pub department: String,
    pub reported_by: String,
    pub assignee_ids: Vec<DbId>,
    pub dev_status: Option<String>,
    pub fix_status: Option<String>,
    pub review_status: Option<String>,
    pub planning_link: String,
    pub note: String,
    pub created_by: String,
}

/// DTO for partially updating an item. Kind and creator are immutable.
#[derive(Debug, Deserialize)]
pub struct UpdateItem {
    pub platform: Option<String>,
    pub version: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub is_required: Option<bool>,
    pub department: Option<String>,
    pub reported_by: Option<String>,
    pub assignee_ids: Option<Vec<DbId>>,
    pub dev_status: Option<String>,
    pub fix_status: Option<String>,
    pub review_status: Option<String>,
    pub send_status: Option<String>,
    pub planning_link: Option<String>,
    pub note: Option<String>,
}

/// Query parameters for listing items.
#[derive(Debug, Deserialize)]
pub struct ItemListParams {
    pub kind: String,
    pub platform: Option<String>,
    /// Selected release version; when present the carry-forward view is
    /// applied.
    pub version: Option<String>,
}
