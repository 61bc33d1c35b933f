//! Webhook config entity model and DTOs.

use qadesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `webhook_configs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WebhookConfig {
    pub id: DbId,
    pub space_name: String,
    pub target_platform: String,
    pub webhook_url: String,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for registering a webhook config.
#[derive(Debug, Deserialize)]
pub struct CreateWebhookConfig {
    pub space_name: String,
    pub target_platform: String,
    pub webhook_url: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// DTO for updating a webhook config.
#[derive(Debug, Deserialize)]
pub struct UpdateWebhookConfig {
    pub space_name: Option<String>,
    pub target_platform: Option<String>,
    pub webhook_url: Option<String>,
    pub is_active: Option<bool>,
}
