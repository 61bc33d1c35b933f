//! Version registry entity model and DTOs.

use qadesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `app_versions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AppVersion {
    pub id: DbId,
    pub platform: String,
    pub version: String,
    pub is_current: bool,
    pub created_at: Timestamp,
}

/// DTO for registering a version.
#[derive(Debug, Deserialize)]
pub struct CreateAppVersion {
    pub platform: String,
    pub version: String,
}

/// Query parameters for listing versions.
#[derive(Debug, Deserialize)]
pub struct AppVersionListParams {
    pub platform: String,
}
