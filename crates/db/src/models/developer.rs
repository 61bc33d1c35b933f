//! Developer (assignee) entity model and DTOs.

use qadesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `developers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Developer {
    pub id: DbId,
    pub name: String,
    pub platform: String,
    pub role: String,
    pub department: String,
    pub email: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for registering a developer.
#[derive(Debug, Deserialize)]
pub struct CreateDeveloper {
    pub name: String,
    pub platform: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub department: String,
    pub email: Option<String>,
}

/// DTO for updating a developer (including the active toggle).
#[derive(Debug, Deserialize)]
pub struct UpdateDeveloper {
    pub name: Option<String>,
    pub platform: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

/// Query parameters for listing developers.
#[derive(Debug, Deserialize)]
pub struct DeveloperListParams {
    /// When true, only active developers are returned (assignment pickers).
    #[serde(default)]
    pub active_only: bool,
    /// Restrict to one platform; shared developers are always included.
    pub platform: Option<String>,
}
