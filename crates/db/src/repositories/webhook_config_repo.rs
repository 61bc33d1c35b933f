//! Repository for the `webhook_configs` table.

use qadesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::webhook_config::{CreateWebhookConfig, UpdateWebhookConfig, WebhookConfig};

/// Column list for `webhook_configs` queries.
const COLUMNS: &str = "id, space_name, target_platform, webhook_url, is_active, created_at";

/// Provides CRUD operations for webhook configs.
pub struct WebhookConfigRepo;

impl WebhookConfigRepo {
    /// Register a new webhook config.
    pub async fn create(
        pool: &PgPool,
        input: &CreateWebhookConfig,
    ) -> Result<WebhookConfig, sqlx::Error> {
        let query = format!(
            "INSERT INTO webhook_configs (space_name, target_platform, webhook_url, is_active) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WebhookConfig>(&query)
            .bind(&input.space_name)
            .bind(&input.target_platform)
            .bind(&input.webhook_url)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a webhook config by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<WebhookConfig>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM webhook_configs WHERE id = $1");
        sqlx::query_as::<_, WebhookConfig>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all webhook configs ordered by space name.
    pub async fn list(pool: &PgPool) -> Result<Vec<WebhookConfig>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM webhook_configs ORDER BY space_name");
        sqlx::query_as::<_, WebhookConfig>(&query)
            .fetch_all(pool)
            .await
    }

    /// The active config for a target classification.
    ///
    /// At most one active config per target is expected but not enforced;
    /// the lowest id wins deterministically if the invariant is violated.
    pub async fn find_active_for_target(
        pool: &PgPool,
        target_platform: &str,
    ) -> Result<Option<WebhookConfig>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM webhook_configs \
             WHERE target_platform = $1 AND is_active \
             ORDER BY id \
             LIMIT 1"
        );
        sqlx::query_as::<_, WebhookConfig>(&query)
            .bind(target_platform)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a webhook config.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWebhookConfig,
    ) -> Result<Option<WebhookConfig>, sqlx::Error> {
        let query = format!(
            "UPDATE webhook_configs SET \
                 space_name = COALESCE($2, space_name), \
                 target_platform = COALESCE($3, target_platform), \
                 webhook_url = COALESCE($4, webhook_url), \
                 is_active = COALESCE($5, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WebhookConfig>(&query)
            .bind(id)
            .bind(&input.space_name)
            .bind(&input.target_platform)
            .bind(&input.webhook_url)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a webhook config.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM webhook_configs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
