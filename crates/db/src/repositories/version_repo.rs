//! Repository for the `app_versions` table.

use qadesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::app_version::{AppVersion, CreateAppVersion};

/// Column list for `app_versions` queries.
const COLUMNS: &str = "id, platform, version, is_current, created_at";

/// Provides CRUD operations for the version registry.
pub struct VersionRepo;

impl VersionRepo {
    /// Register a new version for a platform.
    pub async fn create(pool: &PgPool, input: &CreateAppVersion) -> Result<AppVersion, sqlx::Error> {
        let query = format!(
            "INSERT INTO app_versions (platform, version) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AppVersion>(&query)
            .bind(&input.platform)
            .bind(&input.version)
            .fetch_one(pool)
            .await
    }

    /// Find a version row by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AppVersion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM app_versions WHERE id = $1");
        sqlx::query_as::<_, AppVersion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a platform's versions, newest first. This ordering is what
    /// carry-forward treats as the version registry.
    pub async fn list_for_platform(
        pool: &PgPool,
        platform: &str,
    ) -> Result<Vec<AppVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM app_versions WHERE platform = $1 ORDER BY id DESC"
        );
        sqlx::query_as::<_, AppVersion>(&query)
            .bind(platform)
            .fetch_all(pool)
            .await
    }

    /// The version currently marked current for a platform, if any.
    pub async fn current_for_platform(
        pool: &PgPool,
        platform: &str,
    ) -> Result<Option<AppVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM app_versions WHERE platform = $1 AND is_current"
        );
        sqlx::query_as::<_, AppVersion>(&query)
            .bind(platform)
            .fetch_optional(pool)
            .await
    }

    /// Mark one version current and every other version of the same
    /// platform not current, in a single atomic statement. No reader ever
    /// observes zero or two current versions for the platform.
    pub async fn set_current(
        pool: &PgPool,
        platform: &str,
        id: DbId,
    ) -> Result<Option<AppVersion>, sqlx::Error> {
        let query = format!(
            "WITH flipped AS (\
                 UPDATE app_versions SET is_current = (id = $2) \
                 WHERE platform = $1 \
                 RETURNING {COLUMNS}\
             ) \
             SELECT {COLUMNS} FROM flipped WHERE id = $2"
        );
        sqlx::query_as::<_, AppVersion>(&query)
            .bind(platform)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a version row. Items referencing the label are left alone;
    /// a stale selection degrades gracefully in carry-forward.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM app_versions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
