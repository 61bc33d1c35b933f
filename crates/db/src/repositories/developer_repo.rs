//! Repository for the `developers` table.

use qadesk_core::platform::PLATFORM_SHARED;
use qadesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::developer::{CreateDeveloper, Developer, UpdateDeveloper};

/// Column list for `developers` queries.
const COLUMNS: &str = "id, name, platform, role, department, email, is_active, created_at";

/// Provides CRUD operations for developers.
pub struct DeveloperRepo;

impl DeveloperRepo {
    /// Register a new developer.
    pub async fn create(pool: &PgPool, input: &CreateDeveloper) -> Result<Developer, sqlx::Error> {
        let query = format!(
            "INSERT INTO developers (name, platform, role, department, email) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Developer>(&query)
            .bind(&input.name)
            .bind(&input.platform)
            .bind(&input.role)
            .bind(&input.department)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a developer by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Developer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM developers WHERE id = $1");
        sqlx::query_as::<_, Developer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List developers ordered by name.
    ///
    /// `active_only` restricts to assignable developers. A platform filter
    /// additionally includes shared developers, matching how assignment
    /// pickers offer candidates.
    pub async fn list(
        pool: &PgPool,
        active_only: bool,
        platform: Option<&str>,
    ) -> Result<Vec<Developer>, sqlx::Error> {
        let mut conditions: Vec<&str> = Vec::new();
        if active_only {
            conditions.push("is_active = TRUE");
        }
        if platform.is_some() {
            conditions.push("platform IN ($1, $2)");
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!("SELECT {COLUMNS} FROM developers {where_clause} ORDER BY name");

        let mut q = sqlx::query_as::<_, Developer>(&query);
        if let Some(p) = platform {
            q = q.bind(p).bind(PLATFORM_SHARED);
        }
        q.fetch_all(pool).await
    }

    /// Resolve display names for a set of developer ids.
    ///
    /// Missing ids are silently absent; deactivated developers still
    /// resolve, since deactivation never clears existing assignments.
    pub async fn names_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<(DbId, String)>, sqlx::Error> {
        let rows: Vec<(DbId, String)> =
            sqlx::query_as("SELECT id, name FROM developers WHERE id = ANY($1)")
                .bind(ids)
                .fetch_all(pool)
                .await?;
        Ok(rows)
    }

    /// Partially update a developer (including the active toggle).
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDeveloper,
    ) -> Result<Option<Developer>, sqlx::Error> {
        let query = format!(
            "UPDATE developers SET \
                 name = COALESCE($2, name), \
                 platform = COALESCE($3, platform), \
                 role = COALESCE($4, role), \
                 department = COALESCE($5, department), \
                 email = COALESCE($6, email), \
                 is_active = COALESCE($7, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Developer>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.platform)
            .bind(&input.role)
            .bind(&input.department)
            .bind(&input.email)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a developer. Item assignments keep the orphaned id; reads
    /// resolve it to nothing and display "unassigned".
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM developers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
