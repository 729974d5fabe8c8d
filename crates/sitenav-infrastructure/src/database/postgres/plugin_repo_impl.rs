// ============================================================================
// Sitenav Infrastructure - PostgreSQL Navigation Plugin Repository
// File: crates/sitenav-infrastructure/src/database/postgres/plugin_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

use sitenav_core::domain::NavigationPlugin;
use sitenav_core::error::DomainError;
use sitenav_core::repositories::NavigationPluginRepository;

pub struct PgNavigationPluginRepository {
    pool: PgPool,
}

impl PgNavigationPluginRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct NavigationPluginRow {
    pub id: Uuid,
    pub menu_id: Uuid,
    pub template: String,
    pub created_at: DateTime<Utc>,
}

impl From<NavigationPluginRow> for NavigationPlugin {
    fn from(row: NavigationPluginRow) -> Self {
        NavigationPlugin {
            id: row.id,
            menu_id: row.menu_id,
            template: row.template,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl NavigationPluginRepository for PgNavigationPluginRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<NavigationPlugin>, DomainError> {
        let row: Option<NavigationPluginRow> = sqlx::query_as(
            r#"
            SELECT id, menu_id, template, created_at
            FROM navigation_plugins
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding plugin by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn list_all(&self) -> Result<Vec<NavigationPlugin>, DomainError> {
        let rows: Vec<NavigationPluginRow> = sqlx::query_as(
            r#"
            SELECT id, menu_id, template, created_at
            FROM navigation_plugins
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing plugins: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create(&self, plugin: &NavigationPlugin) -> Result<NavigationPlugin, DomainError> {
        let row: NavigationPluginRow = sqlx::query_as(
            r#"
            INSERT INTO navigation_plugins (id, menu_id, template, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, menu_id, template, created_at
            "#,
        )
        .bind(plugin.id)
        .bind(plugin.menu_id)
        .bind(&plugin.template)
        .bind(plugin.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating plugin: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }

    async fn update(&self, plugin: &NavigationPlugin) -> Result<NavigationPlugin, DomainError> {
        let row: Option<NavigationPluginRow> = sqlx::query_as(
            r#"
            UPDATE navigation_plugins
            SET menu_id = $2, template = $3
            WHERE id = $1
            RETURNING id, menu_id, template, created_at
            "#,
        )
        .bind(plugin.id)
        .bind(plugin.menu_id)
        .bind(&plugin.template)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating plugin: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(|r| r.into())
            .ok_or(DomainError::PluginNotFound(plugin.id))
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM navigation_plugins WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting plugin: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }
}
