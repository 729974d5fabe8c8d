// ============================================================================
// Sitenav Infrastructure - PostgreSQL Menu Repository
// File: crates/sitenav-infrastructure/src/database/postgres/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use sitenav_core::domain::Menu;
use sitenav_core::error::DomainError;
use sitenav_core::repositories::MenuRepository;

pub struct PgMenuRepository {
    pool: PgPool,
}

impl PgMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuRow {
    pub id: Uuid,
    pub site_id: Uuid,
    pub identifier: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

impl From<MenuRow> for Menu {
    fn from(row: MenuRow) -> Self {
        Menu {
            id: row.id,
            site_id: row.site_id,
            identifier: row.identifier,
            created_at: row.created_at,
            created_by: row.created_by,
        }
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Menu>, DomainError> {
        let row: Option<MenuRow> = sqlx::query_as(
            r#"
            SELECT id, site_id, identifier, created_at, created_by
            FROM navigation_menus
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding menu by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_identifier(
        &self,
        site_id: &Uuid,
        identifier: &str,
    ) -> Result<Option<Menu>, DomainError> {
        let row: Option<MenuRow> = sqlx::query_as(
            r#"
            SELECT id, site_id, identifier, created_at, created_by
            FROM navigation_menus
            WHERE site_id = $1 AND LOWER(identifier) = LOWER($2)
            "#,
        )
        .bind(site_id)
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding menu by identifier: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, menu: &Menu) -> Result<Menu, DomainError> {
        info!("Creating menu: {}", menu.identifier);

        let row: MenuRow = sqlx::query_as(
            r#"
            INSERT INTO navigation_menus (id, site_id, identifier, created_at, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, site_id, identifier, created_at, created_by
            "#,
        )
        .bind(menu.id)
        .bind(menu.site_id)
        .bind(&menu.identifier)
        .bind(menu.created_at)
        .bind(menu.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating menu: {}", e);
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::IdentifierAlreadyExists {
                    site_id: menu.site_id,
                    identifier: menu.identifier.clone(),
                }
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        Ok(row.into())
    }
}
