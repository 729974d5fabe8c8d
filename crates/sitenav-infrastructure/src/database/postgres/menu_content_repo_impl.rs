// ============================================================================
// Sitenav Infrastructure - PostgreSQL Menu Content Repository
// File: crates/sitenav-infrastructure/src/database/postgres/menu_content_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use sitenav_core::domain::{ContentVersion, MenuContent};
use sitenav_core::error::DomainError;
use sitenav_core::repositories::MenuContentRepository;
use sitenav_core::versioning::VersionState;

pub struct PgMenuContentRepository {
    pool: PgPool,
}

impl PgMenuContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuContentRow {
    pub id: Uuid,
    pub menu_id: Uuid,
    pub title: String,
    pub root_id: Uuid,
    pub version_number: i32,
    pub version_state: String,
    pub version_created_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

impl From<MenuContentRow> for MenuContent {
    fn from(row: MenuContentRow) -> Self {
        MenuContent {
            id: row.id,
            menu_id: row.menu_id,
            title: row.title,
            root_id: row.root_id,
            version: ContentVersion {
                number: row.version_number,
                state: VersionState::from_str(&row.version_state).unwrap_or(VersionState::Draft),
                created_at: row.version_created_at,
            },
            created_at: row.created_at,
            created_by: row.created_by,
        }
    }
}

const CONTENT_COLUMNS: &str = r#"
    c.id, c.menu_id, c.title, c.root_id,
    c.version_number, c.version_state, c.version_created_at,
    c.created_at, c.created_by
"#;

#[async_trait]
impl MenuContentRepository for PgMenuContentRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuContent>, DomainError> {
        let row: Option<MenuContentRow> = sqlx::query_as(&format!(
            r#"
            SELECT {CONTENT_COLUMNS}
            FROM navigation_menu_contents c
            WHERE c.id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding menu content by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn list_all(&self) -> Result<Vec<MenuContent>, DomainError> {
        // Stable grouper order first, then newest version within a grouper.
        let rows: Vec<MenuContentRow> = sqlx::query_as(&format!(
            r#"
            SELECT {CONTENT_COLUMNS}
            FROM navigation_menu_contents c
            JOIN navigation_menus m ON m.id = c.menu_id
            ORDER BY m.created_at ASC, m.id ASC,
                     c.version_created_at DESC, c.version_number DESC
            "#
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing menu contents: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn list_for_menu(&self, menu_id: &Uuid) -> Result<Vec<MenuContent>, DomainError> {
        let rows: Vec<MenuContentRow> = sqlx::query_as(&format!(
            r#"
            SELECT {CONTENT_COLUMNS}
            FROM navigation_menu_contents c
            WHERE c.menu_id = $1
            ORDER BY c.version_created_at DESC, c.version_number DESC
            "#
        ))
        .bind(menu_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing menu contents for menu: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create(&self, content: &MenuContent) -> Result<MenuContent, DomainError> {
        info!(
            "Creating menu content {} (version {})",
            content.id, content.version.number
        );

        let row: MenuContentRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO navigation_menu_contents AS c (
                id, menu_id, title, root_id,
                version_number, version_state, version_created_at,
                created_at, created_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {CONTENT_COLUMNS}
            "#
        ))
        .bind(content.id)
        .bind(content.menu_id)
        .bind(&content.title)
        .bind(content.root_id)
        .bind(content.version.number)
        .bind(content.version.state.as_str())
        .bind(content.version.created_at)
        .bind(content.created_at)
        .bind(content.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating menu content: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }

    async fn set_version_state(
        &self,
        id: &Uuid,
        state: VersionState,
    ) -> Result<MenuContent, DomainError> {
        let row: Option<MenuContentRow> = sqlx::query_as(&format!(
            r#"
            UPDATE navigation_menu_contents AS c
            SET version_state = $2
            WHERE c.id = $1
            RETURNING {CONTENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(state.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating version state: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(|r| r.into())
            .ok_or(DomainError::MenuContentNotFound(*id))
    }
}
