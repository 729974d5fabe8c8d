// ============================================================================
// Sitenav Infrastructure - PostgreSQL Menu Item Repository
// File: crates/sitenav-infrastructure/src/database/postgres/menu_item_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{debug, error};
use uuid::Uuid;

use sitenav_core::domain::{ContentRef, LinkTarget, MenuItem};
use sitenav_core::error::DomainError;
use sitenav_core::repositories::MenuItemRepository;

pub struct PgMenuItemRepository {
    pool: PgPool,
}

impl PgMenuItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuItemRow {
    pub id: Uuid,
    pub menu_content_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub position: i32,
    pub title: String,
    pub content_kind: Option<String>,
    pub page_id: Option<Uuid>,
    pub external_url: Option<String>,
    pub link_target: String,
    pub soft_root: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        let content = match row.content_kind.as_deref() {
            Some("page") => row.page_id.map(|id| ContentRef::Page { id }),
            Some("external") => row.external_url.map(|url| ContentRef::External { url }),
            _ => None,
        };
        MenuItem {
            id: row.id,
            menu_content_id: row.menu_content_id,
            parent_id: row.parent_id,
            position: row.position,
            title: row.title,
            content,
            link_target: LinkTarget::from_str(&row.link_target).unwrap_or_default(),
            soft_root: row.soft_root,
            created_at: row.created_at,
            created_by: row.created_by,
        }
    }
}

/// Split a content reference into its three storage columns.
fn content_columns(item: &MenuItem) -> (Option<&'static str>, Option<Uuid>, Option<String>) {
    match &item.content {
        Some(ContentRef::Page { id }) => (Some("page"), Some(*id), None),
        Some(ContentRef::External { url }) => (Some("external"), None, Some(url.clone())),
        None => (None, None, None),
    }
}

const ITEM_COLUMNS: &str = r#"
    id, menu_content_id, parent_id, position, title,
    content_kind, page_id, external_url,
    link_target, soft_root, created_at, created_by
"#;

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuItem>, DomainError> {
        let row: Option<MenuItemRow> = sqlx::query_as(&format!(
            r#"
            SELECT {ITEM_COLUMNS}
            FROM navigation_menu_items
            WHERE id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding menu item by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn list_for_content(
        &self,
        menu_content_id: &Uuid,
    ) -> Result<Vec<MenuItem>, DomainError> {
        let rows: Vec<MenuItemRow> = sqlx::query_as(&format!(
            r#"
            SELECT {ITEM_COLUMNS}
            FROM navigation_menu_items
            WHERE menu_content_id = $1
            ORDER BY position ASC, created_at ASC
            "#
        ))
        .bind(menu_content_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing menu items: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!(
            "Loaded {} item(s) for menu content {}",
            rows.len(),
            menu_content_id
        );
        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let (content_kind, page_id, external_url) = content_columns(item);

        let row: MenuItemRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO navigation_menu_items (
                id, menu_content_id, parent_id, position, title,
                content_kind, page_id, external_url,
                link_target, soft_root, created_at, created_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {ITEM_COLUMNS}
            "#
        ))
        .bind(item.id)
        .bind(item.menu_content_id)
        .bind(item.parent_id)
        .bind(item.position)
        .bind(&item.title)
        .bind(content_kind)
        .bind(page_id)
        .bind(external_url)
        .bind(item.link_target.as_str())
        .bind(item.soft_root)
        .bind(item.created_at)
        .bind(item.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating menu item: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }

    async fn create_many(&self, items: &[MenuItem]) -> Result<(), DomainError> {
        let mut transaction = self.pool.begin().await.map_err(|e| {
            error!("Database error starting item batch: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        for item in items {
            let (content_kind, page_id, external_url) = content_columns(item);
            sqlx::query(
                r#"
                INSERT INTO navigation_menu_items (
                    id, menu_content_id, parent_id, position, title,
                    content_kind, page_id, external_url,
                    link_target, soft_root, created_at, created_by
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                "#,
            )
            .bind(item.id)
            .bind(item.menu_content_id)
            .bind(item.parent_id)
            .bind(item.position)
            .bind(&item.title)
            .bind(content_kind)
            .bind(page_id)
            .bind(external_url)
            .bind(item.link_target.as_str())
            .bind(item.soft_root)
            .bind(item.created_at)
            .bind(item.created_by)
            .execute(&mut *transaction)
            .await
            .map_err(|e| {
                error!("Database error inserting item batch: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;
        }

        transaction.commit().await.map_err(|e| {
            error!("Database error committing item batch: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!("Inserted {} menu item(s)", items.len());
        Ok(())
    }

    async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let (content_kind, page_id, external_url) = content_columns(item);

        let row: Option<MenuItemRow> = sqlx::query_as(&format!(
            r#"
            UPDATE navigation_menu_items
            SET parent_id = $2,
                position = $3,
                title = $4,
                content_kind = $5,
                page_id = $6,
                external_url = $7,
                link_target = $8,
                soft_root = $9
            WHERE id = $1
            RETURNING {ITEM_COLUMNS}
            "#
        ))
        .bind(item.id)
        .bind(item.parent_id)
        .bind(item.position)
        .bind(&item.title)
        .bind(content_kind)
        .bind(page_id)
        .bind(external_url)
        .bind(item.link_target.as_str())
        .bind(item.soft_root)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating menu item: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(|r| r.into())
            .ok_or(DomainError::MenuItemNotFound(item.id))
    }

    async fn delete_subtree(
        &self,
        menu_content_id: &Uuid,
        item_id: &Uuid,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            WITH RECURSIVE subtree AS (
                SELECT id FROM navigation_menu_items
                WHERE id = $2 AND menu_content_id = $1
                UNION ALL
                SELECT i.id FROM navigation_menu_items i
                JOIN subtree s ON i.parent_id = s.id
            )
            DELETE FROM navigation_menu_items
            WHERE id IN (SELECT id FROM subtree)
            "#,
        )
        .bind(menu_content_id)
        .bind(item_id)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error deleting menu item subtree: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(result.rows_affected())
    }

    async fn next_position(
        &self,
        menu_content_id: &Uuid,
        parent_id: &Uuid,
    ) -> Result<i32, DomainError> {
        let next: i32 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(MAX(position) + 1, 0)
            FROM navigation_menu_items
            WHERE menu_content_id = $1 AND parent_id = $2
            "#,
        )
        .bind(menu_content_id)
        .bind(parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error computing next item position: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(next)
    }
}
