//! Schema bootstrap
//!
//! Creates the service-owned tables when they do not exist yet. The
//! `cms_pages` table referenced by the URL resolver is host-owned and is
//! deliberately not created here.

use sqlx::PgPool;
use tracing::debug;

pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    debug!("Ensuring navigation tables exist...");

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS navigation_menus (
            id UUID PRIMARY KEY,
            site_id UUID NOT NULL,
            identifier VARCHAR(100) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            created_by UUID,
            CONSTRAINT uq_menu_identifier_per_site UNIQUE (site_id, identifier)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS navigation_menu_contents (
            id UUID PRIMARY KEY,
            menu_id UUID NOT NULL REFERENCES navigation_menus(id) ON DELETE CASCADE,
            title VARCHAR(100) NOT NULL,
            root_id UUID NOT NULL,
            version_number INT NOT NULL,
            version_state VARCHAR(20) NOT NULL,
            version_created_at TIMESTAMP WITH TIME ZONE NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            created_by UUID
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS navigation_menu_items (
            id UUID PRIMARY KEY,
            menu_content_id UUID NOT NULL REFERENCES navigation_menu_contents(id) ON DELETE CASCADE,
            parent_id UUID,
            position INT NOT NULL DEFAULT 0,
            title VARCHAR(100) NOT NULL,
            content_kind VARCHAR(20),
            page_id UUID,
            external_url TEXT,
            link_target VARCHAR(20) NOT NULL DEFAULT '_self',
            soft_root BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            created_by UUID
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS navigation_plugins (
            id UUID PRIMARY KEY,
            menu_id UUID NOT NULL REFERENCES navigation_menus(id) ON DELETE CASCADE,
            template VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        )"#,
    )
    .execute(pool)
    .await?;

    debug!("Ensuring navigation indexes exist...");
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_menu_contents_menu ON navigation_menu_contents(menu_id)",
    )
    .execute(pool)
    .await?;
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_menu_items_content ON navigation_menu_items(menu_content_id)",
    )
    .execute(pool)
    .await?;
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_menu_items_parent ON navigation_menu_items(parent_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
