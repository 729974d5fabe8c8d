// ============================================================================
// Sitenav Infrastructure - PostgreSQL Page URL Resolver
// File: crates/sitenav-infrastructure/src/database/postgres/page_url_resolver.rs
// ============================================================================
//! URL resolution against the host-owned `cms_pages` table.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::error;

use sitenav_core::domain::{ContentRef, UrlResolver};
use sitenav_core::error::DomainError;

pub struct PgUrlResolver {
    pool: PgPool,
}

impl PgUrlResolver {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlResolver for PgUrlResolver {
    async fn resolve_url(&self, content: &ContentRef) -> Result<String, DomainError> {
        match content {
            ContentRef::External { url } => Ok(url.clone()),
            ContentRef::Page { id } => {
                let url: Option<String> = sqlx::query_scalar(
                    "SELECT absolute_url FROM cms_pages WHERE id = $1",
                )
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e: sqlx::Error| {
                    error!("Database error resolving page url: {}", e);
                    DomainError::DatabaseError(e.to_string())
                })?;

                // A dangling page reference is a data-integrity failure;
                // callers see it as-is.
                url.ok_or(DomainError::ContentNotFound(*id))
            }
        }
    }
}
