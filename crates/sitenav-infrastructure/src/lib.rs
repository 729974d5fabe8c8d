//! # Sitenav Infrastructure
//!
//! PostgreSQL implementations of the core repository ports, the connection
//! pool, schema bootstrap, and the page URL resolver.

pub mod database;

pub use database::postgres::{
    PgMenuContentRepository, PgMenuItemRepository, PgMenuRepository,
    PgNavigationPluginRepository, PgUrlResolver,
};
