//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub versioning: VersioningSettings,
    pub navigation: NavigationSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Version-visibility policy. `enabled = false` means every stored content
/// row is current; `draft_tie_break` decides between visible versions that
/// share a creation timestamp in draft mode.
#[derive(Debug, Deserialize, Clone)]
pub struct VersioningSettings {
    pub enabled: bool,
    pub draft_tie_break: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NavigationSettings {
    /// Template choices a navigation plugin may bind to.
    pub templates: Vec<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "sitenav-server")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("versioning.enabled", true)?
            .set_default("versioning.draft_tie_break", "version_number")?
            .set_default("navigation.templates", vec!["menu/menu.html"])?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }
}
