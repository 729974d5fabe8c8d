use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use sitenav_api::handlers::{health, menu_contents, menu_items, navigation, plugins};
use sitenav_api::state::AppState;
use sitenav_core::services::{MenuService, NavigationService, PluginService};
use sitenav_core::versioning::{DraftTieBreak, VersioningConfig};
use sitenav_infrastructure::database::{connection, schema};
use sitenav_infrastructure::{
    PgMenuContentRepository, PgMenuItemRepository, PgMenuRepository, PgNavigationPluginRepository,
    PgUrlResolver,
};
use sitenav_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    sitenav_shared::telemetry::init_telemetry();

    info!("Sitenav server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to Database
    info!("Connecting to database...");
    let pool = connection::create_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;
    schema::ensure_schema(&pool).await?;
    info!("Database connection established.");

    // Versioning policy is explicit configuration, not a global toggle
    let versioning = VersioningConfig {
        enabled: config.versioning.enabled,
        draft_tie_break: DraftTieBreak::from_str(&config.versioning.draft_tie_break)
            .unwrap_or_default(),
    };

    // Repositories
    let menu_repo = Arc::new(PgMenuRepository::new(pool.clone()));
    let content_repo = Arc::new(PgMenuContentRepository::new(pool.clone()));
    let item_repo = Arc::new(PgMenuItemRepository::new(pool.clone()));
    let plugin_repo = Arc::new(PgNavigationPluginRepository::new(pool.clone()));
    let resolver = Arc::new(PgUrlResolver::new(pool.clone()));

    // Services
    let state = AppState {
        menus: Arc::new(MenuService::new(
            menu_repo.clone(),
            content_repo.clone(),
            item_repo.clone(),
            versioning,
        )),
        navigation: Arc::new(NavigationService::new(
            content_repo,
            item_repo,
            resolver,
            versioning,
        )),
        plugins: Arc::new(PluginService::new(
            menu_repo,
            plugin_repo,
            config.navigation.templates.clone(),
        )),
        config: config.clone(),
    };

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Menu contents
        .route(
            "/api/v1/menu-contents",
            get(menu_contents::list_contents).post(menu_contents::create_content),
        )
        .route(
            "/api/v1/menu-contents/{id}/version-state",
            put(menu_contents::set_version_state),
        )
        .route(
            "/api/v1/menus/{menu_id}/versions",
            post(menu_contents::create_version),
        )
        // Menu items, scoped by content
        .route(
            "/api/v1/menu-contents/{menu_content_id}/items",
            get(menu_items::list_items).post(menu_items::add_item),
        )
        .route(
            "/api/v1/menu-contents/{menu_content_id}/items/{item_id}",
            put(menu_items::change_item).delete(menu_items::remove_item),
        )
        // Menu items, unscoped
        .route("/api/v1/menu-items", post(menu_items::add_item_unscoped))
        .route(
            "/api/v1/menu-items/{item_id}",
            put(menu_items::change_item_unscoped),
        )
        // Navigation rendering
        .route("/api/v1/navigation/nodes", get(navigation::get_nodes))
        .route("/api/v1/navigation/roots", get(navigation::get_roots))
        // Plugins
        .route(
            "/api/v1/plugins",
            get(plugins::list_plugins).post(plugins::create_plugin),
        )
        .route(
            "/api/v1/plugins/{id}",
            put(plugins::update_plugin).delete(plugins::delete_plugin),
        )
        .route("/api/v1/plugins/{id}/render", get(plugins::render_plugin))
        // Add State
        .with_state(state)
        // Layers
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
