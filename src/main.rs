//! Pokédex Backend
//!
//! REST backend serving a filterable, resolved Pokédex list built from PokéAPI data.

mod api;
mod cache;
mod catalog;
mod config;
mod db;
mod errors;
mod forms;
mod models;
mod pokedex;
mod upstream;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cache::AbilityCache;
use catalog::Catalog;
use config::Config;
use db::Repository;
use forms::FormTables;
use pokedex::SpriteTemplates;
use upstream::PokeApiClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub abilities: Arc<AbilityCache>,
    pub client: PokeApiClient,
    pub sprites: Arc<SpriteTemplates>,
    pub tables: &'static FormTables,
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire up the upstream client, catalog and cache. The catalog starts
    /// empty until [`Catalog::load`] runs.
    pub fn new(config: Config, repo: Repository) -> Result<Self, upstream::UpstreamError> {
        let client = PokeApiClient::new(&config.api_base)?;
        Ok(Self {
            catalog: Arc::new(Catalog::new(
                client.clone(),
                config.species_limit,
                config.fetch_concurrency,
            )),
            abilities: Arc::new(AbilityCache::new(client.clone())),
            client,
            sprites: Arc::new(SpriteTemplates::new(&config.sprite_base)),
            tables: FormTables::builtin(),
            repo: Arc::new(repo),
            config: Arc::new(config),
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize logging before the config so malformed values are reported
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config::log_level()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();

    tracing::info!("Starting Pokédex Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("PokéAPI base: {}", config.api_base);
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Log level: {}", config.log_level);

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Repository::new(pool);

    let bind_addr = config.bind_addr;
    let state = AppState::new(config, repo)?;

    // A failed initial load leaves an empty catalog; POST /api/catalog/refresh retries.
    tracing::info!("Loading species catalog...");
    if let Err(e) = state.catalog.load().await {
        tracing::warn!("Initial catalog load failed: {}", e);
    }

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Raw PokéAPI proxy
        .route("/pokemon", get(api::proxy_pokemon))
        // List view
        .route("/pokedex/view", post(api::view_pokedex))
        .route("/pokedex/filters", get(api::list_filters))
        .route("/pokedex/{id}", get(api::get_pokemon_detail))
        // Selection
        .route("/selection/toggle", post(api::toggle_selection))
        .route("/variants/{id}/abilities", get(api::get_variant_abilities))
        // Catalog
        .route("/catalog", get(api::get_catalog))
        .route("/catalog/refresh", post(api::refresh_catalog))
        // Preferences
        .route(
            "/preferences/dark-mode",
            get(api::get_dark_mode).put(api::set_dark_mode),
        );

    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
