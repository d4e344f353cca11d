//! Configuration module for the Pokédex backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file holding user preferences
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Base URL of the species REST API
    pub api_base: String,
    /// Base URL of the sprite repository used to build image URLs
    pub sprite_base: String,
    /// Highest national dex number loaded into the catalog
    pub species_limit: u32,
    /// Page size of the proxied list endpoint
    pub proxy_list_limit: u32,
    /// Maximum number of concurrent detail fetches while loading the catalog
    pub fetch_concurrency: usize,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = env::var("POKEDEX_DB_PATH")
            .unwrap_or_else(|_| "./data/pokedex.sqlite".to_string())
            .into();

        let bind_addr = env::var("POKEDEX_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid POKEDEX_BIND_ADDR format");

        let api_base = env::var("POKEDEX_API_BASE")
            .unwrap_or_else(|_| "https://pokeapi.co/api/v2".to_string());

        let sprite_base = env::var("POKEDEX_SPRITE_BASE").unwrap_or_else(|_| {
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon".to_string()
        });

        let species_limit = parse_or("POKEDEX_SPECIES_LIMIT", 1025);
        let proxy_list_limit = parse_or("POKEDEX_PROXY_LIST_LIMIT", 151);
        let fetch_concurrency = parse_or("POKEDEX_FETCH_CONCURRENCY", 16).max(1);

        let log_level = log_level();

        Self {
            db_path,
            bind_addr,
            api_base,
            sprite_base,
            species_limit,
            proxy_list_limit,
            fetch_concurrency,
            log_level,
        }
    }
}

/// Log level from `POKEDEX_LOG_LEVEL`. Read on its own so logging can be
/// installed before the rest of the configuration is parsed.
pub fn log_level() -> String {
    env::var("POKEDEX_LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
}

/// Read a numeric variable, falling back to `default` when unset or malformed.
fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring malformed {}={:?}", key, raw);
            default
        }),
        Err(_) => default,
    }
}
