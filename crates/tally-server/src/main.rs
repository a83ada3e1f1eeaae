//! HTTP server entry point.
//!
//! Loads configuration and seed data, builds the in-memory stores, and serves
//! the router from [`tally_server::app`].

use std::sync::Arc;

use anyhow::{Context, Result};
use tally_config::ServerConfig;
use tally_server::{app, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = ServerConfig::from_env()?;
    let state = Arc::new(init_state(&config)?);

    let addr = config.addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}

/// Loads the seed and builds the stores.
fn init_state(config: &ServerConfig) -> Result<AppState> {
    let seed = config.load_seed().context("failed to load seed data")?;
    match &config.seed_file {
        Some(path) => info!("Loaded seed from {}", path.display()),
        None => info!("Using built-in seed"),
    }
    info!(
        "Seeding {} assets and {} tasks",
        seed.assets.len(),
        seed.tasks.len()
    );

    AppState::in_memory(seed.assets, seed.tasks).context("invalid seed data")
}
