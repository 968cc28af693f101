//! Crash statistics HTTP server binary
//!
//! This is the main entry point for the dashboard REST API server.
//! It loads the dataset once, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Serve ./Crash_Statistics_Victoria.csv on 0.0.0.0:8080
//! cargo run --bin crash-stats-server
//!
//! # Serve another file on another port
//! CRASH_STATS_DATA=/data/crashes.csv PORT=9000 cargo run --bin crash-stats-server
//! ```
//!
//! # Environment Variables
//!
//! - `CRASH_STATS_CONFIG`: Path to a `crash-stats.toml` (default: searched)
//! - `CRASH_STATS_DATA`: Dataset CSV path (overrides the config file)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crash_stats::config::AppConfig;
use crash_stats::http::{create_router, AppState};
use crash_stats::store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting crash statistics HTTP server");

    let config = AppConfig::load().context("Failed to load configuration")?;

    // A dataset that fails to load is fatal; nothing is served.
    store::init_dataset(&config.dataset.path)?;
    let dataset = Arc::clone(store::get_dataset()?);
    info!(
        "Dataset ready: {} accidents from {} ({} to {})",
        dataset.len(),
        dataset.source_name(),
        dataset.span().min_date,
        dataset.span().max_date
    );

    let state = AppState::new(dataset, config.dataset.clone());
    let app = create_router(state);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.bind_address()))?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
