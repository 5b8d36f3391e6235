//! Shot Charts HTTP Server Binary
//!
//! Entry point for the shot chart REST API server. It builds the stats
//! provider and narrator for the enabled backends, fetches the player
//! directory once, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the in-memory sample provider (default)
//! cargo run --bin shotcharts-server --features "local-data,http-server"
//!
//! # Run against the live NBA Stats API with Gemini narratives
//! GEMINI_API_KEY=... \
//!   cargo run --bin shotcharts-server --features "nba-upstream,gemini-narrator,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `GEMINI_API_KEY`: Gemini API key (required for gemini-narrator feature)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use shotcharts::http::{create_router, AppState};
use shotcharts::provider::{PlayerDirectory, ShotDataProvider};
use shotcharts::services::Narrator;

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
        .init();

    info!("Starting shot charts HTTP server");

    let provider = build_provider()?;

    // Fetch the player directory once; it is read-only for the process lifetime
    info!("Fetching and caching player directory");
    let directory = Arc::new(
        PlayerDirectory::fetch(provider.as_ref())
            .await
            .map_err(|e| anyhow::anyhow!("failed to fetch player directory: {e}"))?,
    );
    info!(players = directory.len(), "Player directory cached");

    let narrator = build_narrator();

    // Create application state
    let state = AppState::new(directory, provider, narrator);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// Priority: nba-upstream > local (when --all-features is used)
#[cfg(feature = "nba-upstream")]
fn build_provider() -> anyhow::Result<Arc<dyn ShotDataProvider>> {
    let provider = shotcharts::provider::NbaStatsProvider::new()
        .map_err(|e| anyhow::anyhow!("failed to build NBA Stats provider: {e}"))?;
    info!("Using NBA Stats API provider");
    Ok(Arc::new(provider))
}

#[cfg(all(feature = "local-data", not(feature = "nba-upstream")))]
fn build_provider() -> anyhow::Result<Arc<dyn ShotDataProvider>> {
    info!("Using in-memory sample provider");
    Ok(Arc::new(shotcharts::provider::LocalDataProvider::seeded()))
}

#[cfg(feature = "gemini-narrator")]
fn build_narrator() -> Arc<dyn Narrator> {
    match shotcharts::services::narrative::GeminiNarrator::from_env() {
        Ok(narrator) => {
            info!("Using Gemini narrator");
            Arc::new(narrator)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Gemini narrator unavailable, falling back to local narrator");
            Arc::new(shotcharts::services::LocalNarrator)
        }
    }
}

#[cfg(not(feature = "gemini-narrator"))]
fn build_narrator() -> Arc<dyn Narrator> {
    Arc::new(shotcharts::services::LocalNarrator)
}
