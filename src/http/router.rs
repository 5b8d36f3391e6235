//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Player directory
        .route("/players", get(handlers::list_players))
        .route("/players/{player_id}/seasons", get(handlers::get_player_seasons))
        // Visualization endpoints
        .route(
            "/players/{player_id}/seasons/{season_id}/shot-chart",
            get(handlers::get_shot_chart),
        )
        .route(
            "/players/{player_id}/seasons/{season_id}/league-comparison",
            get(handlers::get_league_comparison),
        )
        .route("/compare", get(handlers::compare_players));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
