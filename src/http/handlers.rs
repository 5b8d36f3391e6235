//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{
    CompareQuery, HealthResponse, PlayerListResponse, SeasonListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{PlayerId, SeasonId};
use crate::routes::chart::ShotChartData;
use crate::routes::comparison::{HeadToHeadData, LeagueComparisonData};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        players_cached: state.directory.len(),
    }))
}

// =============================================================================
// Player Directory
// =============================================================================

/// GET /v1/players
///
/// List the cached player directory.
pub async fn list_players(State(state): State<AppState>) -> HandlerResult<PlayerListResponse> {
    let players = state.directory.players().to_vec();
    let total = players.len();
    Ok(Json(PlayerListResponse { players, total }))
}

/// GET /v1/players/{player_id}/seasons
///
/// List the seasons of a player's career, most recent first.
pub async fn get_player_seasons(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
) -> HandlerResult<SeasonListResponse> {
    let seasons = state
        .provider
        .career_seasons(PlayerId::new(player_id))
        .await?;
    Ok(Json(SeasonListResponse {
        seasons: seasons.into_iter().map(|s| s.0).collect(),
    }))
}

// =============================================================================
// Visualization Endpoints
// =============================================================================

/// GET /v1/players/{player_id}/seasons/{season_id}/shot-chart
///
/// Full shot chart response for one player-season: scene, profile, league
/// comparison, and narrative.
pub async fn get_shot_chart(
    State(state): State<AppState>,
    Path((player_id, season_id)): Path<(i64, String)>,
) -> HandlerResult<ShotChartData> {
    let season = SeasonId::new(season_id);
    let data = services::get_shot_chart_data(
        state.provider.as_ref(),
        state.directory.as_ref(),
        state.narrator.as_ref(),
        PlayerId::new(player_id),
        &season,
    )
    .await?;
    Ok(Json(data))
}

/// GET /v1/players/{player_id}/seasons/{season_id}/league-comparison
///
/// Player-vs-league zone differentials for one season.
pub async fn get_league_comparison(
    State(state): State<AppState>,
    Path((player_id, season_id)): Path<(i64, String)>,
) -> HandlerResult<LeagueComparisonData> {
    let season = SeasonId::new(season_id);
    let data = services::get_league_comparison_data(
        state.provider.as_ref(),
        state.directory.as_ref(),
        PlayerId::new(player_id),
        &season,
    )
    .await?;
    Ok(Json(data))
}

/// GET /v1/compare
///
/// Side-by-side comparison of two player-seasons, both resolved by name.
pub async fn compare_players(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> HandlerResult<HeadToHeadData> {
    let (player1, season1, player2, season2) = match (
        non_empty(query.player1_name),
        non_empty(query.season1_id),
        non_empty(query.player2_name),
        non_empty(query.season2_id),
    ) {
        (Some(p1), Some(s1), Some(p2), Some(s2)) => (p1, s1, p2, s2),
        _ => {
            return Err(AppError::BadRequest(
                "Please provide both players and their seasons.".to_string(),
            ))
        }
    };

    let data = services::get_head_to_head_data(
        state.provider.as_ref(),
        state.directory.as_ref(),
        state.narrator.as_ref(),
        &player1,
        &SeasonId::new(season1),
        &player2,
        &SeasonId::new(season2),
    )
    .await?;
    Ok(Json(data))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
