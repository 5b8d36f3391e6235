//! Data Transfer Objects for the HTTP API.
//!
//! Most visualization DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Chart
    ChartScene,
    // Comparison
    HeadToHeadData,
    HeadToHeadRow,
    LeagueComparisonData,
    LeagueComparisonRow,
    MarkerStyle,
    // Landing
    PlayerInfo,
    PointSeries,
    ShotChartData,
    ShotPoint,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of players held in the startup directory cache
    pub players_cached: usize,
}

/// Player list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerListResponse {
    /// Directory entries
    pub players: Vec<PlayerInfo>,
    /// Total count
    pub total: usize,
}

/// Career seasons response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonListResponse {
    /// Season identifiers, most recent first
    pub seasons: Vec<String>,
}

/// Query parameters for the two-player comparison endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompareQuery {
    /// First player's full name
    #[serde(default)]
    pub player1_name: Option<String>,
    /// First player's season
    #[serde(default)]
    pub season1_id: Option<String>,
    /// Second player's full name
    #[serde(default)]
    pub player2_name: Option<String>,
    /// Second player's season
    #[serde(default)]
    pub season2_id: Option<String>,
}
