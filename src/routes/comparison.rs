use serde::{Deserialize, Serialize};

use crate::models::{PlayerShotProfile, ZoneRange, ZoneTally};
use crate::routes::chart::ChartScene;

/// One zone's player-vs-league differential.
///
/// All percentages are fractions in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeagueComparisonRow {
    pub zone: ZoneRange,
    pub player_pct: f64,
    pub league_pct: f64,
    pub diff_pct: f64,
}

/// Player-vs-league differential dataset.
///
/// Restricted to zones the player actually attempted; empty when the player
/// has no attempts at all, which callers must treat as "comparison
/// unavailable" rather than an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LeagueComparisonData {
    pub rows: Vec<LeagueComparisonRow>,
}

impl LeagueComparisonData {
    pub fn is_available(&self) -> bool {
        !self.rows.is_empty()
    }
}

/// One zone row of the two-player merged table.
///
/// Unlike the league comparison, both tallies are always present — one
/// player's silence in a zone must not hide the other's shooting there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadToHeadRow {
    pub zone: ZoneRange,
    pub first: ZoneTally,
    pub second: ZoneTally,
}

/// One player's half of a side-by-side comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadToHeadSide {
    pub profile: PlayerShotProfile,
    pub scene: ChartScene,
}

/// Two-player side-by-side comparison dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadToHeadData {
    pub first: HeadToHeadSide,
    pub second: HeadToHeadSide,
    /// Always exactly five rows, one per zone in fixed order.
    pub zones: Vec<HeadToHeadRow>,
    pub narrative: String,
}

/// Route function name constants
pub const GET_LEAGUE_COMPARISON: &str = "get_league_comparison";
pub const GET_HEAD_TO_HEAD_DATA: &str = "get_head_to_head_data";
