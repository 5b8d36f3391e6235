use serde::{Deserialize, Serialize};

use crate::models::PlayerShotProfile;
use crate::routes::comparison::LeagueComparisonData;
use crate::routes::court::CourtShape;

/// One plotted shot location with its hover context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotPoint {
    pub x: f64,
    pub y: f64,
    pub distance_ft: u32,
    pub action_type: String,
}

/// Marker glyph for a point series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSymbol {
    Circle,
    X,
}

/// Marker styling for a point series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub symbol: MarkerSymbol,
    pub size: f64,
    pub color: String,
    pub opacity: f64,
}

/// A named series of shot markers (made or missed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSeries {
    pub name: String,
    pub marker: MarkerStyle,
    pub points: Vec<ShotPoint>,
}

/// Render-ready shot chart scene.
///
/// The axis ranges are identical to the court geometry frame so the shot
/// overlay and the court backdrop share one coordinate system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScene {
    /// Target element identifier; must be unique within a document.
    pub div_id: String,
    pub title: String,
    /// Restates the overall tally, e.g. "FG%: 45.3% (123/271)".
    pub subtitle: String,
    pub x_range: [f64; 2],
    pub y_range: [f64; 2],
    pub series: Vec<PointSeries>,
    pub court: Vec<CourtShape>,
}

/// Full single-season shot chart response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotChartData {
    pub scene: ChartScene,
    pub profile: PlayerShotProfile,
    pub league_comparison: LeagueComparisonData,
    pub narrative: String,
}

/// Route function name constant
pub const GET_SHOT_CHART_DATA: &str = "get_shot_chart_data";
