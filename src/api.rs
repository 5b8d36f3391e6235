//! Public API surface for the shot chart backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::chart::ChartScene;
pub use crate::routes::chart::MarkerStyle;
pub use crate::routes::chart::MarkerSymbol;
pub use crate::routes::chart::PointSeries;
pub use crate::routes::chart::ShotChartData;
pub use crate::routes::chart::ShotPoint;
pub use crate::routes::comparison::HeadToHeadData;
pub use crate::routes::comparison::HeadToHeadRow;
pub use crate::routes::comparison::HeadToHeadSide;
pub use crate::routes::comparison::LeagueComparisonData;
pub use crate::routes::comparison::LeagueComparisonRow;
pub use crate::routes::court::CourtShape;
pub use crate::routes::court::Stroke;
pub use crate::routes::court::StrokeDash;
pub use crate::routes::landing::PlayerInfo;

use serde::{Deserialize, Serialize};

/// Player identifier (upstream stats-provider key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PlayerId(pub i64);

impl PlayerId {
    pub fn new(value: i64) -> Self {
        PlayerId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PlayerId> for i64 {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

/// Season identifier in the provider's `"2022-23"` form.
///
/// Treated as an opaque key; the crate never does arithmetic on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonId(pub String);

impl SeasonId {
    pub fn new(value: impl Into<String>) -> Self {
        SeasonId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SeasonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SeasonId {
    fn from(value: &str) -> Self {
        SeasonId(value.to_string())
    }
}

impl From<String> for SeasonId {
    fn from(value: String) -> Self {
        SeasonId(value)
    }
}
