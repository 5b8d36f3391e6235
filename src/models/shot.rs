//! One recorded field-goal attempt.

use serde::{Deserialize, Serialize};

use super::zone::ZoneRange;

/// A single attempted field goal, as supplied by the stats provider.
///
/// Coordinates are hoop-centered court units matching the chart frame
/// (x in [-250, 250], y in [-47.5, 422.5] for on-court locations).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotEvent {
    pub x: f64,
    pub y: f64,
    /// Shot distance in whole feet.
    pub distance_ft: u32,
    pub made: bool,
    /// Free-text shot description, e.g. "Pullup Jump Shot".
    pub action_type: String,
    /// Distance zone, already classified by the upstream source.
    pub zone: ZoneRange,
}
