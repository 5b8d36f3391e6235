//! The closed set of court-distance zones and per-zone tallies.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upstream supplied a shot zone category outside the closed five-label set.
///
/// Fatal to the aggregation that encountered it; never silently bucketed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized shot zone range: {label:?}")]
pub struct UnrecognizedZoneError {
    /// The offending upstream label.
    pub label: String,
}

/// One of the five fixed court-distance zones.
///
/// The declaration order is the display and alignment order everywhere in the
/// crate; two profiles can be zipped positionally because both always carry
/// all five zones in this order.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ZoneRange {
    #[serde(rename = "Less Than 8 ft.")]
    UnderEight,
    #[serde(rename = "8-16 ft.")]
    EightToSixteen,
    #[serde(rename = "16-24 ft.")]
    SixteenToTwentyFour,
    #[serde(rename = "24+ ft.")]
    TwentyFourPlus,
    #[serde(rename = "Back Court Shot")]
    BackCourt,
}

impl ZoneRange {
    /// All five zones in the fixed display order.
    pub const ALL: [ZoneRange; 5] = [
        ZoneRange::UnderEight,
        ZoneRange::EightToSixteen,
        ZoneRange::SixteenToTwentyFour,
        ZoneRange::TwentyFourPlus,
        ZoneRange::BackCourt,
    ];

    /// The upstream categorical label for this zone.
    pub fn label(self) -> &'static str {
        match self {
            ZoneRange::UnderEight => "Less Than 8 ft.",
            ZoneRange::EightToSixteen => "8-16 ft.",
            ZoneRange::SixteenToTwentyFour => "16-24 ft.",
            ZoneRange::TwentyFourPlus => "24+ ft.",
            ZoneRange::BackCourt => "Back Court Shot",
        }
    }

    /// Normalize an upstream categorical label into the closed enum.
    pub fn from_label(label: &str) -> Result<Self, UnrecognizedZoneError> {
        match label {
            "Less Than 8 ft." => Ok(ZoneRange::UnderEight),
            "8-16 ft." => Ok(ZoneRange::EightToSixteen),
            "16-24 ft." => Ok(ZoneRange::SixteenToTwentyFour),
            "24+ ft." => Ok(ZoneRange::TwentyFourPlus),
            "Back Court Shot" => Ok(ZoneRange::BackCourt),
            other => Err(UnrecognizedZoneError {
                label: other.to_string(),
            }),
        }
    }

    /// Position of this zone in [`ZoneRange::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for ZoneRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregated make/attempt counts for one zone (or a whole season).
///
/// `fg_pct` is fixed at construction: made/attempted, or 0.0 for an empty
/// tally. It is never NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneTally {
    pub made: u32,
    pub attempted: u32,
    pub fg_pct: f64,
}

impl ZoneTally {
    /// An empty tally with the explicit zero-percentage fallback.
    pub const ZERO: ZoneTally = ZoneTally {
        made: 0,
        attempted: 0,
        fg_pct: 0.0,
    };

    /// Build a tally from counts, deriving the percentage.
    pub fn from_counts(made: u32, attempted: u32) -> Self {
        debug_assert!(made <= attempted);
        let fg_pct = if attempted > 0 {
            f64::from(made) / f64::from(attempted)
        } else {
            0.0
        };
        ZoneTally {
            made,
            attempted,
            fg_pct,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.attempted == 0
    }
}
