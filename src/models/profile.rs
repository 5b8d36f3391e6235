//! Aggregated shooting profile for one player-season.

use serde::{Deserialize, Serialize};

use crate::api::{PlayerId, SeasonId};

use super::zone::{ZoneRange, ZoneTally};

/// One zone's slice of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneSlice {
    pub zone: ZoneRange,
    pub tally: ZoneTally,
}

/// Zone-partitioned shooting statistics for a single player-season.
///
/// `zones` always holds exactly five slices in [`ZoneRange::ALL`] order;
/// zones without attempts carry zero tallies rather than being omitted, so
/// two profiles can be zipped positionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerShotProfile {
    pub player_id: PlayerId,
    pub player_name: String,
    pub season: SeasonId,
    pub overall: ZoneTally,
    pub zones: Vec<ZoneSlice>,
}

impl PlayerShotProfile {
    /// Tally for one zone.
    pub fn zone(&self, zone: ZoneRange) -> ZoneTally {
        self.zones[zone.index()].tally
    }

    /// Whether the season carries any recorded attempts at all.
    ///
    /// An all-zero profile means "no data", not a genuine 0% season; callers
    /// must refuse to chart or compare it.
    pub fn has_attempts(&self) -> bool {
        self.overall.attempted > 0
    }
}
