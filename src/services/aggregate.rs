//! Shot aggregation: raw events to a zone-partitioned profile.

use crate::api::{PlayerInfo, SeasonId};
use crate::models::{PlayerShotProfile, ShotEvent, ZoneRange, ZoneSlice, ZoneTally};

/// Aggregate a season's shot events into a [`PlayerShotProfile`].
///
/// The result depends only on the multiset of events, never their order. All
/// five zones are present in the output; zones absent from the input carry
/// zero tallies. An empty input yields an all-zero profile, which callers
/// must treat as "no data" rather than a 0% season.
pub fn aggregate_profile(
    player: &PlayerInfo,
    season: &SeasonId,
    shots: &[ShotEvent],
) -> PlayerShotProfile {
    let mut made = [0u32; 5];
    let mut attempted = [0u32; 5];
    for shot in shots {
        let idx = shot.zone.index();
        attempted[idx] += 1;
        if shot.made {
            made[idx] += 1;
        }
    }

    let zones: Vec<ZoneSlice> = ZoneRange::ALL
        .iter()
        .map(|&zone| ZoneSlice {
            zone,
            tally: ZoneTally::from_counts(made[zone.index()], attempted[zone.index()]),
        })
        .collect();

    let overall = ZoneTally::from_counts(made.iter().sum(), attempted.iter().sum());

    PlayerShotProfile {
        player_id: player.player_id,
        player_name: player.full_name.clone(),
        season: season.clone(),
        overall,
        zones,
    }
}
