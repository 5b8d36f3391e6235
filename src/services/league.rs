//! League baseline comparison.

use crate::api::{PlayerId, SeasonId};
use crate::provider::{LeagueZoneAverage, PlayerDirectory, ShotDataProvider};
use crate::routes::comparison::{LeagueComparisonData, LeagueComparisonRow};

use super::aggregate::aggregate_profile;
use super::error::{ChartError, ChartResult};
use crate::models::PlayerShotProfile;

/// Align a player's per-zone percentages against the league baseline.
///
/// Rows appear in the fixed zone order and only for zones the player
/// attempted. A zone the league aggregate lacks — or recorded with zero
/// attempts — contributes `league_pct = 0.0` rather than dropping the row or
/// erroring; callers should know this can understate how sparse the baseline
/// is. A player with zero total attempts yields an empty dataset.
pub fn compare_to_league(
    profile: &PlayerShotProfile,
    league: &[LeagueZoneAverage],
) -> LeagueComparisonData {
    let mut league_pct = [0.0f64; 5];
    for entry in league {
        if entry.attempted > 0 {
            league_pct[entry.zone.index()] =
                f64::from(entry.made) / f64::from(entry.attempted);
        }
    }

    let rows: Vec<LeagueComparisonRow> = profile
        .zones
        .iter()
        .filter(|slice| slice.tally.attempted > 0)
        .map(|slice| {
            let player_pct = slice.tally.fg_pct;
            let league_pct = league_pct[slice.zone.index()];
            LeagueComparisonRow {
                zone: slice.zone,
                player_pct,
                league_pct,
                diff_pct: player_pct - league_pct,
            }
        })
        .collect();

    LeagueComparisonData { rows }
}

/// Fetch one player-season and compute its league comparison.
///
/// A season with zero attempts is refused with `NoShotData`; an empty
/// comparison is never served from this endpoint.
pub async fn get_league_comparison_data(
    provider: &dyn ShotDataProvider,
    directory: &PlayerDirectory,
    player_id: PlayerId,
    season: &SeasonId,
) -> ChartResult<LeagueComparisonData> {
    let player = directory
        .find_by_id(player_id)
        .ok_or_else(|| ChartError::PlayerNotFound {
            query: player_id.to_string(),
        })?;

    let chart = provider.season_shot_chart(player_id, season).await?;
    let profile = aggregate_profile(player, season, &chart.shots);
    if !profile.has_attempts() {
        return Err(ChartError::NoShotData {
            player_name: player.full_name.clone(),
            season: season.clone(),
        });
    }

    Ok(compare_to_league(&profile, &chart.league))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PlayerInfo;
    use crate::models::{ShotEvent, ZoneRange};

    fn create_test_shot(zone: ZoneRange, made: bool) -> ShotEvent {
        ShotEvent {
            x: 0.0,
            y: 100.0,
            distance_ft: 10,
            made,
            action_type: "Jump Shot".to_string(),
            zone,
        }
    }

    fn create_test_profile(shots: &[ShotEvent]) -> PlayerShotProfile {
        let player = PlayerInfo {
            player_id: crate::api::PlayerId::new(7),
            full_name: "Test Player".to_string(),
        };
        aggregate_profile(&player, &SeasonId::new("2020-21"), shots)
    }

    fn league_entry(zone: ZoneRange, made: u32, attempted: u32) -> LeagueZoneAverage {
        LeagueZoneAverage {
            zone,
            made,
            attempted,
        }
    }

    #[test]
    fn test_rows_restricted_to_attempted_zones() {
        let profile = create_test_profile(&[
            create_test_shot(ZoneRange::UnderEight, true),
            create_test_shot(ZoneRange::TwentyFourPlus, false),
        ]);
        let league = vec![
            league_entry(ZoneRange::UnderEight, 500, 1000),
            league_entry(ZoneRange::EightToSixteen, 400, 1000),
            league_entry(ZoneRange::TwentyFourPlus, 360, 1000),
        ];

        let data = compare_to_league(&profile, &league);
        assert_eq!(data.rows.len(), 2);
        assert!(data.rows.len() <= 5);
        assert_eq!(data.rows[0].zone, ZoneRange::UnderEight);
        assert_eq!(data.rows[1].zone, ZoneRange::TwentyFourPlus);
        assert!(data.is_available());
    }

    #[test]
    fn test_diff_is_player_minus_league() {
        let profile = create_test_profile(&[
            create_test_shot(ZoneRange::UnderEight, true),
            create_test_shot(ZoneRange::UnderEight, true),
            create_test_shot(ZoneRange::UnderEight, false),
            create_test_shot(ZoneRange::UnderEight, false),
        ]);
        let league = vec![league_entry(ZoneRange::UnderEight, 600, 1000)];

        let data = compare_to_league(&profile, &league);
        let row = &data.rows[0];
        assert_eq!(row.player_pct, 0.5);
        assert_eq!(row.league_pct, 0.6);
        assert!((row.diff_pct + 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_league_zone_with_zero_attempts_is_zero_filled() {
        let profile = create_test_profile(&[
            create_test_shot(ZoneRange::TwentyFourPlus, true),
            create_test_shot(ZoneRange::TwentyFourPlus, false),
        ]);
        let league = vec![league_entry(ZoneRange::TwentyFourPlus, 0, 0)];

        let data = compare_to_league(&profile, &league);
        assert_eq!(data.rows.len(), 1);
        let row = &data.rows[0];
        assert_eq!(row.zone, ZoneRange::TwentyFourPlus);
        assert_eq!(row.player_pct, 0.5);
        assert_eq!(row.league_pct, 0.0);
        assert_eq!(row.diff_pct, 0.5);
    }

    #[test]
    fn test_league_zone_entirely_absent_is_zero_filled() {
        // Same policy whether the league row is missing or zero-attempt.
        let profile = create_test_profile(&[create_test_shot(ZoneRange::BackCourt, false)]);
        let data = compare_to_league(&profile, &[]);
        assert_eq!(data.rows.len(), 1);
        assert_eq!(data.rows[0].league_pct, 0.0);
    }

    #[test]
    fn test_zero_attempt_player_yields_empty_dataset() {
        let profile = create_test_profile(&[]);
        let league = vec![league_entry(ZoneRange::UnderEight, 500, 1000)];
        let data = compare_to_league(&profile, &league);
        assert!(data.rows.is_empty());
        assert!(!data.is_available());
    }
}
