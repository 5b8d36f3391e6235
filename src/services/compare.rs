//! Two-player comparison engine.

use crate::api::SeasonId;
use crate::models::{PlayerShotProfile, ZoneRange};
use crate::provider::{PlayerDirectory, ShotDataProvider};
use crate::routes::comparison::{HeadToHeadData, HeadToHeadRow, HeadToHeadSide};

use super::aggregate::aggregate_profile;
use super::chart::compose_chart;
use super::error::{ChartError, ChartResult};
use super::narrative::{matchup_or_fallback, Narrator};

/// Merge two profiles into the per-zone comparison table.
///
/// Always exactly five rows in the fixed zone order — unlike the league
/// comparison, zones neither player attempted stay present so one side's
/// silence never hides the other's data.
pub fn build_head_to_head_rows(
    first: &PlayerShotProfile,
    second: &PlayerShotProfile,
) -> Vec<HeadToHeadRow> {
    ZoneRange::ALL
        .iter()
        .map(|&zone| HeadToHeadRow {
            zone,
            first: first.zone(zone),
            second: second.zone(zone),
        })
        .collect()
}

/// Fetch both player-seasons and build the side-by-side comparison.
///
/// Either side failing to resolve or lacking shot data is terminal for the
/// whole request; no partial comparison is produced. The two chart scenes get
/// distinct element identifiers so both render in one document.
pub async fn get_head_to_head_data(
    provider: &dyn ShotDataProvider,
    directory: &PlayerDirectory,
    narrator: &dyn Narrator,
    first_name: &str,
    first_season: &SeasonId,
    second_name: &str,
    second_season: &SeasonId,
) -> ChartResult<HeadToHeadData> {
    let first = fetch_side(
        provider,
        directory,
        first_name,
        first_season,
        "shot-chart-1",
    )
    .await?;
    let second = fetch_side(
        provider,
        directory,
        second_name,
        second_season,
        "shot-chart-2",
    )
    .await?;

    let zones = build_head_to_head_rows(&first.profile, &second.profile);
    let narrative =
        matchup_or_fallback(narrator, &first.profile, &second.profile, &zones).await;

    Ok(HeadToHeadData {
        first,
        second,
        zones,
        narrative,
    })
}

async fn fetch_side(
    provider: &dyn ShotDataProvider,
    directory: &PlayerDirectory,
    name: &str,
    season: &SeasonId,
    div_id: &str,
) -> ChartResult<HeadToHeadSide> {
    let player = directory
        .find(name)
        .ok_or_else(|| ChartError::PlayerNotFound {
            query: name.to_string(),
        })?;

    let chart = provider.season_shot_chart(player.player_id, season).await?;
    let profile = aggregate_profile(player, season, &chart.shots);
    if !profile.has_attempts() {
        return Err(ChartError::NoShotData {
            player_name: player.full_name.clone(),
            season: season.clone(),
        });
    }

    let title = format!("{} | {}", player.full_name, season);
    let scene = compose_chart(&chart.shots, title, div_id);
    Ok(HeadToHeadSide { profile, scene })
}
