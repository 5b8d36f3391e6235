//! Chart composition: shot events to a render-ready scene.

use crate::api::{PlayerId, SeasonId};
use crate::models::{ShotEvent, ZoneTally};
use crate::provider::{PlayerDirectory, ShotDataProvider};
use crate::routes::chart::{
    ChartScene, MarkerStyle, MarkerSymbol, PointSeries, ShotChartData, ShotPoint,
};

use super::aggregate::aggregate_profile;
use super::court::{court_shapes, COURT_X_MAX, COURT_X_MIN, COURT_Y_MAX, COURT_Y_MIN};
use super::error::{ChartError, ChartResult};
use super::league::compare_to_league;
use super::narrative::{season_or_fallback, Narrator};

const MISSED_COLOR: &str = "#e74c3c";
const MADE_COLOR: &str = "#27ae60";

/// Default element identifier for a standalone chart.
pub const DEFAULT_DIV_ID: &str = "shot-chart";

fn shot_point(shot: &ShotEvent) -> ShotPoint {
    ShotPoint {
        x: shot.x,
        y: shot.y,
        distance_ft: shot.distance_ft,
        action_type: shot.action_type.clone(),
    }
}

/// Compose the render-ready scene for one season's shots.
///
/// Events are partitioned into missed and made series, preserving input
/// order within each; the subtitle restates the overall tally with the same
/// zero-attempt fallback as aggregation. The scene frame is the court frame,
/// so overlay and backdrop coordinates align exactly.
pub fn compose_chart(
    shots: &[ShotEvent],
    title: impl Into<String>,
    div_id: impl Into<String>,
) -> ChartScene {
    let mut missed = Vec::new();
    let mut made = Vec::new();
    for shot in shots {
        if shot.made {
            made.push(shot_point(shot));
        } else {
            missed.push(shot_point(shot));
        }
    }

    let overall = ZoneTally::from_counts(made.len() as u32, shots.len() as u32);
    let subtitle = format!(
        "FG%: {:.1}% ({}/{})",
        overall.fg_pct * 100.0,
        overall.made,
        overall.attempted
    );

    ChartScene {
        div_id: div_id.into(),
        title: title.into(),
        subtitle,
        x_range: [COURT_X_MIN, COURT_X_MAX],
        y_range: [COURT_Y_MIN, COURT_Y_MAX],
        series: vec![
            PointSeries {
                name: "Missed".to_string(),
                marker: MarkerStyle {
                    symbol: MarkerSymbol::X,
                    size: 8.0,
                    color: MISSED_COLOR.to_string(),
                    opacity: 0.6,
                },
                points: missed,
            },
            PointSeries {
                name: "Made".to_string(),
                marker: MarkerStyle {
                    symbol: MarkerSymbol::Circle,
                    size: 8.0,
                    color: MADE_COLOR.to_string(),
                    opacity: 0.8,
                },
                points: made,
            },
        ],
        court: court_shapes().to_vec(),
    }
}

/// Fetch, aggregate, and compose one player-season's full shot chart
/// response, including the league comparison and the narrative.
pub async fn get_shot_chart_data(
    provider: &dyn ShotDataProvider,
    directory: &PlayerDirectory,
    narrator: &dyn Narrator,
    player_id: PlayerId,
    season: &SeasonId,
) -> ChartResult<ShotChartData> {
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

    let league_comparison = compare_to_league(&profile, &chart.league);
    let title = format!("{} | {} Regular Season", player.full_name, season);
    let scene = compose_chart(&chart.shots, title, DEFAULT_DIV_ID);
    let narrative = season_or_fallback(narrator, &profile, &league_comparison).await;

    Ok(ShotChartData {
        scene,
        profile,
        league_comparison,
        narrative,
    })
}
