//! Integration tests for the service layer.
//!
//! These exercise the full fetch-aggregate-render pipeline against the
//! in-memory provider, validating end-to-end functionality.

use shotcharts::api::{PlayerId, SeasonId};
use shotcharts::models::ZoneRange;
use shotcharts::provider::{LocalDataProvider, PlayerDirectory};
use shotcharts::services::{
    get_head_to_head_data, get_league_comparison_data, get_shot_chart_data, LocalNarrator,
};

async fn seeded_fixture() -> (LocalDataProvider, PlayerDirectory) {
    let provider = LocalDataProvider::seeded();
    let directory = PlayerDirectory::fetch(&provider).await.unwrap();
    (provider, directory)
}

#[tokio::test]
async fn test_shot_chart_pipeline_end_to_end() {
    let (provider, directory) = seeded_fixture().await;

    let data = get_shot_chart_data(
        &provider,
        &directory,
        &LocalNarrator,
        PlayerId::new(101),
        &SeasonId::new("2023-24"),
    )
    .await
    .unwrap();

    // Zone tallies sum to the overall tally
    let profile = &data.profile;
    let made: u32 = profile.zones.iter().map(|s| s.tally.made).sum();
    let attempted: u32 = profile.zones.iter().map(|s| s.tally.attempted).sum();
    assert_eq!(made, profile.overall.made);
    assert_eq!(attempted, profile.overall.attempted);
    assert_eq!(profile.overall.attempted, 437);
    assert_eq!(profile.overall.made, 200);
    assert_eq!(profile.zones.len(), 5);

    // Scene restates the same totals
    assert_eq!(data.scene.title, "Avery Brooks | 2023-24 Regular Season");
    assert_eq!(data.scene.subtitle, "FG%: 45.8% (200/437)");
    assert_eq!(data.scene.div_id, "shot-chart");
    let plotted: usize = data.scene.series.iter().map(|s| s.points.len()).sum();
    assert_eq!(plotted, 437);

    // Brooks attempted every zone, so the comparison covers all five
    assert_eq!(data.league_comparison.rows.len(), 5);
    let order: Vec<ZoneRange> = data.league_comparison.rows.iter().map(|r| r.zone).collect();
    assert_eq!(order, ZoneRange::ALL);

    assert!(!data.narrative.is_empty());
    assert!(data.narrative.contains("Avery Brooks"));
}

#[tokio::test]
async fn test_league_comparison_skips_unattempted_zones() {
    let (provider, directory) = seeded_fixture().await;

    // Whitfield never shot from the back court
    let data = get_league_comparison_data(
        &provider,
        &directory,
        PlayerId::new(102),
        &SeasonId::new("2023-24"),
    )
    .await
    .unwrap();

    assert_eq!(data.rows.len(), 4);
    assert!(data.rows.iter().all(|r| r.zone != ZoneRange::BackCourt));
    for row in &data.rows {
        assert!((row.diff_pct - (row.player_pct - row.league_pct)).abs() < 1e-12);
    }
}

#[tokio::test]
async fn test_head_to_head_pipeline_end_to_end() {
    let (provider, directory) = seeded_fixture().await;

    let data = get_head_to_head_data(
        &provider,
        &directory,
        &LocalNarrator,
        "avery brooks",
        &SeasonId::new("2023-24"),
        "Dana Whitfield",
        &SeasonId::new("2023-24"),
    )
    .await
    .unwrap();

    // Both scenes render into one document
    assert_eq!(data.first.scene.div_id, "shot-chart-1");
    assert_eq!(data.second.scene.div_id, "shot-chart-2");
    assert_ne!(data.first.scene.div_id, data.second.scene.div_id);

    // Merged table is always five rows in fixed order
    assert_eq!(data.zones.len(), 5);
    let order: Vec<ZoneRange> = data.zones.iter().map(|r| r.zone).collect();
    assert_eq!(order, ZoneRange::ALL);

    // Whitfield's silence in the back court does not hide Brooks' attempts
    let backcourt = &data.zones[ZoneRange::BackCourt.index()];
    assert_eq!(backcourt.first.attempted, 2);
    assert_eq!(backcourt.second.attempted, 0);

    assert!(!data.narrative.is_empty());
}

#[tokio::test]
async fn test_earlier_season_resolves_independently() {
    let (provider, directory) = seeded_fixture().await;

    let data = get_shot_chart_data(
        &provider,
        &directory,
        &LocalNarrator,
        PlayerId::new(101),
        &SeasonId::new("2022-23"),
    )
    .await
    .unwrap();

    assert_eq!(data.profile.season, SeasonId::new("2022-23"));
    assert_eq!(data.profile.overall.attempted, 220);
    // Seasons without mid-range attempts keep zero tallies in the profile
    assert_eq!(
        data.profile.zone(ZoneRange::EightToSixteen).attempted,
        0
    );
    // ...but drop out of the league comparison
    assert_eq!(data.league_comparison.rows.len(), 2);
}
