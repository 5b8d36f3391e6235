//! Error-path tests for the fetch-aggregate-render pipeline.
//!
//! Each validation failure in the error taxonomy must surface as its own
//! variant, and narrative failures must never fail a request.

use async_trait::async_trait;

use shotcharts::api::{PlayerId, PlayerInfo, SeasonId};
use shotcharts::models::PlayerShotProfile;
use shotcharts::provider::{
    LocalDataProvider, PlayerDirectory, ProviderError, SeasonShotChart,
};
use shotcharts::routes::comparison::{HeadToHeadRow, LeagueComparisonData};
use shotcharts::services::narrative::NarrativeError;
use shotcharts::services::{
    get_head_to_head_data, get_shot_chart_data, ChartError, LocalNarrator, Narrator,
    NARRATIVE_UNAVAILABLE,
};

struct FailingNarrator;

#[async_trait]
impl Narrator for FailingNarrator {
    async fn season_narrative(
        &self,
        _profile: &PlayerShotProfile,
        _comparison: &LeagueComparisonData,
    ) -> Result<String, NarrativeError> {
        Err(NarrativeError::new("model offline"))
    }

    async fn matchup_narrative(
        &self,
        _first: &PlayerShotProfile,
        _second: &PlayerShotProfile,
        _zones: &[HeadToHeadRow],
    ) -> Result<String, NarrativeError> {
        Err(NarrativeError::new("model offline"))
    }
}

async fn seeded_fixture() -> (LocalDataProvider, PlayerDirectory) {
    let provider = LocalDataProvider::seeded();
    let directory = PlayerDirectory::fetch(&provider).await.unwrap();
    (provider, directory)
}

#[tokio::test]
async fn test_unknown_player_id_is_player_not_found() {
    let (provider, directory) = seeded_fixture().await;

    let err = get_shot_chart_data(
        &provider,
        &directory,
        &LocalNarrator,
        PlayerId::new(999),
        &SeasonId::new("2023-24"),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ChartError::PlayerNotFound { .. }));
}

#[tokio::test]
async fn test_unplayed_season_is_season_not_played() {
    let (provider, directory) = seeded_fixture().await;

    let err = get_shot_chart_data(
        &provider,
        &directory,
        &LocalNarrator,
        PlayerId::new(101),
        &SeasonId::new("1996-97"),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        ChartError::Provider(ProviderError::SeasonNotPlayed { .. })
    ));
}

#[tokio::test]
async fn test_zero_attempt_season_is_no_shot_data() {
    // A resolved season with an empty shot list is distinct from "not found"
    let mut provider = LocalDataProvider::new();
    provider.insert_season(
        PlayerInfo {
            player_id: PlayerId::new(55),
            full_name: "Quiet Rookie".to_string(),
        },
        SeasonId::new("2023-24"),
        SeasonShotChart::default(),
    );
    let directory = PlayerDirectory::fetch(&provider).await.unwrap();

    let err = get_shot_chart_data(
        &provider,
        &directory,
        &LocalNarrator,
        PlayerId::new(55),
        &SeasonId::new("2023-24"),
    )
    .await
    .unwrap_err();

    match err {
        ChartError::NoShotData {
            player_name,
            season,
        } => {
            assert_eq!(player_name, "Quiet Rookie");
            assert_eq!(season, SeasonId::new("2023-24"));
        }
        other => panic!("expected NoShotData, got {other:?}"),
    }
}

#[tokio::test]
async fn test_comparison_rejects_unknown_name() {
    let (provider, directory) = seeded_fixture().await;

    let err = get_head_to_head_data(
        &provider,
        &directory,
        &LocalNarrator,
        "Nobody Inparticular",
        &SeasonId::new("2023-24"),
        "Dana Whitfield",
        &SeasonId::new("2023-24"),
    )
    .await
    .unwrap_err();

    match err {
        ChartError::PlayerNotFound { query } => assert_eq!(query, "Nobody Inparticular"),
        other => panic!("expected PlayerNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_comparison_is_terminal_when_either_side_is_empty() {
    // No partial comparison: a valid first side cannot rescue an empty second
    let mut provider = LocalDataProvider::seeded();
    provider.insert_season(
        PlayerInfo {
            player_id: PlayerId::new(55),
            full_name: "Quiet Rookie".to_string(),
        },
        SeasonId::new("2023-24"),
        SeasonShotChart::default(),
    );
    let directory = PlayerDirectory::fetch(&provider).await.unwrap();

    let err = get_head_to_head_data(
        &provider,
        &directory,
        &LocalNarrator,
        "Avery Brooks",
        &SeasonId::new("2023-24"),
        "Quiet Rookie",
        &SeasonId::new("2023-24"),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ChartError::NoShotData { .. }));
}

#[tokio::test]
async fn test_narrator_failure_never_fails_the_request() {
    let (provider, directory) = seeded_fixture().await;

    let data = get_shot_chart_data(
        &provider,
        &directory,
        &FailingNarrator,
        PlayerId::new(101),
        &SeasonId::new("2023-24"),
    )
    .await
    .unwrap();

    assert_eq!(data.narrative, NARRATIVE_UNAVAILABLE);
    // The chart and stats still rendered
    assert_eq!(data.profile.overall.attempted, 437);
    assert!(!data.scene.series.is_empty());
}

#[tokio::test]
async fn test_comparison_narrator_failure_is_masked_too() {
    let (provider, directory) = seeded_fixture().await;

    let data = get_head_to_head_data(
        &provider,
        &directory,
        &FailingNarrator,
        "Avery Brooks",
        &SeasonId::new("2023-24"),
        "Dana Whitfield",
        &SeasonId::new("2023-24"),
    )
    .await
    .unwrap();

    assert_eq!(data.narrative, NARRATIVE_UNAVAILABLE);
    assert_eq!(data.zones.len(), 5);
}
