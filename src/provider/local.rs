//! In-memory provider implementation for unit testing and local development.

use std::collections::HashMap;
use std::f64::consts::PI;

use async_trait::async_trait;

use crate::api::{PlayerId, PlayerInfo, SeasonId};
use crate::models::{ShotEvent, ZoneRange};

use super::error::{ProviderError, ProviderResult};
use super::{LeagueZoneAverage, SeasonShotChart, ShotDataProvider};

/// In-memory shot data store.
///
/// Populated before being shared; serves reads only afterward, matching the
/// request-scoped concurrency model.
#[derive(Debug, Default)]
pub struct LocalDataProvider {
    players: Vec<PlayerInfo>,
    seasons: HashMap<PlayerId, Vec<SeasonId>>,
    charts: HashMap<(PlayerId, SeasonId), SeasonShotChart>,
}

impl LocalDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one player-season and its shot chart.
    ///
    /// Seasons accumulate per player in insertion order; callers seed most
    /// recent first to match the provider contract.
    pub fn insert_season(
        &mut self,
        player: PlayerInfo,
        season: SeasonId,
        chart: SeasonShotChart,
    ) {
        if !self.players.iter().any(|p| p.player_id == player.player_id) {
            self.players.push(player.clone());
        }
        self.seasons
            .entry(player.player_id)
            .or_default()
            .push(season.clone());
        self.charts.insert((player.player_id, season), chart);
    }

    /// A deterministic sample dataset: two players, league baselines, and a
    /// spread of shots across all five zones.
    pub fn seeded() -> Self {
        let mut provider = Self::new();

        let brooks = PlayerInfo {
            player_id: PlayerId::new(101),
            full_name: "Avery Brooks".to_string(),
        };
        let whitfield = PlayerInfo {
            player_id: PlayerId::new(102),
            full_name: "Dana Whitfield".to_string(),
        };

        let mut brooks_shots = Vec::new();
        brooks_shots.extend(synth_zone_shots(ZoneRange::UnderEight, 120, 74));
        brooks_shots.extend(synth_zone_shots(ZoneRange::EightToSixteen, 60, 27));
        brooks_shots.extend(synth_zone_shots(ZoneRange::SixteenToTwentyFour, 45, 19));
        brooks_shots.extend(synth_zone_shots(ZoneRange::TwentyFourPlus, 210, 80));
        brooks_shots.extend(synth_zone_shots(ZoneRange::BackCourt, 2, 0));
        provider.insert_season(
            brooks.clone(),
            SeasonId::new("2023-24"),
            SeasonShotChart {
                shots: brooks_shots,
                league: sample_league(),
            },
        );

        let mut earlier = Vec::new();
        earlier.extend(synth_zone_shots(ZoneRange::UnderEight, 80, 46));
        earlier.extend(synth_zone_shots(ZoneRange::TwentyFourPlus, 140, 49));
        provider.insert_season(
            brooks,
            SeasonId::new("2022-23"),
            SeasonShotChart {
                shots: earlier,
                league: sample_league(),
            },
        );

        let mut whitfield_shots = Vec::new();
        whitfield_shots.extend(synth_zone_shots(ZoneRange::UnderEight, 150, 95));
        whitfield_shots.extend(synth_zone_shots(ZoneRange::EightToSixteen, 90, 41));
        whitfield_shots.extend(synth_zone_shots(ZoneRange::SixteenToTwentyFour, 70, 30));
        whitfield_shots.extend(synth_zone_shots(ZoneRange::TwentyFourPlus, 40, 13));
        provider.insert_season(
            whitfield,
            SeasonId::new("2023-24"),
            SeasonShotChart {
                shots: whitfield_shots,
                league: sample_league(),
            },
        );

        provider
    }
}

/// Per-zone (radius, angular band, action label) used to place synthetic
/// shots inside the chart frame.
fn zone_placement(zone: ZoneRange) -> (f64, f64, f64, &'static str) {
    match zone {
        ZoneRange::UnderEight => (50.0, 0.2, PI - 0.2, "Driving Layup"),
        ZoneRange::EightToSixteen => (120.0, 0.2, PI - 0.2, "Floating Jump Shot"),
        ZoneRange::SixteenToTwentyFour => (200.0, 0.35, PI - 0.35, "Pullup Jump Shot"),
        ZoneRange::TwentyFourPlus => (245.0, 0.45, PI - 0.45, "Jump Shot"),
        ZoneRange::BackCourt => (420.0, 1.25, PI - 1.25, "Heave"),
    }
}

/// Spread `attempts` shots along the zone's arc; the first `made` attempts
/// are makes. Deterministic on purpose — the seed never changes between runs.
fn synth_zone_shots(zone: ZoneRange, attempts: u32, made: u32) -> Vec<ShotEvent> {
    debug_assert!(made <= attempts);
    let (radius, theta_min, theta_max, action) = zone_placement(zone);
    (0..attempts)
        .map(|i| {
            let t = (f64::from(i) + 0.5) / f64::from(attempts);
            let theta = theta_min + t * (theta_max - theta_min);
            ShotEvent {
                x: radius * theta.cos(),
                y: radius * theta.sin(),
                distance_ft: (radius / 10.0).round() as u32,
                made: i < made,
                action_type: action.to_string(),
                zone,
            }
        })
        .collect()
}

fn sample_league() -> Vec<LeagueZoneAverage> {
    vec![
        LeagueZoneAverage {
            zone: ZoneRange::UnderEight,
            made: 52_640,
            attempted: 88_910,
        },
        LeagueZoneAverage {
            zone: ZoneRange::EightToSixteen,
            made: 12_410,
            attempted: 29_520,
        },
        LeagueZoneAverage {
            zone: ZoneRange::SixteenToTwentyFour,
            made: 10_380,
            attempted: 25_130,
        },
        LeagueZoneAverage {
            zone: ZoneRange::TwentyFourPlus,
            made: 27_310,
            attempted: 76_040,
        },
        LeagueZoneAverage {
            zone: ZoneRange::BackCourt,
            made: 24,
            attempted: 840,
        },
    ]
}

#[async_trait]
impl ShotDataProvider for LocalDataProvider {
    async fn list_players(&self) -> ProviderResult<Vec<PlayerInfo>> {
        Ok(self.players.clone())
    }

    async fn career_seasons(&self, player: PlayerId) -> ProviderResult<Vec<SeasonId>> {
        self.seasons
            .get(&player)
            .cloned()
            .ok_or(ProviderError::PlayerNotFound { player_id: player })
    }

    async fn season_shot_chart(
        &self,
        player: PlayerId,
        season: &SeasonId,
    ) -> ProviderResult<SeasonShotChart> {
        if !self.seasons.contains_key(&player) {
            return Err(ProviderError::PlayerNotFound { player_id: player });
        }
        self.charts
            .get(&(player, season.clone()))
            .cloned()
            .ok_or_else(|| ProviderError::SeasonNotPlayed {
                player_id: player,
                season: season.clone(),
            })
    }
}
