//! Stats-provider collaborator.
//!
//! The provider supplies, per (player, season): the finite shot event
//! sequence for the player and the league-wide pre-summed equivalent for the
//! same season and zone taxonomy. Implementations sit behind the
//! [`ShotDataProvider`] trait so the aggregation core never knows which
//! backend produced the data:
//!
//! - `local`: in-memory implementation for unit testing and local development
//! - `nba`: live implementation calling the NBA Stats API
//!
//! The provider owns no retry or timeout policy beyond its HTTP client
//! defaults; each fetch is a single blocking-equivalent call at the request
//! boundary.

// Feature flag priority: nba-upstream > local (when --all-features is used)
#[cfg(not(any(feature = "nba-upstream", feature = "local-data")))]
compile_error!("Enable at least one stats provider backend feature.");

pub mod directory;
pub mod error;
#[cfg(feature = "local-data")]
pub mod local;
#[cfg(feature = "nba-upstream")]
pub mod nba;

pub use directory::PlayerDirectory;
pub use error::{ProviderError, ProviderResult};
#[cfg(feature = "local-data")]
pub use local::LocalDataProvider;
#[cfg(feature = "nba-upstream")]
pub use nba::NbaStatsProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::{PlayerId, PlayerInfo, SeasonId};
use crate::models::{ShotEvent, ZoneRange};

/// League-wide pre-summed make/attempt counts for one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueZoneAverage {
    pub zone: ZoneRange,
    pub made: u32,
    pub attempted: u32,
}

/// One fetched player-season: the raw shot events plus the league baseline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonShotChart {
    pub shots: Vec<ShotEvent>,
    pub league: Vec<LeagueZoneAverage>,
}

/// Trait for upstream shot data access.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ShotDataProvider: Send + Sync {
    /// Full league player directory, fetched once at startup and cached by
    /// the caller.
    async fn list_players(&self) -> ProviderResult<Vec<PlayerInfo>>;

    /// Season identifiers of a player's career, most recent first.
    async fn career_seasons(&self, player: PlayerId) -> ProviderResult<Vec<SeasonId>>;

    /// All shot events and the league baseline for one player-season.
    async fn season_shot_chart(
        &self,
        player: PlayerId,
        season: &SeasonId,
    ) -> ProviderResult<SeasonShotChart>;
}
