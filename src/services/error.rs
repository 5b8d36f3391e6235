//! Error type for service orchestration.

use crate::api::SeasonId;
use crate::provider::ProviderError;

/// Result type for service operations
pub type ChartResult<T> = Result<T, ChartError>;

/// Error type for the fetch-aggregate-render pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// The queried player does not resolve against the directory.
    #[error("player '{query}' not found")]
    PlayerNotFound { query: String },

    /// Player and season resolved, but the season has zero recorded attempts.
    ///
    /// Distinct from `PlayerNotFound`: the identity is valid, the data is
    /// empty, and no chart or comparison may be rendered from it.
    #[error("{player_name} has no shot data for the {season} season")]
    NoShotData {
        player_name: String,
        season: SeasonId,
    },

    /// The stats provider failed or returned malformed data.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
