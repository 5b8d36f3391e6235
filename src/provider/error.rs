//! Error types for stats-provider operations.

use crate::api::{PlayerId, SeasonId};
use crate::models::UnrecognizedZoneError;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Error type for stats-provider operations
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The queried player identity does not resolve upstream.
    #[error("player {player_id} not found")]
    PlayerNotFound { player_id: PlayerId },

    /// The player resolved but has no record of the requested season.
    #[error("player {player_id} did not play in the {season} season")]
    SeasonNotPlayed {
        player_id: PlayerId,
        season: SeasonId,
    },

    /// Upstream shot data carried a zone category outside the closed set.
    #[error(transparent)]
    UnrecognizedZone(#[from] UnrecognizedZoneError),

    /// The upstream request itself failed (network, HTTP status).
    #[error("upstream request failed: {message}")]
    Upstream { message: String },

    /// The upstream payload could not be decoded into the expected shape.
    #[error("could not decode upstream payload: {message}")]
    Decode { message: String },
}

impl ProviderError {
    /// Create an upstream transport error.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a payload decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}
