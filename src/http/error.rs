//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::provider::ProviderError;
use crate::services::ChartError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
///
/// Validation errors become user-facing messages; everything unclassified is
/// logged and collapsed to a generic response with no internals exposed.
#[derive(Debug)]
pub enum AppError {
    /// Player identity did not resolve
    PlayerNotFound(String),
    /// Player resolved but never played the requested season
    SeasonNotPlayed(String),
    /// Player-season resolved but carries zero attempts
    NoShotData(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Upstream stats provider failed or sent malformed data
    UpstreamData(String),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::PlayerNotFound(msg) => (
                StatusCode::NOT_FOUND,
                ApiError::new("PLAYER_NOT_FOUND", msg),
            ),
            AppError::SeasonNotPlayed(msg) => (
                StatusCode::NOT_FOUND,
                ApiError::new("SEASON_NOT_PLAYED", msg),
            ),
            AppError::NoShotData(msg) => {
                (StatusCode::NOT_FOUND, ApiError::new("NO_SHOT_DATA", msg))
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::UpstreamData(msg) => (
                StatusCode::BAD_GATEWAY,
                ApiError::new("UPSTREAM_DATA_ERROR", msg),
            ),
            AppError::Internal(msg) => {
                tracing::error!(detail = %msg, "unexpected error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new(
                        "INTERNAL_ERROR",
                        "An unexpected error occurred. Please try again.",
                    ),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<ChartError> for AppError {
    fn from(err: ChartError) -> Self {
        match err {
            ChartError::PlayerNotFound { query } => {
                AppError::PlayerNotFound(format!("Player '{query}' not found."))
            }
            ChartError::NoShotData {
                player_name,
                season,
            } => AppError::NoShotData(format!(
                "{player_name} has no shot data for the {season} season."
            )),
            ChartError::Provider(e) => e.into(),
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::PlayerNotFound { player_id } => {
                AppError::PlayerNotFound(format!("Player '{player_id}' not found."))
            }
            ProviderError::SeasonNotPlayed { season, .. } => AppError::SeasonNotPlayed(
                format!("Player did not play in the {season} season."),
            ),
            ProviderError::UnrecognizedZone(e) => AppError::UpstreamData(e.to_string()),
            ProviderError::Upstream { message } | ProviderError::Decode { message } => {
                AppError::UpstreamData(format!("The stats provider failed: {message}"))
            }
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{PlayerId, SeasonId};

    #[test]
    fn test_chart_error_maps_to_distinct_codes() {
        let not_found: AppError = ChartError::PlayerNotFound {
            query: "nobody".to_string(),
        }
        .into();
        assert!(matches!(not_found, AppError::PlayerNotFound(_)));

        let no_data: AppError = ChartError::NoShotData {
            player_name: "Avery Brooks".to_string(),
            season: SeasonId::new("2019-20"),
        }
        .into();
        assert!(matches!(no_data, AppError::NoShotData(_)));

        let season: AppError = ChartError::Provider(ProviderError::SeasonNotPlayed {
            player_id: PlayerId::new(1),
            season: SeasonId::new("1999-00"),
        })
        .into();
        assert!(matches!(season, AppError::SeasonNotPlayed(_)));
    }

    #[test]
    fn test_malformed_zone_is_upstream_error() {
        let err: AppError = ChartError::Provider(ProviderError::UnrecognizedZone(
            crate::models::UnrecognizedZoneError {
                label: "Half Court".to_string(),
            },
        ))
        .into();
        assert!(matches!(err, AppError::UpstreamData(_)));
    }
}
