//! Application state for the HTTP server.

use std::sync::Arc;

use crate::provider::{PlayerDirectory, ShotDataProvider};
use crate::services::Narrator;

/// Shared application state passed to all handlers.
///
/// Everything here is constructed once at startup and only read afterward.
#[derive(Clone)]
pub struct AppState {
    /// Process-lifetime player directory, fetched once at startup
    pub directory: Arc<PlayerDirectory>,
    /// Stats provider instance
    pub provider: Arc<dyn ShotDataProvider>,
    /// Narrative-generation collaborator
    pub narrator: Arc<dyn Narrator>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        directory: Arc<PlayerDirectory>,
        provider: Arc<dyn ShotDataProvider>,
        narrator: Arc<dyn Narrator>,
    ) -> Self {
        Self {
            directory,
            provider,
            narrator,
        }
    }
}
