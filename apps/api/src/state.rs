use std::sync::Arc;

use crate::config::Config;
use crate::directory::JournalistDirectory;
use crate::llm_client::ChatCompleter;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Roster loaded once at startup; shared read-only across sessions.
    pub directory: Arc<JournalistDirectory>,
    /// Completion seam — `OpenAiClient` in production, scripted in tests.
    pub llm: Arc<dyn ChatCompleter>,
    pub sessions: SessionStore,
    pub config: Config,
}
