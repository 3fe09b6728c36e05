use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ModelClient;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Pluggable model client. Production wires `GeminiClient`; tests substitute a scripted one.
    pub model: Arc<dyn ModelClient>,
    /// Kept for handlers that need runtime settings; currently read only at startup.
    #[allow(dead_code)]
    pub config: Config,
}
