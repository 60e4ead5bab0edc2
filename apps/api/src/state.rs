use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-session data; each request builds its own prompt and accumulator.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: GeminiClient.
    pub llm: Arc<dyn CompletionBackend>,
    pub config: Config,
}
