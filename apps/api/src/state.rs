use std::sync::Arc;

use crate::config::Config;
use crate::puzzle::generator::PuzzleSource;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no per-puzzle data: every request builds and drops its own puzzle.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Generative backend. Default: `LlmClient`; tests swap in canned payloads.
    pub source: Arc<dyn PuzzleSource>,
}
