//! Application state shared across request handlers

use std::sync::Arc;

use nitpick_core::{CompletionClient, Reviewer};

/// State injected into every handler
pub struct AppState {
    /// Review engine over the configured completion backend
    pub reviewer: Reviewer,
}

impl AppState {
    /// Create application state around a completion client
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            reviewer: Reviewer::new(client),
        }
    }
}
