// src/state.rs
use std::sync::Arc;

use crate::config::RelayOptions;
use crate::services::provider::CompletionProvider;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
    pub relay: RelayOptions,
}

impl AppState {
    pub fn new(provider: impl CompletionProvider + 'static, relay: RelayOptions) -> Self {
        Self {
            provider: Arc::new(provider),
            relay,
        }
    }
}
