//! Shared application state for HTTP handlers

use std::sync::Arc;

use confstore_persistence::VersionStore;

/// State shared by every request: the version store plus request-shaping
/// settings. No other mutable state exists between requests.
pub struct AppState {
    store: Arc<dyn VersionStore>,
    history_limit: u64,
}

impl AppState {
    pub fn new(store: Arc<dyn VersionStore>, history_limit: u64) -> Self {
        Self {
            store,
            history_limit,
        }
    }

    pub fn store(&self) -> &dyn VersionStore {
        self.store.as_ref()
    }

    pub fn history_limit(&self) -> u64 {
        self.history_limit
    }
}
