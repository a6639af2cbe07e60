//! Shared application state.

use std::sync::Arc;

use desk_db::IncidentStore;

/// Handed to every handler. Cloning copies the `Arc`, not the store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<IncidentStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: IncidentStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
