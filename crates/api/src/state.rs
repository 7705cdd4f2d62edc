use std::sync::Arc;

use infra::DataStore;

/// Per-request context handed to every resolver.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DataStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }
}
