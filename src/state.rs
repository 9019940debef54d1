//! Shared application state for all routes.

use crate::store::RangerStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RangerStore>,
}

impl AppState {
    pub fn new<S: RangerStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
