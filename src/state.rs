//! Shared application state for all routes.

use crate::settings::Settings;
use crate::store::EmployeeStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    /// Hands out one session per request; see [`crate::extractors::Session`].
    pub store: Arc<dyn EmployeeStore>,
}

impl AppState {
    pub fn new(settings: Settings, store: Arc<dyn EmployeeStore>) -> Self {
        Self {
            settings: Arc::new(settings),
            store,
        }
    }
}
