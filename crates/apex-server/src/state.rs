//! Application state shared across all handlers.

use std::sync::Arc;

use apex_core::repository::{ApplicationRepository, DatabaseProbe};

/// Handles to the persistence layer, created once at startup.
pub struct AppState<R, P> {
    pub applications: Arc<R>,
    pub probe: Arc<P>,
}

impl<R: ApplicationRepository, P: DatabaseProbe> AppState<R, P> {
    pub fn new(applications: R, probe: P) -> Self {
        Self {
            applications: Arc::new(applications),
            probe: Arc::new(probe),
        }
    }
}

impl<R, P> Clone for AppState<R, P> {
    fn clone(&self) -> Self {
        Self {
            applications: Arc::clone(&self.applications),
            probe: Arc::clone(&self.probe),
        }
    }
}
