//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::TaskRepository;
use crate::providers::ForecastProvider;
use crate::services::job_tracker::JobTracker;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Task store.
    pub repository: Arc<dyn TaskRepository>,
    /// Forecast data source, injected rather than ambient.
    pub provider: Arc<dyn ForecastProvider>,
    /// In-memory tracker for background analysis jobs.
    pub job_tracker: JobTracker,
}

impl AppState {
    pub fn new(repository: Arc<dyn TaskRepository>, provider: Arc<dyn ForecastProvider>) -> Self {
        Self {
            repository,
            provider,
            job_tracker: JobTracker::new(),
        }
    }
}
