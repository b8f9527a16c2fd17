//! Forecast data-source abstraction.
//!
//! The forecast source is an explicit capability injected into the request
//! path rather than ambient global state: handlers and jobs receive an
//! `Arc<dyn ForecastProvider>` through the application state, which also
//! makes the analysis trivially testable with synthetic series.

pub mod mock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{GeoLocation, Sample};

pub use mock::MockForecastProvider;

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors from the upstream forecast source.
///
/// The caller decides on retry policy; nothing in this crate retries.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("forecast service returned status {status}: {detail}")]
    Upstream { status: u16, detail: String },
    #[error("forecast service unreachable: {0}")]
    Unreachable(String),
}

/// Source of timestamped environmental samples for a location and time range.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch all samples for `location` with timestamps in `[from, to]`
    /// (both bounds inclusive). An empty result means no data, not failure.
    async fn fetch_forecast(
        &self,
        location: GeoLocation,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> ProviderResult<Vec<Sample>>;
}
