//! Mock forecast provider.
//!
//! Serves samples from an in-memory fixture, filtered to the requested time
//! range. The generated fixture mimics a coastal swell forecast at a
//! 30-minute cadence with wind 8-22 m/s, wave height 0.5-3.0 m, and wave
//! period 6.5-9.5 s, but is fully deterministic so tests are reproducible.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::f64::consts::TAU;

use super::{ForecastProvider, ProviderError, ProviderResult};
use crate::models::{GeoLocation, Sample};

const SAMPLE_STEP_MINUTES: i64 = 30;

/// Forecast provider backed by a fixed in-memory sample set.
#[derive(Debug, Clone)]
pub struct MockForecastProvider {
    samples: Vec<Sample>,
    /// Simulated upstream failure; when set, every fetch fails with it.
    outage: Option<(u16, String)>,
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

impl MockForecastProvider {
    /// Build a provider over an explicit sample set.
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self {
            samples,
            outage: None,
        }
    }

    /// Generate a deterministic fixture covering `[start, start + hours]`
    /// at a 30-minute cadence.
    ///
    /// Wave height swings through roughly a 12-hour swell cycle, wind and
    /// period drift on their own phases. Values are rounded to one decimal
    /// like the upstream feed.
    pub fn generate(start: DateTime<Utc>, hours: u32) -> Self {
        let steps = i64::from(hours) * 60 / SAMPLE_STEP_MINUTES;
        let samples = (0..=steps)
            .map(|i| {
                let t = start + Duration::minutes(i * SAMPLE_STEP_MINUTES);
                let phase = i as f64 * SAMPLE_STEP_MINUTES as f64 / 60.0;
                Sample {
                    timestamp: t,
                    wind_speed: round1(15.0 + 7.0 * (TAU * phase / 9.0).sin()),
                    wave_height: round1(1.75 + 1.25 * (TAU * phase / 12.0).sin()),
                    wave_period: round1(8.0 + 1.5 * (TAU * phase / 7.0).cos()),
                }
            })
            .collect();
        Self {
            samples,
            outage: None,
        }
    }

    /// Make every subsequent fetch fail with the given upstream status,
    /// for exercising error paths in tests.
    pub fn with_outage(mut self, status: u16, detail: impl Into<String>) -> Self {
        self.outage = Some((status, detail.into()));
        self
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

#[async_trait]
impl ForecastProvider for MockForecastProvider {
    async fn fetch_forecast(
        &self,
        _location: GeoLocation,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> ProviderResult<Vec<Sample>> {
        if let Some((status, detail)) = &self.outage {
            return Err(ProviderError::Upstream {
                status: *status,
                detail: detail.clone(),
            });
        }
        Ok(self
            .samples
            .iter()
            .filter(|s| s.timestamp >= from && s.timestamp <= to)
            .cloned()
            .collect())
    }
}
