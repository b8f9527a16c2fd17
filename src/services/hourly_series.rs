//! Hourly forecast series builder.
//!
//! Resamples raw, possibly irregular forecast samples into an hour-aligned
//! series by averaging all samples within each calendar-hour bucket. Hours
//! without any sample are skipped, never interpolated or zero-filled, so the
//! downstream analysis only reasons about hours where real data exists.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

use crate::models::{floor_hour, HourlyPoint, Sample};

#[derive(Default)]
struct Bucket {
    wind_speed: f64,
    wave_height: f64,
    wave_period: f64,
    n: u32,
}

/// Aggregate `samples` into one point per calendar hour over
/// `[floor_hour(range_start), floor_hour(range_end)]` inclusive.
///
/// Samples outside `[range_start, range_end]` are ignored; the upstream
/// source is expected to pre-filter, but the builder does not rely on it.
/// Input order is irrelevant. Points are returned in ascending `hour_start`
/// order, and an empty result simply means "no data", not an error.
pub fn build_hourly_series(
    samples: &[Sample],
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
) -> Vec<HourlyPoint> {
    let mut buckets: HashMap<DateTime<Utc>, Bucket> = HashMap::new();
    for sample in samples {
        if sample.timestamp < range_start || sample.timestamp > range_end {
            continue;
        }
        let bucket = buckets.entry(floor_hour(sample.timestamp)).or_default();
        bucket.wind_speed += sample.wind_speed;
        bucket.wave_height += sample.wave_height;
        bucket.wave_period += sample.wave_period;
        bucket.n += 1;
    }

    let mut series = Vec::new();
    let mut hour = floor_hour(range_start);
    let last = floor_hour(range_end);
    while hour <= last {
        if let Some(bucket) = buckets.get(&hour) {
            let n = f64::from(bucket.n);
            series.push(HourlyPoint {
                hour_start: hour,
                wind_speed: bucket.wind_speed / n,
                wave_height: bucket.wave_height / n,
                wave_period: bucket.wave_period / n,
            });
        }
        hour += Duration::hours(1);
    }
    series
}
