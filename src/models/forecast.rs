//! Forecast observation types.
//!
//! A [`Sample`] is a single raw environmental observation as delivered by a
//! forecast provider. A [`HourlyPoint`] is one element of the hour-aligned
//! aggregate series produced by the hourly series builder. Both are immutable
//! value types; neither outlives a single analysis call.

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single raw environmental observation from the forecast source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Observation instant (UTC).
    pub timestamp: DateTime<Utc>,
    /// Wind speed in m/s, non-negative.
    pub wind_speed: f64,
    /// Significant wave height in metres, non-negative.
    pub wave_height: f64,
    /// Wave period in seconds, non-negative.
    pub wave_period: f64,
}

/// One element of the aggregated hourly series.
///
/// Each field is the unweighted arithmetic mean of all samples whose
/// timestamp falls in `[hour_start, hour_start + 1h)`. A point exists only
/// for hours with at least one contributing sample, so the series may
/// contain gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    /// Start of the calendar hour (UTC, minutes/seconds zeroed).
    pub hour_start: DateTime<Utc>,
    pub wind_speed: f64,
    pub wave_height: f64,
    pub wave_period: f64,
}

/// Geographic location as a latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Error for malformed `"lat,lon"` location strings.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid location format {0:?}: expected 'lat,lon'")]
pub struct LocationParseError(pub String);

impl GeoLocation {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Parse a `"lat,lon"` query string into a location.
    pub fn parse(s: &str) -> Result<Self, LocationParseError> {
        let (lat_str, lon_str) = s
            .split_once(',')
            .ok_or_else(|| LocationParseError(s.to_string()))?;
        let lat = lat_str
            .trim()
            .parse::<f64>()
            .map_err(|_| LocationParseError(s.to_string()))?;
        let lon = lon_str
            .trim()
            .parse::<f64>()
            .map_err(|_| LocationParseError(s.to_string()))?;
        Ok(Self { lat, lon })
    }
}

impl std::fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Truncate an instant down to the start of its calendar hour (UTC).
pub fn floor_hour(t: DateTime<Utc>) -> DateTime<Utc> {
    t - Duration::minutes(t.minute() as i64)
        - Duration::seconds(t.second() as i64)
        - Duration::nanoseconds(t.nanosecond() as i64)
}

/// Render an instant as ISO-8601 UTC without fractional seconds, `Z` suffix.
///
/// Consumers compare these strings literally, so the format is fixed:
/// `2025-06-01T10:00:00Z`, never `+00:00`, never sub-second digits.
pub fn format_utc(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_floor_hour_zeroes_sub_hour_fields() {
        let t = Utc.with_ymd_and_hms(2025, 6, 1, 10, 42, 17).unwrap();
        let floored = floor_hour(t);
        assert_eq!(floored, Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_floor_hour_is_identity_on_hour_boundary() {
        let t = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        assert_eq!(floor_hour(t), t);
    }

    #[test]
    fn test_format_utc_shape() {
        let t = Utc.with_ymd_and_hms(2025, 6, 1, 9, 5, 3).unwrap();
        let s = format_utc(t);
        assert_eq!(s, "2025-06-01T09:05:03Z");
        assert_eq!(s.len(), 20);
        assert!(!s.contains('.'));
        assert!(!s.contains("+00:00"));
    }

    #[test]
    fn test_location_parse() {
        let loc = GeoLocation::parse("61.5,4.8").unwrap();
        assert_eq!(loc.lat, 61.5);
        assert_eq!(loc.lon, 4.8);

        let loc = GeoLocation::parse(" -28.7 , 17.9 ").unwrap();
        assert_eq!(loc.lat, -28.7);
        assert_eq!(loc.lon, 17.9);

        assert!(GeoLocation::parse("61.5").is_err());
        assert!(GeoLocation::parse("north,east").is_err());
        assert!(GeoLocation::parse("").is_err());
    }
}
