//! Schedule window orchestration.
//!
//! Ties the pieces together for one schedule-window request: resolve the
//! task's constraint, fetch the forecast from the injected provider,
//! aggregate to an hourly series, run the window analysis, and turn the
//! start offsets into concrete start/end windows.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tracing::debug;

use crate::models::{ConstraintError, GeoLocation, HourlyPoint, Task, TaskConstraint};
use crate::providers::{ForecastProvider, ProviderError};
use crate::services::hourly_series::build_hourly_series;
use crate::services::window_analysis::analyze;

/// Upper bound on the forecast horizon, in hours (one week).
pub const MAX_LOOKAHEAD_HOURS: u32 = 168;

/// A concrete feasible execution window.
#[derive(Debug, Clone, PartialEq)]
pub struct StartWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_hours: u32,
}

/// Outcome of a schedule-window computation.
///
/// `go_no_go` is index-aligned with `hourly`. An empty forecast is not an
/// error: both vectors come back empty and `note` explains why.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleWindow {
    pub hourly: Vec<HourlyPoint>,
    pub go_no_go: Vec<bool>,
    pub start_windows: Vec<StartWindow>,
    pub note: Option<String>,
}

impl ScheduleWindow {
    fn empty(note: &str) -> Self {
        Self {
            hourly: vec![],
            go_no_go: vec![],
            start_windows: vec![],
            note: Some(note.to_string()),
        }
    }
}

/// Errors surfaced by the schedule-window computation.
///
/// Only input validation and upstream fetch can fail; the analysis itself is
/// total over validated input.
#[derive(Debug, Error)]
pub enum ScheduleWindowError {
    #[error("invalid task fields: {0}")]
    InvalidTask(#[from] ConstraintError),
    #[error("lookahead_hours must be between 1 and {MAX_LOOKAHEAD_HOURS}, got {0}")]
    InvalidLookahead(u32),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Compute feasible start windows for `task` at `location` over
/// `[now, now + lookahead_hours]`.
pub async fn compute_schedule_window(
    provider: &dyn ForecastProvider,
    task: &Task,
    location: GeoLocation,
    lookahead_hours: u32,
    now: DateTime<Utc>,
) -> Result<ScheduleWindow, ScheduleWindowError> {
    let constraint = TaskConstraint::from_task(task)?;
    if lookahead_hours == 0 || lookahead_hours > MAX_LOOKAHEAD_HOURS {
        return Err(ScheduleWindowError::InvalidLookahead(lookahead_hours));
    }

    let range_end = now + Duration::hours(i64::from(lookahead_hours));
    let samples = provider.fetch_forecast(location, now, range_end).await?;
    if samples.is_empty() {
        return Ok(ScheduleWindow::empty(
            "No forecast points returned in the requested window.",
        ));
    }

    let hourly = build_hourly_series(&samples, now, range_end);
    if hourly.is_empty() {
        return Ok(ScheduleWindow::empty("No hourly buckets with data."));
    }

    let analysis = analyze(&hourly, &constraint);
    debug!(
        task_id = task.id,
        points = hourly.len(),
        windows = analysis.start_offsets.len(),
        "window analysis complete"
    );

    let start_windows = analysis
        .start_offsets
        .iter()
        .map(|&offset| {
            let start = hourly[offset].hour_start;
            StartWindow {
                start,
                end: start + Duration::hours(i64::from(constraint.duration_hours)),
                duration_hours: constraint.duration_hours,
            }
        })
        .collect();

    Ok(ScheduleWindow {
        hourly,
        go_no_go: analysis.admissible,
        start_windows,
        note: None,
    })
}
