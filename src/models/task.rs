//! Operational task records and analysis constraints.
//!
//! Tasks store their duration as a string such as `"4h"`, mirroring the
//! upstream planning system. The string is parsed exactly once at the
//! boundary ([`parse_hours`]) and only the validated hour count ever reaches
//! the analysis core, via [`TaskConstraint`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status of an operational task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Ready to be scheduled.
    Ready,
    /// Waiting on a predecessor task.
    Blocked,
    Started,
    Completed,
}

/// An operational task with its weather tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    /// Required duration, e.g. `"4h"`. Parsed via [`parse_hours`].
    pub duration: String,
    /// Task that must complete before this one may start.
    pub predecessor: Option<i64>,
    pub status: TaskStatus,
    /// Inclusive upper bound on acceptable wave height, in metres.
    pub wave_height_limit: f64,
}

/// Validation errors for task constraints.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstraintError {
    #[error("duration must be an integer hour count like \"4h\", got {0:?}")]
    MalformedDuration(String),
    #[error("task duration must be at least one hour")]
    EmptyDuration,
    #[error("wave height limit must be non-negative, got {0}")]
    NegativeLimit(f64),
}

/// Parse a duration string such as `"4h"` into an hour count.
///
/// Rejects anything that is not a positive integer followed by `h`.
pub fn parse_hours(duration: &str) -> Result<u32, ConstraintError> {
    let digits = duration
        .strip_suffix('h')
        .ok_or_else(|| ConstraintError::MalformedDuration(duration.to_string()))?;
    let hours = digits
        .parse::<u32>()
        .map_err(|_| ConstraintError::MalformedDuration(duration.to_string()))?;
    if hours == 0 {
        return Err(ConstraintError::EmptyDuration);
    }
    Ok(hours)
}

/// Validated constraint pair handed to the window analyzer.
///
/// Construction is the only place the inputs are checked; once built,
/// `duration_hours >= 1` holds and the analyzer is total over its domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskConstraint {
    /// Number of consecutive admissible hours required.
    pub duration_hours: u32,
    /// Inclusive upper bound on wave height.
    pub height_limit: f64,
}

impl TaskConstraint {
    /// Build a constraint, rejecting a zero duration or negative limit.
    pub fn new(duration_hours: u32, height_limit: f64) -> Result<Self, ConstraintError> {
        if duration_hours == 0 {
            return Err(ConstraintError::EmptyDuration);
        }
        if height_limit < 0.0 {
            return Err(ConstraintError::NegativeLimit(height_limit));
        }
        Ok(Self {
            duration_hours,
            height_limit,
        })
    }

    /// Resolve a task's string duration and limit into a constraint.
    pub fn from_task(task: &Task) -> Result<Self, ConstraintError> {
        let hours = parse_hours(&task.duration)?;
        Self::new(hours, task.wave_height_limit)
    }
}
