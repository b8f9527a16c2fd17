//! Data Transfer Objects for the HTTP API.
//!
//! Timestamps are rendered through [`format_utc`] so every instant in a
//! response is ISO-8601 UTC with a `Z` suffix and no fractional seconds;
//! consumers compare these strings literally.

use serde::{Deserialize, Serialize};

use crate::models::{format_utc, GeoLocation, HourlyPoint, Sample, Task};
use crate::services::job_tracker::LogEntry;
use crate::services::{ScheduleWindow, StartWindow};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}

/// Task list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
    pub total: usize,
}

/// Response for a task status transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskUpdateResponse {
    pub message: String,
    pub task: Task,
}

/// Query parameters for the schedule window endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleWindowQuery {
    /// Id of the task to schedule.
    pub task_id: i64,
    #[serde(default = "default_lat")]
    pub lat: f64,
    #[serde(default = "default_lon")]
    pub lon: f64,
    /// Forecast horizon in hours (1-168).
    #[serde(default = "default_lookahead")]
    pub lookahead_hours: u32,
}

fn default_lat() -> f64 {
    61.5
}

fn default_lon() -> f64 {
    4.8
}

fn default_lookahead() -> u32 {
    12
}

/// One point of the hourly forecast, timestamp pre-rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPointDto {
    pub timestamp: String,
    pub wind_speed: f64,
    pub wave_height: f64,
    pub wave_period: f64,
}

impl From<&HourlyPoint> for ForecastPointDto {
    fn from(point: &HourlyPoint) -> Self {
        Self {
            timestamp: format_utc(point.hour_start),
            wind_speed: point.wind_speed,
            wave_height: point.wave_height,
            wave_period: point.wave_period,
        }
    }
}

impl From<&Sample> for ForecastPointDto {
    fn from(sample: &Sample) -> Self {
        Self {
            timestamp: format_utc(sample.timestamp),
            wind_speed: sample.wind_speed,
            wave_height: sample.wave_height,
            wave_period: sample.wave_period,
        }
    }
}

/// A feasible execution window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartWindowDto {
    pub start: String,
    pub end: String,
    pub duration_hours: u32,
}

impl From<&StartWindow> for StartWindowDto {
    fn from(window: &StartWindow) -> Self {
        Self {
            start: format_utc(window.start),
            end: format_utc(window.end),
            duration_hours: window.duration_hours,
        }
    }
}

/// Analysis block of the schedule window response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisDto {
    /// Index-aligned with `hourly_forecast`.
    pub go_no_go: Vec<bool>,
    pub start_windows: Vec<StartWindowDto>,
}

/// Task summary embedded in the schedule window response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSummaryDto {
    pub name: String,
    pub duration: String,
    pub wave_height_limit: f64,
}

/// Full schedule window response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleWindowResponse {
    pub task_id: i64,
    pub task: TaskSummaryDto,
    pub location: GeoLocation,
    pub hourly_forecast: Vec<ForecastPointDto>,
    pub analysis: AnalysisDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ScheduleWindowResponse {
    pub fn from_window(task: &Task, location: GeoLocation, window: &ScheduleWindow) -> Self {
        Self {
            task_id: task.id,
            task: TaskSummaryDto {
                name: task.name.clone(),
                duration: task.duration.clone(),
                wave_height_limit: task.wave_height_limit,
            },
            location,
            hourly_forecast: window.hourly.iter().map(Into::into).collect(),
            analysis: AnalysisDto {
                go_no_go: window.go_no_go.clone(),
                start_windows: window.start_windows.iter().map(Into::into).collect(),
            },
            note: window.note.clone(),
        }
    }
}

/// Query parameters for the weather endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherQuery {
    /// Format: `lat,lon`.
    #[serde(default = "default_location")]
    pub location: String,
    /// Start timestamp (unix seconds, UTC).
    pub from: i64,
    /// End timestamp (unix seconds, UTC).
    pub time_to: i64,
}

fn default_location() -> String {
    "61.5,4.8".to_string()
}

/// Weather endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub location: GeoLocation,
    pub forecast: Vec<ForecastPointDto>,
}

/// Response for an accepted analysis job submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnalysisResponse {
    pub job_id: String,
    pub status: String,
    pub message: String,
}

/// Job status response for async processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusResponse {
    pub job_id: String,
    pub status: String,
    pub params: serde_json::Value,
    pub logs: Vec<LogEntry>,
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
