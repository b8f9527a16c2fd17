//! Background analysis job runner.
//!
//! Runs the full schedule-window computation off the request path, emitting
//! progress logs to the job tracker so clients can follow along via the job
//! status endpoint or the SSE log stream.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::repository::{RepositoryError, TaskRepository};
use crate::models::{format_utc, GeoLocation};
use crate::providers::ForecastProvider;
use crate::services::job_tracker::{JobTracker, LogLevel};
use crate::services::schedule_window::compute_schedule_window;

/// Parameters for a submitted analysis job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisJobRequest {
    pub task_id: i64,
    #[serde(default = "default_lat")]
    pub lat: f64,
    #[serde(default = "default_lon")]
    pub lon: f64,
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

/// Execute an analysis job to completion, recording the outcome on the
/// tracker. Designed to be spawned as a background task; the returned error
/// string duplicates what was already written to the job record.
pub async fn run_analysis_job(
    job_id: String,
    tracker: JobTracker,
    repo: Arc<dyn TaskRepository>,
    provider: Arc<dyn ForecastProvider>,
    request: AnalysisJobRequest,
) -> Result<(), String> {
    tracker.start_job(&job_id);
    tracker.log(
        &job_id,
        LogLevel::Info,
        format!("Resolving task {}...", request.task_id),
    );

    let task = match repo.get_task(request.task_id).await {
        Ok(task) => {
            tracker.log(
                &job_id,
                LogLevel::Success,
                format!(
                    "Resolved task '{}' ({} at wave limit {} m)",
                    task.name, task.duration, task.wave_height_limit
                ),
            );
            task
        }
        Err(RepositoryError::TaskNotFound(id)) => {
            let msg = format!("Task {} not found", id);
            tracker.fail_job(&job_id, &msg);
            return Err(msg);
        }
        Err(e) => {
            let msg = format!("Failed to load task: {}", e);
            tracker.fail_job(&job_id, &msg);
            return Err(msg);
        }
    };

    let location = GeoLocation::new(request.lat, request.lon);
    tracker.log(
        &job_id,
        LogLevel::Info,
        format!(
            "Fetching {}h forecast for {}...",
            request.lookahead_hours, location
        ),
    );

    let window = match compute_schedule_window(
        provider.as_ref(),
        &task,
        location,
        request.lookahead_hours,
        chrono::Utc::now(),
    )
    .await
    {
        Ok(window) => window,
        Err(e) => {
            let msg = format!("Analysis failed: {}", e);
            tracker.fail_job(&job_id, &msg);
            return Err(msg);
        }
    };

    if let Some(note) = &window.note {
        tracker.log(&job_id, LogLevel::Warning, note.clone());
    } else {
        tracker.log(
            &job_id,
            LogLevel::Info,
            format!("Aggregated {} hourly forecast points", window.hourly.len()),
        );
    }
    tracker.log(
        &job_id,
        LogLevel::Success,
        format!("Found {} feasible start window(s)", window.start_windows.len()),
    );

    let result = serde_json::json!({
        "task_id": task.id,
        "go_no_go": window.go_no_go,
        "start_windows": window.start_windows.iter().map(|w| {
            serde_json::json!({
                "start": format_utc(w.start),
                "end": format_utc(w.end),
                "duration_hours": w.duration_hours,
            })
        }).collect::<Vec<_>>(),
        "note": window.note,
    });
    tracker.complete_job(&job_id, Some(result));

    Ok(())
}
