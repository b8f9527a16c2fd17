//! HTTP handlers for the REST API.
//!
//! Each handler validates its inputs, then delegates to the service layer.
//! All analysis runs over data owned by the request, so handlers need no
//! coordination beyond the shared state they clone from.

use axum::{
    extract::{Path, Query, State},
    response::sse::{Event, Sse},
    Json,
};
use chrono::{DateTime, Utc};
use futures::stream::Stream;
use std::convert::Infallible;
use std::time::Duration;

use super::dto::{
    HealthResponse, JobStatusResponse, ScheduleWindowQuery, ScheduleWindowResponse,
    SubmitAnalysisResponse, TaskListResponse, TaskUpdateResponse, WeatherQuery, WeatherResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{GeoLocation, TaskStatus};
use crate::services::{self, AnalysisJobRequest};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Tasks
// =============================================================================

/// GET /v1/tasks
///
/// List all tasks in the store.
pub async fn list_tasks(State(state): State<AppState>) -> HandlerResult<TaskListResponse> {
    let tasks = state.repository.list_tasks().await?;
    let total = tasks.len();
    Ok(Json(TaskListResponse { tasks, total }))
}

/// PUT /v1/tasks/{task_id}/started
pub async fn mark_task_started(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> HandlerResult<TaskUpdateResponse> {
    let task = state
        .repository
        .set_task_status(task_id, TaskStatus::Started)
        .await?;
    Ok(Json(TaskUpdateResponse {
        message: format!("Task {} marked as started", task_id),
        task,
    }))
}

/// PUT /v1/tasks/{task_id}/complete
pub async fn mark_task_completed(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> HandlerResult<TaskUpdateResponse> {
    let task = state
        .repository
        .set_task_status(task_id, TaskStatus::Completed)
        .await?;
    Ok(Json(TaskUpdateResponse {
        message: format!("Task {} marked as completed", task_id),
        task,
    }))
}

// =============================================================================
// Schedule Window
// =============================================================================

/// GET /v1/schedule/window
///
/// Calculate feasible start windows for a task based on forecasted wave
/// conditions over the requested lookahead.
pub async fn get_schedule_window(
    State(state): State<AppState>,
    Query(query): Query<ScheduleWindowQuery>,
) -> HandlerResult<ScheduleWindowResponse> {
    let task = state.repository.get_task(query.task_id).await?;
    let location = GeoLocation::new(query.lat, query.lon);

    let window = services::compute_schedule_window(
        state.provider.as_ref(),
        &task,
        location,
        query.lookahead_hours,
        Utc::now(),
    )
    .await?;

    Ok(Json(ScheduleWindowResponse::from_window(
        &task, location, &window,
    )))
}

// =============================================================================
// Weather Service
// =============================================================================

// Sanity cap on unix-second inputs, matching the upstream contract.
const MAX_UNIX_SECONDS: i64 = 10_000_000_000;

fn instant_from_unix(field: &str, secs: i64) -> Result<DateTime<Utc>, AppError> {
    if !(0..=MAX_UNIX_SECONDS).contains(&secs) {
        return Err(AppError::BadRequest(format!(
            "{} must be unix seconds in [0, {}], got {}",
            field, MAX_UNIX_SECONDS, secs
        )));
    }
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| AppError::BadRequest(format!("{} is not a valid timestamp", field)))
}

/// GET /v1/weather
///
/// Return forecast samples for the requested location and time range.
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> HandlerResult<WeatherResponse> {
    let location = GeoLocation::parse(&query.location)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let from = instant_from_unix("from", query.from)?;
    let to = instant_from_unix("time_to", query.time_to)?;

    let samples = state.provider.fetch_forecast(location, from, to).await?;

    Ok(Json(WeatherResponse {
        location,
        forecast: samples.iter().map(Into::into).collect(),
    }))
}

// =============================================================================
// Async Job Management
// =============================================================================

/// POST /v1/jobs/analysis
///
/// Submit a window analysis to run in the background. Returns 202 Accepted
/// with a job ID for tracking progress.
pub async fn submit_analysis_job(
    State(state): State<AppState>,
    Json(request): Json<AnalysisJobRequest>,
) -> Result<(axum::http::StatusCode, Json<SubmitAnalysisResponse>), AppError> {
    let params = serde_json::to_value(&request)
        .map_err(|e| AppError::BadRequest(format!("Invalid job params: {}", e)))?;
    let job_id = state.job_tracker.create_job(params);

    let tracker = state.job_tracker.clone();
    let repo = state.repository.clone();
    let provider = state.provider.clone();
    let spawned_job_id = job_id.clone();
    tokio::spawn(async move {
        let _ =
            services::run_analysis_job(spawned_job_id, tracker, repo, provider, request).await;
    });

    Ok((
        axum::http::StatusCode::ACCEPTED,
        Json(SubmitAnalysisResponse {
            job_id: job_id.clone(),
            status: "pending".to_string(),
            message: format!("Analysis started. Track progress at /v1/jobs/{}/logs", job_id),
        }),
    ))
}

/// GET /v1/jobs/{job_id}
///
/// Get the current status and logs of a background job.
pub async fn get_job_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> HandlerResult<JobStatusResponse> {
    let job = state
        .job_tracker
        .get_job(&job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", job_id)))?;

    let status = serde_json::to_value(job.status)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_else(|| "unknown".to_string());

    Ok(Json(JobStatusResponse {
        job_id: job.job_id,
        status,
        params: job.params,
        logs: job.logs,
        result: job.result,
        error: job.error,
    }))
}

/// GET /v1/jobs/{job_id}/logs
///
/// Stream job logs via Server-Sent Events (SSE).
pub async fn stream_job_logs(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    if state.job_tracker.get_job(&job_id).is_none() {
        return Err(AppError::NotFound(format!("Job {} not found", job_id)));
    }

    let tracker = state.job_tracker.clone();
    let stream = async_stream::stream! {
        let mut last_log_count = 0;
        loop {
            let logs = tracker.get_logs(&job_id);
            for log in logs.iter().skip(last_log_count) {
                let event_data = serde_json::to_string(log).unwrap_or_default();
                yield Ok(Event::default().data(event_data));
            }
            last_log_count = logs.len();

            match tracker.get_job(&job_id) {
                Some(job) if !job.status.is_active() => {
                    let final_event = serde_json::json!({
                        "status": job.status,
                        "result": job.result,
                        "error": job.error,
                    });
                    yield Ok(Event::default()
                        .event("complete")
                        .data(serde_json::to_string(&final_event).unwrap_or_default()));
                    break;
                }
                Some(_) => {}
                None => break,
            }

            tokio::time::sleep(Duration::from_millis(200)).await;
        }
    };

    Ok(Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(1))
            .text("keep-alive"),
    ))
}
