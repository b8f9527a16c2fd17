//! Router configuration for the HTTP API.
//!
//! Sets up all routes and middleware (CORS, compression, tracing) and
//! returns the axum router ready for serving.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Task store
        .route("/tasks", get(handlers::list_tasks))
        .route("/tasks/{task_id}/started", put(handlers::mark_task_started))
        .route(
            "/tasks/{task_id}/complete",
            put(handlers::mark_task_completed),
        )
        // Window analysis
        .route("/schedule/window", get(handlers::get_schedule_window))
        // Forecast passthrough
        .route("/weather", get(handlers::get_weather))
        // Background jobs
        .route("/jobs/analysis", post(handlers::submit_analysis_job))
        .route("/jobs/{job_id}", get(handlers::get_job_status))
        .route("/jobs/{job_id}/logs", get(handlers::stream_job_logs));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
