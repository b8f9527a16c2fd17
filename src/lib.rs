//! # WWS Rust Backend
//!
//! Weather window scheduling engine for marine operations.
//!
//! This crate schedules operational tasks around weather-dependent go/no-go
//! windows: given a task's required duration and a maximum tolerable wave
//! height, it consumes a forecast time series and reports, for every hour,
//! whether conditions are acceptable and which runs of acceptable hours are
//! long enough to start the task. The backend exposes a REST API via Axum.
//!
//! ## Features
//!
//! - **Hourly Aggregation**: Resample raw, possibly irregular forecast samples
//!   into an hourly series (hours without data are skipped, never filled)
//! - **Window Analysis**: Per-hour admissibility signals plus valid start
//!   offsets for a contiguous run of admissible hours
//! - **Task Store**: In-memory task records with status transitions
//! - **Background Jobs**: Async analysis jobs with progress log streaming
//! - **HTTP API**: RESTful endpoints for schedule-window queries
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain types (tasks, constraints, forecast samples)
//! - [`providers`]: Forecast data-source abstraction and the mock provider
//! - [`db`]: Repository pattern for task persistence
//! - [`services`]: Aggregation, window analysis, and job orchestration
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod models;

pub mod providers;

pub mod db;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
