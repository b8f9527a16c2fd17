//! Service layer for aggregation, analysis, and job orchestration.
//!
//! The pure computation lives in [`hourly_series`] and [`window_analysis`];
//! [`schedule_window`] composes them with the forecast provider, and
//! [`analysis_job`] runs the same computation as a tracked background job.

pub mod analysis_job;

pub mod hourly_series;

pub mod job_tracker;

pub mod schedule_window;

pub mod window_analysis;

pub use analysis_job::{run_analysis_job, AnalysisJobRequest};
pub use hourly_series::build_hourly_series;
pub use schedule_window::{
    compute_schedule_window, ScheduleWindow, ScheduleWindowError, StartWindow,
    MAX_LOOKAHEAD_HOURS,
};
pub use window_analysis::{analyze, AnalysisResult};
