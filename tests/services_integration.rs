use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;

use wws_rust::db::LocalRepository;
use wws_rust::models::{GeoLocation, Sample, Task, TaskStatus};
use wws_rust::providers::{
    ForecastProvider, MockForecastProvider, ProviderError, ProviderResult,
};
use wws_rust::services::job_tracker::{JobStatus, JobTracker};
use wws_rust::services::{
    compute_schedule_window, run_analysis_job, AnalysisJobRequest, ScheduleWindowError,
};

/// Provider returning its samples verbatim, without range filtering, so the
/// builder's own defensive filtering can be exercised.
struct StaticProvider(Vec<Sample>);

#[async_trait]
impl ForecastProvider for StaticProvider {
    async fn fetch_forecast(
        &self,
        _location: GeoLocation,
        _from: DateTime<Utc>,
        _to: DateTime<Utc>,
    ) -> ProviderResult<Vec<Sample>> {
        Ok(self.0.clone())
    }
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

fn task(duration: &str, limit: f64) -> Task {
    Task {
        id: 3,
        name: "cable pull".to_string(),
        duration: duration.to_string(),
        predecessor: None,
        status: TaskStatus::Ready,
        wave_height_limit: limit,
    }
}

fn hourly_samples(waves: &[f64]) -> Vec<Sample> {
    waves
        .iter()
        .enumerate()
        .map(|(i, &wave_height)| Sample {
            timestamp: base_time() + Duration::hours(i as i64) + Duration::minutes(10),
            wind_speed: 12.0,
            wave_height,
            wave_period: 8.0,
        })
        .collect()
}

fn location() -> GeoLocation {
    GeoLocation::new(61.5, 4.8)
}

#[tokio::test]
async fn test_window_computation_end_to_end() {
    let provider = StaticProvider(hourly_samples(&[1.5, 1.8, 1.7, 2.1, 1.9, 1.8, 1.2]));
    let window = compute_schedule_window(&provider, &task("3h", 2.0), location(), 7, base_time())
        .await
        .unwrap();

    assert_eq!(window.hourly.len(), 7);
    assert_eq!(
        window.go_no_go,
        vec![true, true, true, false, true, true, true]
    );
    assert!(window.note.is_none());

    assert_eq!(window.start_windows.len(), 2);
    let first = &window.start_windows[0];
    assert_eq!(first.start, base_time());
    assert_eq!(first.end, base_time() + Duration::hours(3));
    assert_eq!(first.duration_hours, 3);
    let second = &window.start_windows[1];
    assert_eq!(second.start, base_time() + Duration::hours(4));
    assert_eq!(second.end, base_time() + Duration::hours(7));
}

#[tokio::test]
async fn test_window_start_matches_hourly_timestamp() {
    let provider = StaticProvider(hourly_samples(&[0.5, 0.8, 1.2, 0.6, 0.4]));
    let window = compute_schedule_window(&provider, &task("2h", 1.0), location(), 5, base_time())
        .await
        .unwrap();

    assert_eq!(window.go_no_go, vec![true, true, false, true, true]);
    let starts: Vec<_> = window.start_windows.iter().map(|w| w.start).collect();
    assert_eq!(
        starts,
        vec![window.hourly[0].hour_start, window.hourly[3].hour_start]
    );
}

#[tokio::test]
async fn test_empty_forecast_yields_note() {
    let provider = MockForecastProvider::from_samples(vec![]);
    let window = compute_schedule_window(&provider, &task("2h", 2.0), location(), 12, base_time())
        .await
        .unwrap();

    assert!(window.hourly.is_empty());
    assert!(window.go_no_go.is_empty());
    assert!(window.start_windows.is_empty());
    assert_eq!(
        window.note.as_deref(),
        Some("No forecast points returned in the requested window.")
    );
}

#[tokio::test]
async fn test_out_of_range_samples_yield_bucket_note() {
    // Provider misbehaves and returns samples before the requested range;
    // the builder drops them all, leaving zero hourly buckets.
    let stale = vec![Sample {
        timestamp: base_time() - Duration::hours(2),
        wind_speed: 12.0,
        wave_height: 1.0,
        wave_period: 8.0,
    }];
    let provider = StaticProvider(stale);
    let window = compute_schedule_window(&provider, &task("2h", 2.0), location(), 6, base_time())
        .await
        .unwrap();

    assert!(window.hourly.is_empty());
    assert_eq!(window.note.as_deref(), Some("No hourly buckets with data."));
}

#[tokio::test]
async fn test_invalid_task_duration_is_rejected() {
    let provider = MockForecastProvider::generate(base_time(), 12);
    let err = compute_schedule_window(&provider, &task("soon", 2.0), location(), 12, base_time())
        .await
        .unwrap_err();
    assert!(matches!(err, ScheduleWindowError::InvalidTask(_)));

    let err = compute_schedule_window(&provider, &task("0h", 2.0), location(), 12, base_time())
        .await
        .unwrap_err();
    assert!(matches!(err, ScheduleWindowError::InvalidTask(_)));
}

#[tokio::test]
async fn test_lookahead_bounds_are_enforced() {
    let provider = MockForecastProvider::generate(base_time(), 12);
    for bad in [0u32, 169, 1000] {
        let err =
            compute_schedule_window(&provider, &task("2h", 2.0), location(), bad, base_time())
                .await
                .unwrap_err();
        assert!(
            matches!(err, ScheduleWindowError::InvalidLookahead(h) if h == bad),
            "expected lookahead rejection for {bad}"
        );
    }
}

#[tokio::test]
async fn test_upstream_failure_propagates() {
    let provider = MockForecastProvider::generate(base_time(), 12).with_outage(503, "down");
    let err = compute_schedule_window(&provider, &task("2h", 2.0), location(), 12, base_time())
        .await
        .unwrap_err();
    match err {
        ScheduleWindowError::Provider(ProviderError::Upstream { status, .. }) => {
            assert_eq!(status, 503)
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_analysis_job_completes_with_result() {
    let tracker = JobTracker::new();
    let repo: Arc<LocalRepository> = Arc::new(LocalRepository::with_demo_tasks());
    let provider = Arc::new(MockForecastProvider::generate(chrono::Utc::now(), 24));

    let request = AnalysisJobRequest {
        task_id: 3,
        lat: 61.5,
        lon: 4.8,
        lookahead_hours: 12,
    };
    let params = serde_json::to_value(&request).unwrap();
    let job_id = tracker.create_job(params);

    run_analysis_job(job_id.clone(), tracker.clone(), repo, provider, request)
        .await
        .unwrap();

    let job = tracker.get_job(&job_id).unwrap();
    assert_eq!(job.status, JobStatus::Completed);
    assert!(job.completed_at.is_some());
    assert!(job.logs.len() >= 3);

    let result = job.result.unwrap();
    assert_eq!(result["task_id"], 3);
    let go_no_go = result["go_no_go"].as_array().unwrap();
    assert!(!go_no_go.is_empty());
    for window in result["start_windows"].as_array().unwrap() {
        let start = window["start"].as_str().unwrap();
        assert!(start.ends_with('Z') && !start.contains('.'));
        assert_eq!(window["duration_hours"], 2);
    }
}

#[tokio::test]
async fn test_analysis_job_fails_on_unknown_task() {
    let tracker = JobTracker::new();
    let repo: Arc<LocalRepository> = Arc::new(LocalRepository::new());
    let provider = Arc::new(MockForecastProvider::generate(chrono::Utc::now(), 24));

    let request = AnalysisJobRequest {
        task_id: 99,
        lat: 61.5,
        lon: 4.8,
        lookahead_hours: 12,
    };
    let job_id = tracker.create_job(serde_json::to_value(&request).unwrap());

    let err = run_analysis_job(job_id.clone(), tracker.clone(), repo, provider, request)
        .await
        .unwrap_err();
    assert_eq!(err, "Task 99 not found");

    let job = tracker.get_job(&job_id).unwrap();
    assert_eq!(job.status, JobStatus::Failed);
    assert_eq!(job.error.as_deref(), Some("Task 99 not found"));
}
