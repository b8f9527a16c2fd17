use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use wws_rust::db::LocalRepository;
use wws_rust::http::{create_router, AppState};
use wws_rust::providers::MockForecastProvider;

/// Router over the demo task set and a generated forecast fixture anchored
/// at the current instant, mirroring the server binary's startup.
pub fn demo_router() -> Router {
    let repo = Arc::new(LocalRepository::with_demo_tasks());
    let provider = Arc::new(MockForecastProvider::generate(chrono::Utc::now(), 24));
    create_router(AppState::new(repo, provider))
}

/// Router whose provider has no samples at all.
pub fn empty_forecast_router() -> Router {
    let repo = Arc::new(LocalRepository::with_demo_tasks());
    let provider = Arc::new(MockForecastProvider::from_samples(vec![]));
    create_router(AppState::new(repo, provider))
}

/// Send a request and decode the JSON body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should not fail");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be JSON")
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

pub async fn put(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    send(app, request).await
}

/// Assert a timestamp string is ISO-8601 UTC with a `Z` suffix and no
/// fractional seconds, e.g. `2025-06-01T10:00:00Z`.
pub fn assert_utc_format(ts: &str) {
    assert_eq!(ts.len(), 20, "unexpected timestamp length: {ts}");
    assert!(ts.ends_with('Z'), "missing Z suffix: {ts}");
    assert!(!ts.contains('.'), "fractional seconds present: {ts}");
    assert!(!ts.contains("+00:00"), "offset form not allowed: {ts}");
    assert_eq!(&ts[10..11], "T");
}
