//! WWS HTTP Server Binary
//!
//! Entry point for the weather window scheduler REST API. Seeds the
//! in-memory task store with the demo task chain, generates a mock forecast
//! fixture starting at process start, and serves the axum router.
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use wws_rust::db::LocalRepository;
use wws_rust::http::{create_router, AppState};
use wws_rust::providers::MockForecastProvider;

/// Hours of mock forecast generated at startup.
const MOCK_FORECAST_HOURS: u32 = 24;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting WWS HTTP Server");

    let repository = Arc::new(LocalRepository::with_demo_tasks());
    info!(tasks = repository.task_count(), "Task store seeded");

    let provider = Arc::new(MockForecastProvider::generate(
        chrono::Utc::now(),
        MOCK_FORECAST_HOURS,
    ));
    info!(
        samples = provider.sample_count(),
        "Mock forecast fixture generated"
    );

    let state = AppState::new(repository, provider);
    let app = create_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
