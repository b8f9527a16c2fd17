//! HTTP server module for the weather window scheduler.
//!
//! Axum-based REST API over the service layer: request parsing and
//! validation live here, all analysis lives in [`crate::services`], and the
//! task store and forecast source arrive through [`state::AppState`].

pub mod dto;

pub mod error;

pub mod handlers;

pub mod router;

pub mod state;

pub use router::create_router;
pub use state::AppState;
