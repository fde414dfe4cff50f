//! Symptom Intake Server - audio and text intake API
//!
//! Accepts recorded patient complaints, transcribes them, and returns one
//! structured record per person mentioned, with the symptoms heard and the
//! matching suggestions from the reference table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod storage;

// Re-export commonly used types
pub use config::{Environment, ServerConfig};
pub use error::*;
pub use server::IntakeServer;

use std::time::Duration;

use axum::{extract::DefaultBodyLimit, middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Create the main application router with all routes and middleware
pub fn create_app(server: IntakeServer) -> Router {
    let config = server.config.clone();

    routes::create_routes()
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
                .layer(middleware::create_cors_layer(&config.cors_origins))
                .layer(from_fn(middleware::request_timing_middleware))
                .layer(from_fn(middleware::audit_logging_middleware)),
        )
        .with_state(server)
}
