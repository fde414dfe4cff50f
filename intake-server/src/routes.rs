use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{health, intake},
    server::IntakeServer,
};

pub mod paths;

/// Create health check routes
pub fn health_routes() -> Router<IntakeServer> {
    Router::new()
        .route(paths::health::HEALTH, get(health::health_check))
        .route(paths::health::VERSION, get(health::version_info))
}

/// Create intake routes
pub fn intake_routes() -> Router<IntakeServer> {
    Router::new()
        .route(paths::intake::AUDIO, post(intake::process_audio))
        .route(paths::intake::EXTRACT, post(intake::extract_text))
        .route(paths::intake::SYMPTOMS, get(intake::list_symptoms))
}

/// Create all routes
pub fn create_routes() -> Router<IntakeServer> {
    Router::new()
        .merge(health_routes())
        .route(paths::LEGACY_PROCESS_AUDIO, post(intake::process_audio))
        .nest(paths::API_V1, intake_routes())
}
