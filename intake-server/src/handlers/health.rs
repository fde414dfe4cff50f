use axum::{extract::State, response::Json};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::server::IntakeServer;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime: u64,
    pub checks: BTreeMap<String, String>,
}

/// Version information response
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub name: String,
    pub version: String,
    pub features: Vec<String>,
}

/// Health check handler
pub async fn health_check(State(server): State<IntakeServer>) -> Json<HealthResponse> {
    let mut checks = BTreeMap::new();

    checks.insert(
        "symptom_table".to_string(),
        format!("{} entries", server.extractor.table().len()),
    );
    checks.insert(
        "person_recognizer".to_string(),
        server.extractor.recognizer_name().to_string(),
    );
    checks.insert(
        "transcription".to_string(),
        if server.transcriber.is_enabled() { "enabled" } else { "disabled" }.to_string(),
    );

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: server.uptime_seconds(),
        checks,
    })
}

/// Version information handler
pub async fn version_info() -> Json<VersionResponse> {
    let features = vec![
        "audio-intake".to_string(),
        "text-intake".to_string(),
        "symptom-lookup".to_string(),
        "pii-redacted-logging".to_string(),
    ];

    Json(VersionResponse {
        name: "Symptom Intake Engine".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        features,
    })
}
