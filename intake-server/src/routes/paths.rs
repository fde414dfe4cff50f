//! Route path constants shared by the router and the tests.

/// API base path
pub const API_V1: &str = "/api/v1";

/// Health check endpoints
pub mod health {
    pub const HEALTH: &str = "/health";
    pub const VERSION: &str = "/version";
}

/// Intake endpoints, relative to [`super::API_V1`]
pub mod intake {
    pub const AUDIO: &str = "/intake/audio";
    pub const EXTRACT: &str = "/intake/extract";
    pub const SYMPTOMS: &str = "/intake/symptoms";
}

/// Unversioned upload path kept for existing clients
pub const LEGACY_PROCESS_AUDIO: &str = "/process_audio";
