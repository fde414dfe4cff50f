use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use clinical_extraction::ExtractionError;
use error_common::codes;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};
use uuid::Uuid;
use voice_recognition_service::VoiceError;

/// Standard API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Unique error ID for tracking
    pub error_id: String,
    /// Error type
    pub error_type: String,
    /// Stable error code from `error_common::codes`
    pub error_code: String,
    /// Human-readable error message
    pub error: String,
    /// Timestamp when error occurred
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Main API error enum
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("{message}")]
    Validation { message: String, code: &'static str },

    #[error("Upload exceeds the {limit_bytes} byte limit")]
    PayloadTooLarge { limit_bytes: usize },

    #[error("Transcription failed: {message}")]
    Transcription { message: String },

    #[error("Person recognition failed: {message}")]
    Recognition { message: String },

    #[error("Service unavailable: {message}")]
    ServiceUnavailable { message: String },

    #[error("Upload storage failed: {message}")]
    Storage { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl ApiError {
    /// Create a simple validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            code: codes::validation::INVALID_INPUT,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFile | ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Transcription { .. } | ApiError::Recognition { .. } => StatusCode::BAD_GATEWAY,
            ApiError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Storage { .. } | ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::MissingFile => "missing_file",
            ApiError::Validation { .. } => "validation_error",
            ApiError::PayloadTooLarge { .. } => "payload_too_large",
            ApiError::Transcription { .. } => "transcription_error",
            ApiError::Recognition { .. } => "recognition_error",
            ApiError::ServiceUnavailable { .. } => "service_unavailable",
            ApiError::Storage { .. } => "storage_error",
            ApiError::Internal { .. } => "internal_error",
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::MissingFile => codes::validation::MISSING_REQUIRED_FIELD,
            ApiError::Validation { code, .. } => *code,
            ApiError::PayloadTooLarge { .. } => codes::validation::INVALID_INPUT,
            ApiError::Transcription { .. } => codes::collaborator::TRANSCRIPTION_FAILED,
            ApiError::Recognition { .. } => codes::collaborator::RECOGNITION_FAILED,
            ApiError::ServiceUnavailable { .. } => codes::collaborator::TRANSCRIPTION_DISABLED,
            ApiError::Storage { .. } => codes::upload::STORAGE_FAILED,
            ApiError::Internal { .. } => codes::system::INTERNAL_FAILURE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4().to_string();
        let status_code = self.status_code();

        // 4xx responses log at warn
        if status_code.is_server_error() {
            error!(
                error_id = %error_id,
                error_type = %self.error_type(),
                error_code = %self.error_code(),
                status_code = %status_code.as_u16(),
                error = %self,
                "API error occurred"
            );
        } else {
            warn!(
                error_id = %error_id,
                error_type = %self.error_type(),
                error_code = %self.error_code(),
                status_code = %status_code.as_u16(),
                error = %self,
                "Request rejected"
            );
        }

        let error_response = ApiErrorResponse {
            error_id,
            error_type: self.error_type().to_string(),
            error_code: self.error_code().to_string(),
            error: self.to_string(),
            timestamp: chrono::Utc::now(),
        };

        (status_code, Json(error_response)).into_response()
    }
}

/// Convert transcription failures to API errors
impl From<VoiceError> for ApiError {
    fn from(error: VoiceError) -> Self {
        match error {
            VoiceError::Disabled => ApiError::ServiceUnavailable {
                message: error.to_string(),
            },
            VoiceError::AudioTooLong { .. } => ApiError::Validation {
                message: error.to_string(),
                code: codes::validation::AUDIO_TOO_LONG,
            },
            VoiceError::AudioProcessing(_) => ApiError::validation(error.to_string()),
            other => ApiError::Transcription {
                message: other.to_string(),
            },
        }
    }
}

/// Convert extraction failures to API errors
impl From<ExtractionError> for ApiError {
    fn from(error: ExtractionError) -> Self {
        if error.is_collaborator_failure() {
            ApiError::Recognition {
                message: error.to_string(),
            }
        } else {
            ApiError::internal(error.to_string())
        }
    }
}

/// Convert upload IO errors to API errors
impl From<std::io::Error> for ApiError {
    fn from(error: std::io::Error) -> Self {
        ApiError::Storage {
            message: error.to_string(),
        }
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
