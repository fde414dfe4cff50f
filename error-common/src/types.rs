use thiserror::Error;

use crate::codes;

/// Error enum shared across the intake engine
#[derive(Error, Debug)]
pub enum IntakeError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Symptom reference table missing, unreadable or malformed
    #[error("Symptom table unavailable: {0}")]
    SymptomTable(String),

    /// Audio upload and temporary storage errors
    #[error("Upload error: {0}")]
    Upload(String),

    /// Network communication errors
    #[error("Network error: {0}")]
    Network(String),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntakeError {
    /// Stable error code for API responses and log correlation
    pub fn code(&self) -> &'static str {
        match self {
            IntakeError::Config(_) => codes::configuration::INVALID_CONFIGURATION,
            IntakeError::SymptomTable(_) => codes::configuration::SYMPTOM_TABLE_UNAVAILABLE,
            IntakeError::Upload(_) => codes::upload::STORAGE_FAILED,
            IntakeError::Network(_) => codes::system::NETWORK_FAILURE,
            IntakeError::Other(_) => codes::system::INTERNAL_FAILURE,
        }
    }
}

/// Result type alias for intake operations
pub type Result<T> = std::result::Result<T, IntakeError>;

/// Log an error with its code and the context it occurred in
pub fn log_error(context: &str, error: &IntakeError) {
    tracing::error!(
        context = context,
        error_code = error.code(),
        error = %error,
        "Intake error occurred"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symptom_table_errors_have_their_own_code() {
        let table = IntakeError::SymptomTable("rows.yaml: no such file".to_string());
        let config = IntakeError::Config("INTAKE_PORT is not a number".to_string());
        assert_ne!(table.code(), config.code());
        assert_eq!(table.code(), "CONFIG_4002");
    }

    #[test]
    fn test_anyhow_errors_are_wrapped() {
        let err: IntakeError = anyhow::anyhow!("boom").context("serving").into();
        assert_eq!(err.to_string(), "serving");
        assert_eq!(err.code(), codes::system::INTERNAL_FAILURE);
    }
}
