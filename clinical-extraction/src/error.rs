use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The person-entity recognizer failed or answered with garbage
    #[error("Recognizer error: {0}")]
    Recognizer(String),

    #[error("Recognizer request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The reference table is unusable
    #[error("Symptom table error: {0}")]
    SymptomTable(String),

    #[error("Failed to read symptom table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON symptom table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML symptom table: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to compile symptom pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ExtractionError {
    /// Whether the error came from the NER collaborator rather than local data
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(self, ExtractionError::Recognizer(_) | ExtractionError::Network(_))
    }
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;
