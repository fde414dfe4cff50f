use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Audio processing error: {0}")]
    AudioProcessing(String),

    #[error("Audio is {duration_ms} ms long, limit is {max_ms} ms")]
    AudioTooLong { duration_ms: u64, max_ms: u64 },

    #[error("Transcription error: {0}")]
    Transcription(String),

    #[error("Voice recognition is disabled")]
    Disabled,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl VoiceError {
    /// Whether the failure came from the caller's audio rather than the provider
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            VoiceError::AudioProcessing(_) | VoiceError::AudioTooLong { .. }
        )
    }
}

pub type VoiceResult<T> = Result<T, VoiceError>;
