use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// Audio handed to a provider for transcription
#[derive(Debug, Clone, Copy)]
pub struct TranscriptionRequest<'a> {
    pub audio: &'a [u8],
    pub file_name: &'a str,
    pub sample_rate: u32,
    pub language: Option<&'a str>,
}

/// Transcription result from voice recognition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub id: Uuid,
    pub text: String,
    pub language: Option<String>,
    pub duration_ms: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub metadata: TranscriptionMetadata,
}

/// Metadata associated with transcription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionMetadata {
    pub provider: String,
    pub model: Option<String>,
    pub sample_rate: u32,
    pub audio_bytes: usize,
}

impl TranscriptionResult {
    pub fn new(text: impl Into<String>, metadata: TranscriptionMetadata) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            language: None,
            duration_ms: None,
            created_at: Utc::now(),
            metadata,
        }
    }
}
