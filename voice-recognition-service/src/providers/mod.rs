pub mod whisper;

use async_trait::async_trait;
use crate::error::VoiceResult;
use crate::config::VoiceConfig;
use crate::transcription::{TranscriptionRequest, TranscriptionResult};

/// Trait for voice recognition providers
#[async_trait]
pub trait VoiceProviderTrait: Send + Sync {
    /// Transcribe audio data to text
    async fn transcribe(&self, request: TranscriptionRequest<'_>) -> VoiceResult<TranscriptionResult>;

    /// Short provider name used in logs and metadata
    fn name(&self) -> &str;
}

/// Create a provider instance based on configuration
pub fn create_provider(config: &VoiceConfig) -> VoiceResult<Box<dyn VoiceProviderTrait>> {
    // Both variants speak the OpenAI-compatible transcription API.
    Ok(Box::new(whisper::WhisperProvider::new(config)?))
}
