use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::audio::AudioInfo;
use crate::config::VoiceConfig;
use crate::error::{VoiceError, VoiceResult};
use crate::providers::{create_provider, VoiceProviderTrait};
use crate::transcription::{TranscriptionRequest, TranscriptionResult};

/// Anything that can turn uploaded audio into text.
///
/// The intake pipeline depends on this trait rather than on [`VoiceService`]
/// so transports and tests can substitute their own transcriber.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &[u8], file_name: &str) -> VoiceResult<TranscriptionResult>;

    /// Whether transcription is currently available
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Voice recognition service for intake recordings
pub struct VoiceService {
    config: VoiceConfig,
    provider: Box<dyn VoiceProviderTrait>,
}

impl VoiceService {
    /// Create a new voice recognition service
    pub fn new(config: VoiceConfig) -> VoiceResult<Self> {
        let provider = create_provider(&config)?;
        Ok(Self::with_provider(config, provider))
    }

    /// Create a service around an already constructed provider
    pub fn with_provider(config: VoiceConfig, provider: Box<dyn VoiceProviderTrait>) -> Self {
        if config.voice_enabled {
            info!(provider = provider.name(), "Voice recognition service ready");
        } else {
            info!("Voice recognition service disabled by configuration");
        }
        Self { config, provider }
    }

    /// Transcribe audio data
    pub async fn transcribe_audio(&self, audio_data: &[u8], file_name: &str) -> VoiceResult<TranscriptionResult> {
        if !self.config.voice_enabled {
            return Err(VoiceError::Disabled);
        }
        if audio_data.is_empty() {
            return Err(VoiceError::AudioProcessing("audio payload is empty".to_string()));
        }

        let sample_rate = match AudioInfo::inspect_wav(audio_data) {
            Some(info) => {
                debug!(
                    sample_rate = info.sample_rate,
                    channels = info.channels,
                    duration_ms = info.duration_ms,
                    "Inspected WAV upload"
                );
                if info.duration_ms > self.config.max_audio_duration_ms {
                    warn!(
                        duration_ms = info.duration_ms,
                        max_ms = self.config.max_audio_duration_ms,
                        "Rejecting audio over the duration limit"
                    );
                    return Err(VoiceError::AudioTooLong {
                        duration_ms: info.duration_ms,
                        max_ms: self.config.max_audio_duration_ms,
                    });
                }
                info.sample_rate
            }
            None => self.config.default_sample_rate,
        };

        debug!(
            audio_size = audio_data.len(),
            sample_rate = sample_rate,
            provider = self.provider.name(),
            "Transcribing audio"
        );

        let request = TranscriptionRequest {
            audio: audio_data,
            file_name,
            sample_rate,
            language: self.config.language.as_deref(),
        };

        let result = self.provider.transcribe(request).await?;
        info!(
            transcription_id = %result.id,
            chars = result.text.chars().count(),
            "Transcription complete"
        );
        Ok(result)
    }
}

#[async_trait]
impl Transcriber for VoiceService {
    async fn transcribe(&self, audio: &[u8], file_name: &str) -> VoiceResult<TranscriptionResult> {
        self.transcribe_audio(audio, file_name).await
    }

    fn is_enabled(&self) -> bool {
        self.config.voice_enabled
    }
}
