use serde::{Deserialize, Serialize};
use crate::error::{VoiceError, VoiceResult};

const DEFAULT_WHISPER_URL: &str = "http://localhost:8000";
const OPENAI_API_URL: &str = "https://api.openai.com";

/// Provider-specific configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VoiceProvider {
    /// Self-hosted Whisper server exposing the OpenAI-compatible transcription API
    Whisper {
        api_url: String,
        api_key: Option<String>,
        model: String, // e.g., "base", "small", "large-v3"
    },
    /// Hosted OpenAI transcription API
    OpenAi {
        api_key: String,
        model: String, // e.g., "whisper-1"
    },
}

impl VoiceProvider {
    /// Base URL of the transcription API
    pub fn api_url(&self) -> &str {
        match self {
            VoiceProvider::Whisper { api_url, .. } => api_url,
            VoiceProvider::OpenAi { .. } => OPENAI_API_URL,
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        match self {
            VoiceProvider::Whisper { api_key, .. } => api_key.as_deref(),
            VoiceProvider::OpenAi { api_key, .. } => Some(api_key),
        }
    }

    pub fn model(&self) -> &str {
        match self {
            VoiceProvider::Whisper { model, .. } | VoiceProvider::OpenAi { model, .. } => model,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VoiceProvider::Whisper { .. } => "whisper",
            VoiceProvider::OpenAi { .. } => "openai",
        }
    }
}

/// Voice recognition service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VoiceConfig {
    pub provider: VoiceProvider,
    pub voice_enabled: bool,
    pub default_sample_rate: u32,
    pub max_audio_duration_ms: u64,
    pub language: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            provider: VoiceProvider::Whisper {
                api_url: DEFAULT_WHISPER_URL.to_string(),
                api_key: None,
                model: "base".to_string(),
            },
            voice_enabled: true,
            default_sample_rate: 16000,
            max_audio_duration_ms: 300_000, // 5 minutes
            language: None,
            request_timeout_secs: 120,
        }
    }
}

impl VoiceConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> VoiceResult<Self> {
        let defaults = Self::default();

        let voice_enabled = std::env::var("VOICE_ENABLED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.voice_enabled);

        let default_sample_rate = std::env::var("VOICE_SAMPLE_RATE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.default_sample_rate);

        let max_audio_duration_ms = std::env::var("VOICE_MAX_AUDIO_DURATION_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_audio_duration_ms);

        let request_timeout_secs = std::env::var("VOICE_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.request_timeout_secs);

        let language = std::env::var("VOICE_LANGUAGE").ok().filter(|s| !s.is_empty());

        let provider = match std::env::var("VOICE_PROVIDER") {
            Ok(provider_type) => Self::provider_from_env(&provider_type)?,
            // Default to self-hosted Whisper
            Err(_) => defaults.provider,
        };

        Ok(Self {
            provider,
            voice_enabled,
            default_sample_rate,
            max_audio_duration_ms,
            language,
            request_timeout_secs,
        })
    }

    fn provider_from_env(provider_type: &str) -> VoiceResult<VoiceProvider> {
        match provider_type.to_lowercase().as_str() {
            "whisper" => Ok(VoiceProvider::Whisper {
                api_url: std::env::var("WHISPER_API_URL")
                    .unwrap_or_else(|_| DEFAULT_WHISPER_URL.to_string()),
                api_key: std::env::var("WHISPER_API_KEY").ok(),
                model: std::env::var("WHISPER_MODEL").unwrap_or_else(|_| "base".to_string()),
            }),
            "openai" => {
                let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
                    VoiceError::Config("OPENAI_API_KEY is required for the openai provider".to_string())
                })?;
                Ok(VoiceProvider::OpenAi {
                    api_key,
                    model: std::env::var("OPENAI_TRANSCRIPTION_MODEL")
                        .unwrap_or_else(|_| "whisper-1".to_string()),
                })
            }
            other => Err(VoiceError::Config(format!("Unknown voice provider: {}", other))),
        }
    }
}
