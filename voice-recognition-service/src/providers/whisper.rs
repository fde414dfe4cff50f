//! Whisper provider - OpenAI-compatible `/v1/audio/transcriptions` endpoint
//!
//! Works against self-hosted Whisper servers (faster-whisper-server,
//! whisper.cpp server) as well as the hosted OpenAI API.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::debug;

use crate::config::{VoiceConfig, VoiceProvider};
use crate::error::{VoiceError, VoiceResult};
use crate::providers::VoiceProviderTrait;
use crate::transcription::{TranscriptionMetadata, TranscriptionRequest, TranscriptionResult};

const TRANSCRIPTIONS_PATH: &str = "/v1/audio/transcriptions";

/// Body returned by the transcription endpoint with `response_format=json`
#[derive(Debug, Deserialize)]
struct WhisperResponse {
    text: String,
    #[serde(default)]
    language: Option<String>,
    /// Seconds, present in `verbose_json` responses
    #[serde(default)]
    duration: Option<f64>,
}

pub struct WhisperProvider {
    client: reqwest::Client,
    provider: VoiceProvider,
    endpoint: String,
}

impl WhisperProvider {
    pub fn new(config: &VoiceConfig) -> VoiceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            provider: config.provider.clone(),
            endpoint: transcription_endpoint(config.provider.api_url()),
        })
    }

    fn build_form(&self, request: &TranscriptionRequest<'_>) -> VoiceResult<Form> {
        let part = Part::bytes(request.audio.to_vec())
            .file_name(request.file_name.to_string())
            .mime_str(mime_for(request.file_name))?;

        let mut form = Form::new()
            .part("file", part)
            .text("model", self.provider.model().to_string())
            .text("response_format", "json");

        if let Some(language) = request.language {
            form = form.text("language", language.to_string());
        }

        Ok(form)
    }
}

#[async_trait]
impl VoiceProviderTrait for WhisperProvider {
    async fn transcribe(&self, request: TranscriptionRequest<'_>) -> VoiceResult<TranscriptionResult> {
        debug!(
            endpoint = %self.endpoint,
            model = self.provider.model(),
            audio_bytes = request.audio.len(),
            "Sending audio to Whisper"
        );

        let mut builder = self.client.post(&self.endpoint).multipart(self.build_form(&request)?);
        if let Some(key) = self.provider.api_key() {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(VoiceError::Authentication(format!(
                "{} rejected credentials ({})",
                self.provider.name(),
                status
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VoiceError::Provider(format!(
                "{} returned {}: {}",
                self.provider.name(),
                status,
                body.trim()
            )));
        }

        let body = response.text().await?;
        let parsed = parse_response(&body)?;

        let metadata = TranscriptionMetadata {
            provider: self.provider.name().to_string(),
            model: Some(self.provider.model().to_string()),
            sample_rate: request.sample_rate,
            audio_bytes: request.audio.len(),
        };

        let mut result = TranscriptionResult::new(parsed.text.trim(), metadata);
        result.language = parsed.language;
        result.duration_ms = parsed.duration.map(seconds_to_ms);
        Ok(result)
    }

    fn name(&self) -> &str {
        self.provider.name()
    }
}

fn transcription_endpoint(api_url: &str) -> String {
    format!("{}{}", api_url.trim_end_matches('/'), TRANSCRIPTIONS_PATH)
}

fn parse_response(body: &str) -> VoiceResult<WhisperResponse> {
    let parsed: WhisperResponse = serde_json::from_str(body)?;
    Ok(parsed)
}

fn mime_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        "m4a" => "audio/mp4",
        "ogg" | "oga" => "audio/ogg",
        "flac" => "audio/flac",
        "webm" => "audio/webm",
        _ => "application/octet-stream",
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seconds_to_ms(seconds: f64) -> u64 {
    (seconds.max(0.0) * 1000.0).round() as u64
}
