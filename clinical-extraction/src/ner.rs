//! Person-entity recognition collaborators.
//!
//! The engine treats NER as an approximate, fallible black box: it only
//! needs the text of each person span, in the order the recognizer reports
//! them.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ExtractionError, ExtractionResult};

/// Default entity label for people (spaCy convention)
pub const PERSON_LABEL: &str = "PERSON";

/// A person mention reported by a recognizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSpan {
    pub text: String,
    /// Offset reported by the recognizer; informational only
    #[serde(default)]
    pub start: usize,
    #[serde(default = "default_label")]
    pub label: String,
}

fn default_label() -> String {
    PERSON_LABEL.to_string()
}

/// Source of person-name spans for a transcript
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRecognizer: Send + Sync {
    /// Person spans found in `text`, in the recognizer's order
    async fn recognize(&self, text: &str) -> ExtractionResult<Vec<PersonSpan>>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Recognizer that reports nothing, leaving the built-in introduction
/// pattern as the only name source.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternOnlyRecognizer;

#[async_trait]
impl PersonRecognizer for PatternOnlyRecognizer {
    async fn recognize(&self, _text: &str) -> ExtractionResult<Vec<PersonSpan>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &'static str {
        "pattern-only"
    }
}

#[derive(Debug, Serialize)]
struct RecognizeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    entities: Vec<RecognizedEntity>,
}

/// Entity as sent by the service; the label may be omitted
#[derive(Debug, Deserialize)]
struct RecognizedEntity {
    text: String,
    #[serde(default)]
    start: usize,
    #[serde(default)]
    label: Option<String>,
}

/// Client for an HTTP NER service (for example a spaCy model behind a small
/// web wrapper).
///
/// Sends `POST {"text": ...}` and expects
/// `{"entities": [{"text": ..., "label": ..., "start": ...}, ...]}`.
pub struct HttpPersonRecognizer {
    client: reqwest::Client,
    api_url: String,
    person_label: String,
}

impl HttpPersonRecognizer {
    pub fn new(
        api_url: impl Into<String>,
        person_label: impl Into<String>,
        timeout: Duration,
    ) -> ExtractionResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url: api_url.into(),
            person_label: person_label.into(),
        })
    }

    fn people(&self, body: &str) -> ExtractionResult<Vec<PersonSpan>> {
        let parsed: RecognizeResponse = serde_json::from_str(body).map_err(|e| {
            ExtractionError::Recognizer(format!("unexpected response from {}: {}", self.api_url, e))
        })?;
        Ok(parsed
            .entities
            .into_iter()
            .map(|entity| PersonSpan {
                text: entity.text,
                start: entity.start,
                label: entity.label.unwrap_or_else(|| self.person_label.clone()),
            })
            .filter(|span| span.label == self.person_label)
            .collect())
    }
}

#[async_trait]
impl PersonRecognizer for HttpPersonRecognizer {
    async fn recognize(&self, text: &str) -> ExtractionResult<Vec<PersonSpan>> {
        let response = self
            .client
            .post(&self.api_url)
            .json(&RecognizeRequest { text })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ExtractionError::Recognizer(format!(
                "{} returned {}: {}",
                self.api_url,
                status,
                body.trim()
            )));
        }

        let people = self.people(&body)?;
        debug!(recognizer = self.name(), people = people.len(), "Recognized person spans");
        Ok(people)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
