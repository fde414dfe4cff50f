use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ExtractionError, ExtractionResult};
use crate::ner::{HttpPersonRecognizer, PatternOnlyRecognizer, PersonRecognizer, PERSON_LABEL};
use crate::table::SymptomTable;

/// Which person-entity recognizer feeds the extractor
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RecognizerConfig {
    /// Only the built-in introduction pattern
    Pattern,
    /// External NER service over HTTP
    Http { api_url: String, person_label: String },
}

/// Extraction engine configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    pub recognizer: RecognizerConfig,
    pub recognizer_timeout_secs: u64,
    /// Reference table file; the built-in table is used when unset
    pub symptom_table_path: Option<PathBuf>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            recognizer: RecognizerConfig::Pattern,
            recognizer_timeout_secs: 10,
            symptom_table_path: None,
        }
    }
}

impl ExtractionConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> ExtractionResult<Self> {
        let defaults = Self::default();

        let recognizer = match std::env::var("NER_PROVIDER") {
            Ok(kind) => match kind.to_lowercase().as_str() {
                "pattern" | "none" => RecognizerConfig::Pattern,
                "http" => RecognizerConfig::Http {
                    api_url: std::env::var("NER_API_URL").map_err(|_| {
                        ExtractionError::Config("NER_API_URL is required for the http recognizer".to_string())
                    })?,
                    person_label: std::env::var("NER_PERSON_LABEL")
                        .unwrap_or_else(|_| PERSON_LABEL.to_string()),
                },
                other => {
                    return Err(ExtractionError::Config(format!("Unknown NER provider: {}", other)))
                }
            },
            Err(_) => defaults.recognizer,
        };

        let recognizer_timeout_secs = std::env::var("NER_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.recognizer_timeout_secs);

        let symptom_table_path = std::env::var("SYMPTOM_TABLE_PATH")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            recognizer,
            recognizer_timeout_secs,
            symptom_table_path,
        })
    }

    /// Load the configured reference table, falling back to the built-in one
    pub fn load_table(&self) -> ExtractionResult<SymptomTable> {
        match &self.symptom_table_path {
            Some(path) => SymptomTable::load(path),
            None => {
                let table = SymptomTable::builtin()?;
                info!(symptoms = table.len(), "Using built-in symptom table");
                Ok(table)
            }
        }
    }

    pub fn build_recognizer(&self) -> ExtractionResult<Arc<dyn PersonRecognizer>> {
        match &self.recognizer {
            RecognizerConfig::Pattern => Ok(Arc::new(PatternOnlyRecognizer)),
            RecognizerConfig::Http {
                api_url,
                person_label,
            } => Ok(Arc::new(HttpPersonRecognizer::new(
                api_url.clone(),
                person_label.clone(),
                Duration::from_secs(self.recognizer_timeout_secs),
            )?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_builtin_table_and_patterns() {
        let config = ExtractionConfig::default();
        assert_eq!(config.load_table().unwrap().len(), 54);
        assert_eq!(config.build_recognizer().unwrap().name(), "pattern-only");
    }

    #[test]
    fn test_http_recognizer_is_built_from_config() {
        let config = ExtractionConfig {
            recognizer: RecognizerConfig::Http {
                api_url: "http://ner:5005/ents".to_string(),
                person_label: "PER".to_string(),
            },
            ..Default::default()
        };
        assert_eq!(config.build_recognizer().unwrap().name(), "http");
    }

    #[test]
    fn test_missing_table_file_is_an_io_error() {
        let config = ExtractionConfig {
            symptom_table_path: Some(PathBuf::from("/nonexistent/symptoms.json")),
            ..Default::default()
        };
        assert!(matches!(config.load_table(), Err(ExtractionError::Io(_))));
    }
}
