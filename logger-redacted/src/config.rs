// Logger configuration
use serde::{Deserialize, Serialize};

use crate::redactor::{PiiRedactor, RedactionConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub redaction_enabled: bool,
    pub hash_for_correlation: bool,
    pub log_level: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            redaction_enabled: true,
            hash_for_correlation: true,
            log_level: "info".to_string(),
        }
    }
}

impl LoggerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let redaction_enabled = std::env::var("LOG_REDACTION_ENABLED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.redaction_enabled);

        let hash_for_correlation = std::env::var("LOG_REDACTION_HASH")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.hash_for_correlation);

        let log_level = std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Self {
            redaction_enabled,
            hash_for_correlation,
            log_level,
        }
    }

    /// Build the redactor described by this configuration.
    ///
    /// With redaction disabled every category is switched off and the
    /// redactor passes text through unchanged.
    pub fn redactor(&self) -> PiiRedactor {
        let config = if self.redaction_enabled {
            RedactionConfig {
                hash_for_correlation: self.hash_for_correlation,
                ..Default::default()
            }
        } else {
            RedactionConfig::disabled()
        };
        PiiRedactor::new(config)
    }
}
