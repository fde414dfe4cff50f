use base64::{engine::general_purpose, Engine as _};
use lazy_static::lazy_static;
use regex::Regex;
use sha2::{Digest, Sha256};
use uuid::Uuid;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
    static ref PHONE_REGEX: Regex = Regex::new(r"(?:\+1[-.\s]?)?(?:\(\d{3}\)|\b\d{3})[-.\s]?\d{3}[-.\s]?\d{4}\b").unwrap();
    static ref SSN_REGEX: Regex = Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").unwrap();
    static ref INTRODUCTION_REGEX: Regex = Regex::new(r"(?P<intro>(?:I['\u{2019}]m|I am|My name is|This is)\s+)(?P<name>[A-Z][a-z]+)").unwrap();
    static ref AGE_REGEX: Regex = Regex::new(r"(?i)\b(?P<age>\d{1,3})\b(?P<unit>\s+(?:years old|year old|aged))").unwrap();
}

/// PII redaction configuration
#[derive(Debug, Clone)]
pub struct RedactionConfig {
    pub redact_names: bool,
    pub redact_ages: bool,
    pub redact_emails: bool,
    pub redact_phones: bool,
    pub redact_ssn: bool,
    pub hash_for_correlation: bool,
    pub custom_patterns: Vec<(Regex, String)>,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            redact_names: true,
            redact_ages: true,
            redact_emails: true,
            redact_phones: true,
            redact_ssn: true,
            hash_for_correlation: true,
            custom_patterns: Vec::new(),
        }
    }
}

impl RedactionConfig {
    /// Configuration that leaves every category untouched
    pub fn disabled() -> Self {
        Self {
            redact_names: false,
            redact_ages: false,
            redact_emails: false,
            redact_phones: false,
            redact_ssn: false,
            hash_for_correlation: false,
            custom_patterns: Vec::new(),
        }
    }

    pub fn with_custom_pattern(mut self, pattern: Regex, replacement: impl Into<String>) -> Self {
        self.custom_patterns.push((pattern, replacement.into()));
        self
    }
}

/// PII redactor for log messages
#[derive(Debug, Clone)]
pub struct PiiRedactor {
    config: RedactionConfig,
    /// Mixed into every hash; fresh for each redactor
    salt: String,
}

impl Default for PiiRedactor {
    fn default() -> Self {
        Self::new(RedactionConfig::default())
    }
}

impl PiiRedactor {
    pub fn new(config: RedactionConfig) -> Self {
        Self {
            config,
            salt: Uuid::new_v4().simple().to_string(),
        }
    }

    pub fn redact(&self, text: &str) -> String {
        let mut result = text.to_string();

        // Names and ages run first so digits inside later hash tokens are never
        // mistaken for ages.
        if self.config.redact_names {
            result = self.redact_introductions(&result);
        }

        if self.config.redact_ages {
            result = self.redact_ages(&result);
        }

        if self.config.redact_emails {
            result = self.redact_emails(&result);
        }

        if self.config.redact_ssn {
            result = self.redact_ssn(&result);
        }

        if self.config.redact_phones {
            result = self.redact_phones(&result);
        }

        for (pattern, replacement) in &self.config.custom_patterns {
            result = pattern.replace_all(&result, replacement.as_str()).to_string();
        }

        result
    }

    /// Mask a single known-sensitive value, such as an extracted name.
    pub fn mask_value(&self, label: &str, value: &str) -> String {
        if !self.config.redact_names {
            value.to_string()
        } else if self.config.hash_for_correlation {
            format!("{}[{}]", label, self.hash_value(value))
        } else {
            format!("[{}]", label)
        }
    }

    fn redact_introductions(&self, text: &str) -> String {
        INTRODUCTION_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                let intro = &caps["intro"];
                if self.config.hash_for_correlation {
                    format!("{}NAME[{}]", intro, self.hash_value(&caps["name"]))
                } else {
                    format!("{}[NAME]", intro)
                }
            })
            .to_string()
    }

    fn redact_ages(&self, text: &str) -> String {
        AGE_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                format!("[AGE]{}", &caps["unit"])
            })
            .to_string()
    }

    fn redact_emails(&self, text: &str) -> String {
        EMAIL_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                let email = &caps[0];
                if self.config.hash_for_correlation {
                    format!("EMAIL[{}]", self.hash_value(email))
                } else {
                    match email.split_once('@') {
                        Some((local, domain)) => format!(
                            "{}***@{}***",
                            local.chars().next().unwrap_or('*'),
                            domain.chars().next().unwrap_or('*')
                        ),
                        None => "***@***".to_string(),
                    }
                }
            })
            .to_string()
    }

    fn redact_phones(&self, text: &str) -> String {
        PHONE_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                if self.config.hash_for_correlation {
                    format!("PHONE[{}]", self.hash_value(&caps[0]))
                } else {
                    "(***) ***-****".to_string()
                }
            })
            .to_string()
    }

    fn redact_ssn(&self, text: &str) -> String {
        SSN_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                if self.config.hash_for_correlation {
                    format!("SSN[{}]", self.hash_value(&caps[0]))
                } else {
                    "***-**-****".to_string()
                }
            })
            .to_string()
    }

    fn hash_value(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.salt.as_bytes());
        hasher.update(value.as_bytes());
        let digest = hasher.finalize();
        // First 8 bytes keep the token short while staying stable.
        general_purpose::STANDARD_NO_PAD.encode(digest.get(..8).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_redactor() -> PiiRedactor {
        PiiRedactor::new(RedactionConfig {
            hash_for_correlation: false,
            ..Default::default()
        })
    }

    #[test]
    fn test_email_redaction() {
        let redacted = plain_redactor().redact("Reach me at john.doe@example.com please");
        assert!(redacted.contains("j***@e***"));
        assert!(!redacted.contains("john.doe"));
    }

    #[test]
    fn test_phone_redaction() {
        let redacted = plain_redactor().redact("Call me at (555) 123-4567");
        assert!(redacted.contains("(***) ***-****"));
    }

    #[test]
    fn test_introduction_redaction_handles_both_apostrophes() {
        let redactor = plain_redactor();
        assert_eq!(redactor.redact("I'm Sarah"), "I'm [NAME]");
        assert_eq!(redactor.redact("I\u{2019}m Sarah"), "I\u{2019}m [NAME]");
        assert_eq!(redactor.redact("My name is Amy."), "My name is [NAME].");
    }

    #[test]
    fn test_age_redaction_keeps_unit_phrase() {
        let redacted = plain_redactor().redact("He is 45 Years Old and his son is aged");
        assert_eq!(redacted, "He is [AGE] Years Old and his son is aged");
    }

    #[test]
    fn test_hashed_values_are_stable() {
        let redactor = PiiRedactor::default();
        let first = redactor.redact("This is John");
        let second = redactor.redact("This is John");
        assert_eq!(first, second);
        assert!(first.starts_with("This is NAME["));
        assert_ne!(first, redactor.redact("This is Jane"));
    }

    #[test]
    fn test_ages_are_masked_even_with_correlation_hashes() {
        let redactor = PiiRedactor::default();
        let redacted = redactor.redact("He is 45 years old");
        assert_eq!(redacted, "He is [AGE] years old");
        assert_eq!(redacted, redactor.redact("He is 46 years old"));
    }

    #[test]
    fn test_name_hashes_cannot_be_looked_up_across_redactors() {
        let ours = PiiRedactor::default();
        let theirs = PiiRedactor::default();
        assert_ne!(ours.redact("This is John"), theirs.redact("This is John"));
        assert_ne!(ours.mask_value("NAME", "John"), theirs.mask_value("NAME", "John"));

        let clone = ours.clone();
        assert_eq!(ours.mask_value("NAME", "John"), clone.mask_value("NAME", "John"));
    }

    #[test]
    fn test_mask_value() {
        assert_eq!(plain_redactor().mask_value("NAME", "John"), "[NAME]");
        let hashed = PiiRedactor::default().mask_value("NAME", "John");
        assert!(hashed.starts_with("NAME[") && !hashed.contains("John"));
    }

    #[test]
    fn test_custom_pattern() {
        let config = RedactionConfig {
            hash_for_correlation: false,
            ..Default::default()
        }
        .with_custom_pattern(Regex::new(r"\bMRN\d+").unwrap(), "MRN[REDACTED]");
        let redacted = PiiRedactor::new(config).redact("Chart MRN123456 updated");
        assert_eq!(redacted, "Chart MRN[REDACTED] updated");
    }
}
