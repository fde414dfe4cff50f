//! Name and age mention extraction.
//!
//! Positions are character offsets of the *first* occurrence of the mention's
//! literal text, not of the occurrence that produced the match. Repeated
//! tokens therefore all resolve to the earliest spot in the transcript.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ner::PersonSpan;

lazy_static! {
    /// Self-introductions; case-sensitive so the name must be capitalized.
    static ref INTRODUCTION_REGEX: Regex =
        Regex::new(r"(?:I['\u{2019}]m|I am|My name is|This is)\s+([A-Z][a-z]+)").unwrap();
    static ref AGE_REGEX: Regex =
        Regex::new(r"(?i)\b(\d{1,3})\b\s+(years old|year old|aged)").unwrap();
}

/// A candidate person name found in the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameMention {
    pub text: String,
    /// Character offset of the first occurrence of `text`; `None` when the
    /// literal does not occur (recognizers may normalize what they return)
    pub position: Option<usize>,
}

/// A stated age found in the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeMention {
    /// The digits as written
    pub value: String,
    /// The phrase that qualified the number, as written (`years old`, `aged`, ...)
    pub unit: String,
    /// Character offset of the first occurrence of `value` anywhere in the text
    pub position: usize,
}

/// Character offset of the first occurrence of `needle` in `text`
pub fn first_occurrence(text: &str, needle: &str) -> Option<usize> {
    text.find(needle)
        .map(|byte_index| text.get(..byte_index).map_or(0, |prefix| prefix.chars().count()))
}

/// Names captured by the self-introduction pattern, in text order
pub fn introduced_names(text: &str) -> Vec<String> {
    INTRODUCTION_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Recognizer spans followed by pattern matches, duplicates kept
pub fn extract_names(text: &str, recognized: &[PersonSpan]) -> Vec<NameMention> {
    recognized
        .iter()
        .map(|span| span.text.clone())
        .chain(introduced_names(text))
        .map(|name| NameMention {
            position: first_occurrence(text, &name),
            text: name,
        })
        .collect()
}

/// Every stated age, in text order
pub fn extract_ages(text: &str) -> Vec<AgeMention> {
    AGE_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let value = caps.get(1)?.as_str();
            let unit = caps.get(2)?.as_str();
            // The digits were matched inside `text`, so a first occurrence exists.
            let position = first_occurrence(text, value)?;
            Some(AgeMention {
                value: value.to_string(),
                unit: unit.to_string(),
                position,
            })
        })
        .collect()
}
