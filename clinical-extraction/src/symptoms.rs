//! Keyword matching and table resolution for the whole transcript.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::table::SymptomTable;

/// Diagnosis text used when no symptom resolved
pub const UNKNOWN_DIAGNOSIS: &str = "Unknown";
/// Treatment text used when no symptom resolved
pub const NO_TREATMENT: &str = "No treatment available";

/// A matched keyword together with its reference suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSymptom {
    pub symptom: String,
    pub diagnosis: String,
    pub treatment: String,
}

/// Symptoms found anywhere in a transcript, resolved against the table.
///
/// Every person extracted from the same transcript receives this same
/// summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomSummary {
    pub resolved: Vec<ResolvedSymptom>,
}

impl SymptomSummary {
    /// Match every table keyword against `text` and resolve the unique hits.
    ///
    /// Keywords are deduplicated in order of first appearance. A keyword
    /// with no table row is skipped.
    pub fn from_text(text: &str, table: &SymptomTable) -> Self {
        let resolved = table
            .find_keywords(text)
            .into_iter()
            .unique()
            .filter_map(|keyword| {
                table.lookup(&keyword).map(|entry| ResolvedSymptom {
                    symptom: keyword,
                    diagnosis: entry.diagnosis.clone(),
                    treatment: entry.treatment.clone(),
                })
            })
            .collect();
        Self { resolved }
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    /// Matched keywords joined with `", "`
    pub fn symptoms(&self) -> String {
        self.resolved.iter().map(|r| r.symptom.as_str()).join(", ")
    }

    /// Diagnoses joined with `"; "`, or [`UNKNOWN_DIAGNOSIS`]
    pub fn diagnosis(&self) -> String {
        if self.is_empty() {
            return UNKNOWN_DIAGNOSIS.to_string();
        }
        self.resolved.iter().map(|r| r.diagnosis.as_str()).join("; ")
    }

    /// Treatments joined with `"; "`, or [`NO_TREATMENT`]
    pub fn treatment(&self) -> String {
        if self.is_empty() {
            return NO_TREATMENT.to_string();
        }
        self.resolved.iter().map(|r| r.treatment.as_str()).join("; ")
    }
}
