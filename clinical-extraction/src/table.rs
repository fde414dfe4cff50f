use std::path::Path;

use itertools::Itertools;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::builtin::DEFAULT_SYMPTOMS;
use crate::error::{ExtractionError, ExtractionResult};

/// Reference row mapping a symptom keyword to a suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomEntry {
    /// Lowercased keyword matched against transcripts
    #[serde(alias = "Symptom")]
    pub symptom: String,
    #[serde(alias = "Diagnosis")]
    pub diagnosis: String,
    #[serde(alias = "Treatment")]
    pub treatment: String,
}

impl SymptomEntry {
    pub fn new(
        symptom: impl Into<String>,
        diagnosis: impl Into<String>,
        treatment: impl Into<String>,
    ) -> Self {
        Self {
            symptom: symptom.into(),
            diagnosis: diagnosis.into(),
            treatment: treatment.into(),
        }
    }
}

/// On-disk layouts accepted by [`SymptomTable::load`]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TableFile {
    /// `[{"symptom": ..., "diagnosis": ..., "treatment": ...}, ...]`
    Rows(Vec<SymptomEntry>),
    /// `{"Symptom": [...], "Diagnosis": [...], "Treatment": [...]}`
    Columns {
        #[serde(alias = "Symptom")]
        symptom: Vec<String>,
        #[serde(alias = "Diagnosis")]
        diagnosis: Vec<String>,
        #[serde(alias = "Treatment")]
        treatment: Vec<String>,
    },
}

impl TableFile {
    fn into_entries(self) -> ExtractionResult<Vec<SymptomEntry>> {
        match self {
            TableFile::Rows(rows) => Ok(rows),
            TableFile::Columns {
                symptom,
                diagnosis,
                treatment,
            } => {
                if symptom.len() != diagnosis.len() || symptom.len() != treatment.len() {
                    return Err(ExtractionError::SymptomTable(format!(
                        "column lengths differ: {} symptoms, {} diagnoses, {} treatments",
                        symptom.len(),
                        diagnosis.len(),
                        treatment.len()
                    )));
                }
                Ok(symptom
                    .into_iter()
                    .zip(diagnosis)
                    .zip(treatment)
                    .map(|((s, d), t)| SymptomEntry::new(s, d, t))
                    .collect())
            }
        }
    }
}

/// Immutable reference table plus the keyword matcher compiled from it.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct SymptomTable {
    entries: Vec<SymptomEntry>,
    matcher: Option<Regex>,
}

impl SymptomTable {
    /// Table shipped with the engine
    pub fn builtin() -> ExtractionResult<Self> {
        Self::from_entries(
            DEFAULT_SYMPTOMS
                .iter()
                .map(|(symptom, diagnosis, treatment)| SymptomEntry::new(*symptom, *diagnosis, *treatment))
                .collect(),
        )
    }

    /// Build a table, normalizing keys to trimmed lowercase.
    ///
    /// # Errors
    ///
    /// Fails on a blank symptom key or if the keyword pattern cannot be
    /// compiled.
    pub fn from_entries(entries: Vec<SymptomEntry>) -> ExtractionResult<Self> {
        let mut normalized = Vec::with_capacity(entries.len());
        for (row, mut entry) in entries.into_iter().enumerate() {
            entry.symptom = entry.symptom.trim().to_lowercase();
            if entry.symptom.is_empty() {
                return Err(ExtractionError::SymptomTable(format!(
                    "row {} has an empty symptom",
                    row
                )));
            }
            if normalized.iter().any(|e: &SymptomEntry| e.symptom == entry.symptom) {
                warn!(symptom = %entry.symptom, row, "Duplicate symptom row, the first one wins");
            }
            normalized.push(entry);
        }

        let matcher = build_matcher(&normalized)?;
        Ok(Self {
            entries: normalized,
            matcher,
        })
    }

    /// Load a table from a `.json`, `.yaml` or `.yml` file
    pub fn load(path: impl AsRef<Path>) -> ExtractionResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let file: TableFile = match extension.as_str() {
            "json" => serde_json::from_str(&raw)?,
            "yaml" | "yml" => serde_yaml::from_str(&raw)?,
            other => {
                return Err(ExtractionError::SymptomTable(format!(
                    "unsupported table format '{}' for {}",
                    other,
                    path.display()
                )))
            }
        };

        let table = Self::from_entries(file.into_entries()?)?;
        info!(path = %path.display(), symptoms = table.len(), "Loaded symptom table");
        Ok(table)
    }

    pub fn entries(&self) -> &[SymptomEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keywords in table order
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.symptom.as_str())
    }

    /// First row whose symptom equals `keyword`, ignoring case
    pub fn lookup(&self, keyword: &str) -> Option<&SymptomEntry> {
        let keyword = keyword.to_lowercase();
        self.entries.iter().find(|e| e.symptom == keyword)
    }

    /// Every keyword occurrence in `text`, lowercased, in text order.
    ///
    /// One left-to-right scan; where keywords overlap at the same position
    /// the one listed first in the table wins.
    pub fn find_keywords(&self, text: &str) -> Vec<String> {
        match &self.matcher {
            Some(matcher) => matcher
                .find_iter(text)
                .map(|m| m.as_str().to_lowercase())
                .collect(),
            None => Vec::new(),
        }
    }
}

fn build_matcher(entries: &[SymptomEntry]) -> ExtractionResult<Option<Regex>> {
    if entries.is_empty() {
        return Ok(None);
    }
    let alternation = entries
        .iter()
        .map(|e| regex::escape(&e.symptom))
        .unique()
        .join("|");
    let matcher = RegexBuilder::new(&alternation)
        .case_insensitive(true)
        .build()?;
    Ok(Some(matcher))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_table_has_unique_lowercase_keys() {
        let table = SymptomTable::builtin().unwrap();
        assert_eq!(table.len(), 54);
        assert_eq!(table.keywords().unique().count(), 54);
        assert!(table.keywords().all(|k| k == k.to_lowercase()));
    }

    #[test]
    fn test_lookup_ignores_case() {
        let table = SymptomTable::builtin().unwrap();
        let entry = table.lookup("Shortness Of Breath").unwrap();
        assert_eq!(entry.symptom, "shortness of breath");
        assert!(table.lookup("hiccups").is_none());
    }

    #[test]
    fn test_keys_are_normalized_and_first_duplicate_wins() {
        let table = SymptomTable::from_entries(vec![
            SymptomEntry::new("  Fever ", "first", "rest"),
            SymptomEntry::new("fever", "second", "more rest"),
        ])
        .unwrap();
        assert_eq!(table.lookup("FEVER").unwrap().diagnosis, "first");
        assert_eq!(table.find_keywords("Fever again, fever"), vec!["fever", "fever"]);
    }

    #[test]
    fn test_blank_symptom_is_rejected() {
        let err = SymptomTable::from_entries(vec![SymptomEntry::new("   ", "d", "t")]).unwrap_err();
        assert!(matches!(err, ExtractionError::SymptomTable(msg) if msg.contains("row 0")));
    }

    #[test]
    fn test_empty_table_matches_nothing() {
        let table = SymptomTable::from_entries(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert!(table.find_keywords("fever and cough").is_empty());
    }

    #[test]
    fn test_keywords_are_matched_literally() {
        let table = SymptomTable::from_entries(vec![SymptomEntry::new("a.c (x)", "d", "t")]).unwrap();
        assert!(table.find_keywords("abc x").is_empty());
        assert_eq!(table.find_keywords("I have A.C (X) today"), vec!["a.c (x)"]);
    }

    #[test]
    fn test_overlapping_keywords_prefer_table_order() {
        let table = SymptomTable::builtin().unwrap();
        assert_eq!(table.find_keywords("my red eyes hurt"), vec!["red eyes"]);
        assert_eq!(table.find_keywords("some redness"), vec!["redness"]);
    }

    #[test]
    fn test_load_json_rows() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"Symptom": "Cough", "Diagnosis": "Cold", "Treatment": "Tea"}}]"#
        )
        .unwrap();
        let table = SymptomTable::load(file.path()).unwrap();
        assert_eq!(table.entries(), &[SymptomEntry::new("cough", "Cold", "Tea")]);
    }

    #[test]
    fn test_load_yaml_columns() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "Symptom: [fever, rash]").unwrap();
        writeln!(file, "Diagnosis: [Flu, Dermatitis]").unwrap();
        writeln!(file, "Treatment: [Rest, Cream]").unwrap();
        let table = SymptomTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("rash").unwrap().treatment, "Cream");
    }

    #[test]
    fn test_load_rejects_ragged_columns() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"symptom": ["fever", "rash"], "diagnosis": ["Flu"], "treatment": ["Rest"]}}"#
        )
        .unwrap();
        assert!(matches!(
            SymptomTable::load(file.path()),
            Err(ExtractionError::SymptomTable(_))
        ));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        assert!(matches!(
            SymptomTable::load(file.path()),
            Err(ExtractionError::SymptomTable(msg)) if msg.contains("csv")
        ));
    }
}
