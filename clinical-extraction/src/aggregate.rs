//! Per-person record assembly.

use serde::{Deserialize, Serialize};

use crate::mentions::{AgeMention, NameMention};
use crate::symptoms::SymptomSummary;

/// Structured intake record for one name mention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonRecord {
    pub name: String,
    /// Digits of the nearest age mention, empty when the text states no age
    pub age: String,
    pub symptoms: String,
    pub diagnosis: String,
    pub treatment: String,
    /// Uploaded file the transcript came from, empty for text input
    #[serde(default)]
    pub audio_file: String,
}

/// Age mention closest to `name_position` by character distance.
///
/// Ties keep the mention seen first. An unresolved name position counts as
/// offset -1, just before the start of the text.
pub fn nearest_age(name_position: Option<usize>, ages: &[AgeMention]) -> Option<&AgeMention> {
    let origin = name_position.map_or(-1, offset_to_i64);
    let mut closest: Option<(&AgeMention, u64)> = None;
    for age in ages {
        let distance = origin.abs_diff(offset_to_i64(age.position));
        match closest {
            Some((_, best)) if distance >= best => {}
            _ => closest = Some((age, distance)),
        }
    }
    closest.map(|(age, _)| age)
}

fn offset_to_i64(offset: usize) -> i64 {
    i64::try_from(offset).unwrap_or(i64::MAX)
}

/// One record per name mention, in mention order, each carrying the whole
/// transcript's symptom summary.
pub fn build_records(
    names: &[NameMention],
    ages: &[AgeMention],
    summary: &SymptomSummary,
) -> Vec<PersonRecord> {
    if names.is_empty() {
        return Vec::new();
    }

    let symptoms = summary.symptoms();
    let diagnosis = summary.diagnosis();
    let treatment = summary.treatment();

    names
        .iter()
        .map(|name| PersonRecord {
            name: name.text.clone(),
            age: nearest_age(name.position, ages)
                .map(|age| age.value.clone())
                .unwrap_or_default(),
            symptoms: symptoms.clone(),
            diagnosis: diagnosis.clone(),
            treatment: treatment.clone(),
            audio_file: String::new(),
        })
        .collect()
}
