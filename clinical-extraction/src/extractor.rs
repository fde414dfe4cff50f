use std::sync::Arc;

use tracing::{debug, info};

use crate::aggregate::{build_records, PersonRecord};
use crate::error::ExtractionResult;
use crate::mentions::{extract_ages, extract_names, AgeMention, NameMention};
use crate::ner::{PersonRecognizer, PersonSpan};
use crate::symptoms::SymptomSummary;
use crate::table::SymptomTable;

/// Intermediate results of one pass over a transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub names: Vec<NameMention>,
    pub ages: Vec<AgeMention>,
    pub summary: SymptomSummary,
}

impl Extraction {
    /// Extract names, ages and symptoms from `text` independently
    pub fn analyze(text: &str, table: &SymptomTable, recognized: &[PersonSpan]) -> Self {
        Self {
            names: extract_names(text, recognized),
            ages: extract_ages(text),
            summary: SymptomSummary::from_text(text, table),
        }
    }

    pub fn records(&self) -> Vec<PersonRecord> {
        build_records(&self.names, &self.ages, &self.summary)
    }
}

/// Build one record per name mention from a transcript.
///
/// Pure and total: any string yields a (possibly empty) list.
pub fn extract(text: &str, table: &SymptomTable, recognized: &[PersonSpan]) -> Vec<PersonRecord> {
    Extraction::analyze(text, table, recognized).records()
}

/// Extraction engine bound to a reference table and a recognizer.
///
/// Cheap to clone; both handles are shared read-only.
#[derive(Clone)]
pub struct IntakeExtractor {
    table: Arc<SymptomTable>,
    recognizer: Arc<dyn PersonRecognizer>,
}

impl IntakeExtractor {
    pub fn new(table: Arc<SymptomTable>, recognizer: Arc<dyn PersonRecognizer>) -> Self {
        Self { table, recognizer }
    }

    pub fn table(&self) -> &SymptomTable {
        &self.table
    }

    pub fn recognizer_name(&self) -> &'static str {
        self.recognizer.name()
    }

    /// Run the recognizer, then the extraction core.
    ///
    /// # Errors
    ///
    /// Only recognizer failures are returned; the core itself cannot fail.
    pub async fn extract(&self, text: &str) -> ExtractionResult<Vec<PersonRecord>> {
        if text.trim().is_empty() {
            debug!("Empty transcript, nothing to extract");
            return Ok(Vec::new());
        }

        let recognized = self.recognizer.recognize(text).await?;
        let extraction = Extraction::analyze(text, &self.table, &recognized);

        info!(
            recognizer = self.recognizer.name(),
            recognized = recognized.len(),
            names = extraction.names.len(),
            ages = extraction.ages.len(),
            symptoms = extraction.summary.resolved.len(),
            "Extraction complete"
        );

        Ok(extraction.records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractionError;
    use crate::ner::MockPersonRecognizer;

    fn extractor(recognizer: MockPersonRecognizer) -> IntakeExtractor {
        IntakeExtractor::new(Arc::new(SymptomTable::builtin().unwrap()), Arc::new(recognizer))
    }

    fn person(text: &str) -> PersonSpan {
        PersonSpan {
            text: text.to_string(),
            start: 0,
            label: "PERSON".to_string(),
        }
    }

    #[tokio::test]
    async fn test_recognized_names_precede_pattern_names() {
        let mut recognizer = MockPersonRecognizer::new();
        recognizer
            .expect_recognize()
            .times(1)
            .returning(|_| Ok(vec![person("Maria"), person("Tom")]));
        recognizer.expect_name().return_const("mock");

        let text = "Maria is 60 years old. I'm Tom, 35 years old, and I have a cough.";
        let records = extractor(recognizer).extract(text).await.unwrap();

        let summary: Vec<_> = records.iter().map(|r| (r.name.as_str(), r.age.as_str())).collect();
        assert_eq!(summary, vec![("Maria", "60"), ("Tom", "35"), ("Tom", "35")]);
        assert!(records.iter().all(|r| r.symptoms == "cough"));
    }

    #[tokio::test]
    async fn test_recognizer_failure_is_propagated() {
        let mut recognizer = MockPersonRecognizer::new();
        recognizer
            .expect_recognize()
            .returning(|_| Err(ExtractionError::Recognizer("service unavailable".to_string())));
        recognizer.expect_name().return_const("mock");

        let err = extractor(recognizer).extract("This is John").await.unwrap_err();
        assert!(err.is_collaborator_failure());
    }

    #[tokio::test]
    async fn test_blank_text_skips_the_recognizer() {
        let mut recognizer = MockPersonRecognizer::new();
        recognizer.expect_recognize().never();
        recognizer.expect_name().return_const("mock");

        let records = extractor(recognizer).extract("   \n").await.unwrap();
        assert!(records.is_empty());
    }
}
