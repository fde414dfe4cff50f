//! Clinical extraction engine for patient intake transcripts
//!
//! Given the text of a spoken complaint, finds who is speaking, how old they
//! said they are, and which symptoms were mentioned, then attaches a
//! diagnosis and treatment suggestion from a reference table.
//!
//! # Pipeline
//!
//! 1. **Mentions**: person names come from a [`PersonRecognizer`] plus a
//!    self-introduction pattern (`I'm`, `I am`, `My name is`, `This is`);
//!    ages come from `<1-3 digits> years old|year old|aged`.
//! 2. **Symptoms**: every table keyword is matched case-insensitively in one
//!    scan and resolved against the table.
//! 3. **Records**: each name gets the nearest age by character distance and
//!    the symptom summary of the whole transcript.
//!
//! # Example
//!
//! ```rust
//! use clinical_extraction::{extract, SymptomTable};
//!
//! let table = SymptomTable::builtin().unwrap();
//! let text = "This is John. He is 45 years old and has a fever and a headache.";
//! let records = extract(text, &table, &[]);
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].name, "John");
//! assert_eq!(records[0].age, "45");
//! assert_eq!(records[0].symptoms, "fever, headache");
//! ```

mod builtin;

pub mod aggregate;
pub mod config;
pub mod error;
pub mod extractor;
pub mod mentions;
pub mod ner;
pub mod symptoms;
pub mod table;

pub use aggregate::*;
pub use config::*;
pub use error::*;
pub use extractor::*;
pub use mentions::{AgeMention, NameMention};
pub use ner::*;
pub use symptoms::*;
pub use table::*;
