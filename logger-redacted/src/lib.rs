//! PII redaction for intake logging
//!
//! Transcripts carry patient names, ages and contact details. Anything that
//! reaches the log goes through [`PiiRedactor`] first.
//!
//! # Detected Data Types
//!
//! - **Email Addresses**: `user@example.com` → `EMAIL[hash]`
//! - **Phone Numbers**: `(555) 123-4567` → `PHONE[hash]`
//! - **SSN**: `123-45-6789` → `SSN[hash]`
//! - **Self-introductions**: `My name is Amy` → `My name is NAME[hash]`
//! - **Stated ages**: `45 years old` → `[AGE] years old`
//! - **Custom Patterns**: configurable regex replacements
//!
//! Hashes are salted per redactor instance: they correlate log lines from one
//! process but cannot be reversed with a lookup table. Ages are never hashed,
//! since every possible value is easy to enumerate.
//!
//! # Example
//!
//! ```rust
//! use logger_redacted::{PiiRedactor, RedactionConfig};
//!
//! let redactor = PiiRedactor::new(RedactionConfig {
//!     hash_for_correlation: false,
//!     ..Default::default()
//! });
//!
//! let line = redactor.redact("This is John, 45 years old");
//! assert_eq!(line, "This is [NAME], [AGE] years old");
//! ```

pub mod config;
pub mod redactor;

pub use config::*;
pub use redactor::*;
