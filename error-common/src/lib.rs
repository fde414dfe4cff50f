//! Common error handling utilities for the Symptom Intake Engine
//!
//! Provides the error type shared by the binaries and service crates, along
//! with stable error codes that are surfaced in API error bodies.
//!
//! # Error Categories
//!
//! - **Config**: missing or malformed configuration
//! - **SymptomTable**: the reference table could not be loaded
//! - **Upload**: audio upload and temporary storage failures
//! - **Network**: the listener could not be bound
//! - **Other**: anything else, wrapped with `anyhow` context
//!
//! # Example
//!
//! ```rust
//! use error_common::{IntakeError, Result};
//!
//! fn require_port(raw: &str) -> Result<u16> {
//!     raw.parse()
//!         .map_err(|_| IntakeError::Config(format!("invalid port: {raw}")))
//! }
//!
//! assert!(require_port("8080").is_ok());
//! assert!(require_port("eighty").is_err());
//! ```

pub mod codes;
pub mod types;

pub use codes::*;
pub use types::*;
