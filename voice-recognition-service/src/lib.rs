//! Voice Recognition Service for patient intake
//!
//! Turns recorded patient complaints into plain text for the extraction
//! engine. Providers speak the OpenAI-compatible transcription API, so the
//! default is a self-hosted Whisper server and no audio leaves the premises.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use voice_recognition_service::{Transcriber, VoiceConfig, VoiceService};
//!
//! # async fn example(audio: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
//! let config = VoiceConfig::from_env()?;
//! let voice_service = VoiceService::new(config)?;
//!
//! let transcription = voice_service.transcribe(&audio, "visit.wav").await?;
//! println!("Transcription: {}", transcription.text);
//! # Ok(())
//! # }
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub mod providers;
pub mod service;
pub mod transcription;

pub use audio::*;
pub use config::*;
pub use error::*;
pub use service::*;
pub use transcription::*;
