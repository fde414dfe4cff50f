use std::sync::Arc;
use std::time::Instant;

use clinical_extraction::{ExtractionConfig, IntakeExtractor, PersonRecord};
use error_common::{IntakeError, Result};
use logger_redacted::{LoggerConfig, PiiRedactor};
use tracing::{debug, info};
use voice_recognition_service::{Transcriber, VoiceConfig, VoiceService};

use crate::config::ServerConfig;
use crate::error::ApiResult;
use crate::storage::{StoredUpload, UploadStore};

/// Shared state handed to every request.
///
/// Everything inside is immutable after startup, so clones are cheap and
/// requests never contend.
#[derive(Clone)]
pub struct IntakeServer {
    pub config: Arc<ServerConfig>,
    pub extractor: IntakeExtractor,
    pub transcriber: Arc<dyn Transcriber>,
    pub uploads: UploadStore,
    pub redactor: Arc<PiiRedactor>,
    started_at: Instant,
}

impl IntakeServer {
    /// Assemble a server from ready-made collaborators
    pub fn new(
        config: ServerConfig,
        extractor: IntakeExtractor,
        transcriber: Arc<dyn Transcriber>,
        redactor: PiiRedactor,
    ) -> Self {
        let uploads = UploadStore::new(config.upload_dir.clone());
        Self {
            config: Arc::new(config),
            extractor,
            transcriber,
            uploads,
            redactor: Arc::new(redactor),
            started_at: Instant::now(),
        }
    }

    /// Build every collaborator from configuration and prepare the upload
    /// directory.
    ///
    /// # Errors
    ///
    /// Fails when the symptom table cannot be loaded, a collaborator is
    /// misconfigured or the upload directory cannot be created.
    pub async fn initialize(
        config: ServerConfig,
        extraction: &ExtractionConfig,
        voice: VoiceConfig,
        logging: &LoggerConfig,
    ) -> Result<Self> {
        let table = extraction
            .load_table()
            .map_err(|e| IntakeError::SymptomTable(e.to_string()))?;
        info!(symptoms = table.len(), "Symptom table ready");

        let recognizer = extraction
            .build_recognizer()
            .map_err(|e| IntakeError::Config(format!("Person recognizer unavailable: {}", e)))?;
        let extractor = IntakeExtractor::new(Arc::new(table), recognizer);
        info!(recognizer = extractor.recognizer_name(), "Person recognizer ready");

        let transcriber = VoiceService::new(voice)
            .map_err(|e| IntakeError::Config(format!("Voice service unavailable: {}", e)))?;

        let server = Self::new(config, extractor, Arc::new(transcriber), logging.redactor());

        server.uploads.ensure_dir().await.map_err(|e| {
            IntakeError::Upload(format!(
                "Cannot create upload directory {}: {}",
                server.uploads.dir().display(),
                e
            ))
        })?;

        Ok(server)
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Transcribe a stored upload and extract person records from the
    /// transcript. Every record is tagged with the client's file name.
    pub async fn process_recording(&self, upload: &StoredUpload) -> ApiResult<Vec<PersonRecord>> {
        let audio = self.uploads.read(upload).await?;
        let transcription = self.transcriber.transcribe(&audio, &upload.original_name).await?;
        debug!(
            transcription_id = %transcription.id,
            transcript = %self.redactor.redact(&transcription.text),
            "Received transcript"
        );

        let mut records = self.extractor.extract(&transcription.text).await?;
        for record in &mut records {
            record.audio_file = upload.original_name.clone();
        }
        self.log_records(&records);
        Ok(records)
    }

    /// Extract person records from text that is already transcribed
    pub async fn process_text(&self, text: &str) -> ApiResult<Vec<PersonRecord>> {
        debug!(transcript = %self.redactor.redact(text), "Extracting from text");
        let records = self.extractor.extract(text).await?;
        self.log_records(&records);
        Ok(records)
    }

    fn log_records(&self, records: &[PersonRecord]) {
        for record in records {
            debug!(
                name = %self.redactor.mask_value("NAME", &record.name),
                has_age = !record.age.is_empty(),
                symptoms = %record.symptoms,
                "Extracted record"
            );
        }
    }
}
