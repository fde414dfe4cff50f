//! Intake endpoints: audio upload, raw text and the reference table.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
        Multipart, State,
    },
    http::StatusCode,
    response::Json,
};
use clinical_extraction::{PersonRecord, SymptomEntry};
use error_common::codes;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use voice_recognition_service::VoiceError;

use crate::error::{ApiError, ApiResult};
use crate::server::IntakeServer;

/// Multipart field carrying the recording
pub const FILE_FIELD: &str = "file";
const DEFAULT_UPLOAD_NAME: &str = "recording";

#[derive(Debug, Deserialize)]
pub struct ExtractTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SymptomTableResponse {
    pub count: usize,
    pub symptoms: Vec<SymptomEntry>,
}

struct UploadedFile {
    file_name: String,
    bytes: Vec<u8>,
}

/// Transcribe an uploaded recording and return one record per person
/// mentioned in it.
///
/// The upload is kept on disk only while the request is in flight.
pub async fn process_audio(
    State(server): State<IntakeServer>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<Vec<PersonRecord>>> {
    let mut multipart = multipart.map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "Request carries no multipart body");
        ApiError::MissingFile
    })?;

    let upload = read_file_field(&mut multipart, server.config.max_upload_bytes)
        .await?
        .ok_or(ApiError::MissingFile)?;

    if !server.transcriber.is_enabled() {
        return Err(VoiceError::Disabled.into());
    }

    let stored = server.uploads.save(&upload.file_name, &upload.bytes).await?;
    let outcome = server.process_recording(&stored).await;
    server.uploads.discard(&stored).await;

    let records = outcome?;
    info!(
        audio_bytes = upload.bytes.len(),
        records = records.len(),
        "Processed audio intake"
    );
    Ok(Json(records))
}

/// Extract records from an already transcribed complaint
pub async fn extract_text(
    State(server): State<IntakeServer>,
    payload: Result<Json<ExtractTextRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<PersonRecord>>> {
    let Json(request) = payload.map_err(|rejection| ApiError::Validation {
        message: rejection.body_text(),
        code: codes::validation::MISSING_REQUIRED_FIELD,
    })?;

    let records = server.process_text(&request.text).await?;
    info!(records = records.len(), "Processed text intake");
    Ok(Json(records))
}

/// The reference table currently loaded
pub async fn list_symptoms(State(server): State<IntakeServer>) -> Json<SymptomTableResponse> {
    let table = server.extractor.table();
    Json(SymptomTableResponse {
        count: table.len(),
        symptoms: table.entries().to_vec(),
    })
}

async fn read_file_field(multipart: &mut Multipart, limit_bytes: usize) -> ApiResult<Option<UploadedFile>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit_bytes))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or(DEFAULT_UPLOAD_NAME).to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, limit_bytes))?;

        return Ok(Some(UploadedFile {
            file_name,
            bytes: bytes.to_vec(),
        }));
    }
    Ok(None)
}

fn multipart_error(error: MultipartError, limit_bytes: usize) -> ApiError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge { limit_bytes }
    } else {
        ApiError::Validation {
            message: format!("Malformed multipart body: {}", error.body_text()),
            code: codes::upload::MALFORMED_MULTIPART,
        }
    }
}
