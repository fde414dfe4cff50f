use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use clinical_extraction::{
    ExtractionError, ExtractionResult, IntakeExtractor, PatternOnlyRecognizer, PersonRecognizer,
    PersonSpan, SymptomTable,
};
use intake_server::{create_app, IntakeServer, ServerConfig};
use logger_redacted::{PiiRedactor, RedactionConfig};
use voice_recognition_service::{
    Transcriber, TranscriptionMetadata, TranscriptionResult, VoiceError, VoiceResult,
};

const BOUNDARY: &str = "intake-test-boundary";

/// What the stub transcriber answers with
enum Script {
    Text(&'static str),
    ProviderDown,
    TooLong,
}

struct ScriptedTranscriber {
    script: Script,
    enabled: bool,
}

#[async_trait]
impl Transcriber for ScriptedTranscriber {
    async fn transcribe(&self, audio: &[u8], _file_name: &str) -> VoiceResult<TranscriptionResult> {
        match self.script {
            Script::Text(text) => Ok(TranscriptionResult::new(
                text,
                TranscriptionMetadata {
                    provider: "scripted".to_string(),
                    model: None,
                    sample_rate: 16000,
                    audio_bytes: audio.len(),
                },
            )),
            Script::ProviderDown => Err(VoiceError::Provider("whisper returned 500".to_string())),
            Script::TooLong => Err(VoiceError::AudioTooLong {
                duration_ms: 600_000,
                max_ms: 300_000,
            }),
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

struct UnreachableRecognizer;

#[async_trait]
impl PersonRecognizer for UnreachableRecognizer {
    async fn recognize(&self, _text: &str) -> ExtractionResult<Vec<PersonSpan>> {
        Err(ExtractionError::Recognizer("connection refused".to_string()))
    }

    fn name(&self) -> &'static str {
        "unreachable"
    }
}

/// Test harness for the intake API
struct TestApp {
    app: Router,
    uploads: TempDir,
}

impl TestApp {
    fn new(script: Script) -> Self {
        Self::build(script, true, Arc::new(PatternOnlyRecognizer))
    }

    fn build(script: Script, enabled: bool, recognizer: Arc<dyn PersonRecognizer>) -> Self {
        Self::assemble(script, enabled, recognizer, ServerConfig::default().max_upload_bytes)
    }

    fn with_upload_limit(script: Script, max_upload_bytes: usize) -> Self {
        Self::assemble(script, true, Arc::new(PatternOnlyRecognizer), max_upload_bytes)
    }

    fn assemble(
        script: Script,
        enabled: bool,
        recognizer: Arc<dyn PersonRecognizer>,
        max_upload_bytes: usize,
    ) -> Self {
        let uploads = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            upload_dir: uploads.path().to_path_buf(),
            max_upload_bytes,
            ..Default::default()
        };
        let extractor = IntakeExtractor::new(Arc::new(SymptomTable::builtin().unwrap()), recognizer);
        let server = IntakeServer::new(
            config,
            extractor,
            Arc::new(ScriptedTranscriber { script, enabled }),
            PiiRedactor::new(RedactionConfig::default()),
        );
        Self {
            app: create_app(server),
            uploads,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, value)
    }

    fn leftover_uploads(&self) -> usize {
        count_files(self.uploads.path())
    }
}

fn count_files(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

fn multipart_body(field: &str, file_name: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: audio/wav\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn upload_request(uri: &str, field: &str, file_name: &str) -> Request<Body> {
    upload_request_with(uri, field, file_name, b"RIFF....WAVEfmt ")
}

fn upload_request_with(uri: &str, field: &str, file_name: &str, bytes: &[u8]) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(field, file_name, bytes)))
        .unwrap()
}

fn text_request(payload: Value) -> Request<Body> {
    Request::builder()
        .uri("/api/v1/intake/extract")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_reports_collaborators() {
    let test = TestApp::new(Script::Text(""));
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, body) = test.send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["symptom_table"], "54 entries");
    assert_eq!(body["checks"]["person_recognizer"], "pattern-only");
    assert_eq!(body["checks"]["transcription"], "enabled");
}

#[tokio::test]
async fn test_audio_upload_returns_records_and_cleans_up() {
    let test = TestApp::new(Script::Text(
        "This is John. He is 45 years old and has a fever and a headache.",
    ));

    let (status, body) = test
        .send(upload_request("/api/v1/intake/audio", "file", "visit.wav"))
        .await;

    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["Name"], "John");
    assert_eq!(records[0]["Age"], "45");
    assert_eq!(records[0]["Symptoms"], "fever, headache");
    assert_eq!(records[0]["AudioFile"], "visit.wav");
    assert_eq!(records[0]["Diagnosis"].as_str().unwrap().split("; ").count(), 2);
    assert_eq!(test.leftover_uploads(), 0);
}

#[tokio::test]
async fn test_legacy_path_is_still_served() {
    let test = TestApp::new(Script::Text("I'm Ann, 30 years old, with a rash."));

    let (status, body) = test
        .send(upload_request("/process_audio", "file", "ann.wav"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["Name"], "Ann");
    assert_eq!(body[0]["Symptoms"], "rash");
}

#[tokio::test]
async fn test_missing_file_field_is_rejected() {
    let test = TestApp::new(Script::Text("This is John"));

    let (status, body) = test
        .send(upload_request("/process_audio", "attachment", "visit.wav"))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file uploaded");
    assert_eq!(test.leftover_uploads(), 0);
}

#[tokio::test]
async fn test_non_multipart_request_counts_as_missing_file() {
    let test = TestApp::new(Script::Text("This is John"));
    let request = Request::builder()
        .uri("/process_audio")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let (status, body) = test.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file uploaded");
}

#[tokio::test]
async fn test_upload_over_the_size_limit_is_rejected() {
    let test = TestApp::with_upload_limit(Script::Text("This is John"), 64);
    let audio = vec![0u8; 4096];

    let (status, body) = test
        .send(upload_request_with("/api/v1/intake/audio", "file", "big.wav", &audio))
        .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error_type"], "payload_too_large");
    assert_eq!(test.leftover_uploads(), 0);
}

#[tokio::test]
async fn test_transcription_failure_is_a_gateway_error_and_removes_upload() {
    let test = TestApp::new(Script::ProviderDown);

    let (status, body) = test
        .send(upload_request("/api/v1/intake/audio", "file", "visit.wav"))
        .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error_type"], "transcription_error");
    assert_eq!(body["error_code"], "COLLAB_2001");
    assert_eq!(test.leftover_uploads(), 0);
}

#[tokio::test]
async fn test_overlong_audio_is_a_client_error() {
    let test = TestApp::new(Script::TooLong);

    let (status, body) = test
        .send(upload_request("/api/v1/intake/audio", "file", "long.wav"))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "VALIDATION_1003");
    assert_eq!(test.leftover_uploads(), 0);
}

#[tokio::test]
async fn test_disabled_transcription_answers_503() {
    let test = TestApp::build(Script::Text("This is John"), false, Arc::new(PatternOnlyRecognizer));

    let (status, body) = test
        .send(upload_request("/api/v1/intake/audio", "file", "visit.wav"))
        .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error_type"], "service_unavailable");
    assert_eq!(test.leftover_uploads(), 0);
}

#[tokio::test]
async fn test_recognizer_failure_is_a_gateway_error() {
    let test = TestApp::build(
        Script::Text("This is John"),
        true,
        Arc::new(UnreachableRecognizer),
    );

    let (status, body) = test.send(text_request(json!({ "text": "This is John" }))).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error_type"], "recognition_error");
}

#[tokio::test]
async fn test_text_intake_pairs_each_speaker_with_nearest_age() {
    let test = TestApp::new(Script::Text(""));
    let text = "I'm Ann, 30 years old, with a rash. I am Ben, 50 years old, with a cough.";

    let (status, body) = test.send(text_request(json!({ "text": text }))).await;

    assert_eq!(status, StatusCode::OK);
    let pairs: Vec<(&str, &str)> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| (r["Name"].as_str().unwrap(), r["Age"].as_str().unwrap()))
        .collect();
    assert_eq!(pairs, vec![("Ann", "30"), ("Ben", "50")]);
    assert_eq!(body[0]["Symptoms"], "rash, cough");
    assert_eq!(body[1]["AudioFile"], "");
}

#[tokio::test]
async fn test_text_intake_without_people_is_empty() {
    let test = TestApp::new(Script::Text(""));

    let (status, body) = test
        .send(text_request(json!({ "text": "the patient has a fever" })))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_text_intake_requires_text_field() {
    let test = TestApp::new(Script::Text(""));

    let (status, body) = test.send(text_request(json!({ "transcript": "hi" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "validation_error");
}

#[tokio::test]
async fn test_symptom_table_is_listed() {
    let test = TestApp::new(Script::Text(""));
    let request = Request::builder()
        .uri("/api/v1/intake/symptoms")
        .body(Body::empty())
        .unwrap();

    let (status, body) = test.send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 54);
    assert_eq!(body["symptoms"][0]["symptom"], "fever");
}
