//! Temporary storage for uploaded recordings.
//!
//! Each upload is written under a fresh uuid prefix so concurrent requests
//! with the same client file name never collide, and is removed once the
//! request has been answered.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

const MAX_FILE_NAME_CHARS: usize = 100;
const FALLBACK_FILE_NAME: &str = "recording";

/// Reduce a client-supplied file name to a safe single path component
pub fn sanitize_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .filter(|&c| c != '/' && c != '\\' && c != '\0')
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let sanitized: String = sanitized
        .replace("..", "")
        .chars()
        .take(MAX_FILE_NAME_CHARS)
        .collect();

    if sanitized.is_empty() || sanitized.chars().all(|c| c == '.') {
        FALLBACK_FILE_NAME.to_string()
    } else {
        sanitized
    }
}

/// A recording written to the upload directory
#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub path: PathBuf,
    /// Name the client sent, unsanitized
    pub original_name: String,
}

/// Upload directory handle
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if needed
    pub async fn ensure_dir(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> io::Result<StoredUpload> {
        let file_name = format!("{}_{}", Uuid::new_v4().simple(), sanitize_filename(original_name));
        let path = self.dir.join(file_name);
        if let Err(e) = tokio::fs::write(&path, bytes).await {
            // A failed write may still have created the file.
            if tokio::fs::remove_file(&path).await.is_ok() {
                debug!(path = %path.display(), "Removed partially written upload");
            }
            return Err(e);
        }
        debug!(path = %path.display(), bytes = bytes.len(), "Stored upload");
        Ok(StoredUpload {
            path,
            original_name: original_name.to_string(),
        })
    }

    pub async fn read(&self, upload: &StoredUpload) -> io::Result<Vec<u8>> {
        tokio::fs::read(&upload.path).await
    }

    /// Remove a stored upload; failures are logged, not returned
    pub async fn discard(&self, upload: &StoredUpload) {
        if let Err(e) = tokio::fs::remove_file(&upload.path).await {
            warn!(path = %upload.path.display(), error = %e, "Failed to remove upload");
        }
    }
}
