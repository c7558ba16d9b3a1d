//! Snapshot source configuration resolved from environment variables.

use std::path::PathBuf;

use crate::errors::PostStoreError;

/// Where the snapshot blob lives.
///
/// The whole corpus is stored as one serialized JSON document, either on
/// local disk or behind an HTTP blob endpoint (a key-value store exposing
/// the dump via GET).
#[derive(Debug, Clone)]
pub enum SnapshotSource {
    /// Local JSON file.
    File(PathBuf),
    /// HTTP endpoint returning the JSON document as the response body.
    Http { url: String },
}

impl SnapshotSource {
    /// Human-readable location, for logs and the health endpoint.
    pub fn describe(&self) -> String {
        match self {
            SnapshotSource::File(p) => format!("file:{}", p.display()),
            SnapshotSource::Http { url } => url.clone(),
        }
    }
}

/// Config bag for [`crate::PostStore`].
#[derive(Debug, Clone)]
pub struct PostStoreConfig {
    pub source: SnapshotSource,
    /// Timeout for the HTTP source, in seconds.
    pub timeout_secs: u64,
}

impl PostStoreConfig {
    /// Build from environment variables.
    ///
    /// `CORPUS_URL` takes precedence; `CORPUS_PATH` is the file fallback.
    /// `CORPUS_TIMEOUT_SECS` defaults to 30.
    ///
    /// # Errors
    /// Returns [`PostStoreError::Config`] when neither variable is set.
    pub fn from_env() -> Result<Self, PostStoreError> {
        let timeout_secs = std::env::var("CORPUS_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        if let Ok(url) = std::env::var("CORPUS_URL") {
            if !url.trim().is_empty() {
                return Ok(Self {
                    source: SnapshotSource::Http { url },
                    timeout_secs,
                });
            }
        }
        if let Ok(path) = std::env::var("CORPUS_PATH") {
            if !path.trim().is_empty() {
                return Ok(Self {
                    source: SnapshotSource::File(PathBuf::from(path)),
                    timeout_secs,
                });
            }
        }
        Err(PostStoreError::Config(
            "CORPUS_URL or CORPUS_PATH must be set".into(),
        ))
    }
}
