//! Unified error types for the crate.

use thiserror::Error;

/// Top-level error for post-store operations.
#[derive(Debug, Error)]
pub enum PostStoreError {
    /// I/O or filesystem errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing / serialization errors.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid or unsupported configuration.
    #[error("config error: {0}")]
    Config(String),

    /// HTTP transport errors from the blob endpoint.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx status from the blob endpoint.
    #[error("unexpected HTTP status {status} from {url}: {snippet}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
        snippet: String,
    },

    /// The snapshot blob is absent or empty.
    #[error("no snapshot data found at {0}")]
    SnapshotMissing(String),

    /// Generic error from anyhow chain.
    #[error("internal: {0}")]
    Internal(#[from] anyhow::Error),
}
