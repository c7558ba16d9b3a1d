//! Typed error for the answerer crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnswerError {
    /// Errors from the underlying post-store crate.
    #[error("snapshot error: {0}")]
    Store(#[from] post_store::PostStoreError),

    /// Errors from the completion service.
    #[error("LLM error: {0}")]
    Llm(#[from] llm_service::LlmError),

    /// JSON (de)serialization issues (should be rare).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic IO if needed by future extensions.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
