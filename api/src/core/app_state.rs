use std::sync::Arc;

use llm_service::LlmServiceProfiles;
use llm_service::config::default_config::profiles_from_env;
use post_store::PostStore;

use crate::error_handler::AppError;

/// Shared state for all HTTP handlers.
pub struct AppState {
    /// Completion service with fast/slow profiles, shared across requests.
    pub llm_profiles: Arc<LlmServiceProfiles>,
    /// Snapshot store; the corpus itself is re-fetched per query.
    pub post_store: Arc<PostStore>,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// # Errors
    /// Returns [`AppError::Config`] when the LLM profiles or the snapshot
    /// source cannot be resolved.
    pub fn from_env() -> Result<Self, AppError> {
        let llm_profiles =
            Arc::new(profiles_from_env().map_err(|e| AppError::Config(e.to_string()))?);
        let post_store =
            Arc::new(PostStore::from_env().map_err(|e| AppError::Config(e.to_string()))?);

        Ok(Self {
            llm_profiles,
            post_store,
        })
    }
}
