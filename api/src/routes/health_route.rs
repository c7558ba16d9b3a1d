//! GET /health — provider health snapshot plus snapshot source.

use std::sync::Arc;

use axum::{Json, extract::State};
use llm_service::HealthStatus;
use serde::Serialize;

use crate::core::app_state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// True when every distinct provider profile probes healthy.
    pub ok: bool,
    /// Where the corpus snapshot is loaded from.
    pub snapshot_source: String,
    pub providers: Vec<HealthStatus>,
}

/// Handler: GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let providers = state.llm_profiles.health_all().await;
    let ok = providers.iter().all(|p| p.ok);

    Json(HealthResponse {
        ok,
        snapshot_source: state.post_store.describe_source(),
        providers,
    })
}
