//! HTTP surface for the forum QA backend.
//!
//! Routes:
//! - `GET  /`       — embedded single-page front end
//! - `POST /ask`    — question answering with retrieved forum context
//! - `GET  /health` — provider health snapshot plus snapshot source

mod core;
mod error_handler;
mod middleware_layer;
mod routes;

pub use error_handler::{AppError, AppResult};

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;
use tracing::info;

use crate::{
    core::app_state::AppState,
    middleware_layer::json_extractor::json_error_mapper,
    routes::{
        ask::ask_question_route::ask_question, frontend_route::frontend, health_route::health,
    },
};

/// Builds shared state from env, binds the listener, and serves until Ctrl+C.
///
/// # Errors
/// Returns [`AppError`] on configuration, bind, or server failures.
pub async fn start() -> Result<(), AppError> {
    let host_url =
        std::env::var("API_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    let state = Arc::new(AppState::from_env()?);

    let app = Router::new()
        .route("/", get(frontend))
        .route("/ask", post(ask_question))
        .route("/health", get(health))
        .layer(middleware::from_fn(json_error_mapper))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;

    info!(address = %host_url, "API listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
