//! Shared LLM completion service.
//!
//! Provides provider-agnostic configuration, thin Ollama/OpenAI clients,
//! a profile facade (`fast`/`slow`) with per-config client caching, health
//! probes suitable for a `/health` endpoint, and a library-scoped tracing
//! layer.
//!
//! Construct [`service_profiles::LlmServiceProfiles`] once, wrap it in an
//! `Arc`, and pass clones to dependents.

pub mod config;
pub mod error_handler;
pub mod health_service;
pub mod service_profiles;
pub mod services;
pub mod telemetry;

pub use config::llm_model_config::LlmModelConfig;
pub use config::llm_provider::LlmProvider;
pub use error_handler::{LlmError, Result};
pub use health_service::HealthStatus;
pub use service_profiles::LlmServiceProfiles;
