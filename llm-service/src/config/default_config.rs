//! Default LLM configs loaded strictly from environment variables.
//!
//! This module provides convenience constructors for [`LlmModelConfig`],
//! grouped by provider and role, plus [`profiles_from_env`] which resolves
//! the whole fast/slow profile pair for the application:
//!
//! - **Slow** → high-quality model used for final answers
//! - **Fast** → lower-latency model for drafting (optional; falls back to slow)
//!
//! # Environment variables
//!
//! Common:
//! - `LLM_KIND`       = provider kind (`ollama` (default) or `openai`)
//! - `LLM_MAX_TOKENS` = optional max tokens (u32)
//!
//! Ollama-specific:
//! - `OLLAMA_URL` or `OLLAMA_PORT` = endpoint (mandatory)
//! - `OLLAMA_MODEL`                = slow/quality model (mandatory)
//! - `OLLAMA_MODEL_FAST`           = fast model (optional)
//!
//! OpenAI-specific:
//! - `OPENAI_API_KEY`    = API key (mandatory)
//! - `OPENAI_MODEL`      = slow/quality model (mandatory)
//! - `OPENAI_MODEL_FAST` = fast model (optional)
//! - `OPENAI_URL`        = base URL (default `https://api.openai.com`)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{ConfigError, LlmError, env_opt_u32, must_env},
    service_profiles::LlmServiceProfiles,
};

/// Resolves the Ollama endpoint strictly from environment.
///
/// Precedence:
/// 1. `OLLAMA_URL` if present and non-empty
/// 2. `OLLAMA_PORT` → `http://localhost:{port}`
///
/// # Errors
/// - [`ConfigError::MissingVar`] if both are missing
/// - [`ConfigError::InvalidNumber`] if `OLLAMA_PORT` is invalid
fn ollama_endpoint() -> Result<String, LlmError> {
    if let Ok(url) = std::env::var("OLLAMA_URL") {
        if !url.trim().is_empty() {
            return Ok(url);
        }
    }
    if let Ok(port) = std::env::var("OLLAMA_PORT") {
        if !port.trim().is_empty() {
            let _ = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber {
                    var: "OLLAMA_PORT",
                    reason: "expected u16 (1..=65535)",
                })?;
            return Ok(format!("http://localhost:{port}"));
        }
    }
    Err(LlmError::Config(ConfigError::MissingVar(
        "OLLAMA_URL or OLLAMA_PORT",
    )))
}

/// Constructs a config for the **slow/quality** Ollama model.
///
/// # Env
/// - `OLLAMA_MODEL` (required)
/// - `LLM_MAX_TOKENS` (optional)
pub fn config_ollama_slow() -> Result<LlmModelConfig, LlmError> {
    let endpoint = ollama_endpoint()?;
    let model = must_env("OLLAMA_MODEL")?;
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;

    Ok(LlmModelConfig {
        provider: LlmProvider::Ollama,
        model,
        endpoint,
        api_key: None,
        max_tokens,
        temperature: Some(0.2),
        top_p: None,
        timeout_secs: Some(600),
    })
}

/// Constructs a config for the **fast/speed** Ollama model.
///
/// # Env
/// - `OLLAMA_MODEL_FAST` (required)
/// - `LLM_MAX_TOKENS` (optional)
pub fn config_ollama_fast() -> Result<LlmModelConfig, LlmError> {
    let endpoint = ollama_endpoint()?;
    let model = must_env("OLLAMA_MODEL_FAST")?;
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;

    Ok(LlmModelConfig {
        provider: LlmProvider::Ollama,
        model,
        endpoint,
        api_key: None,
        max_tokens,
        temperature: Some(0.7),
        top_p: Some(0.9),
        timeout_secs: Some(600),
    })
}

/// Constructs a config for the **slow/quality** OpenAI model.
///
/// # Env
/// - `OPENAI_API_KEY` (required)
/// - `OPENAI_MODEL` (required)
/// - `OPENAI_URL` (optional, default `https://api.openai.com`)
/// - `LLM_MAX_TOKENS` (optional)
pub fn config_openai_slow() -> Result<LlmModelConfig, LlmError> {
    let api_key = must_env("OPENAI_API_KEY")?;
    let model = must_env("OPENAI_MODEL")?;
    let endpoint = std::env::var("OPENAI_URL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "https://api.openai.com".to_string());
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;

    Ok(LlmModelConfig {
        provider: LlmProvider::OpenAI,
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens,
        temperature: Some(0.2),
        top_p: None,
        timeout_secs: Some(120),
    })
}

/// Constructs a config for the **fast/speed** OpenAI model.
///
/// # Env
/// - `OPENAI_API_KEY` (required)
/// - `OPENAI_MODEL_FAST` (required)
pub fn config_openai_fast() -> Result<LlmModelConfig, LlmError> {
    let mut cfg = config_openai_slow()?;
    cfg.model = must_env("OPENAI_MODEL_FAST")?;
    cfg.temperature = Some(0.7);
    cfg.top_p = Some(0.9);
    cfg.timeout_secs = Some(60);
    Ok(cfg)
}

/// Resolves the whole profile pair from environment.
///
/// The slow (quality) model is mandatory for the configured provider; the
/// fast model is optional and falls back to the slow one when its variable
/// is unset.
///
/// # Errors
/// Returns [`ConfigError::UnsupportedProvider`] for an unknown `LLM_KIND`
/// and propagates missing-variable errors from the per-provider
/// constructors.
pub fn profiles_from_env() -> Result<LlmServiceProfiles, LlmError> {
    let kind = std::env::var("LLM_KIND").unwrap_or_else(|_| "ollama".to_string());

    let (slow, fast) = match kind.trim().to_lowercase().as_str() {
        "ollama" => {
            let slow = config_ollama_slow()?;
            let fast = match std::env::var("OLLAMA_MODEL_FAST") {
                Ok(m) if !m.trim().is_empty() => Some(config_ollama_fast()?),
                _ => None,
            };
            (slow, fast)
        }
        "openai" => {
            let slow = config_openai_slow()?;
            let fast = match std::env::var("OPENAI_MODEL_FAST") {
                Ok(m) if !m.trim().is_empty() => Some(config_openai_fast()?),
                _ => None,
            };
            (slow, fast)
        }
        other => return Err(ConfigError::UnsupportedProvider(other.to_string()).into()),
    };

    let fast = fast.unwrap_or_else(|| slow.clone());
    LlmServiceProfiles::new(fast, Some(slow), Some(10))
}
