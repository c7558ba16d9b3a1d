//! Runtime configuration loaded from environment variables.

use crate::prompt;
use crate::rank;

/// Config bag for the gateway. All fields have defaults via `from_env`.
#[derive(Clone, Debug)]
pub struct AnswerConfig {
    /// Number of posts selected into the prompt.
    pub top_k: usize,
    /// System instructions passed to the completion service.
    pub system_prompt: String,
    /// Canned answer returned when no post qualifies.
    pub no_match_answer: String,
}

impl AnswerConfig {
    /// Build from environment variables with sensible defaults.
    ///
    /// - `TOP_K` (default 10)
    /// - `SYSTEM_PROMPT` (default [`prompt::DEFAULT_SYSTEM`])
    /// - `NO_MATCH_ANSWER` (default canned text)
    pub fn from_env() -> Self {
        Self {
            top_k: parse("TOP_K", rank::DEFAULT_TOP_K),
            system_prompt: env("SYSTEM_PROMPT", prompt::DEFAULT_SYSTEM),
            no_match_answer: env(
                "NO_MATCH_ANSWER",
                "I couldn't find anything relevant in the forum archive.",
            ),
        }
    }
}

fn env(k: &str, dflt: &str) -> String {
    std::env::var(k).unwrap_or_else(|_| dflt.to_string())
}

fn parse<T: std::str::FromStr>(k: &str, dflt: T) -> T {
    std::env::var(k)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(dflt)
}
