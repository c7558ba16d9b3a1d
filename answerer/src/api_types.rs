//! Public API types re-used by external crates (e.g., the HTTP API layer).

use serde::Serialize;

/// Options that control retrieval for a single question.
///
/// Setting a field to `0` means: "use the value from env-config".
///
/// # Example
/// ```
/// use answerer::AskOptions;
/// let opts = AskOptions { top_k: 8 };
/// assert_eq!(opts.top_k, 8);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AskOptions {
    /// Number of posts selected into the prompt.
    /// If `0`, the library falls back to `TOP_K` from env.
    pub top_k: usize,
}

/// A compact record of a post that was fed to the LLM.
///
/// The body is the normalized content clamped for transport/UI, distinct
/// from the longer cut used inside the model prompt.
#[derive(Clone, Debug, Serialize)]
pub struct UsedPost {
    pub id: String,
    pub subject: String,
    /// Normalized body preview (at most 400 characters).
    pub content: String,
    pub tags: Vec<String>,
    pub created: String,
    /// Selection score the ranker assigned for this query.
    pub score: u32,
}

/// Final answer together with the posts that backed it.
#[derive(Clone, Debug)]
pub struct QaAnswer {
    pub answer: String,
    pub used_posts: Vec<UsedPost>,
}
