use serde::{Deserialize, Serialize};

/// Request body for `POST /ask`.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Free-text question. Must be non-blank.
    pub question: String,
    /// Optional override for the number of posts selected into the prompt.
    pub top_k: Option<usize>,
}

/// Response body for `POST /ask`.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub query: String,
    pub answer: String,
    pub used_posts: Vec<UsedPostItem>,
}

/// Outward projection of one post the model saw.
#[derive(Debug, Serialize)]
pub struct UsedPostItem {
    pub id: String,
    pub subject: String,
    /// Normalized body preview (at most 400 characters).
    pub content: String,
    pub tags: Vec<String>,
    pub created: String,
    pub score: u32,
}
