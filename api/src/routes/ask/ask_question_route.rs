//! POST /ask — asks the LLM with retrieved forum context.

use std::sync::Arc;

use axum::{Json, extract::State};

use answerer::{AskOptions, QaAnswer, ask_with_opts};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::ask::ask_request::{AskRequest, AskResponse, UsedPostItem},
};

/// Handler: POST /ask
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/ask \
///   -H 'content-type: application/json' \
///   -d '{"question":"Was Midterm 1 curved?","top_k":8}'
/// ```
pub async fn ask_question(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AskRequest>,
) -> AppResult<Json<AskResponse>> {
    let question = body.question.trim();
    if question.is_empty() {
        return Err(AppError::BadRequest(
            "pass your question in the `question` field".to_string(),
        ));
    }

    // Build AskOptions (fallback to env if client omits values)
    let mut opts = AskOptions::default();
    if let Some(k) = body.top_k {
        opts.top_k = k;
    }

    // Delegate to answerer (retrieval + LLM)
    let QaAnswer { answer, used_posts } = ask_with_opts(
        state.llm_profiles.clone(),
        &state.post_store,
        question,
        opts,
    )
    .await?;

    // Map to API response DTOs
    let items = used_posts
        .into_iter()
        .map(|u| UsedPostItem {
            id: u.id,
            subject: u.subject,
            content: u.content,
            tags: u.tags,
            created: u.created,
            score: u.score,
        })
        .collect();

    Ok(Json(AskResponse {
        query: question.to_string(),
        answer,
        used_posts: items,
    }))
}
