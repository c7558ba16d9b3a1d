//! QA gateway over the forum snapshot with a single public entry point.
//!
//! Public API: [`ask`] / [`ask_with_opts`]. It loads the corpus wholesale,
//! ranks every post by term overlap against the question, serializes the
//! winners into fixed-format context blocks, calls the completion service,
//! and returns the model answer together with the posts that backed it.

mod api_types;
mod cfg;
mod error;
mod progress;

pub mod prompt;
pub mod rank;
pub mod text;

pub use api_types::{AskOptions, QaAnswer, UsedPost};
pub use error::AnswerError;
pub use progress::{IndicatifProgress, NoopProgress, Progress};
pub use rank::{DEFAULT_TOP_K, ScoredPost, pick_top, score};

use std::sync::Arc;

use llm_service::LlmServiceProfiles;
use post_store::PostStore;
use tracing::debug;

use crate::cfg::AnswerConfig;

/// Ask the LLM with retrieved forum context and get the answer as plain text.
///
/// This is a convenience wrapper over [`ask_with_opts`] that uses defaults
/// from environment variables.
///
/// # Example
/// ```no_run
/// # use std::sync::Arc;
/// # use answerer::ask;
/// # #[tokio::main] async fn main() {
/// # let svc = Arc::new(llm_service::config::default_config::profiles_from_env().unwrap());
/// # let store = post_store::PostStore::from_env().unwrap();
/// let answer = ask(svc, &store, "Was Midterm 1 curved?").await.unwrap();
/// println!("{answer}");
/// # }
/// ```
pub async fn ask(
    svc: Arc<LlmServiceProfiles>,
    store: &PostStore,
    question: &str,
) -> Result<String, AnswerError> {
    let qa = ask_with_opts(svc, store, question, AskOptions::default()).await?;
    Ok(qa.answer)
}

/// Ask the LLM with retrieved forum context and get both answer and used posts.
///
/// It fetches the whole snapshot, ranks posts with the term-overlap scorer,
/// renders the top-k into context blocks, calls the **slow** (quality)
/// completion profile, and returns the final answer together with a clamped
/// projection of the posts fed to the model.
///
/// When no post qualifies, a canned "nothing relevant" answer is returned
/// with an empty post list and the completion service is not called.
///
/// Any `AskOptions` field set to `0` is replaced by the corresponding value
/// from environment-driven config (`AnswerConfig`).
///
/// # Errors
/// Propagates `AnswerError` from snapshot loading or the completion call.
pub async fn ask_with_opts(
    svc: Arc<LlmServiceProfiles>,
    store: &PostStore,
    question: &str,
    opts: AskOptions,
) -> Result<QaAnswer, AnswerError> {
    let prog = progress::auto();

    prog.message("loading config");
    let gcfg = AnswerConfig::from_env();

    // Resolve effective knobs (0 => use env default)
    let top_k = if opts.top_k == 0 { gcfg.top_k } else { opts.top_k };

    prog.step("loading snapshot");
    let posts = store.fetch_all().await?;

    prog.step("ranking posts");
    let top = rank::pick_top(&posts, question, top_k);
    debug!(
        corpus = posts.len(),
        selected = top.len(),
        top_k,
        "ranked corpus for question"
    );

    if top.is_empty() {
        prog.finish("no matches");
        return Ok(QaAnswer {
            answer: gcfg.no_match_answer,
            used_posts: Vec::new(),
        });
    }

    prog.step("building prompts");
    let blocks: Vec<String> = top
        .iter()
        .enumerate()
        .map(|(i, sp)| prompt::build_context_block(sp.post, i))
        .collect();
    let user_prompt = prompt::build_user_prompt(question, &blocks);

    prog.step("calling completion service");
    let answer = svc
        .generate_slow(&user_prompt, Some(&gcfg.system_prompt))
        .await?;

    prog.finish("done");
    let used_posts = top
        .iter()
        .map(|sp| UsedPost {
            id: sp.post.id.clone(),
            subject: sp.post.subject.clone(),
            content: prompt::display_preview(sp.post),
            tags: sp.post.tags.clone(),
            created: sp.post.created.clone(),
            score: sp.score,
        })
        .collect();

    Ok(QaAnswer {
        answer: answer.trim().to_string(),
        used_posts,
    })
}
