//! Prompt builder: short system message + fixed-format context blocks.

use post_store::Post;

use crate::text::strip_markup;

/// Hard cutoff for a post body inside the model prompt.
pub const MAX_PROMPT_BODY_CHARS: usize = 1200;

/// Hard cutoff for a post body in the outward-facing payload.
pub const MAX_DISPLAY_BODY_CHARS: usize = 400;

/// Default system instructions for context-grounded answers.
///
/// Keep this short: it consistently improves steering without wasting tokens.
pub const DEFAULT_SYSTEM: &str = "You are a helpful course assistant answering from archived \
forum discussions. Answer the student's question strictly from the provided forum context. \
If the context is insufficient, say so briefly and suggest what to search next. Prefer \
concise, actionable answers with bullet points and cite post ids like (see id: XXXXX).";

/// Renders one selected post as a fixed-format context block.
///
/// `index` is 0-based; the header shows it 1-based. The body is the
/// normalized content hard-truncated at [`MAX_PROMPT_BODY_CHARS`]
/// characters (not word-aware). Reply and follow-up sections appear only
/// when they have content.
///
/// # Example
/// ```
/// use answerer::prompt::build_context_block;
/// use post_store::Post;
/// let post = Post { id: "7".into(), subject: "Quiz 3".into(), ..Post::default() };
/// let block = build_context_block(&post, 0);
/// assert!(block.starts_with("# 1. Quiz 3 (id: 7"));
/// ```
pub fn build_context_block(post: &Post, index: usize) -> String {
    let stripped = strip_markup(&post.content);
    let body = truncate_chars(&stripped, MAX_PROMPT_BODY_CHARS);

    let tags = if post.tags.is_empty() {
        "-".to_string()
    } else {
        post.tags.join(", ")
    };

    let mut out = format!(
        "# {}. {} (id: {}, date: {})\nTags: {}\nBody:\n{}",
        index + 1,
        post.subject,
        post.id,
        post.created,
        tags,
        body,
    );

    let instructor = bullet_list(post.answers.instructor.iter().map(|e| e.text()));
    if !instructor.is_empty() {
        out.push_str("\nInstructor replies:\n- ");
        out.push_str(&instructor);
    }

    let student = bullet_list(post.answers.student.iter().map(|e| e.text()));
    if !student.is_empty() {
        out.push_str("\nStudent replies:\n- ");
        out.push_str(&student);
    }

    if !post.answers.followups.is_empty() {
        out.push_str("\nFollow-ups:");
        for (i, followup) in post.answers.followups.iter().enumerate() {
            out.push_str(&format!(
                "\nFollow-up #{}: {}",
                i + 1,
                strip_markup(&followup.content)
            ));
            for comment in &followup.comments {
                let text = strip_markup(comment.text());
                if !text.is_empty() {
                    out.push_str(&format!("\n    ↳ {text}"));
                }
            }
        }
    }

    out
}

/// Builds the final user prompt from the question and the rendered blocks.
///
/// # Example
/// ```
/// use answerer::prompt::build_user_prompt;
/// let prompt = build_user_prompt("How to X?", &[]);
/// assert!(prompt.contains("Question:"));
/// ```
pub fn build_user_prompt(question: &str, blocks: &[String]) -> String {
    let mut out = String::new();
    out.push_str("Question: ");
    out.push_str(question.trim());
    out.push_str(&format!(
        "\n\n---\nForum context ({} posts):\n",
        blocks.len()
    ));
    out.push_str(&blocks.join("\n\n---\n"));
    out.push_str("\n---\nOnly use the information above.");
    out
}

/// Normalized body preview for the outward-facing payload, clamped to
/// [`MAX_DISPLAY_BODY_CHARS`].
pub fn display_preview(post: &Post) -> String {
    truncate_chars(&strip_markup(&post.content), MAX_DISPLAY_BODY_CHARS).to_string()
}

/// Normalizes each entry, drops empties, and joins with `\n- `.
fn bullet_list<'a>(entries: impl Iterator<Item = &'a str>) -> String {
    entries
        .map(strip_markup)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n- ")
}

/// Cuts `s` after at most `max` characters, on a char boundary.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use post_store::{Answers, Followup, ReplyEntry, RichReply};

    fn full_post() -> Post {
        Post {
            id: "99".into(),
            subject: "Task 2 deadline".into(),
            content: "<p>When is it due?</p>".into(),
            created: "2025-10-01T12:00:00Z".into(),
            tags: vec!["logistics".into(), "task2".into()],
            answers: Answers {
                instructor: vec![ReplyEntry::Plain("Friday at noon.".into())],
                student: vec![ReplyEntry::Rich(RichReply {
                    content: "<div>Confirmed.</div>".into(),
                })],
                followups: vec![Followup {
                    content: "Does that include the report?".into(),
                    comments: vec![ReplyEntry::Plain("yes".into())],
                }],
            },
            ..Post::default()
        }
    }

    #[test]
    fn block_has_header_tags_and_body() {
        let block = build_context_block(&full_post(), 2);
        assert!(block.starts_with("# 3. Task 2 deadline (id: 99, date: 2025-10-01T12:00:00Z)"));
        assert!(block.contains("Tags: logistics, task2"));
        assert!(block.contains("Body:\nWhen is it due?"));
    }

    #[test]
    fn block_renders_replies_and_followups() {
        let block = build_context_block(&full_post(), 0);
        assert!(block.contains("Instructor replies:\n- Friday at noon."));
        assert!(block.contains("Student replies:\n- Confirmed."));
        assert!(block.contains("Follow-up #1: Does that include the report?"));
        assert!(block.contains("\n    ↳ yes"));
    }

    #[test]
    fn empty_sections_are_omitted_and_tags_placeholder_used() {
        let post = Post {
            id: "1".into(),
            subject: "Bare".into(),
            ..Post::default()
        };
        let block = build_context_block(&post, 0);
        assert!(block.contains("Tags: -"));
        assert!(!block.contains("Instructor replies"));
        assert!(!block.contains("Student replies"));
        assert!(!block.contains("Follow-ups"));
    }

    #[test]
    fn body_is_truncated_for_prompt_and_display() {
        let post = Post {
            content: "x".repeat(5000),
            ..Post::default()
        };
        let block = build_context_block(&post, 0);
        let body_line = block.lines().last().unwrap();
        assert_eq!(body_line.chars().count(), MAX_PROMPT_BODY_CHARS);
        assert_eq!(display_preview(&post).chars().count(), MAX_DISPLAY_BODY_CHARS);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let s = "é".repeat(500);
        let post = Post {
            content: s,
            ..Post::default()
        };
        assert_eq!(display_preview(&post).chars().count(), MAX_DISPLAY_BODY_CHARS);
    }

    #[test]
    fn user_prompt_wraps_blocks() {
        let blocks = vec!["block-one".to_string(), "block-two".to_string()];
        let prompt = build_user_prompt("  Was midterm curved?  ", &blocks);
        assert!(prompt.starts_with("Question: Was midterm curved?"));
        assert!(prompt.contains("Forum context (2 posts):"));
        assert!(prompt.contains("block-one\n\n---\nblock-two"));
        assert!(prompt.ends_with("Only use the information above."));
    }
}
