//! Relevance scoring and top-k selection over the post corpus.
//!
//! Scoring is pure and stateless: each post is scored independently from
//! the query alone, so calls may run concurrently without coordination.

use std::collections::HashSet;

use post_store::Post;

use crate::text::{strip_markup, tokenize};

/// Default number of posts selected into the prompt.
pub const DEFAULT_TOP_K: usize = 10;

/// Awarded when the lowercased subject contains the whole lowercased query.
const SUBJECT_BONUS: u32 = 2;
/// Awarded when any lowercased tag occurs inside the lowercased query.
/// The containment direction is tag-in-query, the reverse of the subject
/// bonus: tags are short labels matched against longer questions.
const TAG_BONUS: u32 = 1;

/// A post together with its selection score.
#[derive(Debug, Clone, Copy)]
pub struct ScoredPost<'a> {
    pub post: &'a Post,
    pub score: u32,
}

/// Flattens a post into its full searchable text: subject, normalized body,
/// instructor replies, student replies, then each follow-up's content with
/// its comments.
fn searchable_text(post: &Post) -> String {
    let mut full = String::new();
    full.push_str(&post.subject);
    full.push(' ');
    full.push_str(&strip_markup(&post.content));

    for entry in post
        .answers
        .instructor
        .iter()
        .chain(post.answers.student.iter())
    {
        full.push(' ');
        full.push_str(&strip_markup(entry.text()));
    }

    for followup in &post.answers.followups {
        full.push(' ');
        full.push_str(&strip_markup(&followup.content));
        for comment in &followup.comments {
            full.push(' ');
            full.push_str(&strip_markup(comment.text()));
        }
    }

    full
}

/// Scores one post against the query.
///
/// Base score counts how many of the query's tokens (duplicates included)
/// appear in the post's term set; the subject and tag bonuses are layered
/// on top. Zero means "no match".
///
/// # Example
/// ```
/// use answerer::rank::score;
/// use post_store::Post;
/// let post = Post {
///     subject: "Midterm 1 curve".into(),
///     ..Post::default()
/// };
/// assert!(score(&post, "midterm") >= 1);
/// ```
pub fn score(post: &Post, query: &str) -> u32 {
    let terms: HashSet<String> = tokenize(&searchable_text(post)).into_iter().collect();

    let mut matches = 0u32;
    for token in tokenize(query) {
        if terms.contains(&token) {
            matches += 1;
        }
    }

    let query_lower = query.to_lowercase();

    // An empty query is vacuously a substring of every subject; it earns
    // nothing. Same for empty tags against any query.
    if !query_lower.is_empty() && post.subject.to_lowercase().contains(&query_lower) {
        matches += SUBJECT_BONUS;
    }
    if post.tags.iter().any(|tag| {
        let tag = tag.to_lowercase();
        !tag.is_empty() && query_lower.contains(&tag)
    }) {
        matches += TAG_BONUS;
    }

    matches
}

/// Selects the top-`k` qualifying posts for a query.
///
/// Posts with score 0 are dropped; the rest are sorted by descending score
/// with ties keeping their corpus order (the sort is stable), then
/// truncated to `k`. An empty result is a valid outcome.
pub fn pick_top<'a>(posts: &'a [Post], query: &str, k: usize) -> Vec<ScoredPost<'a>> {
    let mut scored: Vec<ScoredPost<'a>> = posts
        .iter()
        .map(|post| ScoredPost {
            post,
            score: score(post, query),
        })
        .filter(|sp| sp.score > 0)
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(k);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use post_store::{Answers, Followup, ReplyEntry, RichReply};

    fn post(id: &str, subject: &str, content: &str, tags: &[&str]) -> Post {
        Post {
            id: id.into(),
            subject: subject.into(),
            content: content.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Post::default()
        }
    }

    #[test]
    fn subject_token_match_scores() {
        let p = post("1", "Midterm 1 curve", "", &[]);
        assert!(score(&p, "midterm") >= 1);
    }

    #[test]
    fn subject_substring_bonus_requires_full_query() {
        let p = post("1", "Midterm 1 curve", "", &[]);
        // All three tokens match, and the whole query is a substring of the
        // subject: 3 + 2.
        assert_eq!(score(&p, "midterm 1 curve"), 5);
        // Tokens match but "curve midterm" is not a literal substring.
        assert_eq!(score(&p, "curve midterm"), 2);
    }

    #[test]
    fn repeated_query_tokens_count_each_occurrence() {
        let p = post("1", "", "deadlock deadlock everywhere", &[]);
        assert_eq!(score(&p, "deadlock"), 1);
        assert_eq!(score(&p, "deadlock deadlock"), 2);
    }

    #[test]
    fn tag_bonus_is_tag_in_query() {
        // Tags are not part of the searchable text; only the bonus applies.
        let p = post("1", "", "", &["sync"]);
        assert_eq!(score(&p, "how does sync work"), 1);
        // Substring containment, not token equality: "synchronization"
        // contains "sync".
        assert_eq!(score(&p, "synchronization"), 1);
        // Reverse direction must not award the bonus.
        let p2 = post("2", "", "", &["synchronization"]);
        assert_eq!(score(&p2, "sync"), 0);
    }

    #[test]
    fn replies_and_followups_are_searchable() {
        let p = Post {
            id: "1".into(),
            answers: Answers {
                instructor: vec![ReplyEntry::Plain("use thread_wait here".into())],
                student: vec![ReplyEntry::Rich(RichReply {
                    content: "semaphore works too".into(),
                })],
                followups: vec![Followup {
                    content: "what about mutexes".into(),
                    comments: vec![ReplyEntry::Plain("mutexes are fine".into())],
                }],
            },
            ..Post::default()
        };
        assert!(score(&p, "thread_wait") >= 1);
        assert!(score(&p, "semaphore") >= 1);
        assert!(score(&p, "mutexes") >= 1);
    }

    #[test]
    fn bare_string_and_object_comments_score_identically() {
        let with_string = Post {
            answers: Answers {
                followups: vec![Followup {
                    content: String::new(),
                    comments: vec![ReplyEntry::Plain("starvation happens".into())],
                }],
                ..Answers::default()
            },
            ..Post::default()
        };
        let with_object = Post {
            answers: Answers {
                followups: vec![Followup {
                    content: String::new(),
                    comments: vec![ReplyEntry::Rich(RichReply {
                        content: "starvation happens".into(),
                    })],
                }],
                ..Answers::default()
            },
            ..Post::default()
        };
        assert_eq!(
            score(&with_string, "starvation"),
            score(&with_object, "starvation")
        );
        assert_eq!(score(&with_string, "starvation"), 1);
    }

    #[test]
    fn score_is_idempotent() {
        let p = post("1", "Midterm curve", "grades are up", &["exam"]);
        let q = "midterm exam grades";
        assert_eq!(score(&p, q), score(&p, q));
    }

    #[test]
    fn empty_query_scores_nothing() {
        let p = post("1", "Midterm curve", "text", &["exam"]);
        assert_eq!(score(&p, ""), 0);
        assert!(pick_top(std::slice::from_ref(&p), "", 10).is_empty());
    }

    #[test]
    fn pick_top_filters_sorts_and_caps() {
        let posts = vec![
            post("1", "weak match", "midterm", &[]),
            post("2", "no match", "unrelated text", &[]),
            post("3", "Midterm curve", "midterm midterm", &[]),
        ];
        let top = pick_top(&posts, "midterm curve", 10);
        // Post 2 never qualifies.
        assert_eq!(top.len(), 2);
        // Post 3 outscores post 1 (token matches for both words + body).
        assert_eq!(top[0].post.id, "3");
        assert_eq!(top[1].post.id, "1");
        assert!(top.iter().all(|sp| sp.score > 0));

        let capped = pick_top(&posts, "midterm curve", 1);
        assert_eq!(capped.len(), 1);
    }

    #[test]
    fn pick_top_is_stable_for_equal_scores() {
        let posts = vec![
            post("a", "deadlock question", "", &[]),
            post("b", "deadlock question", "", &[]),
        ];
        let top = pick_top(&posts, "deadlock", 10);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].score, top[1].score);
        assert_eq!(top[0].post.id, "a");
        assert_eq!(top[1].post.id, "b");
    }

    #[test]
    fn scenario_two_post_corpus() {
        let posts = vec![
            post("1", "Midterm curve", "", &[]),
            post("2", "Unrelated", "thread_wait example code", &["sync"]),
        ];
        let top = pick_top(&posts, "midterm", 10);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].post.id, "1");
    }
}
