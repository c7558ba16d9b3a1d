//! Snapshot data model: forum threads with replies and follow-up discussions.
//!
//! Absence-as-empty is resolved here, once, at the serde boundary: every
//! optional field carries `#[serde(default)]` so downstream logic never
//! re-checks for missing data.

use serde::{Deserialize, Serialize};

/// One forum thread from the snapshot.
///
/// Immutable input data: consumers derive scores and display projections
/// from it, never mutate it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Post {
    /// Opaque unique identifier.
    #[serde(default)]
    pub id: String,

    /// Short title text.
    #[serde(default)]
    pub subject: String,

    /// Raw markup body.
    #[serde(default)]
    pub content: String,

    /// Creation timestamp string. Display only; never parsed or ordered by.
    #[serde(default)]
    pub created: String,

    /// Ordered label strings (may be empty).
    #[serde(default)]
    pub tags: Vec<String>,

    /// Thread classification. Passthrough only; scoring ignores it.
    #[serde(default, rename = "type")]
    pub kind: String,

    /// Nested reply containers.
    #[serde(default)]
    pub answers: Answers,
}

/// Reply containers attached to a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Answers {
    #[serde(default)]
    pub instructor: Vec<ReplyEntry>,

    #[serde(default)]
    pub student: Vec<ReplyEntry>,

    #[serde(default)]
    pub followups: Vec<Followup>,
}

/// A reply or comment as stored in the snapshot: either a bare string or an
/// object carrying a `content` field.
///
/// Both shapes normalize to their text via [`ReplyEntry::text`]; an object
/// without `content` normalizes to empty text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyEntry {
    Plain(String),
    Rich(RichReply),
}

/// Object form of a reply entry. Unknown extra fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RichReply {
    #[serde(default)]
    pub content: String,
}

impl ReplyEntry {
    /// Text content of the entry, whichever shape it came in as.
    pub fn text(&self) -> &str {
        match self {
            ReplyEntry::Plain(s) => s,
            ReplyEntry::Rich(r) => &r.content,
        }
    }
}

/// A follow-up discussion node with optional nested comments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Followup {
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub comments: Vec<ReplyEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_entry_accepts_both_shapes() {
        let plain: ReplyEntry = serde_json::from_str(r#""thanks!""#).unwrap();
        let rich: ReplyEntry = serde_json::from_str(r#"{"content":"thanks!"}"#).unwrap();
        assert_eq!(plain.text(), "thanks!");
        assert_eq!(rich.text(), "thanks!");
    }

    #[test]
    fn object_without_content_normalizes_to_empty() {
        let entry: ReplyEntry = serde_json::from_str(r#"{"anonymous":true}"#).unwrap();
        assert_eq!(entry.text(), "");
    }

    #[test]
    fn post_with_empty_answers_deserializes() {
        let post: Post = serde_json::from_str(
            r#"{"id":"1","subject":"Midterm curve","content":"","tags":[],"answers":{}}"#,
        )
        .unwrap();
        assert_eq!(post.id, "1");
        assert!(post.answers.instructor.is_empty());
        assert!(post.answers.followups.is_empty());
        assert!(post.created.is_empty());
    }

    #[test]
    fn full_post_roundtrip() {
        let raw = r#"{
            "id": "42",
            "subject": "Task 2 deadline",
            "content": "<p>When is it due?</p>",
            "created": "2025-10-01T12:00:00Z",
            "tags": ["logistics", "task2"],
            "type": "question",
            "answers": {
                "instructor": ["Friday at noon.", {"content": "Extended to Monday."}],
                "student": [],
                "followups": [
                    {"content": "Does that include the report?", "comments": ["yes", {"content": "see above"}]}
                ]
            }
        }"#;
        let post: Post = serde_json::from_str(raw).unwrap();
        assert_eq!(post.kind, "question");
        assert_eq!(post.answers.instructor.len(), 2);
        assert_eq!(post.answers.instructor[1].text(), "Extended to Monday.");
        let fu = &post.answers.followups[0];
        assert_eq!(fu.comments[0].text(), "yes");
        assert_eq!(fu.comments[1].text(), "see above");
    }
}
