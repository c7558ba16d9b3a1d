//! Text normalization: markup stripping and tokenization.
//!
//! Both functions are total: any input string yields a plain-text result,
//! and an empty input yields an empty output.

use std::sync::LazyLock;

use regex::Regex;

static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static RE_BLOCK_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</(?:p|div|md)>").unwrap());
static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static RE_EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Fixed entity table. The snapshot format only ever escapes these four;
/// extend the table here if the exporter grows new ones.
const ENTITIES: [(&str, &str); 4] = [
    ("&nbsp;", " "),
    ("&#39;", "'"),
    ("&quot;", "\""),
    ("&amp;", "&"),
];

/// Strips markup from a raw post body into plain text.
///
/// Line breaks and closing block tags become newlines, remaining tags are
/// removed, the four known entities are decoded, runs of 3+ newlines
/// collapse to two, and the result is trimmed.
///
/// # Example
/// ```
/// use answerer::text::strip_markup;
/// assert_eq!(strip_markup("a<br>b"), "a\nb");
/// assert_eq!(strip_markup("a&amp;b"), "a&b");
/// ```
pub fn strip_markup(raw: &str) -> String {
    let text = RE_LINE_BREAK.replace_all(raw, "\n");
    let text = RE_BLOCK_CLOSE.replace_all(&text, "\n");
    let mut text = RE_TAG.replace_all(&text, "").into_owned();
    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }
    let text = RE_EXCESS_NEWLINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Splits text into normalized terms.
///
/// Lowercases, treats every maximal run of characters outside `[a-z0-9_]`
/// as a separator, and discards empty tokens. Order and duplicates are
/// preserved; callers that only need membership can collect into a set.
///
/// # Example
/// ```
/// use answerer::text::tokenize;
/// assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_markup_empty_is_empty() {
        assert_eq!(strip_markup(""), "");
    }

    #[test]
    fn strip_markup_converts_line_breaks() {
        assert_eq!(strip_markup("a<br>b"), "a\nb");
        assert_eq!(strip_markup("a<br/>b"), "a\nb");
        assert_eq!(strip_markup("a<BR />b"), "a\nb");
    }

    #[test]
    fn strip_markup_converts_block_closers() {
        assert_eq!(strip_markup("<p>one</p><p>two</p>"), "one\ntwo");
        assert_eq!(strip_markup("<div>x</div>y"), "x\ny");
    }

    #[test]
    fn strip_markup_removes_remaining_tags() {
        assert_eq!(strip_markup("<span class=\"x\">hi</span> there"), "hi there");
        assert_eq!(strip_markup("<img src='a.png'>"), "");
    }

    #[test]
    fn strip_markup_decodes_only_the_known_entities() {
        assert_eq!(strip_markup("a&nbsp;b"), "a b");
        assert_eq!(strip_markup("it&#39;s"), "it's");
        assert_eq!(strip_markup("&quot;q&quot;"), "\"q\"");
        assert_eq!(strip_markup("a&amp;b"), "a&b");
        // No general entity decoding.
        assert_eq!(strip_markup("x&lt;y"), "x&lt;y");
    }

    #[test]
    fn strip_markup_collapses_newline_runs() {
        assert_eq!(strip_markup("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(strip_markup("a<br><br><br>b"), "a\n\nb");
    }

    #[test]
    fn strip_markup_trims() {
        assert_eq!(strip_markup("  <p>x</p>  "), "x");
    }

    #[test]
    fn tokenize_lowercases_and_splits_on_non_word_runs() {
        assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
        assert_eq!(tokenize("thread_wait(tid)"), vec!["thread_wait", "tid"]);
        assert_eq!(tokenize("a--b??c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn tokenize_preserves_duplicates_and_order() {
        assert_eq!(tokenize("go go gadget"), vec!["go", "go", "gadget"]);
    }

    #[test]
    fn tokenize_empty_and_symbol_only_inputs() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("!!! ???").is_empty());
    }
}
