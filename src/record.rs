//! Comment records and text helpers
//!
//! A [`CommentRecord`] is one normalized unit of extracted discussion content.
//! Both parsers produce the same record type so the output layer never needs
//! to know where a comment came from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author recorded when Reddit omits the author field
pub const DELETED_AUTHOR: &str = "[deleted]";

/// Body recorded when Reddit omits the body field
pub const DELETED_TEXT: &str = "[deleted]";

/// Author recorded for comments found by HTML heuristics
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// A single extracted comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Comment author, or a sentinel when unknown
    pub author: String,

    /// Comment body, possibly truncated with an ellipsis
    pub text: String,

    /// Vote score; absent when the source has no voting
    pub score: Option<i64>,

    /// Creation time (capture time for HTML heuristics)
    pub created_at: Option<DateTime<Utc>>,

    /// Nesting level; 0 for top-level comments
    pub depth: usize,

    /// Source-local identifier
    pub id: String,

    /// Full URL of the comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,

    /// Selector that matched the comment element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl CommentRecord {
    /// Returns the text length in characters
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns false for the `Unknown` author of heuristic extraction
    pub fn has_known_author(&self) -> bool {
        self.author != UNKNOWN_AUTHOR
    }
}

/// Truncates `text` to at most `max_chars` characters
///
/// When truncation happens the ellipsis is appended, so the result is at most
/// `max_chars + ellipsis.chars().count()` characters long. Lengths are counted
/// in characters, never bytes.
///
/// # Examples
///
/// ```
/// use comment_sieve::record::truncate_with_ellipsis;
///
/// assert_eq!(truncate_with_ellipsis("hello world", 5, "..."), "hello...");
/// assert_eq!(truncate_with_ellipsis("hello", 5, "..."), "hello");
/// ```
pub fn truncate_with_ellipsis(text: &str, max_chars: usize, ellipsis: &str) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}{}", &text[..byte_index], ellipsis),
        None => text.to_string(),
    }
}

/// Collapses every whitespace run into one space and trims the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
