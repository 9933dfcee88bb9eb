//! Heuristic comment extraction from arbitrary HTML
//!
//! # Extraction Rules
//!
//! For each selector rule, in priority order:
//! 1. Take at most `max-candidates` matching elements
//! 2. Extract visible text, collapsing whitespace
//! 3. Drop candidates with `min-text-length` characters or fewer
//! 4. Truncate to `max-text-length` characters plus the ellipsis
//! 5. Stop as soon as one rule produced a record
//!
//! HTML carries no reliable authorship, scores, timestamps, or nesting, so
//! every record gets the `Unknown` author, no score, the capture time, and
//! depth 0.

use crate::config::Config;
use crate::extractor::rules::{RuleTable, SelectorRule};
use crate::record::{normalize_whitespace, truncate_with_ellipsis, CommentRecord, UNKNOWN_AUTHOR};
use chrono::{DateTime, Utc};
use scraper::{ElementRef, Html};

/// Elements whose text is never visible
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Extracts comment records from an HTML document
///
/// `captured_at` becomes every record's `created_at`, so the same document
/// and timestamp always produce the same records.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use comment_sieve::config::Config;
/// use comment_sieve::extractor::{parse_generic_html, RuleTable};
///
/// let config = Config::default();
/// let rules = RuleTable::compile(&config.generic.selectors).unwrap();
/// let html = r#"<div class="comment">A perfectly reasonable remark</div>"#;
///
/// let records = parse_generic_html(html, &rules, &config, Utc::now());
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].source.as_deref(), Some(".comment"));
/// ```
pub fn parse_generic_html(
    html: &str,
    rules: &RuleTable,
    config: &Config,
    captured_at: DateTime<Utc>,
) -> Vec<CommentRecord> {
    let document = Html::parse_document(html);

    for rule in rules.iter() {
        let records = apply_rule(&document, rule, config, captured_at);

        if records.is_empty() {
            tracing::trace!("Selector '{}' produced no comments", rule.name);
            continue;
        }

        tracing::debug!(
            "Selector '{}' (priority {}) matched {} comments",
            rule.name,
            rule.priority,
            records.len()
        );
        return records;
    }

    Vec::new()
}

/// Runs a single rule against the document
fn apply_rule(
    document: &Html,
    rule: &SelectorRule,
    config: &Config,
    captured_at: DateTime<Utc>,
) -> Vec<CommentRecord> {
    document
        .select(rule.selector())
        .take(config.generic.max_candidates)
        .enumerate()
        .filter_map(|(index, element)| {
            let text = visible_text(element);

            if text.chars().count() <= config.generic.min_text_length {
                return None;
            }

            Some(CommentRecord {
                author: UNKNOWN_AUTHOR.to_string(),
                text: truncate_with_ellipsis(
                    &text,
                    config.output.max_text_length,
                    &config.output.ellipsis,
                ),
                score: None,
                created_at: Some(captured_at),
                depth: 0,
                id: format!("generic_{}", index),
                permalink: None,
                source: Some(rule.name.clone()),
            })
        })
        .collect()
}

/// Collects an element's visible text with whitespace normalized
fn visible_text(element: ElementRef<'_>) -> String {
    let root = element.id();
    let mut raw = String::new();

    for node in element.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let hidden = node
            .ancestors()
            .take_while(|ancestor| ancestor.id() != root)
            .filter_map(|ancestor| ancestor.value().as_element())
            .any(|el| HIDDEN_ELEMENTS.contains(&el.name()));

        if !hidden {
            raw.push_str(text);
        }
    }

    normalize_whitespace(&raw)
}
