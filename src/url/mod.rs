//! URL handling module for Comment-Sieve
//!
//! This module provides domain extraction, source classification, and the
//! Reddit JSON endpoint rewrite.

mod domain;
mod normalize;

use crate::config::RedditConfig;

// Re-export main functions
pub use domain::{extract_domain, parse_http_url};
pub use normalize::{to_json_endpoint, JSON_SUFFIX};

/// Which parser handles a URL
///
/// Supporting a new platform means adding a variant here, a check in
/// [`classify_url`], and a parser in the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Reddit thread, parsed from the structured JSON endpoint
    Reddit,
    /// Any other page, parsed with HTML heuristics
    Generic,
}

/// Classifies a domain according to the Reddit configuration
///
/// # Arguments
///
/// * `domain` - The lowercase host of the URL
/// * `config` - Reddit configuration holding the domain token
///
/// # Examples
///
/// ```
/// use comment_sieve::config::RedditConfig;
/// use comment_sieve::url::{classify_url, SourceKind};
///
/// let config = RedditConfig::default();
/// assert_eq!(classify_url("old.reddit.com", &config), SourceKind::Reddit);
/// assert_eq!(classify_url("news.ycombinator.com", &config), SourceKind::Generic);
/// ```
pub fn classify_url(domain: &str, config: &RedditConfig) -> SourceKind {
    if domain.contains(&config.domain_token.to_lowercase()) {
        SourceKind::Reddit
    } else {
        SourceKind::Generic
    }
}
