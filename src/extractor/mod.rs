//! Extractor module for fetching pages and pulling out comments
//!
//! This module contains the core extraction logic, including:
//! - HTTP fetching with a shared client
//! - Reddit comment tree parsing
//! - Heuristic HTML comment extraction driven by a selector rule table
//! - Dispatch between the two by URL host

mod fetcher;
mod generic;
mod reddit;
mod rules;

pub use fetcher::{build_http_client, fetch_text};
pub use generic::parse_generic_html;
pub use reddit::{parse_reddit_payload, COMMENT_KIND, MORE_KIND};
pub use rules::{RuleTable, SelectorRule};

use crate::config::{validate, Config};
use crate::record::CommentRecord;
use crate::url::{classify_url, extract_domain, parse_http_url, to_json_endpoint, SourceKind};
use crate::{ErrorKind, ExtractError, UrlError};
use chrono::Utc;
use reqwest::Client;
use url::Url;

/// Likely reasons an extraction found nothing, shown to users
pub const NO_COMMENTS_GUIDANCE: &[&str] = &[
    "The URL doesn't contain comments",
    "The website blocks automated access",
    "The comment structure is not recognized",
    "Network issues or rate limiting",
];

/// Why an extraction came back empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Extraction succeeded but found no comments
    NoComments,
    /// Extraction failed
    Failed { kind: ErrorKind, message: String },
}

impl Diagnostic {
    /// Returns a one-line message suitable for users
    pub fn message(&self) -> String {
        match self {
            Self::NoComments => "No comments found".to_string(),
            Self::Failed { message, .. } => message.clone(),
        }
    }
}

/// Outcome of a lenient extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Extracted records; empty whenever `diagnostic` is set
    pub records: Vec<CommentRecord>,

    /// Present when nothing was extracted
    pub diagnostic: Option<Diagnostic>,
}

impl Extraction {
    /// Returns true if the extraction failed, as opposed to finding nothing
    pub fn is_failure(&self) -> bool {
        matches!(self.diagnostic, Some(Diagnostic::Failed { .. }))
    }
}

/// Comment extractor holding the shared HTTP client and compiled rules
///
/// Construct one per process and share it by reference; the client pools
/// connections and is safe for concurrent use.
pub struct Extractor {
    config: Config,
    rules: RuleTable,
    client: Client,
}

impl Extractor {
    /// Creates a new extractor from a configuration
    ///
    /// Selector syntax is checked here, when the rule table is compiled.
    ///
    /// # Returns
    ///
    /// * `Ok(Extractor)` - Ready to extract
    /// * `Err(ExtractError)` - Invalid configuration or HTTP client setup failure
    pub fn new(config: Config) -> Result<Self, ExtractError> {
        validate(&config)?;
        let rules = RuleTable::compile(&config.generic.selectors)?;
        let client = build_http_client(&config.fetcher)?;

        Ok(Self {
            config,
            rules,
            client,
        })
    }

    /// Returns the active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns which parser would handle a URL
    pub fn source_kind(&self, url_str: &str) -> Result<SourceKind, ExtractError> {
        let url = parse_http_url(url_str)?;
        self.classify(&url)
    }

    fn classify(&self, url: &Url) -> Result<SourceKind, ExtractError> {
        let domain = extract_domain(url).ok_or(UrlError::MissingDomain)?;
        Ok(classify_url(&domain, &self.config.reddit))
    }

    /// Extracts comments from a URL, routing by host
    ///
    /// Reddit hosts go through the structured JSON endpoint; everything else
    /// goes through the HTML heuristics.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<CommentRecord>)` - Extracted records, possibly empty
    /// * `Err(ExtractError)` - Invalid URL, network failure, or malformed payload
    pub async fn extract(&self, url_str: &str) -> Result<Vec<CommentRecord>, ExtractError> {
        let url = parse_http_url(url_str)?;

        let records = match self.classify(&url)? {
            SourceKind::Reddit => self.extract_reddit_url(&url).await?,
            SourceKind::Generic => self.extract_generic_url(&url).await?,
        };

        tracing::info!("Extracted {} comments from {}", records.len(), url);
        Ok(records)
    }

    /// Extracts comments without ever failing
    ///
    /// Errors are logged and turned into an empty result with a
    /// [`Diagnostic::Failed`]; an empty result carries
    /// [`Diagnostic::NoComments`].
    pub async fn extract_or_empty(&self, url_str: &str) -> Extraction {
        match self.extract(url_str).await {
            Ok(records) if records.is_empty() => {
                tracing::warn!("No comments found at {}", url_str);
                Extraction {
                    records,
                    diagnostic: Some(Diagnostic::NoComments),
                }
            }
            Ok(records) => Extraction {
                records,
                diagnostic: None,
            },
            Err(e) => {
                tracing::error!("Error extracting comments from {}: {}", url_str, e);
                Extraction {
                    records: Vec::new(),
                    diagnostic: Some(Diagnostic::Failed {
                        kind: e.kind(),
                        message: e.to_string(),
                    }),
                }
            }
        }
    }

    /// Extracts comments from a Reddit thread URL
    pub async fn extract_reddit(&self, url_str: &str) -> Result<Vec<CommentRecord>, ExtractError> {
        let url = parse_http_url(url_str)?;
        self.extract_reddit_url(&url).await
    }

    /// Extracts comments from any page using the selector rules
    pub async fn extract_generic(&self, url_str: &str) -> Result<Vec<CommentRecord>, ExtractError> {
        let url = parse_http_url(url_str)?;
        self.extract_generic_url(&url).await
    }

    async fn extract_reddit_url(&self, url: &Url) -> Result<Vec<CommentRecord>, ExtractError> {
        let endpoint = to_json_endpoint(url);
        tracing::debug!("Using Reddit endpoint {}", endpoint);

        let body = fetch_text(&self.client, endpoint.as_str()).await?;

        parse_reddit_payload(&body, &self.config).map_err(|e| ExtractError::MalformedPayload {
            url: endpoint.to_string(),
            message: e.to_string(),
        })
    }

    async fn extract_generic_url(&self, url: &Url) -> Result<Vec<CommentRecord>, ExtractError> {
        let body = fetch_text(&self.client, url.as_str()).await?;
        Ok(parse_generic_html(&body, &self.rules, &self.config, Utc::now()))
    }
}
