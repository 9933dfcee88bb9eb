use serde::Deserialize;

/// Browser-like user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Selectors tried by the generic extractor, most specific first
pub const DEFAULT_SELECTORS: &[&str] = &[
    ".comment",
    ".comment-item",
    ".comment-content",
    "[class*=\"comment\"]",
    "[id*=\"comment\"]",
    ".reply",
    ".response",
    ".discussion-item",
];

/// Main configuration structure for Comment-Sieve
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetcher: FetcherConfig,
    pub reddit: RedditConfig,
    pub generic: GenericConfig,
    pub output: OutputConfig,
}

/// HTTP fetcher configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// User agent header value
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Overall request timeout in seconds; transport default when unset
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

/// Reddit-specific configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RedditConfig {
    /// Hosts containing this token are routed to the Reddit parser
    #[serde(rename = "domain-token")]
    pub domain_token: String,

    /// Prefix for relative permalinks
    #[serde(rename = "permalink-base")]
    pub permalink_base: String,

    /// Replies nested deeper than this are dropped
    #[serde(rename = "max-depth")]
    pub max_depth: Option<usize>,
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            domain_token: "reddit.com".to_string(),
            permalink_base: "https://reddit.com".to_string(),
            max_depth: None,
        }
    }
}

/// Generic HTML extractor configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenericConfig {
    /// CSS selectors in priority order
    pub selectors: Vec<String>,

    /// Maximum elements inspected per selector
    #[serde(rename = "max-candidates")]
    pub max_candidates: usize,

    /// Candidates with this many characters or fewer are discarded
    #[serde(rename = "min-text-length")]
    pub min_text_length: usize,
}

impl Default for GenericConfig {
    fn default() -> Self {
        Self {
            selectors: DEFAULT_SELECTORS.iter().map(|s| s.to_string()).collect(),
            max_candidates: 50,
            min_text_length: 10,
        }
    }
}

/// Text truncation configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Maximum characters kept in a record's text
    #[serde(rename = "max-text-length")]
    pub max_text_length: usize,

    /// Maximum characters shown in the table projection
    #[serde(rename = "table-text-length")]
    pub table_text_length: usize,

    /// Marker appended to truncated text
    pub ellipsis: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_text_length: 500,
            table_text_length: 100,
            ellipsis: "...".to_string(),
        }
    }
}
