//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the extractor:
//! - Building one HTTP client with a browser-like user agent
//! - GET requests returning the response body
//! - Mapping non-success statuses and transport failures to errors
//!
//! There is no retry logic. Unless `timeout-secs` is configured, the
//! transport's default timeout applies.

use crate::config::FetcherConfig;
use crate::ExtractError;
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// Some servers reject requests without a browser user agent, so the
/// configured agent string is sent on every request.
///
/// # Example
///
/// ```no_run
/// use comment_sieve::config::FetcherConfig;
/// use comment_sieve::extractor::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent.as_str())
        .gzip(true)
        .brotli(true);

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Fetches a URL and returns its body as text
///
/// # Returns
///
/// * `Ok(String)` - Body of a 2xx response
/// * `Err(ExtractError::HttpStatus)` - Any non-2xx status
/// * `Err(ExtractError::Transport)` - Connection, TLS, timeout, or body read failure
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, ExtractError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| transport_error(url, source))?;

    let status = response.status();
    tracing::debug!("GET {} -> {}", url, status);

    if !status.is_success() {
        return Err(ExtractError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|source| transport_error(url, source))
}

fn transport_error(url: &str, source: reqwest::Error) -> ExtractError {
    if source.is_timeout() {
        tracing::debug!("Request timeout for {}", url);
    } else if source.is_connect() {
        tracing::debug!("Connection failed for {}", url);
    }

    ExtractError::Transport {
        url: url.to_string(),
        source,
    }
}
