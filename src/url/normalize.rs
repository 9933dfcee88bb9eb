use url::Url;

/// Suffix that selects Reddit's structured representation of a page
pub const JSON_SUFFIX: &str = ".json";

/// Rewrites a Reddit page URL to its structured JSON endpoint
///
/// # Rewrite Rules
///
/// 1. A path already ending in `.json` is left unchanged
/// 2. Otherwise trailing slashes are removed from the path
/// 3. `.json` is appended to the path
///
/// The query string and fragment are preserved, so `?sort=top` keeps working.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use comment_sieve::url::to_json_endpoint;
///
/// let url = Url::parse("https://www.reddit.com/r/rust/comments/abc/title/").unwrap();
/// assert_eq!(
///     to_json_endpoint(&url).as_str(),
///     "https://www.reddit.com/r/rust/comments/abc/title.json"
/// );
/// ```
pub fn to_json_endpoint(url: &Url) -> Url {
    if url.path().ends_with(JSON_SUFFIX) {
        return url.clone();
    }

    let mut endpoint = url.clone();
    let path = format!("{}{}", url.path().trim_end_matches('/'), JSON_SUFFIX);
    endpoint.set_path(&path);
    endpoint
}
