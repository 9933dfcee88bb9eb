//! Integration tests for the extractor
//!
//! These tests use wiremock to create mock HTTP servers and exercise the
//! full fetch-and-parse cycle end-to-end.

use comment_sieve::config::{Config, DEFAULT_USER_AGENT};
use comment_sieve::{Diagnostic, ErrorKind, ExtractError, Extractor};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REDDIT_PAYLOAD: &str = r#"[
  {"kind": "Listing", "data": {"children": [{"kind": "t3", "data": {"title": "Post"}}]}},
  {"kind": "Listing", "data": {"children": [
    {"kind": "t1", "data": {
      "author": "alice", "body": "Top level", "score": 12,
      "created_utc": 1700000000.0, "id": "c1", "permalink": "/r/x/comments/1/t/c1/",
      "replies": {"kind": "Listing", "data": {"children": [
        {"kind": "t1", "data": {
          "author": "bob", "body": "A reply", "score": 3,
          "created_utc": 1700000100.0, "id": "c2", "permalink": "/r/x/comments/1/t/c2/",
          "replies": ""
        }},
        {"kind": "more", "data": {"count": 4, "children": ["c9"]}}
      ]}}
    }},
    {"kind": "t1", "data": {
      "author": "carol", "body": "Second top level", "score": 1,
      "created_utc": 1700000200.0, "id": "c3", "permalink": "/r/x/comments/1/t/c3/",
      "replies": ""
    }}
  ]}}
]"#;

const COMMENTS_PAGE: &str = r#"<html><head><title>Blog</title></head><body>
    <article>The article body is not a comment.</article>
    <div class="comment">First reader comment here</div>
    <div class="comment">Second reader comment here</div>
    <div class="comment">Third reader comment here</div>
    <div class="reply">A reply that should not be used</div>
</body></html>"#;

fn extractor() -> Extractor {
    Extractor::new(Config::default()).expect("Failed to create extractor")
}

/// An extractor that routes the mock server's host to the Reddit parser
fn reddit_extractor(server: &MockServer) -> Extractor {
    let host = url::Url::parse(&server.uri())
        .expect("Failed to parse mock URI")
        .host_str()
        .expect("Mock URI has no host")
        .to_string();

    let mut config = Config::default();
    config.reddit.domain_token = host;
    Extractor::new(config).expect("Failed to create extractor")
}

async fn mount_html(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn mount_json(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "application/json"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_generic_extraction_from_page() {
    let server = MockServer::start().await;
    mount_html(&server, "/post", COMMENTS_PAGE).await;

    let records = extractor()
        .extract(&format!("{}/post", server.uri()))
        .await
        .expect("Extraction failed");

    assert_eq!(records.len(), 3);
    assert!(records
        .iter()
        .all(|r| r.source.as_deref() == Some(".comment")));
    assert!(records.iter().all(|r| r.author == "Unknown" && r.depth == 0));
    assert_eq!(records[0].text, "First reader comment here");
    assert_eq!(records[2].id, "generic_2");
}

#[tokio::test]
async fn test_reddit_thread_via_json_endpoint() {
    let server = MockServer::start().await;
    mount_json(&server, "/r/x/comments/1/t.json", REDDIT_PAYLOAD).await;

    let records = extractor()
        .extract_reddit(&format!("{}/r/x/comments/1/t/", server.uri()))
        .await
        .expect("Extraction failed");

    let summary: Vec<_> = records
        .iter()
        .map(|r| (r.author.as_str(), r.depth, r.score))
        .collect();
    assert_eq!(
        summary,
        vec![("alice", 0, Some(12)), ("bob", 1, Some(3)), ("carol", 0, Some(1))]
    );
    assert_eq!(
        records[1].permalink.as_deref(),
        Some("https://reddit.com/r/x/comments/1/t/c2/")
    );
}

#[tokio::test]
async fn test_dispatch_routes_reddit_host() {
    let server = MockServer::start().await;
    mount_json(&server, "/r/x/comments/1/t.json", REDDIT_PAYLOAD).await;

    let records = reddit_extractor(&server)
        .extract(&format!("{}/r/x/comments/1/t", server.uri()))
        .await
        .expect("Extraction failed");

    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.source.is_none()));
}

#[tokio::test]
async fn test_configured_user_agent_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/post"))
        .and(header("user-agent", "comment-sieve-test/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(COMMENTS_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.fetcher.user_agent = "comment-sieve-test/1.0".to_string();
    let extractor = Extractor::new(config).expect("Failed to create extractor");

    let records = extractor
        .extract_generic(&format!("{}/post", server.uri()))
        .await
        .expect("Extraction failed");
    assert_eq!(records.len(), 3);
}

#[test]
fn test_default_user_agent_looks_like_a_browser() {
    let config = Config::default();
    assert_eq!(config.fetcher.user_agent, DEFAULT_USER_AGENT);
    assert!(DEFAULT_USER_AGENT.starts_with("Mozilla/5.0"));
}

#[tokio::test]
async fn test_non_success_status_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/missing", server.uri());
    let err = extractor()
        .extract_generic(&url)
        .await
        .expect_err("Expected a network error");

    assert_eq!(err.kind(), ErrorKind::Network);
    match err {
        ExtractError::HttpStatus { url: failed, status } => {
            assert_eq!(status, 404);
            assert_eq!(failed, url);
        }
        other => panic!("Unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_malformed_reddit_payload() {
    let server = MockServer::start().await;
    mount_html(&server, "/r/x/comments/1/t.json", "<html>Blocked</html>").await;

    let err = extractor()
        .extract_reddit(&format!("{}/r/x/comments/1/t", server.uri()))
        .await
        .expect_err("Expected a malformed payload error");

    assert_eq!(err.kind(), ErrorKind::MalformedPayload);
}

#[tokio::test]
async fn test_empty_reddit_payload_yields_no_comments() {
    let server = MockServer::start().await;
    mount_json(&server, "/r/x/comments/1/t.json", "[]").await;

    let records = extractor()
        .extract_reddit(&format!("{}/r/x/comments/1/t", server.uri()))
        .await
        .expect("Extraction failed");

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_lenient_extraction_reports_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let extraction = extractor()
        .extract_or_empty(&format!("{}/post", server.uri()))
        .await;

    assert!(extraction.records.is_empty());
    assert!(extraction.is_failure());
    match extraction.diagnostic {
        Some(Diagnostic::Failed { kind, message }) => {
            assert_eq!(kind, ErrorKind::Network);
            assert!(message.contains("503"));
        }
        other => panic!("Unexpected diagnostic: {:?}", other),
    }
}

#[tokio::test]
async fn test_lenient_extraction_reports_no_comments() {
    let server = MockServer::start().await;
    mount_html(&server, "/plain", "<html><body><p>Nothing to see.</p></body></html>").await;

    let extraction = extractor()
        .extract_or_empty(&format!("{}/plain", server.uri()))
        .await;

    assert!(extraction.records.is_empty());
    assert!(!extraction.is_failure());
    assert_eq!(extraction.diagnostic, Some(Diagnostic::NoComments));
}

#[tokio::test]
async fn test_lenient_extraction_success_has_no_diagnostic() {
    let server = MockServer::start().await;
    mount_html(&server, "/post", COMMENTS_PAGE).await;

    let extraction = extractor()
        .extract_or_empty(&format!("{}/post", server.uri()))
        .await;

    assert_eq!(extraction.records.len(), 3);
    assert_eq!(extraction.diagnostic, None);
}

#[tokio::test]
async fn test_repeated_reddit_extraction_is_identical() {
    let server = MockServer::start().await;
    mount_json(&server, "/r/x/comments/1/t.json", REDDIT_PAYLOAD).await;

    let extractor = extractor();
    let url = format!("{}/r/x/comments/1/t", server.uri());
    let first = extractor.extract_reddit(&url).await.expect("Extraction failed");
    let second = extractor.extract_reddit(&url).await.expect("Extraction failed");

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn test_deep_reddit_thread_is_fully_extracted() {
    let levels = 300;
    let mut body = String::from(r#"[{}, {"data": {"children": ["#);
    for i in 0..levels {
        body.push_str(&format!(
            r#"{{"kind": "t1", "data": {{"author": "u{}", "body": "reply", "replies": {{"data": {{"children": ["#,
            i
        ));
    }
    body.push_str(r#"{"kind": "t1", "data": {"author": "last", "body": "end"}}"#);
    body.push_str(&"]}}}}".repeat(levels));
    body.push_str("]}}]");

    let server = MockServer::start().await;
    mount_json(&server, "/r/x/comments/1/t.json", &body).await;

    let records = extractor()
        .extract_reddit(&format!("{}/r/x/comments/1/t", server.uri()))
        .await
        .expect("Extraction failed");

    assert_eq!(records.len(), levels + 1);
    assert_eq!(records[levels].author, "last");
    assert_eq!(records[levels].depth, levels);
}
