//! Black-box tests for the search gateway endpoint.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use websift_search::{MockProvider, SearchHit, SearchProvider, WebSearchService};
use websift_web::{AppState, router};

const API_KEY: &str = "test-secret";

fn app_with(provider: impl SearchProvider + 'static) -> Router {
    let service = WebSearchService::with_provider(Box::new(provider));
    router(AppState::new(service, API_KEY))
}

fn basic_hits() -> Vec<SearchHit> {
    vec![SearchHit::bare("http://a.com"), SearchHit::bare("http://b.com")]
}

fn advanced_hits() -> Vec<SearchHit> {
    vec![
        SearchHit {
            url: "http://example.com/page".to_string(),
            title: Some("Example Page".to_string()),
            description: Some("A page about examples".to_string()),
        },
        SearchHit {
            url: String::new(),
            title: Some("Ghost".to_string()),
            description: None,
        },
        SearchHit {
            url: "https://docs.rs/axum".to_string(),
            title: Some("axum".to_string()),
            description: Some("Web framework docs".to_string()),
        },
    ]
}

async fn post_search(app: Router, api_key: Option<&str>, body: &str) -> (StatusCode, Value) {
    let mut request = Request::builder()
        .method("POST")
        .uri("/apis/search")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(key) = api_key {
        request = request.header("x-api-key", key);
    }

    let response = app
        .oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn missing_query_is_rejected() {
    let app = app_with(MockProvider::with_hits(basic_hits()));
    let (status, body) = post_search(app, Some(API_KEY), r#"{}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing 'query' parameter");
}

#[tokio::test]
async fn empty_query_is_rejected() {
    let app = app_with(MockProvider::with_hits(basic_hits()));
    let (status, body) = post_search(app, Some(API_KEY), r#"{"query": ""}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing 'query' parameter");
}

#[tokio::test]
async fn non_numeric_num_results_is_rejected() {
    let app = app_with(MockProvider::with_hits(basic_hits()));
    let (status, body) = post_search(
        app,
        Some(API_KEY),
        r#"{"query": "rust", "num_results": "abc"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "'num_results' must be an integer");
}

#[tokio::test]
async fn numeric_string_num_results_is_accepted() {
    let app = app_with(MockProvider::with_hits(basic_hits()));
    let (status, body) = post_search(
        app,
        Some(API_KEY),
        r#"{"query": "rust", "num_results": "1"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn wrong_api_key_is_unauthorized() {
    let app = app_with(MockProvider::with_hits(basic_hits()));
    let (status, body) = post_search(app, Some("wrong"), r#"{"query": "rust"}"#).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn missing_api_key_is_unauthorized_even_with_garbage_body() {
    let app = app_with(MockProvider::with_hits(basic_hits()));
    let (status, body) = post_search(app, None, "not json at all").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn basic_mode_returns_bare_url_triples() {
    let app = app_with(MockProvider::with_hits(basic_hits()));
    let (status, body) = post_search(app, Some(API_KEY), r#"{"query": "rust"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "results": [
                {"url": "http://a.com", "title": null, "description": null},
                {"url": "http://b.com", "title": null, "description": null}
            ]
        })
    );
}

#[tokio::test]
async fn advanced_mode_builds_envelope_with_display_link() {
    let app = app_with(MockProvider::with_hits(advanced_hits()));
    let (status, body) = post_search(
        app,
        Some(API_KEY),
        r#"{"query": "rust", "advanced": true}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "customsearch#search");

    let items = body["items"].as_array().unwrap();
    // The empty-URL hit is dropped.
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["displayLink"], "example.com");
    assert_eq!(items[0]["link"], "http://example.com/page");
    assert_eq!(items[0]["snippet"], "A page about examples");
    assert_eq!(items[1]["displayLink"], "docs.rs");
}

#[tokio::test]
async fn advanced_mode_total_results_is_in_fabricated_range() {
    let app = app_with(MockProvider::with_hits(advanced_hits()));
    let (_, body) = post_search(
        app,
        Some(API_KEY),
        r#"{"query": "rust", "advanced": true}"#,
    )
    .await;

    let total: u64 = body["searchInformation"]["totalResults"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!((25_000..=150_000).contains(&total), "total = {total}");

    // The same count appears in both query descriptions.
    assert_eq!(body["queries"]["request"][0]["totalResults"], total.to_string());
    assert_eq!(body["queries"]["nextPage"][0]["totalResults"], total.to_string());
}

#[tokio::test]
async fn next_page_start_index_follows_num_results() {
    let app = app_with(MockProvider::with_hits(advanced_hits()));
    let (_, body) = post_search(
        app,
        Some(API_KEY),
        r#"{"query": "rust", "advanced": true, "num_results": 7}"#,
    )
    .await;

    assert_eq!(body["queries"]["nextPage"][0]["startIndex"], 8);
    assert_eq!(body["queries"]["nextPage"][0]["count"], 7);
    assert_eq!(body["queries"]["request"][0]["startIndex"], 1);
}

#[tokio::test]
async fn provider_failure_maps_to_500_without_items() {
    let app = app_with(MockProvider::failing("indexer exploded"));
    let (status, body) = post_search(
        app,
        Some(API_KEY),
        r#"{"query": "rust", "advanced": true}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("indexer exploded"));
    assert!(body.get("items").is_none());
    assert!(body.get("results").is_none());
}

#[tokio::test]
async fn unique_flag_is_accepted_but_never_deduplicates() {
    let app = app_with(MockProvider::with_hits(vec![
        SearchHit::bare("http://a.com"),
        SearchHit::bare("http://a.com"),
    ]));
    let (status, body) = post_search(
        app,
        Some(API_KEY),
        r#"{"query": "rust", "unique": true}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn invalid_json_body_is_rejected_after_auth() {
    let app = app_with(MockProvider::with_hits(basic_hits()));
    let (status, body) = post_search(app, Some(API_KEY), "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid JSON body");
}

#[tokio::test]
async fn landing_page_is_served() {
    let app = app_with(MockProvider::with_hits(Vec::new()));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Websift Search Gateway"));
}
