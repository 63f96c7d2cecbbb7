//! HTTP-level tests for the content backend client.

#![allow(clippy::unwrap_used)]

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

use pagecraft_core::{EnhancementMode, PageId, ShopDomain};
use pagecraft_dashboard::backend::types::{SuggestRequest, UpdateRequest};
use pagecraft_dashboard::backend::{BackendClient, BackendError, ContentBackend};
use pagecraft_dashboard::config::BackendConfig;
use pagecraft_dashboard::models::session::ShopCredentials;

fn client_for(server: &ServerGuard) -> BackendClient {
    BackendClient::new(&BackendConfig {
        base_url: server.url(),
    })
}

fn shop() -> ShopDomain {
    ShopDomain::parse("mystore").unwrap()
}

fn cookie_credentials() -> ShopCredentials {
    ShopCredentials::new(shop(), None)
}

#[tokio::test]
async fn connection_status_passes_shop_as_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/connection/status")
        .match_query(Matcher::UrlEncoded(
            "shop".into(),
            "mystore.myshopify.com".into(),
        ))
        .with_body(r#"{"connected":true}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let connected = client.connection_status(&shop()).await.unwrap();

    assert!(connected);
    mock.assert_async().await;
}

#[tokio::test]
async fn list_pages_sends_shop_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/shopify/pages")
        .match_header("shop", "mystore.myshopify.com")
        .with_body(r#"[{"id":"101","title":"About Us"},{"id":"102","title":"FAQ"}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let pages = client.list_pages(&cookie_credentials()).await.unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].id.as_str(), "101");
    assert_eq!(pages[1].title, "FAQ");
    mock.assert_async().await;
}

#[tokio::test]
async fn legacy_token_rides_in_its_own_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/shopify/pages")
        .match_header("shop", "mystore.myshopify.com")
        .match_header("x-shopify-access-token", "shpat_test")
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server);
    let creds = ShopCredentials::new(shop(), Some("shpat_test".to_string()));
    let pages = client.list_pages(&creds).await.unwrap();

    assert!(pages.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn page_content_maps_error_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/content/content/999")
        .with_status(404)
        .with_body("page not found")
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client
        .page_content(&cookie_credentials(), &PageId::new("999"))
        .await;

    match result {
        Err(BackendError::Status { status, body }) => {
            assert_eq!(status, 404);
            assert_eq!(body, "page not found");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn suggest_posts_camel_case_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/content/suggest")
        .match_header("shop", "mystore.myshopify.com")
        .match_body(Matcher::Json(json!({
            "selectedContent": "old headline",
            "context": "About Us",
            "enhancement": "seo",
        })))
        .with_body(r#"{"suggestion":"New SEO Headline"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let suggestion = client
        .suggest(
            &cookie_credentials(),
            SuggestRequest {
                selected_content: "old headline".to_string(),
                context: "About Us".to_string(),
                enhancement: EnhancementMode::Seo,
            },
        )
        .await
        .unwrap();

    assert_eq!(suggestion, "New SEO Headline");
    mock.assert_async().await;
}

#[tokio::test]
async fn page_content_is_cached_until_update() {
    let mut server = Server::new_async().await;
    let creds = cookie_credentials();
    let page = PageId::new("101");

    let stale = server
        .mock("GET", "/api/content/content/101")
        .with_body(r#"{"title":"About Us","content":"<p>old headline</p>"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let first = client.page_content(&creds, &page).await.unwrap();
    let second = client.page_content(&creds, &page).await.unwrap();

    // Second call served from cache, single upstream hit
    assert_eq!(first.content, second.content);
    stale.assert_async().await;

    let put = server
        .mock("PUT", "/api/content/update/101")
        .match_body(Matcher::Json(json!({
            "originalContent": "old headline",
            "newContent": "New SEO Headline",
            "fullPageContent": "<p>old headline</p>",
        })))
        .with_body(r#"{"title":"About Us","content":"<p>New SEO Headline</p>"}"#)
        .create_async()
        .await;
    let fresh = server
        .mock("GET", "/api/content/content/101")
        .with_body(r#"{"title":"About Us","content":"<p>New SEO Headline</p>"}"#)
        .expect(1)
        .create_async()
        .await;

    client
        .update_page(
            &creds,
            &page,
            UpdateRequest {
                original_content: "old headline".to_string(),
                new_content: "New SEO Headline".to_string(),
                full_page_content: "<p>old headline</p>".to_string(),
            },
        )
        .await
        .unwrap();

    // Update invalidated the cached copy, so this goes upstream again
    let reloaded = client.page_content(&creds, &page).await.unwrap();
    assert_eq!(reloaded.content, "<p>New SEO Headline</p>");
    put.assert_async().await;
    fresh.assert_async().await;
}

#[tokio::test]
async fn rate_limit_carries_retry_after() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/shopify/pages")
        .with_status(429)
        .with_header("Retry-After", "7")
        .with_body("slow down")
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.list_pages(&cookie_credentials()).await;

    assert!(matches!(result, Err(BackendError::RateLimited(7))));
}
