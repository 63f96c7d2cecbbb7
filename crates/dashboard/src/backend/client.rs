//! Content backend client implementation.
//!
//! Plain REST/JSON over `reqwest`. The page catalog and page detail are
//! cached with `moka` (60 second TTL); `update_page` invalidates both so
//! the post-apply reload always re-fetches.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use pagecraft_core::{PageId, ShopDomain};

use crate::config::BackendConfig;
use crate::models::session::ShopCredentials;

use super::types::{ConnectionStatus, PageDetail, PageSummary, SuggestRequest, SuggestResponse, UpdateRequest};
use super::{BackendError, ContentBackend};

/// Cache TTL for catalog and page detail entries.
const CACHE_TTL: Duration = Duration::from_secs(60);
const CACHE_CAPACITY: u64 = 256;

/// Header carrying the store domain on every store-data request.
const SHOP_HEADER: &str = "shop";
/// Header carrying the legacy explicit access token, when present.
const ACCESS_TOKEN_HEADER: &str = "x-shopify-access-token";

/// Cached backend responses.
#[derive(Clone)]
enum CacheValue {
    Pages(Arc<Vec<PageSummary>>),
    Page(Arc<PageDetail>),
}

/// Client for the external content backend.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<String, CacheValue>,
}

impl BackendClient {
    /// Create a new backend client.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(BackendClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                cache,
            }),
        }
    }

    /// URL the browser is sent to for the OAuth handoff.
    ///
    /// This is a full navigation, not an in-app request; the backend
    /// handles the provider handshake and redirects back to the
    /// dashboard with `shop`/`connected` query parameters.
    #[must_use]
    pub fn oauth_url(&self, shop: &ShopDomain) -> String {
        format!(
            "{}/auth/shopify?shop={}",
            self.inner.base_url,
            urlencoding::encode(shop.as_str())
        )
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    fn pages_key(shop: &ShopDomain) -> String {
        format!("pages:{shop}")
    }

    fn page_key(shop: &ShopDomain, page: &PageId) -> String {
        format!("page:{shop}:{page}")
    }

    /// Attach store credentials as headers.
    ///
    /// The `shop` header is always sent; the explicit token header only
    /// when the legacy callback provided one. Otherwise authorization
    /// rides on ambient session cookies held by the backend.
    fn with_credentials(
        request: reqwest::RequestBuilder,
        creds: &ShopCredentials,
    ) -> reqwest::RequestBuilder {
        let request = request.header(SHOP_HEADER, creds.shop.as_str());
        match &creds.access_token {
            Some(token) => request.header(ACCESS_TOKEN_HEADER, token),
            None => request,
        }
    }

    /// Read a JSON response, mapping rate limits and error statuses.
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(BackendError::RateLimited(retry_after));
        }

        // Body as text first for better error diagnostics
        let text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %text.chars().take(500).collect::<String>(),
                "content backend returned non-success status"
            );
            return Err(BackendError::Status {
                status: status.as_u16(),
                body: text.chars().take(200).collect(),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl ContentBackend for BackendClient {
    #[instrument(skip(self), fields(shop = %shop))]
    async fn connection_status(&self, shop: &ShopDomain) -> Result<bool, BackendError> {
        let response = self
            .inner
            .client
            .get(self.endpoint("/connection/status"))
            .query(&[("shop", shop.as_str())])
            .send()
            .await?;

        let status: ConnectionStatus = Self::read_json(response).await?;
        Ok(status.connected)
    }

    #[instrument(skip(self, creds), fields(shop = %creds.shop))]
    async fn list_pages(&self, creds: &ShopCredentials) -> Result<Vec<PageSummary>, BackendError> {
        let key = Self::pages_key(&creds.shop);
        if let Some(CacheValue::Pages(pages)) = self.inner.cache.get(&key).await {
            debug!("page catalog cache hit");
            return Ok(pages.as_ref().clone());
        }

        let request = self.inner.client.get(self.endpoint("/api/shopify/pages"));
        let response = Self::with_credentials(request, creds).send().await?;
        let pages: Vec<PageSummary> = Self::read_json(response).await?;

        self.inner
            .cache
            .insert(key, CacheValue::Pages(Arc::new(pages.clone())))
            .await;
        Ok(pages)
    }

    #[instrument(skip(self, creds), fields(shop = %creds.shop, page = %page))]
    async fn page_content(
        &self,
        creds: &ShopCredentials,
        page: &PageId,
    ) -> Result<PageDetail, BackendError> {
        let key = Self::page_key(&creds.shop, page);
        if let Some(CacheValue::Page(detail)) = self.inner.cache.get(&key).await {
            debug!("page detail cache hit");
            return Ok(detail.as_ref().clone());
        }

        let url = self.endpoint(&format!(
            "/api/content/content/{}",
            urlencoding::encode(page.as_str())
        ));
        let request = self.inner.client.get(url);
        let response = Self::with_credentials(request, creds).send().await?;
        let detail: PageDetail = Self::read_json(response).await?;

        self.inner
            .cache
            .insert(key, CacheValue::Page(Arc::new(detail.clone())))
            .await;
        Ok(detail)
    }

    #[instrument(skip(self, creds, request), fields(shop = %creds.shop, mode = %request.enhancement))]
    async fn suggest(
        &self,
        creds: &ShopCredentials,
        request: SuggestRequest,
    ) -> Result<String, BackendError> {
        let builder = self
            .inner
            .client
            .post(self.endpoint("/api/content/suggest"))
            .json(&request);
        let response = Self::with_credentials(builder, creds).send().await?;
        let suggestion: SuggestResponse = Self::read_json(response).await?;
        Ok(suggestion.suggestion)
    }

    #[instrument(skip(self, creds, request), fields(shop = %creds.shop, page = %page))]
    async fn update_page(
        &self,
        creds: &ShopCredentials,
        page: &PageId,
        request: UpdateRequest,
    ) -> Result<PageDetail, BackendError> {
        let url = self.endpoint(&format!(
            "/api/content/update/{}",
            urlencoding::encode(page.as_str())
        ));
        let builder = self.inner.client.put(url).json(&request);
        let response = Self::with_credentials(builder, creds).send().await?;
        let updated: PageDetail = Self::read_json(response).await?;

        // The stored copies are stale now; the caller re-fetches rather
        // than patching locally.
        self.inner
            .cache
            .invalidate(&Self::page_key(&creds.shop, page))
            .await;
        self.inner
            .cache
            .invalidate(&Self::pages_key(&creds.shop))
            .await;

        Ok(updated)
    }
}
