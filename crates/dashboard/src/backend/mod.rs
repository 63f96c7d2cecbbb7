//! Client for the external content backend.
//!
//! The backend owns all durable store data; this module is the only
//! place the dashboard talks to it. Plain REST/JSON over `reqwest`,
//! with a short-lived `moka` cache for the page catalog and page
//! detail. A successful update invalidates the affected entries so the
//! mandatory re-fetch after an apply hits the network.
//!
//! # Endpoints
//!
//! | Endpoint | Method | Purpose |
//! |---|---|---|
//! | `/auth/shopify?shop=<domain>` | redirect (GET) | OAuth initiation (navigation, not a call) |
//! | `/connection/status?shop=<domain>` | GET | Connection check |
//! | `/api/shopify/pages` | GET | Page catalog |
//! | `/api/content/content/{pageId}` | GET | Page title + body |
//! | `/api/content/suggest` | POST | AI rewrite suggestion |
//! | `/api/content/update/{pageId}` | PUT | Apply a rewrite |

mod client;
pub mod types;

pub use client::BackendClient;
pub use types::{PageDetail, PageSummary, SuggestRequest, UpdateRequest};

use async_trait::async_trait;
use thiserror::Error;

use pagecraft_core::{PageId, ShopDomain};

use crate::models::session::ShopCredentials;

/// Errors that can occur when talking to the content backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status.
    #[error("backend returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rate limited by the backend.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),
}

/// Operations the editor workflow needs from the content backend.
///
/// [`BackendClient`] is the production implementation; tests substitute
/// a deterministic in-memory double.
#[async_trait]
pub trait ContentBackend: Send + Sync {
    /// Check whether the store is connected.
    async fn connection_status(&self, shop: &ShopDomain) -> Result<bool, BackendError>;

    /// Fetch the list of editable pages for the store.
    async fn list_pages(&self, creds: &ShopCredentials) -> Result<Vec<PageSummary>, BackendError>;

    /// Fetch title and body for one page.
    async fn page_content(
        &self,
        creds: &ShopCredentials,
        page: &PageId,
    ) -> Result<PageDetail, BackendError>;

    /// Request an AI rewrite for a selected passage.
    async fn suggest(
        &self,
        creds: &ShopCredentials,
        request: SuggestRequest,
    ) -> Result<String, BackendError>;

    /// Apply a rewrite to a page. Returns the updated page.
    async fn update_page(
        &self,
        creds: &ShopCredentials,
        page: &PageId,
        request: UpdateRequest,
    ) -> Result<PageDetail, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        let err = BackendError::RateLimited(30);
        assert_eq!(err.to_string(), "rate limited, retry after 30 seconds");

        let err = BackendError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "backend returned HTTP 502: bad gateway");
    }
}
