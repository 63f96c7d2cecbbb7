//! Wire types for the content backend API.
//!
//! Request bodies are camel-cased to match the backend's JSON field
//! names; responses are what the backend actually returns, nothing
//! more.

use serde::{Deserialize, Serialize};

use pagecraft_core::{EnhancementMode, PageId};

/// Response from `GET /connection/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionStatus {
    pub connected: bool,
}

/// Catalog entry from `GET /api/shopify/pages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub id: PageId,
    pub title: String,
}

/// Full page from `GET /api/content/content/{pageId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDetail {
    pub title: String,
    /// Raw HTML body. Untrusted; sanitize before rendering.
    pub content: String,
}

/// Body for `POST /api/content/suggest`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    /// The merchant's highlighted passage.
    pub selected_content: String,
    /// Page title, passed so the model sees where the passage lives.
    pub context: String,
    pub enhancement: EnhancementMode,
}

/// Response from `POST /api/content/suggest`.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestResponse {
    pub suggestion: String,
}

/// Body for `PUT /api/content/update/{pageId}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub original_content: String,
    pub new_content: String,
    /// Full current body, so the backend can locate the passage.
    pub full_page_content: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn suggest_request_serializes_camel_case() {
        let request = SuggestRequest {
            selected_content: "old headline".to_string(),
            context: "About Us".to_string(),
            enhancement: EnhancementMode::Seo,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["selectedContent"], "old headline");
        assert_eq!(json["context"], "About Us");
        assert_eq!(json["enhancement"], "seo");
    }

    #[test]
    fn update_request_serializes_camel_case() {
        let request = UpdateRequest {
            original_content: "a".to_string(),
            new_content: "b".to_string(),
            full_page_content: "<p>a</p>".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["originalContent"], "a");
        assert_eq!(json["newContent"], "b");
        assert_eq!(json["fullPageContent"], "<p>a</p>");
    }

    #[test]
    fn page_summary_deserializes_backend_shape() {
        let json = r#"[{"id": "101", "title": "About Us"}, {"id": "102", "title": "FAQ"}]"#;
        let pages: Vec<PageSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].id.as_str(), "101");
        assert_eq!(pages[1].title, "FAQ");
    }

    #[test]
    fn connection_status_deserializes() {
        let status: ConnectionStatus = serde_json::from_str(r#"{"connected": true}"#).unwrap();
        assert!(status.connected);
    }
}
