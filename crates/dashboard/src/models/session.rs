//! Session-stored types.
//!
//! The session is the dashboard's only local state: which store is
//! linked, the in-progress editor selection, and the one-shot notice
//! shown after a redirect. Everything durable lives in the content
//! backend.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use pagecraft_core::{EnhancementMode, Notice, PageId, ShopDomain};

/// Credentials for a linked store.
///
/// Unifies the two auth schemes the dashboard has to support: the
/// session-cookie flow (token absent, backend relies on its own
/// ambient session) and the legacy callback that hands the client an
/// explicit access token. Both resolve to this one object, stored
/// under a single session key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopCredentials {
    /// Normalized store domain.
    pub shop: ShopDomain,
    /// Explicit access token from the legacy callback, if any.
    pub access_token: Option<String>,
}

impl ShopCredentials {
    #[must_use]
    pub const fn new(shop: ShopDomain, access_token: Option<String>) -> Self {
        Self { shop, access_token }
    }
}

/// Per-page editor state.
///
/// Keyed to one page id; mounting a different page replaces it, which
/// clears any stale selection or suggestion (and means a late response
/// for a previous page no longer matches anything).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorState {
    /// Page this state belongs to.
    pub page_id: PageId,
    /// The merchant's highlighted passage, trimmed. Cleared on apply.
    pub selection: Option<String>,
    /// AI rewrite for the current selection. Cleared on apply or on a
    /// new selection.
    pub suggestion: Option<String>,
    /// Last chosen enhancement mode, kept so the selector is sticky.
    pub mode: EnhancementMode,
}

impl EditorState {
    /// Fresh state for a newly mounted page.
    #[must_use]
    pub fn new(page_id: PageId) -> Self {
        Self {
            page_id,
            selection: None,
            suggestion: None,
            mode: EnhancementMode::default(),
        }
    }
}

/// Session keys.
pub mod keys {
    /// Key for the linked store credentials.
    pub const CREDENTIALS: &str = "shop_credentials";

    /// Key for the per-page editor state.
    pub const EDITOR: &str = "editor_state";

    /// Key for the one-shot notice flashed across a redirect.
    pub const NOTICE: &str = "notice";
}

/// Flash a notice to be shown on the next rendered view.
pub async fn flash(session: &Session, notice: Notice) {
    if let Err(e) = session.insert(keys::NOTICE, &notice).await {
        tracing::error!("Failed to store notice in session: {}", e);
    }
}

/// Take the flashed notice, if any, consuming it.
pub async fn take_notice(session: &Session) -> Option<Notice> {
    session.remove(keys::NOTICE).await.ok().flatten()
}

/// Read the linked store credentials, if any.
pub async fn current_credentials(session: &Session) -> Option<ShopCredentials> {
    session.get(keys::CREDENTIALS).await.ok().flatten()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn editor_state_starts_empty() {
        let state = EditorState::new(PageId::new("101"));
        assert!(state.selection.is_none());
        assert!(state.suggestion.is_none());
        assert_eq!(state.mode, EnhancementMode::Improve);
    }

    #[test]
    fn credentials_round_trip_through_serde() {
        let creds = ShopCredentials::new(
            ShopDomain::parse("mystore").unwrap(),
            Some("shpat_test".to_string()),
        );
        let json = serde_json::to_string(&creds).unwrap();
        let back: ShopCredentials = serde_json::from_str(&json).unwrap();
        assert_eq!(back.shop.as_str(), "mystore.myshopify.com");
        assert_eq!(back.access_token.as_deref(), Some("shpat_test"));
    }
}
