//! The select → suggest → apply editing workflow.
//!
//! Per mounted page the editor moves through
//! `Loading → Ready → (Selecting) → (Suggesting) → (Applying) → Ready`,
//! looping, with `Error` reachable from any fetch or mutate edge.
//! State lives in [`EditorState`]; every operation here either mutates
//! it or leaves it untouched on failure so the merchant can retry.
//!
//! The backend is reached through the [`ContentBackend`] trait so these
//! functions can be exercised against an in-memory double.

use thiserror::Error;

use pagecraft_core::{EnhancementMode, Notice};

use crate::backend::types::{SuggestRequest, UpdateRequest};
use crate::backend::{BackendError, ContentBackend, PageDetail};
use crate::models::session::{EditorState, ShopCredentials};

/// Errors surfaced by editor operations.
///
/// `Validation` is a recoverable input problem shown as a warning; the
/// rest are backend failures shown as error banners, with prior state
/// preserved for a user-initiated retry.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Bad or missing user input. No state was mutated.
    #[error("{0}")]
    Validation(String),

    /// Fetching the page failed.
    #[error("Failed to load page content. Please try again.")]
    Load(#[source] BackendError),

    /// The AI suggestion request failed. Selection is kept.
    #[error("Failed to get AI suggestions. Please try again.")]
    Suggest(#[source] BackendError),

    /// Applying the rewrite failed. Selection and suggestion are kept.
    #[error("Failed to update content. Please try again.")]
    Apply(#[source] BackendError),
}

impl EditorError {
    /// The notice to show the merchant for this error.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::Validation(text) => Notice::warning(text.clone()),
            other => Notice::error(other.to_string()),
        }
    }
}

/// Fetch title and body for the page.
///
/// # Errors
///
/// Returns [`EditorError::Load`] if the backend fetch fails.
pub async fn load_content(
    backend: &dyn ContentBackend,
    creds: &ShopCredentials,
    state: &EditorState,
) -> Result<PageDetail, EditorError> {
    backend
        .page_content(creds, &state.page_id)
        .await
        .map_err(EditorError::Load)
}

/// Store the merchant's highlighted text as the current selection.
///
/// Trims whitespace. A non-empty selection replaces any previous one
/// and clears a stale suggestion.
///
/// # Errors
///
/// Returns [`EditorError::Validation`] for empty or whitespace-only
/// input; the state is left unchanged.
pub fn select_text(state: &mut EditorState, raw: &str) -> Result<(), EditorError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EditorError::Validation(
            "Please select some content to enhance".to_string(),
        ));
    }

    state.selection = Some(trimmed.to_string());
    state.suggestion = None;
    Ok(())
}

/// Request an AI rewrite of the current selection.
///
/// Sends the selection with the page title as context. On success the
/// suggestion is stored; on failure the selection stays so the merchant
/// can retry.
///
/// # Errors
///
/// Returns [`EditorError::Validation`] if nothing is selected, or
/// [`EditorError::Suggest`] if the backend call fails.
pub async fn request_suggestion(
    backend: &dyn ContentBackend,
    creds: &ShopCredentials,
    state: &mut EditorState,
    page_title: &str,
    mode: EnhancementMode,
) -> Result<(), EditorError> {
    let Some(selection) = state.selection.clone() else {
        return Err(EditorError::Validation(
            "Please select content first".to_string(),
        ));
    };

    state.mode = mode;

    let request = SuggestRequest {
        selected_content: selection,
        context: page_title.to_string(),
        enhancement: mode,
    };

    let suggestion = backend
        .suggest(creds, request)
        .await
        .map_err(EditorError::Suggest)?;

    state.suggestion = Some(suggestion);
    Ok(())
}

/// Apply the suggestion to the page.
///
/// Sends the original passage, the rewrite, and the full current body
/// for context. Once the update lands, selection and suggestion are
/// cleared - the selected text no longer exists in the page, so a
/// retry would re-send a stale rewrite. The page is then re-fetched
/// from the backend (never patched locally, so client and server
/// cannot drift); if that reload fails the update still counts as
/// applied and `Ok(None)` is returned, leaving the next view fetch to
/// retry the read.
///
/// # Errors
///
/// Returns [`EditorError::Validation`] if selection or suggestion is
/// missing, or [`EditorError::Apply`] if the update fails. In both
/// cases the state is left untouched.
pub async fn apply_change(
    backend: &dyn ContentBackend,
    creds: &ShopCredentials,
    state: &mut EditorState,
    full_page_content: &str,
) -> Result<Option<PageDetail>, EditorError> {
    let (Some(selection), Some(suggestion)) = (state.selection.clone(), state.suggestion.clone())
    else {
        return Err(EditorError::Validation(
            "Please select content and generate AI suggestions first".to_string(),
        ));
    };

    let request = UpdateRequest {
        original_content: selection,
        new_content: suggestion,
        full_page_content: full_page_content.to_string(),
    };

    backend
        .update_page(creds, &state.page_id, request)
        .await
        .map_err(EditorError::Apply)?;

    // The write landed; the selected passage is gone from the page.
    state.selection = None;
    state.suggestion = None;

    // Full reload, not a local patch.
    match load_content(backend, creds, state).await {
        Ok(reloaded) => Ok(Some(reloaded)),
        Err(e) => {
            tracing::warn!(page = %state.page_id, error = %e, "Reload after update failed");
            Ok(None)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pagecraft_core::{NoticeKind, PageId};

    use super::*;

    fn state() -> EditorState {
        EditorState::new(PageId::new("101"))
    }

    #[test]
    fn select_text_rejects_empty_input() {
        let mut s = state();
        assert!(matches!(
            select_text(&mut s, ""),
            Err(EditorError::Validation(_))
        ));
        assert!(matches!(
            select_text(&mut s, "   "),
            Err(EditorError::Validation(_))
        ));
        assert!(s.selection.is_none());
    }

    #[test]
    fn select_text_trims_and_stores() {
        let mut s = state();
        select_text(&mut s, "  Buy now  ").unwrap();
        assert_eq!(s.selection.as_deref(), Some("Buy now"));
    }

    #[test]
    fn select_text_clears_stale_suggestion() {
        let mut s = state();
        s.selection = Some("old".to_string());
        s.suggestion = Some("rewrite of old".to_string());

        select_text(&mut s, "new passage").unwrap();
        assert_eq!(s.selection.as_deref(), Some("new passage"));
        assert!(s.suggestion.is_none());
    }

    #[test]
    fn validation_errors_surface_as_warnings() {
        let err = EditorError::Validation("Please select content first".to_string());
        let notice = err.notice();
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(notice.text, "Please select content first");
    }

    #[test]
    fn backend_errors_surface_as_errors() {
        let err = EditorError::Suggest(BackendError::Status {
            status: 500,
            body: String::new(),
        });
        let notice = err.notice();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Failed to get AI suggestions. Please try again.");
    }
}
