//! Content editor route handlers.
//!
//! One page at a time: the view loads the page body (sanitized before
//! display), and the three POST actions walk the select → suggest →
//! apply loop. Outcomes are flashed as notices across a redirect, so
//! every action lands back on the editor view in a fresh GET.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use pagecraft_core::{EnhancementMode, Notice, PageId};

use crate::backend::PageDetail;
use crate::editor;
use crate::error::Result;
use crate::filters;
use crate::models::session::{self, EditorState, ShopCredentials, keys};
use crate::state::AppState;

/// Editor view for one page.
#[derive(Template, WebTemplate)]
#[template(path = "editor.html")]
pub struct EditorTemplate {
    pub shop: String,
    pub page_id: String,
    /// `None` when the load failed; the notice says why.
    pub content: Option<PageDetail>,
    pub selection: Option<String>,
    pub suggestion: Option<String>,
    pub mode: EnhancementMode,
    pub modes: Vec<EnhancementMode>,
    pub notice: Option<Notice>,
}

/// Select form data.
#[derive(Debug, Deserialize)]
pub struct SelectForm {
    /// The highlighted text, as read by the page's selection script.
    pub selection: String,
}

/// Suggest form data.
#[derive(Debug, Deserialize)]
pub struct SuggestForm {
    pub mode: EnhancementMode,
}

/// Fetch the editor state for this page, resetting it if the session
/// holds state for a different page (page change clears selection and
/// suggestion, and orphans any response that belonged to the old page).
async fn editor_state_for(session: &Session, page_id: &PageId) -> EditorState {
    match session.get::<EditorState>(keys::EDITOR).await {
        Ok(Some(state)) if state.page_id == *page_id => state,
        _ => EditorState::new(page_id.clone()),
    }
}

async fn store_editor_state(session: &Session, state: &EditorState) -> Result<()> {
    session.insert(keys::EDITOR, state).await?;
    Ok(())
}

fn editor_path(page_id: &PageId) -> String {
    format!("/pages/{}", urlencoding::encode(page_id.as_str()))
}

/// Require linked credentials; otherwise bounce to the connect view.
async fn require_credentials(session: &Session) -> std::result::Result<ShopCredentials, Response> {
    match session::current_credentials(session).await {
        Some(creds) => Ok(creds),
        None => Err(Redirect::to("/").into_response()),
    }
}

/// Display the editor for one page.
///
/// # Route
///
/// `GET /pages/{id}`
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Response> {
    let creds = match require_credentials(&session).await {
        Ok(creds) => creds,
        Err(redirect) => return Ok(redirect),
    };

    let page_id = PageId::from(id);
    let editor_state = editor_state_for(&session, &page_id).await;
    store_editor_state(&session, &editor_state).await?;

    let mut notice = session::take_notice(&session).await;
    let content = match editor::load_content(state.backend(), &creds, &editor_state).await {
        Ok(detail) => Some(detail),
        Err(e) => {
            tracing::error!(page = %page_id, error = %e, "Failed to load page content");
            notice = Some(e.notice());
            None
        }
    };

    Ok(EditorTemplate {
        shop: creds.shop.to_string(),
        page_id: page_id.into_inner(),
        content,
        selection: editor_state.selection,
        suggestion: editor_state.suggestion,
        mode: editor_state.mode,
        modes: EnhancementMode::ALL.to_vec(),
        notice,
    }
    .into_response())
}

/// Store the merchant's highlighted passage.
///
/// # Route
///
/// `POST /pages/{id}/select`
#[instrument(skip(session, form))]
pub async fn select(
    session: Session,
    Path(id): Path<String>,
    Form(form): Form<SelectForm>,
) -> Result<Response> {
    if (require_credentials(&session).await).is_err() {
        return Ok(Redirect::to("/").into_response());
    }

    let page_id = PageId::from(id);
    let mut editor_state = editor_state_for(&session, &page_id).await;

    if let Err(e) = editor::select_text(&mut editor_state, &form.selection) {
        session::flash(&session, e.notice()).await;
    }

    store_editor_state(&session, &editor_state).await?;
    Ok(Redirect::to(&editor_path(&page_id)).into_response())
}

/// Request an AI rewrite of the current selection.
///
/// # Route
///
/// `POST /pages/{id}/suggest`
#[instrument(skip(state, session, form))]
pub async fn suggest(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Form(form): Form<SuggestForm>,
) -> Result<Response> {
    let creds = match require_credentials(&session).await {
        Ok(creds) => creds,
        Err(redirect) => return Ok(redirect),
    };

    let page_id = PageId::from(id);
    let mut editor_state = editor_state_for(&session, &page_id).await;

    // Page title is the context the suggestion service sees.
    match editor::load_content(state.backend(), &creds, &editor_state).await {
        Ok(detail) => {
            if let Err(e) = editor::request_suggestion(
                state.backend(),
                &creds,
                &mut editor_state,
                &detail.title,
                form.mode,
            )
            .await
            {
                session::flash(&session, e.notice()).await;
            }
        }
        Err(e) => session::flash(&session, e.notice()).await,
    }

    store_editor_state(&session, &editor_state).await?;
    Ok(Redirect::to(&editor_path(&page_id)).into_response())
}

/// Apply the suggestion and reload the page.
///
/// # Route
///
/// `POST /pages/{id}/apply`
#[instrument(skip(state, session))]
pub async fn apply(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Response> {
    let creds = match require_credentials(&session).await {
        Ok(creds) => creds,
        Err(redirect) => return Ok(redirect),
    };

    let page_id = PageId::from(id);
    let mut editor_state = editor_state_for(&session, &page_id).await;

    // The update endpoint wants the full current body for context.
    match editor::load_content(state.backend(), &creds, &editor_state).await {
        Ok(detail) => {
            match editor::apply_change(state.backend(), &creds, &mut editor_state, &detail.content)
                .await
            {
                Ok(_) => {
                    session::flash(&session, Notice::success("Content updated successfully!"))
                        .await;
                }
                Err(e) => session::flash(&session, e.notice()).await,
            }
        }
        Err(e) => session::flash(&session, e.notice()).await,
    }

    store_editor_state(&session, &editor_state).await?;
    Ok(Redirect::to(&editor_path(&page_id)).into_response())
}
