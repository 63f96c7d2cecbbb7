//! Connect-or-edit dashboard route handlers.
//!
//! The dashboard view decides between the connect form and the
//! connected page catalog based on session state. It also terminates
//! the OAuth round trip: the backend redirects back to `/` with
//! `shop`/`connected` query parameters (plus `token` on the legacy
//! path), which are folded into the session and stripped from the URL.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use pagecraft_core::{Notice, ShopDomain, ShopDomainError};

use crate::backend::{ContentBackend, PageSummary};
use crate::error::Result;
use crate::filters;
use crate::models::session::{self, ShopCredentials, keys};
use crate::state::AppState;

/// Connect form view.
#[derive(Template, WebTemplate)]
#[template(path = "connect.html")]
pub struct ConnectTemplate {
    pub notice: Option<Notice>,
    pub shop_value: String,
}

/// Connected view with the page catalog.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub shop: String,
    pub pages: Vec<PageSummary>,
    pub notice: Option<Notice>,
}

/// Redirect query parameters recognized on `/`.
#[derive(Debug, Deserialize)]
pub struct RedirectParams {
    /// Store domain handed back by the backend after OAuth.
    pub shop: Option<String>,
    /// `"true"` when the OAuth handshake completed.
    pub connected: Option<String>,
    /// Explicit access token from the legacy callback path.
    pub token: Option<String>,
}

/// Connect form data.
#[derive(Debug, Deserialize)]
pub struct ConnectForm {
    pub shop: String,
}

/// Display the dashboard.
///
/// Order of resolution mirrors the connection lifecycle: redirect
/// parameters first (OAuth just completed), then the session
/// (returning visitor), then the connect form (nothing linked).
///
/// # Route
///
/// `GET /`
#[instrument(skip(state, session, params))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<RedirectParams>,
) -> Result<Response> {
    // OAuth return leg: persist the credentials, then redirect to a
    // clean URL so a refresh doesn't replay the parameters.
    if let Some(raw_shop) = params.shop {
        match ShopDomain::parse(&raw_shop) {
            Ok(shop) => {
                let creds = ShopCredentials::new(shop, params.token);
                session.insert(keys::CREDENTIALS, &creds).await?;
                if params.connected.as_deref() == Some("true") {
                    session::flash(&session, Notice::success("Store connected successfully!"))
                        .await;
                }
            }
            Err(e) => {
                tracing::warn!(shop = %raw_shop, error = %e, "Rejected shop redirect parameter");
                session::flash(&session, Notice::warning(e.to_string())).await;
            }
        }
        return Ok(Redirect::to("/").into_response());
    }

    let Some(creds) = session::current_credentials(&session).await else {
        return Ok(ConnectTemplate {
            notice: session::take_notice(&session).await,
            shop_value: String::new(),
        }
        .into_response());
    };

    // A saved shop still has to pass the backend's connection check
    // before the catalog is shown.
    let connected = match state.backend().connection_status(&creds.shop).await {
        Ok(connected) => connected,
        Err(e) => {
            tracing::error!(shop = %creds.shop, error = %e, "Connection status check failed");
            return Ok(ConnectTemplate {
                notice: Some(Notice::error("Failed to check connection status")),
                shop_value: creds.shop.store_name().to_string(),
            }
            .into_response());
        }
    };

    if !connected {
        return Ok(ConnectTemplate {
            notice: session::take_notice(&session).await,
            shop_value: creds.shop.store_name().to_string(),
        }
        .into_response());
    }

    // Connected: the catalog fetch fires without further user action.
    let (pages, notice) = match state.backend().list_pages(&creds).await {
        Ok(pages) => (pages, session::take_notice(&session).await),
        Err(e) => {
            tracing::error!(shop = %creds.shop, error = %e, "Failed to fetch page catalog");
            (Vec::new(), Some(Notice::error("Failed to fetch pages")))
        }
    };

    Ok(DashboardTemplate {
        shop: creds.shop.to_string(),
        pages,
        notice,
    }
    .into_response())
}

/// Initiate the store connection.
///
/// Normalizes the typed domain and hands the browser off to the
/// backend's OAuth initiation endpoint. This is a full navigation, not
/// an in-app request; validation failures stay on the dashboard with a
/// warning and perform no navigation to the backend.
///
/// # Route
///
/// `POST /connect`
#[instrument(skip(state, session, form))]
pub async fn connect(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ConnectForm>,
) -> Response {
    let shop = match ShopDomain::parse(&form.shop) {
        Ok(shop) => shop,
        Err(ShopDomainError::Empty) => {
            session::flash(&session, Notice::warning("Please enter a shop domain")).await;
            return Redirect::to("/").into_response();
        }
        Err(e) => {
            session::flash(&session, Notice::warning(e.to_string())).await;
            return Redirect::to("/").into_response();
        }
    };

    tracing::info!(shop = %shop, "Initiating OAuth handoff");
    Redirect::to(&state.backend().oauth_url(&shop)).into_response()
}

/// Disconnect the store.
///
/// Clears the whole session - credentials, editor state, notices - in
/// one stroke; cascading removal is what makes this idempotent.
///
/// # Route
///
/// `POST /disconnect`
#[instrument(skip(session))]
pub async fn disconnect(session: Session) -> Result<Response> {
    session.flush().await?;
    Ok(Redirect::to("/").into_response())
}
