//! HTTP route handlers for the dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Connect-or-edit dashboard
//! GET  /health                 - Health check
//!
//! # Connection
//! POST /connect                - Normalize domain, hand off to backend OAuth
//! POST /disconnect             - Clear the session, back to connect view
//!
//! # Content editor
//! GET  /pages/{id}             - Mount the editor for one page
//! POST /pages/{id}/select      - Store the highlighted passage
//! POST /pages/{id}/suggest     - Request an AI rewrite
//! POST /pages/{id}/apply       - Apply the rewrite, reload the page
//! ```

pub mod dashboard;
pub mod editor;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Create the editor routes router.
pub fn editor_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(editor::show))
        .route("/{id}/select", post(editor::select))
        .route("/{id}/suggest", post(editor::suggest))
        .route("/{id}/apply", post(editor::apply))
}

/// Create all routes for the dashboard.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/connect", post(dashboard::connect))
        .route("/disconnect", post(dashboard::disconnect))
        .nest("/pages", editor_routes())
        .route("/health", get(health))
}
