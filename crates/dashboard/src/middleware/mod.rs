//! HTTP middleware stack for the dashboard.

pub mod session;

pub use session::create_session_layer;
