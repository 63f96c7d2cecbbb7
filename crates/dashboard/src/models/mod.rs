//! Session-scoped models.

pub mod session;

pub use session::{EditorState, ShopCredentials};
