//! Pagecraft Core - Shared domain types.
//!
//! This crate provides the common types used across Pagecraft components:
//! - `dashboard` - Merchant-facing content editing dashboard
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! session handling. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for shop domains and page ids, the
//!   enhancement mode enum, and the user-facing notice variant

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
