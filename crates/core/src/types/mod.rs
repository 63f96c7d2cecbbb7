//! Core types for Pagecraft.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod enhancement;
pub mod notice;
pub mod page;
pub mod shop;

pub use enhancement::EnhancementMode;
pub use notice::{Notice, NoticeKind};
pub use page::PageId;
pub use shop::{ShopDomain, ShopDomainError};
