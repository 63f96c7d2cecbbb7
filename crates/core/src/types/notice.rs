//! User-facing notice type.
//!
//! Every outcome the dashboard reports to the merchant - validation
//! warnings, backend failures, successful updates - is a `Notice`. None
//! of them are fatal; a notice is shown once and dismissed by the next
//! action.

use serde::{Deserialize, Serialize};

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Info,
    Success,
    /// Recoverable user-input problem; no state was mutated.
    Warning,
    /// Network or backend failure; prior state is preserved for retry.
    Error,
}

/// A transient, user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    /// CSS utility classes for the notice banner.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Info => "bg-blue-100 text-blue-700",
            NoticeKind::Success => "bg-green-100 text-green-700",
            NoticeKind::Warning => "bg-yellow-100 text-yellow-700",
            NoticeKind::Error => "bg-red-100 text-red-700",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        assert_eq!(Notice::info("a").kind, NoticeKind::Info);
        assert_eq!(Notice::success("b").kind, NoticeKind::Success);
        assert_eq!(Notice::warning("c").kind, NoticeKind::Warning);
        assert_eq!(Notice::error("d").kind, NoticeKind::Error);
    }

    #[test]
    fn round_trips_through_serde() {
        let notice = Notice::warning("Please select some content to enhance");
        let json = serde_json::to_string(&notice).unwrap();
        let back: Notice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, notice);
    }

    #[test]
    fn css_class_matches_kind() {
        assert!(Notice::error("x").css_class().contains("red"));
        assert!(Notice::success("x").css_class().contains("green"));
        assert!(Notice::warning("x").css_class().contains("yellow"));
    }
}
