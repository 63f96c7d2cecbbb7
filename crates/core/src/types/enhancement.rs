//! Enhancement mode for AI rewrite requests.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the AI service should rewrite the selected passage.
///
/// Serialized in snake case to match the backend's `enhancement` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EnhancementMode {
    /// General writing improvement.
    #[default]
    Improve,
    /// Simplify the language.
    Simplify,
    /// Make the copy more persuasive.
    Persuasive,
    /// Optimize for search engines.
    Seo,
}

impl EnhancementMode {
    /// All modes, in the order the editor offers them.
    pub const ALL: [Self; 4] = [Self::Improve, Self::Simplify, Self::Persuasive, Self::Seo];

    /// Wire value sent to the backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Improve => "improve",
            Self::Simplify => "simplify",
            Self::Persuasive => "persuasive",
            Self::Seo => "seo",
        }
    }

    /// Human-readable label for the mode selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Improve => "Improve Writing",
            Self::Simplify => "Simplify Language",
            Self::Persuasive => "Make More Persuasive",
            Self::Seo => "Optimize for SEO",
        }
    }
}

impl fmt::Display for EnhancementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown enhancement mode.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown enhancement mode: {0}")]
pub struct UnknownEnhancementMode(pub String);

impl FromStr for EnhancementMode {
    type Err = UnknownEnhancementMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "improve" => Ok(Self::Improve),
            "simplify" => Ok(Self::Simplify),
            "persuasive" => Ok(Self::Persuasive),
            "seo" => Ok(Self::Seo),
            other => Err(UnknownEnhancementMode(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_snake_case() {
        assert_eq!(
            serde_json::to_string(&EnhancementMode::Seo).unwrap(),
            "\"seo\""
        );
        assert_eq!(
            serde_json::to_string(&EnhancementMode::Persuasive).unwrap(),
            "\"persuasive\""
        );
    }

    #[test]
    fn parses_wire_values() {
        for mode in EnhancementMode::ALL {
            assert_eq!(mode.as_str().parse::<EnhancementMode>().unwrap(), mode);
        }
        assert!("shouty".parse::<EnhancementMode>().is_err());
    }

    #[test]
    fn default_is_improve() {
        assert_eq!(EnhancementMode::default(), EnhancementMode::Improve);
    }
}
