//! Shop domain type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Suffix of every fully-qualified Shopify store domain.
pub const MYSHOPIFY_SUFFIX: &str = ".myshopify.com";

/// Errors that can occur when parsing a [`ShopDomain`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShopDomainError {
    /// The input string is empty or whitespace-only.
    #[error("shop domain cannot be empty")]
    Empty,
    /// The input contains characters that cannot appear in a store domain.
    #[error("shop domain contains invalid character '{0}'")]
    InvalidCharacter(char),
}

/// A fully-qualified Shopify store domain.
///
/// Merchants type anything from `mystore` to
/// `https://mystore.myshopify.com`; this type normalizes all of those to
/// the canonical `mystore.myshopify.com` form.
///
/// ## Normalization
///
/// - Leading/trailing whitespace is trimmed
/// - An `http://` or `https://` scheme prefix is stripped
/// - The domain is lower-cased
/// - `.myshopify.com` is appended exactly once
///
/// ## Examples
///
/// ```
/// use pagecraft_core::ShopDomain;
///
/// let shop = ShopDomain::parse("mystore").unwrap();
/// assert_eq!(shop.as_str(), "mystore.myshopify.com");
///
/// // Already qualified - suffix is not duplicated
/// let shop = ShopDomain::parse("mystore.myshopify.com").unwrap();
/// assert_eq!(shop.as_str(), "mystore.myshopify.com");
///
/// // Empty input is rejected
/// assert!(ShopDomain::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ShopDomain(String);

impl ShopDomain {
    /// Parse and normalize a `ShopDomain` from merchant input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty/whitespace-only or contains
    /// characters that cannot appear in a hostname.
    pub fn parse(s: &str) -> Result<Self, ShopDomainError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ShopDomainError::Empty);
        }

        let without_scheme = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .unwrap_or(trimmed)
            .trim_end_matches('/');
        if without_scheme.is_empty() {
            return Err(ShopDomainError::Empty);
        }

        let lowered = without_scheme.to_lowercase();
        if let Some(c) = lowered.chars().find(|c| {
            !(c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_'))
        }) {
            return Err(ShopDomainError::InvalidCharacter(c));
        }

        let qualified = if lowered.ends_with(MYSHOPIFY_SUFFIX) {
            lowered
        } else {
            format!("{lowered}{MYSHOPIFY_SUFFIX}")
        };

        Ok(Self(qualified))
    }

    /// Returns the domain as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ShopDomain` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns the store name without the `.myshopify.com` suffix.
    #[must_use]
    pub fn store_name(&self) -> &str {
        self.0.strip_suffix(MYSHOPIFY_SUFFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn appends_suffix_to_bare_store_name() {
        let shop = ShopDomain::parse("mystore").unwrap();
        assert_eq!(shop.as_str(), "mystore.myshopify.com");
    }

    #[test]
    fn does_not_duplicate_suffix() {
        let shop = ShopDomain::parse("mystore.myshopify.com").unwrap();
        assert_eq!(shop.as_str(), "mystore.myshopify.com");
        assert!(!shop.as_str().ends_with(".myshopify.com.myshopify.com"));
    }

    #[test]
    fn strips_scheme_prefix() {
        let shop = ShopDomain::parse("https://mystore.myshopify.com").unwrap();
        assert_eq!(shop.as_str(), "mystore.myshopify.com");

        let shop = ShopDomain::parse("http://mystore").unwrap();
        assert_eq!(shop.as_str(), "mystore.myshopify.com");
    }

    #[test]
    fn trims_whitespace_and_lowercases() {
        let shop = ShopDomain::parse("  MyStore  ").unwrap();
        assert_eq!(shop.as_str(), "mystore.myshopify.com");
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(ShopDomain::parse(""), Err(ShopDomainError::Empty));
        assert_eq!(ShopDomain::parse("   "), Err(ShopDomainError::Empty));
        assert_eq!(ShopDomain::parse("https://"), Err(ShopDomainError::Empty));
    }

    #[test]
    fn rejects_invalid_characters() {
        assert!(matches!(
            ShopDomain::parse("my store"),
            Err(ShopDomainError::InvalidCharacter(' '))
        ));
        assert!(matches!(
            ShopDomain::parse("store?x=1"),
            Err(ShopDomainError::InvalidCharacter('?'))
        ));
    }

    #[test]
    fn store_name_strips_suffix() {
        let shop = ShopDomain::parse("mystore").unwrap();
        assert_eq!(shop.store_name(), "mystore");
    }

    #[test]
    fn serde_is_transparent() {
        let shop = ShopDomain::parse("mystore").unwrap();
        let json = serde_json::to_string(&shop).unwrap();
        assert_eq!(json, "\"mystore.myshopify.com\"");

        let back: ShopDomain = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shop);
    }
}
