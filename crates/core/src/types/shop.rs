//! Shop domain type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ShopDomain`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShopDomainError {
    /// The input string is empty after trimming.
    #[error("shop domain cannot be empty")]
    Empty,
    /// The input contains characters that cannot appear in a host name.
    #[error("shop domain contains invalid character '{0}'")]
    InvalidCharacter(char),
}

/// A normalized Shopify shop domain (e.g. `snowdevil.myshopify.com`).
///
/// ## Normalization
///
/// - Surrounding whitespace is trimmed and the value is lower-cased
/// - A leading `http://` or `https://` and trailing `/` are stripped
/// - A bare shop handle (no `.`) gets `.myshopify.com` appended
///
/// ## Examples
///
/// ```
/// use hydrogen_link_core::ShopDomain;
///
/// let shop = ShopDomain::parse("Snowdevil").unwrap();
/// assert_eq!(shop.as_str(), "snowdevil.myshopify.com");
///
/// let shop = ShopDomain::parse("https://snowdevil.myshopify.com/").unwrap();
/// assert_eq!(shop.as_str(), "snowdevil.myshopify.com");
///
/// assert!(ShopDomain::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ShopDomain(String);

impl ShopDomain {
    /// Suffix appended to bare shop handles.
    pub const MYSHOPIFY_SUFFIX: &'static str = ".myshopify.com";

    /// Parse and normalize a shop domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or contains characters that are
    /// not valid in a host name.
    pub fn parse(s: &str) -> Result<Self, ShopDomainError> {
        let lower = s.trim().to_lowercase();
        let host = lower
            .strip_prefix("https://")
            .or_else(|| lower.strip_prefix("http://"))
            .unwrap_or(&lower)
            .trim_end_matches('/');

        if host.is_empty() {
            return Err(ShopDomainError::Empty);
        }

        if let Some(c) = host
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '.' || *c == ':'))
        {
            return Err(ShopDomainError::InvalidCharacter(c));
        }

        if host.contains('.') {
            Ok(Self(host.to_owned()))
        } else {
            Ok(Self(format!("{host}{}", Self::MYSHOPIFY_SUFFIX)))
        }
    }

    /// Returns the domain as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the shop handle (the part before the first `.`).
    #[must_use]
    pub fn handle(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ShopDomain {
    type Err = ShopDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ShopDomain {
    type Error = ShopDomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ShopDomain> for String {
    fn from(shop: ShopDomain) -> Self {
        shop.0
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
    fn test_bare_handle_gets_suffix() {
        let shop = ShopDomain::parse("snowdevil").unwrap();
        assert_eq!(shop.as_str(), "snowdevil.myshopify.com");
        assert_eq!(shop.handle(), "snowdevil");
    }

    #[test]
    fn test_full_domain_kept() {
        let shop = ShopDomain::parse("snowdevil.myshopify.com").unwrap();
        assert_eq!(shop.as_str(), "snowdevil.myshopify.com");
    }

    #[test]
    fn test_scheme_slash_and_case_stripped() {
        let shop = ShopDomain::parse("  HTTPS://Snowdevil.MyShopify.com/ ").unwrap();
        assert_eq!(shop.as_str(), "snowdevil.myshopify.com");

        let shop = ShopDomain::parse("http://snowdevil").unwrap();
        assert_eq!(shop.as_str(), "snowdevil.myshopify.com");
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(ShopDomain::parse(""), Err(ShopDomainError::Empty));
        assert_eq!(ShopDomain::parse("https://"), Err(ShopDomainError::Empty));
    }

    #[test]
    fn test_invalid_character_rejected() {
        assert_eq!(
            ShopDomain::parse("snow devil"),
            Err(ShopDomainError::InvalidCharacter(' '))
        );
        assert!(ShopDomain::parse("shop/admin").is_err());
    }

    #[test]
    fn test_deserialize_normalizes() {
        let shop: ShopDomain = serde_json::from_str(r#"" Snowdevil ""#).unwrap();
        assert_eq!(shop.as_str(), "snowdevil.myshopify.com");
        assert_eq!(serde_json::to_string(&shop).unwrap(), r#""snowdevil.myshopify.com""#);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let result: Result<ShopDomain, _> = serde_json::from_str(r#""Evil Host/x?y=""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_str() {
        let shop: ShopDomain = "snowdevil".parse().unwrap();
        assert_eq!(shop.to_string(), "snowdevil.myshopify.com");
    }
}
