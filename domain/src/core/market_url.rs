//! Market URL value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Every accepted market URL starts with this prefix.
pub const POLYMARKET_PREFIX: &str = "https://polymarket.com/";

/// A Polymarket URL that passed the caller-side format check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketUrl(String);

impl MarketUrl {
    /// Validate and wrap a market URL.
    ///
    /// Only the prefix is checked; the path is passed to the question
    /// extractor as-is.
    pub fn parse(url: impl Into<String>) -> Result<Self, DomainError> {
        let url = url.into();
        let trimmed = url.trim();
        if !trimmed.starts_with(POLYMARKET_PREFIX) || trimmed.len() == POLYMARKET_PREFIX.len() {
            return Err(DomainError::InvalidMarketUrl(url));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Build the event URL for a market slug
    pub fn from_slug(slug: &str) -> Self {
        Self(format!("{}event/{}", POLYMARKET_PREFIX, slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MarketUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let url = MarketUrl::parse(" https://polymarket.com/event/bitcoin-price-2024 ").unwrap();
        assert_eq!(url.as_str(), "https://polymarket.com/event/bitcoin-price-2024");
    }

    #[test]
    fn test_parse_rejects_other_hosts() {
        assert!(MarketUrl::parse("https://example.com/event/x").is_err());
        assert!(MarketUrl::parse("http://polymarket.com/event/x").is_err());
        assert!(MarketUrl::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_bare_prefix() {
        let err = MarketUrl::parse("https://polymarket.com/").unwrap_err();
        assert!(matches!(err, DomainError::InvalidMarketUrl(_)));
    }

    #[test]
    fn test_from_slug() {
        let url = MarketUrl::from_slug("tiktok-ban-usa-2024");
        assert_eq!(url.as_str(), "https://polymarket.com/event/tiktok-ban-usa-2024");
    }
}
