//! Trending-market feed port

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A currently popular binary market
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingMarket {
    pub question: String,
    pub url: String,
}

impl TrendingMarket {
    pub fn new(question: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            url: url.into(),
        }
    }
}

/// Source of trending markets.
///
/// Never fails: adapters fall back to a static list when the live feed is
/// unreachable or returns nothing usable.
#[async_trait]
pub trait MarketFeed: Send + Sync {
    async fn fetch_trending(&self) -> Vec<TrendingMarket>;
}
