//! Fetch Trending use case
//!
//! Lists popular binary markets so the user has something to analyze.

use crate::ports::market_feed::{MarketFeed, TrendingMarket};
use council_domain::MarketUrl;
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for listing trending markets
pub struct FetchTrendingUseCase {
    feed: Arc<dyn MarketFeed>,
}

impl FetchTrendingUseCase {
    pub fn new(feed: Arc<dyn MarketFeed>) -> Self {
        Self { feed }
    }

    /// Fetch trending markets, dropping entries that are not analyzable
    /// Polymarket URLs.
    pub async fn execute(&self) -> Vec<TrendingMarket> {
        let markets: Vec<TrendingMarket> = self
            .feed
            .fetch_trending()
            .await
            .into_iter()
            .filter(|market| match MarketUrl::parse(market.url.as_str()) {
                Ok(_) => true,
                Err(e) => {
                    debug!("Skipping trending market: {}", e);
                    false
                }
            })
            .collect();

        info!("Fetched {} trending markets", markets.len());
        markets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StaticFeed(Vec<TrendingMarket>);

    #[async_trait]
    impl MarketFeed for StaticFeed {
        async fn fetch_trending(&self) -> Vec<TrendingMarket> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn test_keeps_polymarket_urls_in_order() {
        let feed = StaticFeed(vec![
            TrendingMarket::new("Will A?", "https://polymarket.com/event/a"),
            TrendingMarket::new("Will B?", "https://example.com/event/b"),
            TrendingMarket::new("Will C?", "https://polymarket.com/event/c"),
        ]);
        let use_case = FetchTrendingUseCase::new(Arc::new(feed));

        let markets = use_case.execute().await;
        let questions: Vec<_> = markets.iter().map(|m| m.question.as_str()).collect();
        assert_eq!(questions, vec!["Will A?", "Will C?"]);
    }

    #[tokio::test]
    async fn test_empty_feed() {
        let use_case = FetchTrendingUseCase::new(Arc::new(StaticFeed(vec![])));
        assert!(use_case.execute().await.is_empty());
    }
}
