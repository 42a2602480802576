//! Trending markets from the Polymarket gamma query API

use async_trait::async_trait;
use council_application::ports::market_feed::{MarketFeed, TrendingMarket};
use council_domain::MarketUrl;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, warn};

/// Gamma query endpoint
pub const DEFAULT_ENDPOINT: &str = "https://gamma-api.polymarket.com/query";

/// The live feed gets this long before the fallback list is used.
const FETCH_TIMEOUT: Duration = Duration::from_secs(4);

/// Number of markets shown.
const MAX_MARKETS: usize = 5;

/// Shown whenever the live feed is unusable.
const FALLBACK_MARKETS: [(&str, &str); 5] = [
    (
        "Will Donald Trump win the 2024 US Election?",
        "presidential-election-winner-2024",
    ),
    (
        "Fed interest rate cut in March 2025?",
        "fed-interest-rates-march-2025",
    ),
    ("Bitcoin above $100k in 2024?", "bitcoin-price-2024"),
    (
        "Will TikTok be banned in the US in 2024?",
        "tiktok-ban-usa-2024",
    ),
    (
        "GTA VI release date announced in 2024?",
        "gta-6-release-date-2024",
    ),
];

/// The static fallback list
pub fn fallback_markets() -> Vec<TrendingMarket> {
    FALLBACK_MARKETS
        .iter()
        .map(|(question, slug)| {
            TrendingMarket::new(*question, MarketUrl::from_slug(slug).as_str())
        })
        .collect()
}

/// Market feed backed by the Polymarket gamma API
pub struct PolymarketFeed {
    client: Client,
    endpoint: String,
}

impl PolymarketFeed {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Batched query: active, open, high-volume markets sorted by volume
    fn query_input() -> Value {
        json!({
            "0": {
                "json": {
                    "json_filter": {
                        "bool": {
                            "must": [
                                { "term": { "active": true } },
                                { "term": { "closed": false } },
                                { "range": { "volume": { "gt": "50000" } } }
                            ],
                            "must_not": [
                                { "term": { "question": "[deprecated]" } }
                            ]
                        }
                    },
                    "sort_by": "volume",
                    "is_v2": true,
                    "page_size": 10
                }
            }
        })
    }

    async fn fetch_live(&self) -> Result<Value, String> {
        let input = Self::query_input().to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("batch", "1"), ("input", input.as_str())])
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {}", status));
        }

        response.json::<Value>().await.map_err(|e| e.to_string())
    }
}

/// Extract binary (Yes/No) markets from a gamma response body.
///
/// Returns `None` when the body does not have the expected shape.
pub fn parse_markets(body: &Value) -> Option<Vec<TrendingMarket>> {
    let markets = body.pointer("/0/result/data/json/data")?.as_array()?;

    Some(
        markets
            .iter()
            .filter(|market| is_binary(market))
            .filter_map(|market| {
                let question = market.get("question")?.as_str()?;
                let slug = market.get("slug")?.as_str()?;
                Some(TrendingMarket::new(
                    question,
                    MarketUrl::from_slug(slug).as_str(),
                ))
            })
            .take(MAX_MARKETS)
            .collect(),
    )
}

fn is_binary(market: &Value) -> bool {
    let Some(outcomes) = market.get("outcomes").and_then(Value::as_array) else {
        return false;
    };
    let has = |a: &str, b: &str| outcomes.iter().any(|o| o == a || o == b);
    outcomes.len() == 2 && has("Yes", "YES") && has("No", "NO")
}

#[async_trait]
impl MarketFeed for PolymarketFeed {
    async fn fetch_trending(&self) -> Vec<TrendingMarket> {
        let body = match self.fetch_live().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to fetch trending markets ({}), using fallback data", e);
                return fallback_markets();
            }
        };

        match parse_markets(&body) {
            Some(markets) if !markets.is_empty() => {
                debug!("Polymarket returned {} binary markets", markets.len());
                markets
            }
            Some(_) => {
                warn!("No binary markets in Polymarket response, using fallback data");
                fallback_markets()
            }
            None => {
                warn!("Invalid Polymarket API response format, using fallback data");
                fallback_markets()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(markets: Value) -> Value {
        json!([{ "result": { "data": { "json": { "data": markets } } } }])
    }

    #[test]
    fn test_fallback_list() {
        let markets = fallback_markets();
        assert_eq!(markets.len(), 5);
        assert_eq!(
            markets[0].url,
            "https://polymarket.com/event/presidential-election-winner-2024"
        );
        assert!(markets.iter().all(|m| MarketUrl::parse(m.url.as_str()).is_ok()));
    }

    #[test]
    fn test_parse_keeps_binary_markets() {
        let markets = parse_markets(&body(json!([
            { "question": "Will A?", "slug": "a", "outcomes": ["Yes", "No"] },
            { "question": "Who wins B?", "slug": "b", "outcomes": ["X", "Y", "Z"] },
            { "question": "Will C?", "slug": "c", "outcomes": ["YES", "NO"] },
            { "question": "D or E?", "slug": "d", "outcomes": ["D", "E"] },
            { "question": "No outcomes", "slug": "e" }
        ])))
        .unwrap();

        assert_eq!(
            markets,
            vec![
                TrendingMarket::new("Will A?", "https://polymarket.com/event/a"),
                TrendingMarket::new("Will C?", "https://polymarket.com/event/c"),
            ]
        );
    }

    #[test]
    fn test_parse_caps_at_five() {
        let many: Vec<Value> = (0..8)
            .map(|i| {
                json!({
                    "question": format!("Will {}?", i),
                    "slug": format!("m{}", i),
                    "outcomes": ["Yes", "No"]
                })
            })
            .collect();
        let markets = parse_markets(&body(Value::Array(many))).unwrap();
        assert_eq!(markets.len(), 5);
        assert_eq!(markets[4].question, "Will 4?");
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(parse_markets(&json!({ "error": "nope" })).is_none());
        assert!(parse_markets(&body(json!({ "not": "an array" }))).is_none());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_falls_back() {
        let feed = PolymarketFeed::with_endpoint("http://127.0.0.1:9/query").unwrap();
        assert_eq!(feed.fetch_trending().await, fallback_markets());
    }
}
