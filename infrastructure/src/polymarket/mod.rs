//! Polymarket adapter
//!
//! Implements MarketFeed over the public gamma query API.

mod feed;

pub use feed::{DEFAULT_ENDPOINT, PolymarketFeed, fallback_markets, parse_markets};
