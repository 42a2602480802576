//! Application layer for market-council
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AnalysisConfig;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway},
    market_feed::{MarketFeed, TrendingMarket},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::fetch_trending::FetchTrendingUseCase;
pub use use_cases::run_analysis::{RunAnalysisError, RunAnalysisInput, RunAnalysisUseCase};
