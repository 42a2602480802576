//! Infrastructure layer for market-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;
pub mod polymarket;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAnalysisConfig, FileConfig, FileGeminiConfig,
    FileModelsConfig, FileOutputConfig,
};
pub use gemini::{GeminiConfig, GeminiError, GeminiGateway};
pub use logging::JsonlConversationLogger;
pub use polymarket::PolymarketFeed;
