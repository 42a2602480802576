//! Configuration file loading for market-council
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `COUNCIL_`-prefixed environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./council.toml` or `./.council.toml`
//! 4. Global config: `$XDG_CONFIG_HOME/market-council/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAnalysisConfig, FileConfig, FileGeminiConfig, FileModelsConfig,
    FileOutputConfig,
};
pub use loader::ConfigLoader;
