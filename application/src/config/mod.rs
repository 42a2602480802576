//! Application-level configuration.
//!
//! - [`AnalysisConfig`] — strategy, models and stage switches for analysis runs

pub mod analysis_config;

pub use analysis_config::AnalysisConfig;
