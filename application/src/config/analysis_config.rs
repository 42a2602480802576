//! Analysis configuration container.
//!
//! [`AnalysisConfig`] groups everything a run needs besides the market URL:
//! the worker strategy, the role-based models and the cross-examination
//! switch. The binary builds one from the merged file config and CLI flags,
//! then turns it into a [`RunAnalysisInput`] per market.

use crate::use_cases::run_analysis::RunAnalysisInput;
use council_domain::{ConfigIssue, ConfigIssueCode, MarketUrl, ModelConfig, WorkerStrategy};

/// Configuration container for analysis runs.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    strategy: WorkerStrategy,
    models: ModelConfig,
    cross_examination: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            strategy: WorkerStrategy::default(),
            models: ModelConfig::default(),
            cross_examination: true,
        }
    }
}

impl AnalysisConfig {
    pub fn new(strategy: WorkerStrategy, models: ModelConfig) -> Self {
        Self {
            strategy,
            models,
            cross_examination: true,
        }
    }

    pub fn with_cross_examination(mut self, enabled: bool) -> Self {
        self.cross_examination = enabled;
        self
    }

    // ==================== Accessors ====================

    pub fn strategy(&self) -> WorkerStrategy {
        self.strategy
    }

    pub fn models(&self) -> &ModelConfig {
        &self.models
    }

    pub fn cross_examination(&self) -> bool {
        self.cross_examination
    }

    // ==================== Validation ====================

    /// Validate the combination of strategy and models.
    ///
    /// The analyst list only matters for the dual-stance strategy; its count
    /// issue is dropped for specialist runs. Cross-examination is silently
    /// skipped for strategies that don't support it.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.models
            .validate()
            .into_iter()
            .filter(|issue| {
                self.strategy == WorkerStrategy::DualStance
                    || !matches!(issue.code, ConfigIssueCode::AnalystCountOutOfRange { .. })
            })
            .collect()
    }

    // ==================== Input Factory ====================

    /// Build the use case input for one market.
    pub fn to_input(&self, market_url: MarketUrl) -> RunAnalysisInput {
        RunAnalysisInput::new(market_url, self.strategy, self.models.clone())
            .with_cross_examination(self.cross_examination)
    }
}
