//! Role-based model configuration.
//!
//! [`ModelConfig`] groups the model selections for the roles of a run.
//! This is a static value object: once created, models don't change during a run.

use super::validation::{ConfigIssue, ConfigIssueCode};
use crate::analysis::strategy::MAX_ANALYSTS;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Role-based model configuration.
///
/// - **Worker**: question extraction, specialist reports and cross-examination
/// - **Synthesis**: the consensus call, always the most capable variant
/// - **Analysts**: one dual-stance worker per entry (1-5)
///
/// # Example
///
/// ```
/// use council_domain::config::ModelConfig;
/// use council_domain::Model;
///
/// let config = ModelConfig::default()
///     .with_analysts(vec![Model::Gemini25Flash, Model::Gemini3Pro]);
///
/// assert_eq!(config.synthesis, Model::Gemini25Pro);
/// assert!(config.validate().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model for question extraction, specialist workers and cross-examination.
    pub worker: Model,
    /// Model for the consensus synthesizer.
    pub synthesis: Model,
    /// Models of the dual-stance analysts, one worker each.
    pub analysts: Vec<Model>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            worker: Model::default_worker(),
            synthesis: Model::default_synthesis(),
            analysts: vec![Model::default_worker()],
        }
    }
}

impl ModelConfig {
    pub fn with_worker(mut self, model: Model) -> Self {
        self.worker = model;
        self
    }

    pub fn with_synthesis(mut self, model: Model) -> Self {
        self.synthesis = model;
        self
    }

    pub fn with_analysts(mut self, models: Vec<Model>) -> Self {
        self.analysts = models;
        self
    }

    /// Check the analyst count and role separation.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.analysts.is_empty() || self.analysts.len() > MAX_ANALYSTS {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::AnalystCountOutOfRange {
                    count: self.analysts.len(),
                },
                format!(
                    "models.analysts: expected 1-{} analysts, got {}",
                    MAX_ANALYSTS,
                    self.analysts.len()
                ),
            ));
        }

        if self.synthesis == self.worker {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::SynthesisSameAsWorker,
                format!(
                    "models.synthesis: '{}' is also the worker model; synthesis is meant to run on a stronger model",
                    self.synthesis
                ),
            ));
        }

        issues
    }
}
