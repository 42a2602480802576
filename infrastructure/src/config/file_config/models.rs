//! Role-based model configuration from TOML (`[models]` section)

use council_domain::{ConfigIssue, ConfigIssueCode, Model, ModelConfig};
use serde::{Deserialize, Serialize};

/// Role-based model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// worker = "gemini-2.5-flash"        # Question extraction, specialists, cross-examination
/// synthesis = "gemini-2.5-pro"       # Consensus synthesis
/// analysts = ["gemini-2.5-flash", "gemini-3-pro-preview"]   # Dual-stance workers
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model for question extraction, specialist workers and cross-examination
    pub worker: Option<String>,
    /// Model for consensus synthesis
    pub synthesis: Option<String>,
    /// Models for dual-stance analysts, one worker each
    pub analysts: Option<Vec<String>>,
}

impl FileModelsConfig {
    /// Parse a single model string, collecting issues for empty names.
    fn parse_single_model(
        field: &str,
        value: Option<&String>,
    ) -> (Option<Model>, Vec<ConfigIssue>) {
        match value {
            None => (None, Vec::new()),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: field.to_string(),
                    },
                    format!("models.{}: model name cannot be empty", field),
                )],
            ),
            // Unknown names become Model::Custom
            Some(s) => (Some(Model::from(s.trim())), Vec::new()),
        }
    }

    /// Parse a model list, collecting issues for empty names.
    fn parse_model_list(
        field: &str,
        values: Option<&Vec<String>>,
    ) -> (Option<Vec<Model>>, Vec<ConfigIssue>) {
        let Some(strings) = values else {
            return (None, Vec::new());
        };

        let mut issues = Vec::new();
        let mut models = Vec::new();
        for s in strings {
            if s.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: field.to_string(),
                    },
                    format!("models.{}: model name cannot be empty in list", field),
                ));
            } else {
                models.push(Model::from(s.trim()));
            }
        }
        (Some(models), issues)
    }

    pub fn parse_worker(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("worker", self.worker.as_ref())
    }

    pub fn parse_synthesis(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("synthesis", self.synthesis.as_ref())
    }

    pub fn parse_analysts(&self) -> (Option<Vec<Model>>, Vec<ConfigIssue>) {
        Self::parse_model_list("analysts", self.analysts.as_ref())
    }

    /// Build a [`ModelConfig`], falling back to defaults for unset or invalid fields.
    pub fn to_model_config(&self) -> (ModelConfig, Vec<ConfigIssue>) {
        let mut config = ModelConfig::default();
        let mut issues = Vec::new();

        let (worker, worker_issues) = self.parse_worker();
        issues.extend(worker_issues);
        if let Some(worker) = worker {
            config = config.with_worker(worker);
        }

        let (synthesis, synthesis_issues) = self.parse_synthesis();
        issues.extend(synthesis_issues);
        if let Some(synthesis) = synthesis {
            config = config.with_synthesis(synthesis);
        }

        let (analysts, analyst_issues) = self.parse_analysts();
        issues.extend(analyst_issues);
        if let Some(analysts) = analysts {
            config = config.with_analysts(analysts);
        }

        (config, issues)
    }
}
