//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod analysis;
mod gemini;
mod models;
mod output;

pub use analysis::FileAnalysisConfig;
pub use gemini::FileGeminiConfig;
pub use models::FileModelsConfig;
pub use output::FileOutputConfig;

use council_application::AnalysisConfig;
use council_domain::{ConfigIssue, WorkerStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when the merged configuration contains error-level issues
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Role-based model selection
    pub models: FileModelsConfig,
    /// Worker strategy and stage switches
    pub analysis: FileAnalysisConfig,
    /// Gemini backend settings
    pub gemini: FileGeminiConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Empty model names across all model fields
    /// 2. Unknown strategy names
    /// 3. Backend settings (zero timeout, empty key variable)
    /// 4. Strategy/model combinations (analyst count, synthesis model)
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let (_, model_issues) = self.models.to_model_config();
        issues.extend(model_issues);

        let (_, strategy_issues) = self.analysis.parse_strategy();
        issues.extend(strategy_issues);

        issues.extend(self.gemini.validate());

        issues.extend(self.to_analysis_config().validate());

        issues
    }

    /// Validate and split the result: warnings are returned, errors abort.
    pub fn ensure_valid(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(|i| i.is_error());

        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError::Invalid(
                errors.into_iter().map(|i| i.message).collect(),
            ))
        }
    }

    /// Build the application-level analysis configuration.
    ///
    /// Unset or invalid fields fall back to their defaults; use
    /// [`validate`](Self::validate) to surface them.
    pub fn to_analysis_config(&self) -> AnalysisConfig {
        let (models, _) = self.models.to_model_config();
        let strategy = self.analysis.parse_strategy().0.unwrap_or_default();

        AnalysisConfig::new(strategy, models)
            .with_cross_examination(self.analysis.cross_examination)
    }

    /// Strategy from the file, or the default
    pub fn strategy(&self) -> WorkerStrategy {
        self.analysis.parse_strategy().0.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::{ConfigIssueCode, Model, OutputFormat, Severity};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[models]
worker = "gemini-2.5-flash"
synthesis = "gemini-3-pro-preview"
analysts = ["gemini-2.5-flash", "gemini-2.5-pro"]

[analysis]
strategy = "dual-stance"
cross_examination = false

[gemini]
api_key_env = "MY_GEMINI_KEY"
timeout_seconds = 30

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.models.synthesis, Some("gemini-3-pro-preview".to_string()));
        assert_eq!(config.gemini.api_key_env, "MY_GEMINI_KEY");
        assert_eq!(config.gemini.timeout_seconds, 30);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);

        let analysis = config.to_analysis_config();
        assert_eq!(analysis.strategy(), WorkerStrategy::DualStance);
        assert!(!analysis.cross_examination());
        assert_eq!(analysis.models().synthesis, Model::Gemini3Pro);
        assert_eq!(analysis.models().analysts.len(), 2);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[models]
synthesis = "gemini-3-pro-preview"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.models.parse_synthesis().0, Some(Model::Gemini3Pro));
        // Defaults should apply
        assert!(config.models.worker.is_none());
        assert!(config.analysis.cross_examination);
        assert_eq!(config.gemini.timeout_seconds, 120);
        assert!(config.output.color);
        assert_eq!(config.strategy(), WorkerStrategy::Specialist);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
        assert!(config.ensure_valid().unwrap().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[models]
worker = ""
analysts = []

[analysis]
strategy = "dual-stance"

[gemini]
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();

        let codes: Vec<_> = issues.iter().map(|i| i.code.clone()).collect();
        assert!(codes.contains(&ConfigIssueCode::EmptyModelName {
            field: "worker".to_string()
        }));
        assert!(codes.contains(&ConfigIssueCode::ZeroTimeout {
            field: "gemini.timeout_seconds".to_string()
        }));
        assert!(codes.contains(&ConfigIssueCode::AnalystCountOutOfRange { count: 0 }));

        let err = config.ensure_valid().unwrap_err();
        assert!(err.to_string().contains("gemini.timeout_seconds cannot be 0"));
    }

    #[test]
    fn test_ensure_valid_returns_warnings() {
        let toml_str = r#"
[models]
worker = "gemini-2.5-pro"
synthesis = "gemini-2.5-pro"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let warnings = config.ensure_valid().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, Severity::Warning);
    }
}
