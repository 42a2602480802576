//! Pipeline configuration from TOML (`[analysis]` section)

use council_domain::{ConfigIssue, ConfigIssueCode, WorkerStrategy};
use serde::{Deserialize, Serialize};

/// Raw analysis configuration from TOML
///
/// ```toml
/// [analysis]
/// strategy = "dual-stance"      # or "specialist" (default)
/// cross_examination = false     # specialist only
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnalysisConfig {
    /// Worker strategy name
    pub strategy: Option<String>,
    /// Cross-examine specialist reports
    pub cross_examination: bool,
}

impl Default for FileAnalysisConfig {
    fn default() -> Self {
        Self {
            strategy: None,
            cross_examination: true,
        }
    }
}

impl FileAnalysisConfig {
    /// Parse the strategy name, reporting unknown values.
    pub fn parse_strategy(&self) -> (Option<WorkerStrategy>, Vec<ConfigIssue>) {
        let Some(raw) = self.strategy.as_ref() else {
            return (None, Vec::new());
        };

        match raw.parse::<WorkerStrategy>() {
            Ok(strategy) => (Some(strategy), Vec::new()),
            Err(reason) => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "analysis.strategy".to_string(),
                        value: raw.clone(),
                        valid_values: vec!["specialist".to_string(), "dual-stance".to_string()],
                    },
                    format!("analysis.strategy: {}", reason),
                )],
            ),
        }
    }
}
