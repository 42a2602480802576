//! Gemini backend configuration from TOML (`[gemini]` section)

use crate::gemini::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, GeminiConfig};
use council_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw Gemini configuration from TOML
///
/// ```toml
/// [gemini]
/// api_key_env = "GEMINI_API_KEY"
/// base_url = "https://generativelanguage.googleapis.com/v1beta"
/// timeout_seconds = 120
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// API base URL
    pub base_url: String,
    /// Whole-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 120,
        }
    }
}

impl FileGeminiConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout {
                    field: "gemini.timeout_seconds".to_string(),
                },
                "gemini.timeout_seconds cannot be 0",
            ));
        }
        if self.api_key_env.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyField {
                    field: "gemini.api_key_env".to_string(),
                },
                "gemini.api_key_env cannot be empty",
            ));
        }
        issues
    }

    pub fn to_gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            api_key_env: self.api_key_env.clone(),
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_gateway_default() {
        assert_eq!(
            FileGeminiConfig::default().to_gemini_config(),
            GeminiConfig::default()
        );
        assert!(FileGeminiConfig::default().validate().is_empty());
    }

    #[test]
    fn test_zero_timeout() {
        let config = FileGeminiConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0].code, ConfigIssueCode::ZeroTimeout { .. }));
    }
}
