//! Gemini LLM Gateway implementation

use super::error::{GeminiError, Result};
use super::types::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use council_application::ports::llm_gateway::{GatewayError, LlmGateway};
use council_domain::core::string::truncate;
use council_domain::{Completion, CompletionRequest, Model};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};

/// The default Google Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Request header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Environment variable holding the API key unless configured otherwise.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Connection settings for [`GeminiGateway`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// API base URL (overridable for proxies)
    pub base_url: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

/// LLM Gateway implementation for the Google Gemini API
pub struct GeminiGateway {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GeminiGateway {
    /// Create a new gateway, reading the API key from `config.api_key_env`.
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GeminiError::MissingApiKey(config.api_key_env.clone()))?;
        Self::with_api_key(config, api_key)
    }

    /// Create a gateway with an explicitly provided API key.
    pub fn with_api_key(config: &GeminiConfig, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(GeminiError::ClientBuild)?;

        info!("GeminiGateway initialized ({})", config.base_url);

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Endpoint URL for a `generateContent` call. The key travels in a header.
    fn endpoint_url(&self, model: &Model) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model.as_str())
    }

    /// Map a non-success HTTP status to a [`GeminiError`].
    fn map_http_error(status: StatusCode, body: &str, model: &Model) -> GeminiError {
        match status.as_u16() {
            401 | 403 => GeminiError::Unauthorized(status.as_u16()),
            404 => GeminiError::ModelNotFound(model.to_string()),
            code => GeminiError::Api {
                status: code,
                body: truncate(body, 500),
            },
        }
    }

    async fn generate(&self, request: &CompletionRequest) -> Result<Completion> {
        let body =
            GenerateContentRequest::user_prompt(&request.prompt, request.search_augmentation);

        debug!(
            model = request.model.as_str(),
            search = request.search_augmentation,
            "Sending Gemini generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint_url(&request.model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeminiError::Timeout
                } else {
                    GeminiError::from(e)
                }
            })?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            return Err(Self::map_http_error(status, &body_text, &request.model));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body_text)
            .map_err(|e| GeminiError::ParseError(format!("Invalid JSON in response: {}", e)))?;

        let completion = parsed.into_completion()?;
        debug!(
            model = request.model.as_str(),
            chars = completion.text.len(),
            citations = completion.citations.len(),
            "Gemini response received"
        );
        Ok(completion)
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> std::result::Result<Completion, GatewayError> {
        self.generate(request).await.map_err(GatewayError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_missing_env_returns_missing_key() {
        let config = GeminiConfig {
            api_key_env: "COUNCIL_TEST_GEMINI_KEY_UNSET".to_string(),
            ..GeminiConfig::default()
        };
        match GeminiGateway::new(&config) {
            Err(GeminiError::MissingApiKey(var)) => {
                assert_eq!(var, "COUNCIL_TEST_GEMINI_KEY_UNSET")
            }
            Err(other) => panic!("Expected MissingApiKey, got {:?}", other),
            Ok(_) => panic!("Expected MissingApiKey, got a gateway"),
        }
    }

    #[test]
    fn test_endpoint_url() {
        let config = GeminiConfig {
            base_url: "https://proxy.example/v1beta/".to_string(),
            ..GeminiConfig::default()
        };
        let gateway = GeminiGateway::with_api_key(&config, "k").unwrap();
        assert_eq!(
            gateway.endpoint_url(&Model::Gemini25Flash),
            "https://proxy.example/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_map_http_error() {
        let model = Model::Gemini25Pro;
        assert!(matches!(
            GeminiGateway::map_http_error(StatusCode::FORBIDDEN, "", &model),
            GeminiError::Unauthorized(403)
        ));
        assert!(matches!(
            GeminiGateway::map_http_error(StatusCode::NOT_FOUND, "", &model),
            GeminiError::ModelNotFound(m) if m == "gemini-2.5-pro"
        ));
        assert!(matches!(
            GeminiGateway::map_http_error(StatusCode::TOO_MANY_REQUESTS, "slow down", &model),
            GeminiError::Api { status: 429, .. }
        ));
    }

    #[tokio::test]
    async fn test_connection_error_does_not_expose_api_key() {
        let config = GeminiConfig {
            base_url: "http://127.0.0.1:1/v1beta".to_string(),
            timeout: Duration::from_secs(5),
            ..GeminiConfig::default()
        };
        let gateway = GeminiGateway::with_api_key(&config, "SECRET-KEY-123").unwrap();
        let request = CompletionRequest::new(Model::Gemini25Flash, "Will X?");

        let err = gateway.complete(&request).await.unwrap_err();
        let message = err.to_string();
        assert!(!message.contains("SECRET-KEY-123"), "key in error: {}", message);
        assert!(!format!("{:?}", err).contains("SECRET-KEY-123"));
    }
}
