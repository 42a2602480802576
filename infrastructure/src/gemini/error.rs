//! Error types for the Gemini adapter

use council_application::ports::llm_gateway::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when talking to the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("API key not found: environment variable {0} is not set")]
    MissingApiKey(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request to Gemini API failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("Request timeout")]
    Timeout,

    #[error("Gemini API rejected the API key (HTTP {0})")]
    Unauthorized(u16),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("HTTP {status} from Gemini API: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Response was blocked: {0}")]
    Blocked(String),
}

impl From<reqwest::Error> for GeminiError {
    /// The request URL is stripped so it never reaches logs or transcripts.
    fn from(e: reqwest::Error) -> Self {
        GeminiError::Http(e.without_url())
    }
}

impl From<GeminiError> for GatewayError {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::MissingApiKey(_) | GeminiError::Unauthorized(_) => {
                GatewayError::Authentication(e.to_string())
            }
            GeminiError::ClientBuild(_) | GeminiError::Http(_) => {
                GatewayError::ConnectionError(e.to_string())
            }
            GeminiError::Timeout => GatewayError::Timeout,
            GeminiError::ModelNotFound(model) => GatewayError::ModelNotAvailable(model),
            GeminiError::Api { .. } => GatewayError::RequestFailed(e.to_string()),
            GeminiError::ParseError(_) | GeminiError::Blocked(_) => {
                GatewayError::InvalidResponse(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        assert!(matches!(
            GatewayError::from(GeminiError::Unauthorized(403)),
            GatewayError::Authentication(_)
        ));
        assert!(matches!(
            GatewayError::from(GeminiError::Timeout),
            GatewayError::Timeout
        ));
        assert!(matches!(
            GatewayError::from(GeminiError::ModelNotFound("gemini-x".into())),
            GatewayError::ModelNotAvailable(m) if m == "gemini-x"
        ));
        assert!(matches!(
            GatewayError::from(GeminiError::Api {
                status: 500,
                body: "boom".into()
            }),
            GatewayError::RequestFailed(_)
        ));
    }
}
