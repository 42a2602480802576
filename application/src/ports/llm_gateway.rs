//! LLM Gateway port
//!
//! Defines the interface for communicating with the text-completion backend.

use async_trait::async_trait;
use council_domain::{Completion, CompletionRequest};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// One call is one prompt in, free text plus citations out. The text is not
/// guaranteed to follow any requested format; callers parse it themselves.
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Run a single completion
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, GatewayError>;
}
