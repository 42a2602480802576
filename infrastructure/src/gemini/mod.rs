//! Google Gemini adapter
//!
//! Implements LlmGateway over the Gemini `generateContent` REST endpoint,
//! with optional Google Search grounding for citations.

pub mod error;
pub mod gateway;
pub mod types;

pub use error::GeminiError;
pub use gateway::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, GeminiConfig, GeminiGateway};
