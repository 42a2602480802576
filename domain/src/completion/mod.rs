//! Text-completion request/response value objects.
//!
//! The completion backend is an opaque service: it receives a prompt, an
//! optional search-augmentation flag and a model id, and returns free text
//! plus any citation records gathered while searching.
//!
//! ```text
//! CompletionRequest { model, prompt, search } ──▶ backend ──▶ Completion { text, citations }
//! ```

use crate::analysis::source::Source;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// A single completion call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model that should answer
    pub model: Model,
    /// Full prompt text
    pub prompt: String,
    /// Whether the backend may ground its answer with web search
    pub search_augmentation: bool,
}

impl CompletionRequest {
    /// Plain completion without search grounding
    pub fn new(model: Model, prompt: impl Into<String>) -> Self {
        Self {
            model,
            prompt: prompt.into(),
            search_augmentation: false,
        }
    }

    /// Enable search augmentation for this call
    pub fn with_search(mut self) -> Self {
        self.search_augmentation = true;
        self
    }
}

/// Raw reply of a completion call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Free text returned by the model
    pub text: String,
    /// Citations attached by search grounding (possibly empty)
    #[serde(default)]
    pub citations: Vec<Source>,
}

impl Completion {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            citations: Vec::new(),
        }
    }

    pub fn with_citations(mut self, citations: Vec<Source>) -> Self {
        self.citations = citations;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_to_no_search() {
        let request = CompletionRequest::new(Model::Gemini25Flash, "hello");
        assert!(!request.search_augmentation);
        assert!(request.with_search().search_augmentation);
    }

    #[test]
    fn test_completion_with_citations() {
        let completion = Completion::new("text")
            .with_citations(vec![Source::new("https://a.example", "A")]);
        assert_eq!(completion.citations.len(), 1);
        assert_eq!(completion.text, "text");
    }
}
