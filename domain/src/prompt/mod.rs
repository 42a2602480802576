//! Prompt domain
//!
//! Templates for every completion call of the analysis flow. All prompts that
//! expect data ask for a fenced ` ```json` block, matching
//! [`crate::parsing::parse_json_response`].

mod template;

pub use template::PromptTemplate;
