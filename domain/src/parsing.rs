//! Structured-response parsing for model replies.
//!
//! Every completion that is expected to carry data goes through
//! [`parse_json_response`], so all call sites share one fallback rule:
//!
//! 1. ` ```json` fenced blocks, in order of appearance
//! 2. The entire reply as bare JSON (models sometimes drop the fence)
//! 3. `None`
//!
//! Parsing never panics and never returns an error; the caller decides
//! what the degraded value is.

use crate::core::string::truncate;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Raw replies longer than this are cut in diagnostics.
const MAX_LOGGED_REPLY: usize = 2000;

/// Decode a JSON payload embedded in a model's free-text reply.
///
/// # Examples
///
/// ```
/// use council_domain::parsing::parse_json_response;
/// use serde_json::Value;
///
/// let reply = "Here you go:\n```json\n{\"outcome\": \"YES\"}\n```\n";
/// let value: Value = parse_json_response(reply).unwrap();
/// assert_eq!(value["outcome"], "YES");
///
/// let bare: Value = parse_json_response("{\"outcome\": \"NO\"}").unwrap();
/// assert_eq!(bare["outcome"], "NO");
///
/// assert!(parse_json_response::<Value>("I think the answer is yes.").is_none());
/// ```
pub fn parse_json_response<T: DeserializeOwned>(text: &str) -> Option<T> {
    let blocks = fenced_json_blocks(text);

    for block in &blocks {
        match serde_json::from_str::<T>(block) {
            Ok(value) => return Some(value),
            Err(e) => {
                warn!(
                    error = %e,
                    raw = %truncate(text, MAX_LOGGED_REPLY),
                    "Failed to parse fenced JSON block"
                );
            }
        }
    }

    // Fallback for replies where the model forgot the markdown block
    if let Ok(value) = serde_json::from_str::<T>(text.trim()) {
        return Some(value);
    }

    warn!(
        fenced_blocks = blocks.len(),
        raw = %truncate(text, MAX_LOGGED_REPLY),
        "Could not find or parse JSON in model reply"
    );
    None
}

/// Collect the bodies of all ` ```json` blocks. The marker is matched
/// case-insensitively and may follow other text on its line.
fn fenced_json_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut in_block = false;
    let mut current = String::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if !in_block && trimmed.to_ascii_lowercase().ends_with("```json") {
            in_block = true;
            current.clear();
        } else if in_block && trimmed == "```" {
            in_block = false;
            blocks.push(std::mem::take(&mut current));
        } else if in_block {
            current.push_str(line);
            current.push('\n');
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::{Value, json};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Verdict {
        outcome: String,
        confidence: u8,
    }

    #[test]
    fn test_fenced_block() {
        let reply = r#"Based on my research:

```json
{"outcome": "YES", "confidence": 72}
```

Let me know if you need more."#;
        let verdict: Verdict = parse_json_response(reply).unwrap();
        assert_eq!(
            verdict,
            Verdict {
                outcome: "YES".into(),
                confidence: 72
            }
        );
    }

    #[test]
    fn test_fenced_block_multiline_with_escaped_quotes() {
        let reply = "```json\n{\n  \"arguments\": [\"a \\\"quoted\\\" phrase\"],\n  \"confidence\": 60\n}\n```";
        let value: Value = parse_json_response(reply).unwrap();
        assert_eq!(value["arguments"][0], "a \"quoted\" phrase");
        assert_eq!(value["confidence"], 60);
    }

    #[test]
    fn test_uppercase_marker() {
        let reply = "```JSON\n{\"outcome\": \"NO\", \"confidence\": 10}\n```";
        let verdict: Verdict = parse_json_response(reply).unwrap();
        assert_eq!(verdict.outcome, "NO");
    }

    #[test]
    fn test_marker_after_text_on_same_line() {
        let reply = "Here is my analysis: ```json\n{\"outcome\": \"YES\", \"confidence\": 80}\n```";
        let verdict: Verdict = parse_json_response(reply).unwrap();
        assert_eq!(verdict.confidence, 80);
    }

    #[test]
    fn test_bare_json() {
        let value: Value = parse_json_response("  {\"hasContradiction\": false}\n").unwrap();
        assert_eq!(value, json!({"hasContradiction": false}));
    }

    #[test]
    fn test_second_block_used_when_first_is_invalid() {
        let reply = "```json\n{not json}\n```\nretry:\n```json\n{\"outcome\": \"NO\", \"confidence\": 5}\n```";
        let verdict: Verdict = parse_json_response(reply).unwrap();
        assert_eq!(verdict.confidence, 5);
    }

    #[test]
    fn test_plain_prose_is_none() {
        assert!(parse_json_response::<Value>("The market will probably resolve YES.").is_none());
        assert!(parse_json_response::<Value>("").is_none());
    }

    #[test]
    fn test_wrong_shape_is_none() {
        let reply = "```json\n{\"outcome\": \"YES\"}\n```";
        assert!(parse_json_response::<Verdict>(reply).is_none());
    }

    #[test]
    fn test_unterminated_block_is_none() {
        let reply = "```json\n{\"outcome\": \"YES\", \"confidence\": 1}";
        assert!(parse_json_response::<Verdict>(reply).is_none());
    }

    #[test]
    fn test_untagged_fence_is_not_structured() {
        let reply = "```\n{\"outcome\": \"YES\", \"confidence\": 1}\n```";
        assert!(parse_json_response::<Verdict>(reply).is_none());
    }
}
