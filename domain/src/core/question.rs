//! Market question value object

use serde::{Deserialize, Serialize};

/// Labels a model sometimes puts in front of the question despite being told not to.
const LEADING_LABELS: &[&str] = &["question:", "market question:", "the question is:"];

/// The canonical binary question behind a market (Value Object)
///
/// Produced once per analysis run by the question extractor and consumed
/// read-only by every later stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketQuestion {
    content: String,
}

impl MarketQuestion {
    /// Create a new question
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Question cannot be empty");
        Self {
            content: content.trim().to_string(),
        }
    }

    /// Try to create a new question, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self {
                content: content.trim().to_string(),
            })
        }
    }

    /// Build a question from a raw model reply.
    ///
    /// The reply is trimmed, then reduced to a single line: the first line that
    /// ends in `?`, or the first non-empty line if none does. Bullet markers,
    /// markdown emphasis, a leading `Question:` label and wrapping quotes are
    /// stripped. Returns `None` when nothing is left.
    pub fn from_reply(reply: &str) -> Option<Self> {
        let lines: Vec<&str> = reply
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let line = lines
            .iter()
            .find(|l| clean_line(l).ends_with('?'))
            .or_else(|| lines.first())?;

        Self::try_new(clean_line(line))
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }
}

fn clean_line(line: &str) -> String {
    let mut s = line.trim();
    s = s.trim_start_matches(['-', '*', '>', '#']).trim();
    s = s.trim_matches(|c| c == '*' || c == '_' || c == '`').trim();

    let lower = s.to_lowercase();
    for label in LEADING_LABELS {
        if lower.starts_with(label) {
            // Labels are ASCII so the byte offset is a char boundary.
            s = s[label.len()..].trim();
            break;
        }
    }

    s = s.trim_matches(|c| c == '*' || c == '_' || c == '`').trim();
    s.trim_matches(|c| matches!(c, '"' | '\'' | '\u{201C}' | '\u{201D}'))
        .trim()
        .to_string()
}

impl std::fmt::Display for MarketQuestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for MarketQuestion {
    fn from(s: &str) -> Self {
        MarketQuestion::new(s)
    }
}

impl From<String> for MarketQuestion {
    fn from(s: String) -> Self {
        MarketQuestion::new(s)
    }
}
