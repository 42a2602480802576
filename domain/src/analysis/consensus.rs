//! Final consensus verdict

use super::score::deserialize_score;
use serde::{Deserialize, Deserializer, Serialize};

/// Summary of the fallback consensus used when synthesis output is unusable.
pub const FALLBACK_CONSENSUS_SUMMARY: &str =
    "Could not determine a final consensus from the agent reports.";

/// Predicted resolution of the market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Yes,
    No,
    Uncertain,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Yes => "YES",
            Outcome::No => "NO",
            Outcome::Uncertain => "UNCERTAIN",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "YES" => Ok(Outcome::Yes),
            "NO" => Ok(Outcome::No),
            "UNCERTAIN" => Ok(Outcome::Uncertain),
            other => Err(format!("unknown outcome: {}", other)),
        }
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The synthesized verdict of a run. Exactly one per analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consensus {
    pub outcome: Outcome,
    /// Certainty in the outcome, 0-100
    #[serde(deserialize_with = "deserialize_score")]
    pub confidence: u8,
    pub summary: String,
}

impl Consensus {
    /// Degraded verdict: UNCERTAIN with zero confidence
    pub fn fallback() -> Self {
        Self {
            outcome: Outcome::Uncertain,
            confidence: 0,
            summary: FALLBACK_CONSENSUS_SUMMARY.to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.outcome == Outcome::Uncertain
            && self.confidence == 0
            && self.summary == FALLBACK_CONSENSUS_SUMMARY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_consensus() {
        let consensus: Consensus =
            serde_json::from_str(r#"{"outcome": "yes", "confidence": 72, "summary": "..."}"#)
                .unwrap();
        assert_eq!(consensus.outcome, Outcome::Yes);
        assert_eq!(consensus.confidence, 72);
    }

    #[test]
    fn test_confidence_clamped() {
        let consensus: Consensus =
            serde_json::from_str(r#"{"outcome": "NO", "confidence": -12, "summary": "s"}"#)
                .unwrap();
        assert_eq!(consensus.confidence, 0);
    }

    #[test]
    fn test_unknown_outcome_rejected() {
        assert!(
            serde_json::from_str::<Consensus>(
                r#"{"outcome": "LIKELY", "confidence": 50, "summary": "s"}"#
            )
            .is_err()
        );
    }

    #[test]
    fn test_fallback() {
        let fallback = Consensus::fallback();
        assert_eq!(fallback.outcome, Outcome::Uncertain);
        assert_eq!(fallback.confidence, 0);
        assert!(fallback.is_fallback());
        assert_eq!(serde_json::to_value(&fallback).unwrap()["outcome"], "UNCERTAIN");
    }
}
