//! Specialist-lens reports and their contradiction annotations.

use super::lens::ResearchLens;
use super::score::{deserialize_optional_score, deserialize_score};
use super::source::Source;
use serde::{Deserialize, Deserializer, Serialize};

/// A worker's overall sentiment on the question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Leaning {
    Yes,
    No,
    #[default]
    Neutral,
}

impl Leaning {
    pub fn as_str(&self) -> &'static str {
        match self {
            Leaning::Yes => "YES",
            Leaning::No => "NO",
            Leaning::Neutral => "NEUTRAL",
        }
    }
}

impl std::fmt::Display for Leaning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Leaning {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "YES" => Ok(Leaning::Yes),
            "NO" => Ok(Leaning::No),
            "NEUTRAL" => Ok(Leaning::Neutral),
            other => Err(format!("unknown leaning: {}", other)),
        }
    }
}

impl<'de> Deserialize<'de> for Leaning {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Contradiction found between one report and its siblings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debate {
    pub summary: String,
    /// Severity, 0-100
    #[serde(deserialize_with = "deserialize_score")]
    pub contradiction_score: u8,
}

/// The JSON body a specialist worker is asked to return
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPayload {
    pub key_findings: Vec<String>,
    pub summary: String,
    pub leaning: Leaning,
}

/// The JSON body a cross-examination call is asked to return
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContradictionVerdict {
    pub has_contradiction: bool,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_score")]
    pub contradiction_score: Option<u8>,
}

impl ContradictionVerdict {
    /// A debate annotation, only when a contradiction is claimed and both
    /// companion fields are present.
    pub fn into_debate(self) -> Option<Debate> {
        if !self.has_contradiction {
            return None;
        }
        let summary = self.summary.filter(|s| !s.trim().is_empty())?;
        let contradiction_score = self.contradiction_score?;
        Some(Debate {
            summary,
            contradiction_score,
        })
    }
}

/// A specialist worker's report on the market question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchReport {
    pub agent_type: ResearchLens,
    pub key_findings: Vec<String>,
    pub summary: String,
    pub leaning: Leaning,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debate: Option<Debate>,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(skip)]
    degraded: bool,
}

/// Summary text of a report whose reply could not be used.
pub const DEGRADED_REPORT_SUMMARY: &str =
    "Analysis could not be completed due to a parsing error.";

impl ResearchReport {
    /// Build a report from a parsed worker reply
    pub fn from_payload(lens: ResearchLens, payload: ReportPayload, sources: Vec<Source>) -> Self {
        Self {
            agent_type: lens,
            key_findings: payload.key_findings,
            summary: payload.summary,
            leaning: payload.leaning,
            debate: None,
            sources,
            degraded: false,
        }
    }

    /// Stand-in report for a worker whose call or reply failed
    pub fn degraded(lens: ResearchLens, sources: Vec<Source>) -> Self {
        Self {
            agent_type: lens,
            key_findings: vec![format!(
                "Failed to get a valid report from {} agent.",
                lens.label()
            )],
            summary: DEGRADED_REPORT_SUMMARY.to_string(),
            leaning: Leaning::Neutral,
            debate: None,
            sources,
            degraded: true,
        }
    }

    pub fn with_debate(mut self, debate: Debate) -> Self {
        self.debate = Some(debate);
        self
    }

    /// Whether this report is the degraded stand-in
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}
