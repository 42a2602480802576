//! Dual-stance analyses: one model argues both sides of the question.

use super::score::deserialize_score;
use super::source::Source;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Confidence given to a team whose reply could not be used.
pub const DEGRADED_TEAM_CONFIDENCE: u8 = 50;

/// Which side of the question a team argues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stance {
    /// Argues the market resolves YES
    For,
    /// Argues the market resolves NO
    Against,
}

impl Stance {
    pub fn team_name(&self) -> &'static str {
        match self {
            Stance::For => "YES",
            Stance::Against => "NO",
        }
    }
}

/// One team's case, as returned by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAnalysis {
    pub arguments: Vec<String>,
    /// Confidence in this side, 0-100
    #[serde(deserialize_with = "deserialize_score")]
    pub confidence: u8,
}

impl TeamAnalysis {
    /// Stand-in for a team call that failed or returned unusable text
    pub fn degraded(model: &Model) -> Self {
        Self {
            arguments: vec![format!("Failed to get a valid analysis from {}.", model)],
            confidence: DEGRADED_TEAM_CONFIDENCE,
        }
    }
}

/// A dual-stance worker's output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualAnalysis {
    pub agent_model: Model,
    pub yes_team: TeamAnalysis,
    pub no_team: TeamAnalysis,
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl IndividualAnalysis {
    pub fn new(agent_model: Model, yes_team: TeamAnalysis, no_team: TeamAnalysis) -> Self {
        Self {
            agent_model,
            yes_team,
            no_team,
            sources: Vec::new(),
        }
    }

    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = sources;
        self
    }

    /// Leaning implied by the two team confidences
    pub fn implied_leaning(&self) -> super::report::Leaning {
        use super::report::Leaning;
        match self.yes_team.confidence.cmp(&self.no_team.confidence) {
            std::cmp::Ordering::Greater => Leaning::Yes,
            std::cmp::Ordering::Less => Leaning::No,
            std::cmp::Ordering::Equal => Leaning::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::report::Leaning;

    #[test]
    fn test_team_deserialize_clamps_confidence() {
        let team: TeamAnalysis =
            serde_json::from_str(r#"{"arguments": ["a", "b", "c"], "confidence": 130}"#).unwrap();
        assert_eq!(team.confidence, 100);
        assert_eq!(team.arguments.len(), 3);
    }

    #[test]
    fn test_degraded_team_names_model() {
        let team = TeamAnalysis::degraded(&Model::Gemini3Pro);
        assert_eq!(team.confidence, 50);
        assert_eq!(team.arguments.len(), 1);
        assert!(team.arguments[0].contains("gemini-3-pro-preview"));
    }

    #[test]
    fn test_implied_leaning() {
        let yes = TeamAnalysis {
            arguments: vec![],
            confidence: 70,
        };
        let no = TeamAnalysis {
            arguments: vec![],
            confidence: 30,
        };
        let analysis = IndividualAnalysis::new(Model::Gemini25Flash, yes.clone(), no.clone());
        assert_eq!(analysis.implied_leaning(), Leaning::Yes);

        let analysis = IndividualAnalysis::new(Model::Gemini25Flash, no, yes);
        assert_eq!(analysis.implied_leaning(), Leaning::No);
    }

    #[test]
    fn test_serializes_camel_case() {
        let analysis = IndividualAnalysis::new(
            Model::Gemini25Flash,
            TeamAnalysis::degraded(&Model::Gemini25Flash),
            TeamAnalysis::degraded(&Model::Gemini25Flash),
        );
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["agentModel"], "gemini-2.5-flash");
        assert_eq!(json["yesTeam"]["confidence"], 50);
    }
}
