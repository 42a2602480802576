//! Pipeline phases

use serde::{Deserialize, Serialize};

/// Phase of an analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Turn the market URL into its binary question
    QuestionExtraction,
    /// Perspective workers research the question in parallel
    Research,
    /// Each specialist report is checked against its siblings
    CrossExamination,
    /// The synthesis model folds everything into one verdict
    Synthesis,
}

impl Phase {
    pub fn as_str(&self) -> &str {
        match self {
            Phase::QuestionExtraction => "question_extraction",
            Phase::Research => "research",
            Phase::CrossExamination => "cross_examination",
            Phase::Synthesis => "synthesis",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Phase::QuestionExtraction => "Question Extraction",
            Phase::Research => "Research",
            Phase::CrossExamination => "Cross-Examination",
            Phase::Synthesis => "Consensus Synthesis",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
