//! Terminal aggregate of an analysis run.

use super::consensus::Consensus;
use super::report::ResearchReport;
use super::source::{Source, aggregate_sources};
use super::stance::IndividualAnalysis;
use super::strategy::WorkerStrategy;
use crate::core::question::MarketQuestion;
use serde::{Deserialize, Serialize};

/// Worker outputs of a run, shaped by the strategy that produced them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerOutputs {
    #[serde(rename = "researchReports")]
    Specialist(Vec<ResearchReport>),
    #[serde(rename = "individualAnalyses")]
    DualStance(Vec<IndividualAnalysis>),
}

impl WorkerOutputs {
    pub fn strategy(&self) -> WorkerStrategy {
        match self {
            WorkerOutputs::Specialist(_) => WorkerStrategy::Specialist,
            WorkerOutputs::DualStance(_) => WorkerStrategy::DualStance,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            WorkerOutputs::Specialist(reports) => reports.len(),
            WorkerOutputs::DualStance(analyses) => analyses.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Each worker's citation list, in worker order
    pub fn source_lists(&self) -> Vec<&[Source]> {
        match self {
            WorkerOutputs::Specialist(reports) => {
                reports.iter().map(|r| r.sources.as_slice()).collect()
            }
            WorkerOutputs::DualStance(analyses) => {
                analyses.iter().map(|a| a.sources.as_slice()).collect()
            }
        }
    }

    /// Deduplicated sources across all workers
    pub fn aggregate_sources(&self) -> Vec<Source> {
        aggregate_sources(self.source_lists())
    }

    pub fn research_reports(&self) -> Option<&[ResearchReport]> {
        match self {
            WorkerOutputs::Specialist(reports) => Some(reports),
            WorkerOutputs::DualStance(_) => None,
        }
    }

    pub fn individual_analyses(&self) -> Option<&[IndividualAnalysis]> {
        match self {
            WorkerOutputs::Specialist(_) => None,
            WorkerOutputs::DualStance(analyses) => Some(analyses),
        }
    }
}

/// Complete result of one analysis run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub market_question: MarketQuestion,
    #[serde(flatten)]
    pub outputs: WorkerOutputs,
    pub consensus: Consensus,
    pub all_sources: Vec<Source>,
}

impl AnalysisResult {
    /// Assemble the result; sources are aggregated from the outputs.
    pub fn new(market_question: MarketQuestion, outputs: WorkerOutputs, consensus: Consensus) -> Self {
        let all_sources = outputs.aggregate_sources();
        Self {
            market_question,
            outputs,
            consensus,
            all_sources,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.outputs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::lens::ResearchLens;
    use crate::analysis::stance::TeamAnalysis;
    use crate::core::model::Model;

    fn reports() -> Vec<ResearchReport> {
        let mut social = ResearchReport::degraded(ResearchLens::SocialMedia, vec![]);
        social.sources = vec![Source::new("https://same.example", "Social title")];
        let mut news = ResearchReport::degraded(ResearchLens::WebSearch, vec![]);
        news.sources = vec![
            Source::new("https://same.example", "News title"),
            Source::new("https://other.example", "Other"),
        ];
        vec![social, news]
    }

    #[test]
    fn test_new_aggregates_sources_in_worker_order() {
        let result = AnalysisResult::new(
            MarketQuestion::new("Will X happen by 2025?"),
            WorkerOutputs::Specialist(reports()),
            Consensus::fallback(),
        );
        assert_eq!(result.worker_count(), 2);
        assert_eq!(result.all_sources.len(), 2);
        assert_eq!(result.all_sources[0].title, "Social title");
    }

    #[test]
    fn test_json_shape_specialist() {
        let result = AnalysisResult::new(
            MarketQuestion::new("Will X happen by 2025?"),
            WorkerOutputs::Specialist(reports()),
            Consensus::fallback(),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["marketQuestion"], "Will X happen by 2025?");
        assert_eq!(json["researchReports"].as_array().unwrap().len(), 2);
        assert!(json.get("individualAnalyses").is_none());
        assert_eq!(json["allSources"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_json_shape_dual_stance() {
        let team = TeamAnalysis::degraded(&Model::Gemini25Flash);
        let analysis = IndividualAnalysis::new(Model::Gemini25Flash, team.clone(), team);
        let result = AnalysisResult::new(
            MarketQuestion::new("Will X happen by 2025?"),
            WorkerOutputs::DualStance(vec![analysis]),
            Consensus::fallback(),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["individualAnalyses"].as_array().unwrap().len(), 1);
        assert!(result.outputs.research_reports().is_none());
        assert_eq!(result.outputs.strategy(), WorkerStrategy::DualStance);
    }
}
