//! Market analysis domain
//!
//! A run turns one market URL into one verdict:
//!
//! ```text
//! MarketUrl ──▶ MarketQuestion
//!                   │
//!        ┌──────────┼──────────┐          (WorkerStrategy)
//!        ▼          ▼          ▼
//!   ResearchReport ... / IndividualAnalysis ...
//!        │  (Debate annotations, specialist only)
//!        ▼
//!    Consensus  +  aggregated Sources  ──▶ AnalysisResult
//! ```
//!
//! Every worker-level value has a degraded form so that one bad reply never
//! removes a slot from the result.

pub mod consensus;
pub mod lens;
pub mod phase;
pub mod report;
pub mod result;
pub mod score;
pub mod source;
pub mod stance;
pub mod strategy;

pub use consensus::{Consensus, Outcome};
pub use lens::ResearchLens;
pub use phase::Phase;
pub use report::{ContradictionVerdict, Debate, Leaning, ReportPayload, ResearchReport};
pub use result::{AnalysisResult, WorkerOutputs};
pub use source::{Source, aggregate_sources};
pub use stance::{IndividualAnalysis, Stance, TeamAnalysis};
pub use strategy::WorkerStrategy;
