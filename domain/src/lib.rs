//! Domain layer for market-council
//!
//! This crate contains the core analysis entities, the structured-response
//! parser and the prompt templates. It has no dependencies on infrastructure
//! or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Perspective workers
//!
//! A market question is researched by several independent workers:
//!
//! - **Specialist lenses**: five fixed perspectives (social, news, finance,
//!   geopolitical, macro), each producing a [`ResearchReport`]
//! - **Dual-stance analysts**: 1-5 models each arguing both the YES and the NO
//!   case, producing an [`IndividualAnalysis`]
//!
//! ## Consensus
//!
//! All worker outputs (plus contradiction annotations) are folded into one
//! [`Consensus`] by a stronger synthesis model.
//!
//! ## Degraded values
//!
//! Model output is best-effort text. Every parse boundary has a fixed fallback
//! value, so a single bad reply never removes a worker from the result.

pub mod analysis;
pub mod completion;
pub mod config;
pub mod core;
pub mod parsing;
pub mod prompt;

// Re-export commonly used types
pub use analysis::{
    AnalysisResult, Consensus, ContradictionVerdict, Debate, IndividualAnalysis, Leaning,
    Outcome, Phase, ReportPayload, ResearchLens, ResearchReport, Source, Stance, TeamAnalysis,
    WorkerOutputs, WorkerStrategy, aggregate_sources,
};
pub use completion::{Completion, CompletionRequest};
pub use config::{ConfigIssue, ConfigIssueCode, ModelConfig, OutputFormat, Severity};
pub use core::{
    error::DomainError, market_url::MarketUrl, model::Model, question::MarketQuestion,
};
pub use parsing::parse_json_response;
pub use prompt::PromptTemplate;
