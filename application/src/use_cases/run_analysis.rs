//! Run Analysis use case
//!
//! Orchestrates the full market analysis flow:
//!
//! 1. **Question Extraction**: market URL → canonical binary question
//! 2. **Research**: the perspective workers run in parallel
//! 3. **Cross-Examination**: specialist reports checked against each other (optional)
//! 4. **Synthesis**: every worker output folded into one consensus
//!
//! Only the question extraction call and the synthesis transport can fail a
//! run. Everything in between degrades inside its own slot.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use council_domain::analysis::strategy::MAX_ANALYSTS;
use council_domain::core::string::truncate;
use council_domain::{
    AnalysisResult, Completion, CompletionRequest, Consensus, ContradictionVerdict, Debate,
    IndividualAnalysis, MarketQuestion, MarketUrl, Model, ModelConfig, Phase, PromptTemplate,
    ReportPayload, ResearchLens, ResearchReport, Source, Stance, TeamAnalysis, WorkerOutputs,
    WorkerStrategy, parse_json_response,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Errors that end an analysis run
#[derive(Error, Debug)]
pub enum RunAnalysisError {
    #[error("No analyst models configured")]
    NoAnalysts,

    #[error("Too many analyst models: {0} (max {max})", max = MAX_ANALYSTS)]
    TooManyAnalysts(usize),

    #[error("Question extraction failed: {0}")]
    QuestionExtraction(#[source] GatewayError),

    #[error("The model did not return a market question")]
    EmptyQuestion,

    #[error("Consensus synthesis failed: {0}")]
    Synthesis(#[source] GatewayError),
}

/// Input for the RunAnalysis use case
#[derive(Debug, Clone)]
pub struct RunAnalysisInput {
    /// The market to analyze
    pub market_url: MarketUrl,
    /// How the perspective workers are formed
    pub strategy: WorkerStrategy,
    /// Worker, synthesis and analyst models
    pub models: ModelConfig,
    /// Whether specialist reports are cross-examined
    pub cross_examination: bool,
}

impl RunAnalysisInput {
    pub fn new(market_url: MarketUrl, strategy: WorkerStrategy, models: ModelConfig) -> Self {
        Self {
            market_url,
            strategy,
            models,
            cross_examination: true,
        }
    }

    pub fn with_cross_examination(mut self, enabled: bool) -> Self {
        self.cross_examination = enabled;
        self
    }

    fn validate(&self) -> Result<(), RunAnalysisError> {
        if self.strategy != WorkerStrategy::DualStance {
            return Ok(());
        }
        match self.models.analysts.len() {
            0 => Err(RunAnalysisError::NoAnalysts),
            n if n > MAX_ANALYSTS => Err(RunAnalysisError::TooManyAnalysts(n)),
            _ => Ok(()),
        }
    }
}

/// Gateway handle shared by every spawned task.
///
/// Records each call on the transcript logger before and after it runs.
struct Caller<G: LlmGateway> {
    gateway: Arc<G>,
    logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway> Clone for Caller<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            logger: Arc::clone(&self.logger),
        }
    }
}

impl<G: LlmGateway> Caller<G> {
    async fn complete(
        &self,
        phase: Phase,
        label: &str,
        request: CompletionRequest,
    ) -> Result<Completion, GatewayError> {
        debug!(
            "{} [{}]: sending {} chars to {} (search: {})",
            phase,
            label,
            request.prompt.len(),
            request.model,
            request.search_augmentation
        );
        self.logger.log(ConversationEvent::new(
            "llm_request",
            json!({
                "phase": phase.as_str(),
                "worker": label,
                "model": request.model.as_str(),
                "search": request.search_augmentation,
                "prompt": request.prompt,
            }),
        ));

        match self.gateway.complete(&request).await {
            Ok(completion) => {
                self.logger.log(ConversationEvent::new(
                    "llm_response",
                    json!({
                        "phase": phase.as_str(),
                        "worker": label,
                        "model": request.model.as_str(),
                        "text": completion.text,
                        "citations": completion.citations,
                    }),
                ));
                Ok(completion)
            }
            Err(e) => {
                self.logger.log(ConversationEvent::new(
                    "llm_error",
                    json!({
                        "phase": phase.as_str(),
                        "worker": label,
                        "model": request.model.as_str(),
                        "error": e.to_string(),
                    }),
                ));
                Err(e)
            }
        }
    }
}

/// Use case for analyzing one prediction market
pub struct RunAnalysisUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> RunAnalysisUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a transcript logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunAnalysisInput,
    ) -> Result<AnalysisResult, RunAnalysisError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunAnalysisInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<AnalysisResult, RunAnalysisError> {
        input.validate()?;

        info!(
            "Starting {} analysis of {}",
            input.strategy, input.market_url
        );

        let caller = Caller {
            gateway: Arc::clone(&self.gateway),
            logger: Arc::clone(&self.conversation_logger),
        };

        // Phase 1: Question Extraction
        let question =
            Self::phase_question(&caller, &input.models.worker, &input.market_url, progress)
                .await?;

        // Phase 2 (+3): Research, then cross-examination for specialists
        let outputs = match input.strategy {
            WorkerStrategy::Specialist => {
                let reports =
                    Self::phase_specialists(&caller, &input.models.worker, &question, progress)
                        .await;
                let reports = if input.cross_examination
                    && input.strategy.supports_cross_examination()
                {
                    Self::phase_cross_examination(
                        &caller,
                        &input.models.worker,
                        &question,
                        reports,
                        progress,
                    )
                    .await
                } else {
                    debug!("Skipping cross-examination phase");
                    reports
                };
                WorkerOutputs::Specialist(reports)
            }
            WorkerStrategy::DualStance => WorkerOutputs::DualStance(
                Self::phase_dual_stance(&caller, &input.models.analysts, &question, progress)
                    .await,
            ),
        };

        // Phase 4: Synthesis
        let consensus =
            Self::phase_synthesis(&caller, &input.models.synthesis, &question, &outputs, progress)
                .await?;

        let result = AnalysisResult::new(question, outputs, consensus);
        info!(
            "Analysis complete: {} ({}% confidence, {} workers, {} sources)",
            result.consensus.outcome,
            result.consensus.confidence,
            result.worker_count(),
            result.all_sources.len()
        );
        Ok(result)
    }

    /// Phase 1: Ask the worker model which question the market asks
    async fn phase_question(
        caller: &Caller<G>,
        model: &Model,
        market_url: &MarketUrl,
        progress: &dyn ProgressNotifier,
    ) -> Result<MarketQuestion, RunAnalysisError> {
        info!("Phase 1: Question Extraction");
        progress.on_phase_start(&Phase::QuestionExtraction, 1);

        let request = CompletionRequest::new(
            model.clone(),
            PromptTemplate::question_extraction(market_url.as_str()),
        );

        let outcome = match caller
            .complete(Phase::QuestionExtraction, model.as_str(), request)
            .await
        {
            Ok(completion) => MarketQuestion::from_reply(&completion.text).ok_or_else(|| {
                warn!(
                    "Question extraction returned no usable text: {:?}",
                    truncate(&completion.text, 200)
                );
                RunAnalysisError::EmptyQuestion
            }),
            Err(e) => Err(RunAnalysisError::QuestionExtraction(e)),
        };

        progress.on_task_complete(&Phase::QuestionExtraction, model.as_str(), outcome.is_ok());
        progress.on_phase_complete(&Phase::QuestionExtraction);

        let question = outcome?;
        info!("Market question: {}", question);
        Ok(question)
    }

    /// Phase 2 (specialist): one report per research lens, in parallel
    async fn phase_specialists(
        caller: &Caller<G>,
        model: &Model,
        question: &MarketQuestion,
        progress: &dyn ProgressNotifier,
    ) -> Vec<ResearchReport> {
        let lenses = ResearchLens::ALL;
        info!("Phase 2: Research ({} specialist lenses)", lenses.len());
        progress.on_phase_start(&Phase::Research, lenses.len());

        let mut join_set = JoinSet::new();

        for (index, lens) in lenses.iter().copied().enumerate() {
            let caller = caller.clone();
            let request = CompletionRequest::new(
                model.clone(),
                PromptTemplate::specialist_report(lens, question.content()),
            )
            .with_search();

            join_set.spawn(async move {
                let report = Self::run_specialist(&caller, lens, request).await;
                (index, report)
            });
        }

        let mut slots: Vec<Option<ResearchReport>> = vec![None; lenses.len()];

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, report)) => {
                    progress.on_task_complete(
                        &Phase::Research,
                        report.agent_type.label(),
                        !report.is_degraded(),
                    );
                    slots[index] = Some(report);
                }
                Err(e) => {
                    warn!("Research task join error: {}", e);
                }
            }
        }

        let reports = lenses
            .iter()
            .zip(slots)
            .map(|(lens, slot)| {
                slot.unwrap_or_else(|| {
                    progress.on_task_complete(&Phase::Research, lens.label(), false);
                    ResearchReport::degraded(*lens, Vec::new())
                })
            })
            .collect();

        progress.on_phase_complete(&Phase::Research);
        reports
    }

    async fn run_specialist(
        caller: &Caller<G>,
        lens: ResearchLens,
        request: CompletionRequest,
    ) -> ResearchReport {
        match caller.complete(Phase::Research, lens.label(), request).await {
            Ok(completion) => match parse_json_response::<ReportPayload>(&completion.text) {
                Some(payload) => {
                    info!("{} agent reported (leaning {})", lens, payload.leaning);
                    ResearchReport::from_payload(lens, payload, completion.citations)
                }
                None => {
                    warn!("{} agent returned an unusable report", lens);
                    ResearchReport::degraded(lens, completion.citations)
                }
            },
            Err(e) => {
                warn!("{} agent failed: {}", lens, e);
                ResearchReport::degraded(lens, Vec::new())
            }
        }
    }

    /// Phase 3: Check each specialist report against its siblings
    async fn phase_cross_examination(
        caller: &Caller<G>,
        model: &Model,
        question: &MarketQuestion,
        reports: Vec<ResearchReport>,
        progress: &dyn ProgressNotifier,
    ) -> Vec<ResearchReport> {
        info!("Phase 3: Cross-Examination");
        progress.on_phase_start(&Phase::CrossExamination, reports.len());

        let mut join_set = JoinSet::new();

        for (index, current) in reports.iter().enumerate() {
            let others: Vec<&ResearchReport> = reports
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != index)
                .map(|(_, r)| r)
                .collect();

            let caller = caller.clone();
            let lens = current.agent_type;
            let request = CompletionRequest::new(
                model.clone(),
                PromptTemplate::cross_examination(question.content(), current, &others),
            );

            join_set.spawn(async move {
                let outcome = Self::examine(&caller, lens, request).await;
                (index, outcome)
            });
        }

        let mut debates: Vec<Option<Debate>> = vec![None; reports.len()];
        let mut settled = vec![false; reports.len()];

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, (debate, success))) => {
                    progress.on_task_complete(
                        &Phase::CrossExamination,
                        reports[index].agent_type.label(),
                        success,
                    );
                    debates[index] = debate;
                    settled[index] = true;
                }
                Err(e) => {
                    warn!("Cross-examination task join error: {}", e);
                }
            }
        }

        for (report, _) in reports.iter().zip(&settled).filter(|(_, done)| !**done) {
            progress.on_task_complete(&Phase::CrossExamination, report.agent_type.label(), false);
        }

        progress.on_phase_complete(&Phase::CrossExamination);

        reports
            .into_iter()
            .zip(debates)
            .map(|(report, debate)| match debate {
                Some(debate) => report.with_debate(debate),
                None => report,
            })
            .collect()
    }

    /// Returns the debate annotation (if any) and whether the call produced a usable verdict
    async fn examine(
        caller: &Caller<G>,
        lens: ResearchLens,
        request: CompletionRequest,
    ) -> (Option<Debate>, bool) {
        match caller
            .complete(Phase::CrossExamination, lens.label(), request)
            .await
        {
            Ok(completion) => match parse_json_response::<ContradictionVerdict>(&completion.text) {
                Some(verdict) => {
                    let debate = verdict.into_debate();
                    if let Some(debate) = &debate {
                        info!(
                            "{} report contradicts its siblings (severity {})",
                            lens, debate.contradiction_score
                        );
                    }
                    (debate, true)
                }
                None => {
                    warn!("Cross-examination of {} returned an unusable verdict", lens);
                    (None, false)
                }
            },
            Err(e) => {
                warn!("Cross-examination of {} failed: {}", lens, e);
                (None, false)
            }
        }
    }

    /// Phase 2 (dual-stance): one FOR/AGAINST pair per analyst model, in parallel
    async fn phase_dual_stance(
        caller: &Caller<G>,
        analysts: &[Model],
        question: &MarketQuestion,
        progress: &dyn ProgressNotifier,
    ) -> Vec<IndividualAnalysis> {
        info!("Phase 2: Research ({} dual-stance analysts)", analysts.len());
        progress.on_phase_start(&Phase::Research, analysts.len());

        let mut join_set = JoinSet::new();

        for (index, model) in analysts.iter().enumerate() {
            let caller = caller.clone();
            let model = model.clone();
            let question = question.content().to_string();

            join_set.spawn(async move {
                let outcome = Self::run_analyst(&caller, model, &question).await;
                (index, outcome)
            });
        }

        let mut slots: Vec<Option<IndividualAnalysis>> = vec![None; analysts.len()];

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, (analysis, success))) => {
                    progress.on_task_complete(
                        &Phase::Research,
                        analysis.agent_model.as_str(),
                        success,
                    );
                    slots[index] = Some(analysis);
                }
                Err(e) => {
                    warn!("Analyst task join error: {}", e);
                }
            }
        }

        let analyses = analysts
            .iter()
            .zip(slots)
            .map(|(model, slot)| {
                slot.unwrap_or_else(|| {
                    progress.on_task_complete(&Phase::Research, model.as_str(), false);
                    IndividualAnalysis::new(
                        model.clone(),
                        TeamAnalysis::degraded(model),
                        TeamAnalysis::degraded(model),
                    )
                })
            })
            .collect();

        progress.on_phase_complete(&Phase::Research);
        analyses
    }

    /// Run both teams of one analyst concurrently
    async fn run_analyst(
        caller: &Caller<G>,
        model: Model,
        question: &str,
    ) -> (IndividualAnalysis, bool) {
        let (yes, no) = tokio::join!(
            Self::run_team(caller, &model, Stance::For, question),
            Self::run_team(caller, &model, Stance::Against, question),
        );

        let (yes_team, mut sources, yes_ok) = yes;
        let (no_team, no_sources, no_ok) = no;
        sources.extend(no_sources);

        info!(
            "Analyst {} finished (YES {} / NO {})",
            model, yes_team.confidence, no_team.confidence
        );

        (
            IndividualAnalysis::new(model, yes_team, no_team).with_sources(sources),
            yes_ok && no_ok,
        )
    }

    async fn run_team(
        caller: &Caller<G>,
        model: &Model,
        stance: Stance,
        question: &str,
    ) -> (TeamAnalysis, Vec<Source>, bool) {
        let request =
            CompletionRequest::new(model.clone(), PromptTemplate::team_case(stance, question))
                .with_search();
        let label = format!("{} {}", model, stance.team_name());

        match caller.complete(Phase::Research, &label, request).await {
            Ok(completion) => match parse_json_response::<TeamAnalysis>(&completion.text) {
                Some(team) => (team, completion.citations, true),
                None => {
                    warn!("{} team of {} returned an unusable case", stance.team_name(), model);
                    (TeamAnalysis::degraded(model), completion.citations, false)
                }
            },
            Err(e) => {
                warn!("{} team of {} failed: {}", stance.team_name(), model, e);
                (TeamAnalysis::degraded(model), Vec::new(), false)
            }
        }
    }

    /// Phase 4: Fold every worker output into one consensus
    async fn phase_synthesis(
        caller: &Caller<G>,
        model: &Model,
        question: &MarketQuestion,
        outputs: &WorkerOutputs,
        progress: &dyn ProgressNotifier,
    ) -> Result<Consensus, RunAnalysisError> {
        info!("Phase 4: Synthesis");
        progress.on_phase_start(&Phase::Synthesis, 1);

        let request = CompletionRequest::new(
            model.clone(),
            PromptTemplate::consensus(question.content(), outputs),
        );

        let completion = match caller.complete(Phase::Synthesis, model.as_str(), request).await {
            Ok(completion) => completion,
            Err(e) => {
                progress.on_task_complete(&Phase::Synthesis, model.as_str(), false);
                progress.on_phase_complete(&Phase::Synthesis);
                return Err(RunAnalysisError::Synthesis(e));
            }
        };

        let consensus = parse_json_response::<Consensus>(&completion.text).unwrap_or_else(|| {
            warn!("Synthesis returned an unusable verdict, falling back to UNCERTAIN");
            Consensus::fallback()
        });

        progress.on_task_complete(&Phase::Synthesis, model.as_str(), !consensus.is_fallback());
        progress.on_phase_complete(&Phase::Synthesis);
        Ok(consensus)
    }
}
