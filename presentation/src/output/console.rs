//! Console output formatter for analysis results

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use council_application::TrendingMarket;
use council_domain::{
    AnalysisResult, IndividualAnalysis, Leaning, Outcome, ResearchReport, Source, WorkerOutputs,
};
use tracing::warn;

/// Formats analysis results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete analysis result
    pub fn format(result: &AnalysisResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Market Council Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n\n",
            "Question:".cyan().bold(),
            result.market_question
        ));

        output.push_str(&format!(
            "{} {} ({} workers)\n",
            "Strategy:".cyan().bold(),
            result.outputs.strategy(),
            result.worker_count()
        ));

        match &result.outputs {
            WorkerOutputs::Specialist(reports) => {
                output.push_str(&Self::section_header("Specialist Reports"));
                for report in reports {
                    output.push_str(&Self::report_block(report));
                }
            }
            WorkerOutputs::DualStance(analyses) => {
                output.push_str(&Self::section_header("Analyst Debates"));
                for (i, analysis) in analyses.iter().enumerate() {
                    output.push_str(&Self::analysis_block(i + 1, analysis));
                }
            }
        }

        output.push_str(&Self::section_header("Consensus"));
        output.push('\n');
        output.push_str(&Self::verdict_line(result));
        output.push_str(&format!("\n{}\n", result.consensus.summary));

        if !result.all_sources.is_empty() {
            output.push_str(&Self::section_header("Sources"));
            output.push_str(&Self::source_list(&result.all_sources));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &AnalysisResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to serialize analysis result as JSON");
            "{}".to_string()
        })
    }

    /// Format consensus only (concise output)
    pub fn format_consensus_only(result: &AnalysisResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Market Council Verdict ===".cyan().bold()
        ));

        output.push_str(&format!("{} {}\n\n", "Q:".bold(), result.market_question));
        output.push_str(&Self::verdict_line(result));
        output.push('\n');
        output.push_str(&result.consensus.summary);
        output.push('\n');

        output
    }

    /// Format the trending market list
    pub fn format_trending(markets: &[TrendingMarket]) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "Trending markets".cyan().bold()));
        for (i, market) in markets.iter().enumerate() {
            output.push_str(&format!(
                "{:>2}. {}\n    {}\n",
                i + 1,
                market.question.bold(),
                market.url.dimmed()
            ));
        }

        output
    }

    fn report_block(report: &ResearchReport) -> String {
        let mut block = format!(
            "\n{} {}\n",
            format!("── {} ──", report.agent_type.label()).yellow().bold(),
            Self::leaning(report.leaning)
        );

        if report.is_degraded() {
            block.push_str(&format!("{}\n", report.summary.dimmed()));
        } else {
            block.push_str(&format!("{}\n", report.summary));
        }

        for finding in &report.key_findings {
            block.push_str(&format!("  * {}\n", finding));
        }

        if let Some(debate) = &report.debate {
            block.push_str(&format!(
                "  {} {} {}\n",
                "Contested:".magenta().bold(),
                format!("[{}/100]", debate.contradiction_score).magenta(),
                debate.summary
            ));
        }

        block
    }

    fn analysis_block(index: usize, analysis: &IndividualAnalysis) -> String {
        let mut block = format!(
            "\n{} {}\n",
            format!("── Analyst {} ({}) ──", index, analysis.agent_model)
                .yellow()
                .bold(),
            Self::leaning(analysis.implied_leaning())
        );

        block.push_str(&format!(
            "{}\n",
            format!("YES team ({}/100)", analysis.yes_team.confidence)
                .green()
                .bold()
        ));
        block.push_str(&Self::indent(&bullets(&analysis.yes_team.arguments), "  "));
        block.push('\n');

        block.push_str(&format!(
            "{}\n",
            format!("NO team ({}/100)", analysis.no_team.confidence)
                .red()
                .bold()
        ));
        block.push_str(&Self::indent(&bullets(&analysis.no_team.arguments), "  "));
        block.push('\n');

        block
    }

    fn verdict_line(result: &AnalysisResult) -> String {
        format!(
            "{} {}  {} {}/100\n",
            "Outcome:".bold(),
            Self::outcome(result.consensus.outcome),
            "Confidence:".bold(),
            result.consensus.confidence
        )
    }

    fn source_list(sources: &[Source]) -> String {
        let mut list = String::new();
        for (i, source) in sources.iter().enumerate() {
            if source.title.is_empty() {
                list.push_str(&format!("{:>3}. {}\n", i + 1, source.uri));
            } else {
                list.push_str(&format!(
                    "{:>3}. {}\n     {}\n",
                    i + 1,
                    source.title,
                    source.uri.dimmed()
                ));
            }
        }
        list
    }

    fn outcome(outcome: Outcome) -> ColoredString {
        match outcome {
            Outcome::Yes => outcome.as_str().green().bold(),
            Outcome::No => outcome.as_str().red().bold(),
            Outcome::Uncertain => outcome.as_str().yellow().bold(),
        }
    }

    fn leaning(leaning: Leaning) -> ColoredString {
        let label = format!("[{}]", leaning);
        match leaning {
            Leaning::Yes => label.green(),
            Leaning::No => label.red(),
            Leaning::Neutral => label.normal(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("* {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &AnalysisResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &AnalysisResult) -> String {
        Self::format_json(result)
    }

    fn format_consensus_only(&self, result: &AnalysisResult) -> String {
        Self::format_consensus_only(result)
    }
}
