//! CLI command definitions

use clap::{Parser, ValueEnum};
use council_domain::{OutputFormat as DomainOutputFormat, WorkerStrategy};
use std::path::PathBuf;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full report with every worker, debates and sources
    Full,
    /// Only the final consensus
    Consensus,
    /// JSON output
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => DomainOutputFormat::Full,
            OutputFormat::Consensus => DomainOutputFormat::Consensus,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// How the research phase is staffed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Five fixed research lenses, then cross-examination
    Specialist,
    /// One YES team and one NO team per analyst model
    DualStance,
}

impl From<StrategyArg> for WorkerStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Specialist => WorkerStrategy::Specialist,
            StrategyArg::DualStance => WorkerStrategy::DualStance,
        }
    }
}

/// CLI arguments for market-council
#[derive(Parser, Debug)]
#[command(name = "market-council")]
#[command(author, version, about = "Prediction market council - several research agents argue a market to a verdict")]
#[command(long_about = r#"
market-council analyses a Polymarket binary market with a council of research agents.

The process has four phases:
1. Question Extraction: the market URL is turned into its YES/NO question
2. Research: workers search the web in parallel (specialist lenses or YES/NO teams)
3. Cross-Examination: each specialist report is checked against the others
4. Synthesis: a stronger model folds everything into one verdict

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./council.toml         Project-level config
3. ~/.config/market-council/config.toml   Global config

Example:
  market-council https://polymarket.com/event/fed-decision-in-december
  market-council --strategy dual-stance -m gemini-2.5-flash -m gemini-2.5-pro <URL>
  market-council --trending
"#)]
pub struct Cli {
    /// Polymarket market URL (https://polymarket.com/...)
    pub url: Option<String>,

    /// List trending markets and exit
    #[arg(long)]
    pub trending: bool,

    /// Worker strategy
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Analyst models for the dual-stance strategy (can be specified multiple times)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Vec<String>,

    /// Model for question extraction, specialists and cross-examination
    #[arg(long, value_name = "MODEL")]
    pub worker_model: Option<String>,

    /// Model for the consensus synthesis
    #[arg(long, value_name = "MODEL")]
    pub synthesis_model: Option<String>,

    /// Skip the cross-examination phase
    #[arg(long)]
    pub no_cross_examination: bool,

    /// Output format (defaults to the config file, then "full")
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Record every model call as JSON lines in this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_url_and_defaults() {
        let cli = Cli::try_parse_from(["market-council", "https://polymarket.com/event/x"]).unwrap();
        assert_eq!(cli.url.as_deref(), Some("https://polymarket.com/event/x"));
        assert!(cli.strategy.is_none());
        assert!(cli.output.is_none());
        assert!(cli.model.is_empty());
        assert!(!cli.no_cross_examination);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_dual_stance_with_models() {
        let cli = Cli::try_parse_from([
            "market-council",
            "--strategy",
            "dual-stance",
            "-m",
            "gemini-2.5-flash",
            "-m",
            "gemini-2.5-pro",
            "-o",
            "json",
            "-vv",
            "https://polymarket.com/event/x",
        ])
        .unwrap();
        assert_eq!(cli.strategy, Some(StrategyArg::DualStance));
        assert_eq!(cli.model, vec!["gemini-2.5-flash", "gemini-2.5-pro"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            WorkerStrategy::from(cli.strategy.unwrap()),
            WorkerStrategy::DualStance
        );
    }

    #[test]
    fn test_trending_needs_no_url() {
        let cli = Cli::try_parse_from(["market-council", "--trending"]).unwrap();
        assert!(cli.trending);
        assert!(cli.url.is_none());
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        assert!(Cli::try_parse_from(["market-council", "--strategy", "oracle"]).is_err());
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        assert_eq!(
            DomainOutputFormat::from(OutputFormat::Consensus),
            DomainOutputFormat::Consensus
        );
        assert_eq!(
            DomainOutputFormat::from(OutputFormat::Full),
            DomainOutputFormat::Full
        );
    }
}
