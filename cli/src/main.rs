//! CLI entrypoint for market-council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use colored::Colorize;
use council_application::{AnalysisConfig, FetchTrendingUseCase, RunAnalysisUseCase};
use council_domain::{MarketUrl, Model, OutputFormat};
use council_infrastructure::{
    ConfigLoader, FileConfig, GeminiGateway, JsonlConversationLogger, PolymarketFeed,
};
use council_presentation::{Cli, ConsoleFormatter, OutputFormatter, ProgressReporter};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const RUN_FAILED_MESSAGE: &str =
    "An error occurred during the analysis. Please check the market URL and try again.";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting market-council");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    for issue in config.ensure_valid()? {
        warn!("{}", issue.message);
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // Trending mode
    if cli.trending {
        let feed = Arc::new(PolymarketFeed::new().context("Failed to build HTTP client")?);
        let markets = FetchTrendingUseCase::new(feed).execute().await;
        print!("{}", ConsoleFormatter::format_trending(&markets));
        return Ok(());
    }

    // Analysis mode - URL is required
    let Some(url) = cli.url.as_deref() else {
        bail!("A market URL is required. Use --trending to list popular markets.");
    };
    let market_url = MarketUrl::parse(url)?;

    let analysis_config = apply_cli_overrides(config.to_analysis_config(), &cli);
    let errors: Vec<String> = analysis_config
        .validate()
        .into_iter()
        .filter_map(|issue| issue.is_error().then_some(issue.message))
        .collect();
    if !errors.is_empty() {
        bail!("Invalid options: {}", errors.join("; "));
    }

    let format = output_format(&cli, &config);

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiGateway::new(&config.gemini.to_gemini_config())?);
    let mut use_case = RunAnalysisUseCase::new(gateway);

    if let Some(path) = &cli.transcript {
        match JsonlConversationLogger::new(path) {
            Some(logger) => use_case = use_case.with_conversation_logger(Arc::new(logger)),
            None => warn!("Transcript disabled: cannot open {}", path.display()),
        }
    }

    if !cli.quiet && format != OutputFormat::Json {
        print_header(&market_url, &analysis_config);
    }

    let input = analysis_config.to_input(market_url);

    let result = if cli.quiet {
        use_case.execute(input).await
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await
    };

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            error!(error = %e, "Analysis run failed");
            eprintln!("{}", RUN_FAILED_MESSAGE.red());
            std::process::exit(1);
        }
    };

    println!("{}", ConsoleFormatter.render(&result, format));

    Ok(())
}

/// Initialize tracing by verbosity; `--log-file` redirects it to a file.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();

            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();

            Ok(None)
        }
    }
}

/// Layer command-line flags over the file configuration.
fn apply_cli_overrides(config: AnalysisConfig, cli: &Cli) -> AnalysisConfig {
    let mut models = config.models().clone();

    if let Some(worker) = &cli.worker_model {
        models = models.with_worker(Model::from(worker.as_str()));
    }
    if let Some(synthesis) = &cli.synthesis_model {
        models = models.with_synthesis(Model::from(synthesis.as_str()));
    }
    if !cli.model.is_empty() {
        models = models.with_analysts(cli.model.iter().map(|m| Model::from(m.as_str())).collect());
    }

    let strategy = cli.strategy.map(Into::into).unwrap_or(config.strategy());
    let cross_examination = config.cross_examination() && !cli.no_cross_examination;

    AnalysisConfig::new(strategy, models).with_cross_examination(cross_examination)
}

fn output_format(cli: &Cli, config: &FileConfig) -> OutputFormat {
    cli.output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default()
}

fn print_header(market_url: &MarketUrl, config: &AnalysisConfig) {
    eprintln!();
    eprintln!("+============================================================+");
    eprintln!("|           Market Council - Prediction Analysis             |");
    eprintln!("+============================================================+");
    eprintln!();
    eprintln!("Market: {}", market_url);
    eprintln!("Strategy: {}", config.strategy());
    eprintln!(
        "Models: worker {}, synthesis {}",
        config.models().worker,
        config.models().synthesis
    );
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::WorkerStrategy;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["market-council"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_overrides_replace_models_and_strategy() {
        let cli = cli(&[
            "--strategy",
            "dual-stance",
            "-m",
            "gemini-2.5-pro",
            "--synthesis-model",
            "gemini-3-pro-preview",
        ]);
        let config = apply_cli_overrides(AnalysisConfig::default(), &cli);

        assert_eq!(config.strategy(), WorkerStrategy::DualStance);
        assert_eq!(config.models().analysts, vec![Model::Gemini25Pro]);
        assert_eq!(config.models().synthesis, Model::Gemini3Pro);
        assert_eq!(config.models().worker, Model::Gemini25Flash);
    }

    #[test]
    fn test_no_flags_keeps_file_values() {
        let file = AnalysisConfig::new(WorkerStrategy::DualStance, Default::default())
            .with_cross_examination(false);
        let config = apply_cli_overrides(file, &cli(&[]));

        assert_eq!(config.strategy(), WorkerStrategy::DualStance);
        assert!(!config.cross_examination());
    }

    #[test]
    fn test_cross_examination_flag_disables() {
        let config =
            apply_cli_overrides(AnalysisConfig::default(), &cli(&["--no-cross-examination"]));
        assert!(!config.cross_examination());
    }

    #[test]
    fn test_output_format_precedence() {
        let mut file = FileConfig::default();
        file.output.format = Some(OutputFormat::Consensus);

        assert_eq!(output_format(&cli(&[]), &file), OutputFormat::Consensus);
        assert_eq!(output_format(&cli(&["-o", "json"]), &file), OutputFormat::Json);
        assert_eq!(
            output_format(&cli(&[]), &FileConfig::default()),
            OutputFormat::Full
        );
    }
}
