//! Output formatter trait

use council_domain::{AnalysisResult, OutputFormat};

/// Trait for formatting analysis results
pub trait OutputFormatter {
    /// Format the complete result: workers, debates, consensus and sources
    fn format(&self, result: &AnalysisResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &AnalysisResult) -> String;

    /// Format the consensus only (concise output)
    fn format_consensus_only(&self, result: &AnalysisResult) -> String;

    /// Dispatch on the selected output format
    fn render(&self, result: &AnalysisResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(result),
            OutputFormat::Consensus => self.format_consensus_only(result),
            OutputFormat::Json => self.format_json(result),
        }
    }
}
