//! Prompt templates for the analysis flow

use crate::analysis::lens::ResearchLens;
use crate::analysis::report::ResearchReport;
use crate::analysis::result::WorkerOutputs;
use crate::analysis::stance::{IndividualAnalysis, Stance};

/// Shared JSON formatting rules appended to every structured-reply prompt.
const JSON_RULES: &str = r#"The JSON object must strictly follow JSON standards. Ensure that any double quotes within string values are properly escaped with a backslash (e.g., "an argument with a \"quoted phrase\" inside")."#;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Question extraction: market URL → bare binary question
    pub fn question_extraction(market_url: &str) -> String {
        format!(
            "Given this Polymarket URL: {}, what is the specific binary (YES/NO) question being asked? \
Please state the question clearly and concisely, without any additional text or pleasantries.",
            market_url
        )
    }

    /// Specialist worker prompt for one research lens
    pub fn specialist_report(lens: ResearchLens, question: &str) -> String {
        format!(
            r#"{role}

You are a world-class specialist research agent. Your task is to analyze the following prediction market question from your unique perspective: "{question}".

Use Google Search to find the most relevant, up-to-date information.
Present your findings as a JSON object inside a markdown code block (```json ... ```).
{rules}
The JSON object must have three keys:
1. "keyFindings": An array of 3-5 concise, impactful string bullet points summarizing your most important findings.
2. "summary": A 2-3 sentence paragraph explaining your analysis and reasoning.
3. "leaning": A string that must be one of "YES", "NO", or "NEUTRAL", representing your perspective's overall sentiment on the question."#,
            role = lens.role_brief(),
            question = question,
            rules = JSON_RULES,
        )
    }

    /// Dual-stance team prompt: argue one side of the question
    pub fn team_case(stance: Stance, question: &str) -> String {
        let (side, task) = match stance {
            Stance::For => (
                "YES",
                "Build the strongest evidence-based case that this market will resolve YES.",
            ),
            Stance::Against => (
                "NO",
                "Build the strongest evidence-based case that this market will resolve NO.",
            ),
        };

        format!(
            r#"You are a member of the {side} team in a structured debate about the prediction market question: "{question}".

{task}
Use Google Search to ground every argument in current, verifiable information. Be honest about how strong your side really is.

Present your case as a JSON object inside a markdown code block (```json ... ```).
{rules}
The JSON object must have two keys:
1. "arguments": An array of 3-5 concise string arguments supporting the {side} outcome.
2. "confidence": A number from 0-100 expressing how likely the {side} outcome is, given the evidence you found."#,
            side = side,
            question = question,
            task = task,
            rules = JSON_RULES,
        )
    }

    /// Cross-examination prompt: does `current` contradict its siblings?
    pub fn cross_examination(
        question: &str,
        current: &ResearchReport,
        others: &[&ResearchReport],
    ) -> String {
        let lens = current.agent_type.label();

        let mut prompt = format!(
            r#"You are a debate moderator. Analyze the following research report from the "{lens}" agent in the context of reports from other agents on the market question: "{question}".

**{upper} AGENT REPORT:**
- Leaning: {leaning}
- Summary: {summary}

**OTHER AGENT REPORTS:**
"#,
            lens = lens,
            question = question,
            upper = lens.to_uppercase(),
            leaning = current.leaning,
            summary = current.summary,
        );

        for other in others {
            prompt.push_str(&format!(
                "- {} (Leaning: {}): {}\n",
                other.agent_type.label(),
                other.leaning,
                other.summary
            ));
        }

        prompt.push_str(&format!(
            r#"
Your task is to:
1. Identify if the {lens} agent's report significantly contradicts any of the other reports. A simple difference in leaning is not enough; look for opposing facts, reasoning, or conclusions.
2. If there are no major contradictions, return a JSON object with "hasContradiction": false.
3. If there ARE significant contradictions, return a JSON object with:
   - "hasContradiction": true
   - "summary": A 1-2 sentence summary describing the core of the disagreement.
   - "contradictionScore": A number from 0-100 quantifying the severity of the contradiction.

Provide your response as a JSON object inside a markdown code block (```json ... ```)."#,
            lens = lens,
        ));

        prompt
    }

    /// Consensus prompt: fold every worker output into one verdict
    pub fn consensus(question: &str, outputs: &WorkerOutputs) -> String {
        let mut prompt = format!(
            r#"You are a neutral, master Research Orchestrator moderating a debate on the question: "{}". You have received reports from {} AI agents. Your task is to synthesize all findings into a final, definitive consensus report.

Here are the agent reports:

"#,
            question,
            outputs.len()
        );

        prompt.push_str(&Self::consensus_transcript(outputs));

        prompt.push_str(&format!(
            r#"Based on ALL the provided reports, weigh the evidence from each perspective. Identify areas of agreement and contradiction. Determine the most likely outcome.
Present your final analysis as a JSON object inside a markdown code block (```json ... ```).
{}
The JSON object must have three keys:
1. "outcome": a string which must be one of "YES", "NO", or "UNCERTAIN".
2. "confidence": a number from 0-100 representing certainty in your final synthesized conclusion.
3. "summary": a concise string (3-4 sentences) explaining your reasoning, highlighting how you synthesized the different perspectives to reach your conclusion."#,
            JSON_RULES
        ));

        prompt
    }

    /// Transcript section of the consensus prompt, one block per worker
    pub fn consensus_transcript(outputs: &WorkerOutputs) -> String {
        let mut transcript = String::new();

        match outputs {
            WorkerOutputs::Specialist(reports) => {
                for report in reports {
                    transcript.push_str(&format!(
                        "--- REPORT FROM {} AGENT ---\n",
                        report.agent_type.label().to_uppercase()
                    ));
                    transcript.push_str(&format!("Leaning: {}\n", report.leaning));
                    transcript.push_str(&format!("Summary: {}\n", report.summary));
                    transcript.push_str(&format!(
                        "Key Findings:\n{}\n",
                        bullet_list(&report.key_findings)
                    ));
                    if let Some(debate) = &report.debate {
                        transcript.push_str(&format!(
                            "Point of Contention (severity {}/100): {}\n",
                            debate.contradiction_score, debate.summary
                        ));
                    }
                    transcript.push_str("------------------------------------------\n\n");
                }
            }
            WorkerOutputs::DualStance(analyses) => {
                for (i, analysis) in analyses.iter().enumerate() {
                    transcript.push_str(&Self::analysis_block(i + 1, analysis));
                }
            }
        }

        transcript
    }

    fn analysis_block(index: usize, analysis: &IndividualAnalysis) -> String {
        format!(
            "--- ANALYST {} ({}) ---\n\
YES team (confidence {}/100):\n{}\n\
NO team (confidence {}/100):\n{}\n\
------------------------------------------\n\n",
            index,
            analysis.agent_model,
            analysis.yes_team.confidence,
            bullet_list(&analysis.yes_team.arguments),
            analysis.no_team.confidence,
            bullet_list(&analysis.no_team.arguments),
        )
    }
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::report::{Debate, Leaning, ReportPayload};
    use crate::analysis::stance::TeamAnalysis;
    use crate::core::model::Model;

    fn report(lens: ResearchLens, leaning: Leaning, summary: &str) -> ResearchReport {
        ResearchReport::from_payload(
            lens,
            ReportPayload {
                key_findings: vec![format!("{} finding", lens.label())],
                summary: summary.to_string(),
                leaning,
            },
            vec![],
        )
    }

    #[test]
    fn test_question_extraction_contains_url() {
        let prompt = PromptTemplate::question_extraction("https://polymarket.com/event/x");
        assert!(prompt.contains("https://polymarket.com/event/x"));
        assert!(prompt.contains("binary (YES/NO)"));
    }

    #[test]
    fn test_specialist_prompt_has_role_and_keys() {
        let prompt = PromptTemplate::specialist_report(ResearchLens::Finance, "Will X?");
        assert!(prompt.starts_with("As a Financial Analyst"));
        assert!(prompt.contains("\"Will X?\""));
        assert!(prompt.contains("\"keyFindings\""));
        assert!(prompt.contains("\"leaning\""));
    }

    #[test]
    fn test_team_prompts_differ_by_side() {
        let yes = PromptTemplate::team_case(Stance::For, "Will X?");
        let no = PromptTemplate::team_case(Stance::Against, "Will X?");
        assert!(yes.contains("YES team"));
        assert!(no.contains("NO team"));
        assert!(yes.contains("\"confidence\""));
    }

    #[test]
    fn test_cross_examination_lists_only_others() {
        let current = report(ResearchLens::SocialMedia, Leaning::Yes, "Buzz is positive.");
        let finance = report(ResearchLens::Finance, Leaning::No, "Markets are bearish.");
        let news = report(ResearchLens::WebSearch, Leaning::Neutral, "News is mixed.");

        let prompt =
            PromptTemplate::cross_examination("Will X?", &current, &[&finance, &news]);
        assert!(prompt.contains("**SOCIAL MEDIA AGENT REPORT:**"));
        assert!(prompt.contains("- Finance (Leaning: NO): Markets are bearish."));
        assert!(prompt.contains("- Web Search/News (Leaning: NEUTRAL): News is mixed."));
        assert!(!prompt.contains("- Social Media (Leaning"));
    }

    #[test]
    fn test_consensus_includes_debate() {
        let contested = report(ResearchLens::Finance, Leaning::No, "Bearish.").with_debate(Debate {
            summary: "Finance opposes social sentiment.".into(),
            contradiction_score: 70,
        });
        let outputs = WorkerOutputs::Specialist(vec![
            report(ResearchLens::SocialMedia, Leaning::Yes, "Bullish."),
            contested,
        ]);
        let prompt = PromptTemplate::consensus("Will X?", &outputs);
        assert!(prompt.contains("reports from 2 AI agents"));
        assert!(prompt.contains("--- REPORT FROM FINANCE AGENT ---"));
        assert!(prompt.contains("Point of Contention (severity 70/100)"));
        assert!(prompt.contains("- Social Media finding"));
        assert!(prompt.contains("\"UNCERTAIN\""));
    }

    #[test]
    fn test_consensus_dual_stance_transcript() {
        let analysis = IndividualAnalysis::new(
            Model::Gemini25Flash,
            TeamAnalysis {
                arguments: vec!["Polls favour YES".into()],
                confidence: 64,
            },
            TeamAnalysis {
                arguments: vec!["Funding is short".into()],
                confidence: 41,
            },
        );
        let transcript =
            PromptTemplate::consensus_transcript(&WorkerOutputs::DualStance(vec![analysis]));
        assert!(transcript.contains("--- ANALYST 1 (gemini-2.5-flash) ---"));
        assert!(transcript.contains("YES team (confidence 64/100):\n- Polls favour YES"));
        assert!(transcript.contains("NO team (confidence 41/100):\n- Funding is short"));
    }
}
