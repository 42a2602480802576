//! Specialist research lenses

use serde::{Deserialize, Serialize};

/// The fixed perspective a specialist worker analyses a market from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResearchLens {
    #[serde(rename = "Social Media")]
    SocialMedia,
    #[serde(rename = "Web Search/News")]
    WebSearch,
    #[serde(rename = "Finance")]
    Finance,
    #[serde(rename = "Geopolitical")]
    Geopolitical,
    #[serde(rename = "Macroeconomic")]
    Macroeconomic,
}

impl ResearchLens {
    /// All lenses in submission order
    pub const ALL: [ResearchLens; 5] = [
        ResearchLens::SocialMedia,
        ResearchLens::WebSearch,
        ResearchLens::Finance,
        ResearchLens::Geopolitical,
        ResearchLens::Macroeconomic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResearchLens::SocialMedia => "Social Media",
            ResearchLens::WebSearch => "Web Search/News",
            ResearchLens::Finance => "Finance",
            ResearchLens::Geopolitical => "Geopolitical",
            ResearchLens::Macroeconomic => "Macroeconomic",
        }
    }

    /// Role line that opens the worker prompt
    pub fn role_brief(&self) -> &'static str {
        match self {
            ResearchLens::SocialMedia => {
                "As a Social Media Analyst, your focus is on public sentiment and discourse. Analyze trends, arguments, and opinions from platforms like X and Reddit."
            }
            ResearchLens::WebSearch => {
                "As a News & Web Search Analyst, your focus is on credible, factual information. Analyze recent news articles, official reports, and expert publications."
            }
            ResearchLens::Finance => {
                "As a Financial Analyst, your focus is on economic and market implications. Analyze financial statements, market trends, stock prices, and investor reports."
            }
            ResearchLens::Geopolitical => {
                "As a Geopolitical Analyst, your focus is on international relations and political risk. Analyze government policies, treaties, diplomatic statements, and regional stability."
            }
            ResearchLens::Macroeconomic => {
                "As a Macroeconomic Analyst, your focus is on broad economic trends. Analyze GDP, inflation, employment data, and central bank policies."
            }
        }
    }
}

impl std::fmt::Display for ResearchLens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
