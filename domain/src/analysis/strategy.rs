//! Worker strategy selection

use serde::{Deserialize, Serialize};

/// Upper bound on dual-stance analysts per run.
pub const MAX_ANALYSTS: usize = 5;

/// How the perspective worker pool is staffed.
///
/// Selected once per run from configuration, never per call.
///
/// ```text
/// SpecialistLens:  5 lens workers ──▶ cross-examination ──▶ synthesis
/// DualStance:      1..=5 model workers (FOR + AGAINST each) ──▶ synthesis
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WorkerStrategy {
    /// One worker per fixed research lens
    #[default]
    #[serde(alias = "specialist-lens")]
    Specialist,
    /// One worker per configured model, each arguing both sides
    DualStance,
}

impl WorkerStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkerStrategy::Specialist => "specialist",
            WorkerStrategy::DualStance => "dual-stance",
        }
    }

    /// Whether the cross-examination stage applies to this strategy
    pub fn supports_cross_examination(&self) -> bool {
        matches!(self, WorkerStrategy::Specialist)
    }
}

impl std::fmt::Display for WorkerStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WorkerStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "specialist" | "specialist-lens" | "lens" => Ok(WorkerStrategy::Specialist),
            "dual-stance" | "dual_stance" | "dual" | "teams" => Ok(WorkerStrategy::DualStance),
            other => Err(format!(
                "unknown strategy '{}', expected 'specialist' or 'dual-stance'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("lens".parse::<WorkerStrategy>(), Ok(WorkerStrategy::Specialist));
        assert_eq!("Dual-Stance".parse::<WorkerStrategy>(), Ok(WorkerStrategy::DualStance));
        assert!("committee".parse::<WorkerStrategy>().is_err());
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&WorkerStrategy::DualStance).unwrap();
        assert_eq!(json, "\"dual-stance\"");
    }

    #[test]
    fn test_cross_examination_only_for_specialists() {
        assert!(WorkerStrategy::Specialist.supports_cross_examination());
        assert!(!WorkerStrategy::DualStance.supports_cross_examination());
    }
}
