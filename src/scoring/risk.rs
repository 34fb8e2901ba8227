// Risk aggregation.
//
// Sums the penalties of failed checks into a clamped 0-100 score and
// collects the factor texts in check order. The engine itself is
// deterministic: the same input always produces the same assessment.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::scoring::checks::{self, CheckResult};
use crate::scoring::input::ProfileInput;

/// The risk score ceiling. Penalty sums above this clamp down to it.
pub const MAX_RISK_SCORE: u32 = 100;

/// Aggregate output of the scoring engine.
///
/// `factors` holds the factor text of every failed check, and
/// `test_results` holds all twelve results, both in check order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub risk_score: u32,
    pub factors: Vec<String>,
    pub test_results: Vec<CheckResult>,
}

impl RiskAssessment {
    pub fn level(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk_score)
    }
}

/// Presentation tiers for a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Determine the level from a risk score (0-100).
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 70 => RiskLevel::High,
            s if s >= 40 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Run all twelve checks against a normalized profile and aggregate.
///
/// This is the core scoring function. It is pure — no I/O, no randomness —
/// and infallible: a typed `ProfileInput` cannot be malformed, so all
/// twelve checks always run.
pub fn score_profile(input: &ProfileInput) -> RiskAssessment {
    let test_results = checks::run_checks(input);

    let total: u32 = test_results
        .iter()
        .filter(|r| r.is_failed())
        .map(|r| r.score)
        .sum();

    let factors: Vec<String> = test_results
        .iter()
        .filter_map(|r| r.factor.clone())
        .collect();

    let risk_score = total.min(MAX_RISK_SCORE);

    info!(
        username = %input.username,
        risk_score,
        failed = factors.len(),
        level = RiskLevel::from_score(risk_score).as_str(),
        "Scored profile"
    );

    RiskAssessment {
        risk_score,
        factors,
        test_results,
    }
}
