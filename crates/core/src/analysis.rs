//! The assembled analysis result.

use serde::{Deserialize, Serialize};

use crate::clause::{classify_intent, Clause, ClauseIntent};
use crate::entity::Entity;
use crate::risk::{assess_risk, RiskLevel};

/// Per-clause analysis: the clause text with its intent and risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseAnalysis {
    pub id: u32,
    pub text: String,
    pub intent: ClauseIntent,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    /// Risk phrases matched in this clause.
    pub keywords: Vec<String>,
}

impl ClauseAnalysis {
    /// Classify and score a single clause.
    pub fn from_clause(clause: Clause) -> Self {
        let intent = classify_intent(&clause.text);
        let risk = assess_risk(&clause.text);

        Self {
            id: clause.id,
            text: clause.text,
            intent,
            risk_score: risk.score,
            risk_level: risk.level,
            keywords: risk.keywords,
        }
    }
}

/// Everything the analysis pipeline produces for one contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractReport {
    /// ISO 639-3 code of the detected language, or `"unknown"`.
    pub language: String,
    /// Contract-level risk score, the integer average of clause scores.
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub entities: Vec<Entity>,
    pub compliance: Vec<String>,
    pub summary: String,
    pub clauses: Vec<ClauseAnalysis>,
}

/// Contract-level score: integer average over clauses, 0 when there are none.
pub fn aggregate_risk_score(clauses: &[ClauseAnalysis]) -> u32 {
    let total: u32 = clauses.iter().map(|c| c.risk_score).sum();
    total / clauses.len().max(1) as u32
}
