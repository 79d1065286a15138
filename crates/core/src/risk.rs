//! Keyword risk engine.
//!
//! Risk is scored by scanning the lower-cased text for known dangerous
//! phrases. Each phrase scores at most once regardless of how often it
//! appears; the total is capped at [`MAX_RISK_SCORE`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Phrases that make a contract substantially riskier.
pub const HIGH_RISK_PHRASES: &[&str] = &[
    "unlimited liability",
    "non compete",
    "penalty",
    "terminate anytime",
    "without notice",
    "indemnify",
    "exclusive",
];

/// Phrases that warrant a closer look.
pub const MEDIUM_RISK_PHRASES: &[&str] = &[
    "lock in",
    "arbitration",
    "auto renew",
    "jurisdiction",
    "confidentiality",
];

/// Points per matched high-risk phrase.
pub const HIGH_RISK_POINTS: u32 = 30;

/// Points per matched medium-risk phrase.
pub const MEDIUM_RISK_POINTS: u32 = 15;

/// Risk scores are clamped to this ceiling.
pub const MAX_RISK_SCORE: u32 = 100;

/// Score above which a text is rated [`RiskLevel::High`].
pub const HIGH_LEVEL_THRESHOLD: u32 = 60;

/// Score above which a text is rated [`RiskLevel::Medium`].
pub const MEDIUM_LEVEL_THRESHOLD: u32 = 30;

/// Coarse risk rating derived from a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Derive the level from a score. Boundaries are exclusive: a score of
    /// exactly 60 is still `Medium`, exactly 30 is still `Low`.
    pub fn from_score(score: u32) -> Self {
        if score > HIGH_LEVEL_THRESHOLD {
            RiskLevel::High
        } else if score > MEDIUM_LEVEL_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of scoring one piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u32,
    pub level: RiskLevel,
    /// Matched phrases, high-risk list first, in list order.
    pub keywords: Vec<String>,
}

/// Score `text` against the phrase lists.
pub fn assess_risk(text: &str) -> RiskAssessment {
    let t = text.to_lowercase();

    let mut score = 0;
    let mut keywords = Vec::new();

    for phrase in HIGH_RISK_PHRASES {
        if t.contains(phrase) {
            score += HIGH_RISK_POINTS;
            keywords.push((*phrase).to_string());
        }
    }

    for phrase in MEDIUM_RISK_PHRASES {
        if t.contains(phrase) {
            score += MEDIUM_RISK_POINTS;
            keywords.push((*phrase).to_string());
        }
    }

    let score = score.min(MAX_RISK_SCORE);

    RiskAssessment {
        score,
        level: RiskLevel::from_score(score),
        keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_scores_zero() {
        let assessment = assess_risk("The parties agree to cooperate in good faith.");

        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.level, RiskLevel::Low);
        assert!(assessment.keywords.is_empty());
    }

    #[test]
    fn one_high_phrase_scores_thirty() {
        let assessment = assess_risk("A penalty of 5% applies to late delivery.");

        assert_eq!(assessment.score, 30);
        assert_eq!(assessment.level, RiskLevel::Low);
        assert_eq!(assessment.keywords, vec!["penalty"]);
    }

    #[test]
    fn repeated_phrase_scores_once() {
        let assessment = assess_risk("penalty penalty penalty");
        assert_eq!(assessment.score, 30);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let assessment = assess_risk("UNLIMITED LIABILITY for all claims.");
        assert_eq!(assessment.keywords, vec!["unlimited liability"]);
    }

    #[test]
    fn high_and_medium_phrases_accumulate() {
        // 2 x 30 + 1 x 15 = 75 -> HIGH
        let assessment =
            assess_risk("The vendor shall indemnify the client against any penalty under the arbitration rules.");

        assert_eq!(assessment.score, 75);
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(assessment.keywords, vec!["penalty", "indemnify", "arbitration"]);
    }

    #[test]
    fn score_caps_at_one_hundred() {
        let text = HIGH_RISK_PHRASES.join(" ") + " " + &MEDIUM_RISK_PHRASES.join(" ");
        let assessment = assess_risk(&text);

        assert_eq!(assessment.score, MAX_RISK_SCORE);
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(
            assessment.keywords.len(),
            HIGH_RISK_PHRASES.len() + MEDIUM_RISK_PHRASES.len()
        );
    }

    #[test]
    fn level_boundaries_are_exclusive() {
        assert_eq!(RiskLevel::from_score(30), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(31), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(60), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(61), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
    }

    #[test]
    fn level_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"HIGH\"");
    }
}
