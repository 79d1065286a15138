//! Named-entity extraction over contract text.
//!
//! Deterministic pattern matching for the entity classes that matter in
//! contracts: counterparty organizations, dates, money amounts,
//! percentages, email addresses, and durations. Output is in document
//! order, de-duplicated by (text, label).

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// NER-style label of an extracted entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Org,
    Date,
    Money,
    Percent,
    Email,
    Duration,
}

impl EntityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Org => "ORG",
            EntityLabel::Date => "DATE",
            EntityLabel::Money => "MONEY",
            EntityLabel::Percent => "PERCENT",
            EntityLabel::Email => "EMAIL",
            EntityLabel::Duration => "DURATION",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A piece of text recognized as an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|November|December";

static PATTERNS: LazyLock<Vec<(EntityLabel, Regex)>> = LazyLock::new(|| {
    vec![
        (
            // Capitalized word run ending in a legal-form suffix.
            EntityLabel::Org,
            Regex::new(
                r"\b(?:[A-Z][A-Za-z&-]+ )+(?:Ltd|Limited|Inc|Incorporated|LLC|LLP|Corp|Corporation|GmbH)\b\.?",
            )
            .expect("valid regex"),
        ),
        (
            // "1 January 2024", "January 1, 2024", ISO, and slash dates.
            EntityLabel::Date,
            Regex::new(&format!(
                r"(?i)\b(?:\d{{1,2}} (?:{MONTHS}) \d{{4}}|(?:{MONTHS}) \d{{1,2}}, ?\d{{4}}|\d{{4}}-\d{{2}}-\d{{2}}|\d{{1,2}}/\d{{1,2}}/\d{{2,4}})\b",
            ))
            .expect("valid regex"),
        ),
        (
            EntityLabel::Money,
            Regex::new(r"(?:\b(?:USD|EUR|GBP|INR|Rs)\.?|[$€£₹]) ?\d[\d,]*(?:\.\d+)?")
                .expect("valid regex"),
        ),
        (
            EntityLabel::Percent,
            Regex::new(r"(?i)\b\d+(?:\.\d+)? ?(?:%|percent|per cent)").expect("valid regex"),
        ),
        (
            EntityLabel::Email,
            Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid regex"),
        ),
        (
            EntityLabel::Duration,
            Regex::new(r"(?i)\b\d+ (?:day|week|month|year)s?\b").expect("valid regex"),
        ),
    ]
});

/// Extract all recognized entities from `text`, in document order.
pub fn extract_entities(text: &str) -> Vec<Entity> {
    let mut found: Vec<(usize, Entity)> = Vec::new();

    for (label, re) in PATTERNS.iter() {
        for m in re.find_iter(text) {
            found.push((
                m.start(),
                Entity {
                    text: m.as_str().trim().to_string(),
                    label: *label,
                },
            ));
        }
    }

    found.sort_by_key(|(start, _)| *start);

    let mut seen = HashSet::new();
    found
        .into_iter()
        .filter_map(|(_, entity)| {
            seen.insert((entity.text.clone(), entity.label))
                .then_some(entity)
        })
        .collect()
}
