//! Clause segmentation and intent classification.
//!
//! Contracts are split on numbered headings (`1. `, `2) ` ...). Split parts
//! keep their position in the document, so a part discarded for being too
//! short still consumes its id, and clause ids may have gaps.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A split part must be longer than this (trimmed) to count as a clause.
pub const MIN_CLAUSE_LEN: usize = 50;

/// A newline, optional indent, a clause number, `.` or `)`, then whitespace.
static CLAUSE_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\d+[.)]\s+").expect("valid regex"));

/// A clause as produced by [`split_clauses`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    /// 1-based position of the part in the split, counting discarded parts.
    pub id: u32,
    pub text: String,
}

/// The normative force of a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClauseIntent {
    Obligation,
    Right,
    Prohibition,
    Neutral,
}

impl ClauseIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClauseIntent::Obligation => "Obligation",
            ClauseIntent::Right => "Right",
            ClauseIntent::Prohibition => "Prohibition",
            ClauseIntent::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for ClauseIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split contract text into clauses on numbered-heading boundaries.
///
/// Parts whose trimmed text is [`MIN_CLAUSE_LEN`] characters or shorter
/// (headings, stray numbering, blank runs) are dropped.
pub fn split_clauses(text: &str) -> Vec<Clause> {
    CLAUSE_BOUNDARY_RE
        .split(text)
        .enumerate()
        .filter_map(|(i, part)| {
            let trimmed = part.trim();
            (trimmed.len() > MIN_CLAUSE_LEN).then(|| Clause {
                id: (i + 1) as u32,
                text: trimmed.to_string(),
            })
        })
        .collect()
}

/// Classify a clause by its modal verbs.
///
/// Negated forms are checked first so `"shall not"` reads as a
/// prohibition rather than an obligation.
pub fn classify_intent(sentence: &str) -> ClauseIntent {
    let s = sentence.to_lowercase();

    if s.contains("shall not") || s.contains("must not") {
        return ClauseIntent::Prohibition;
    }

    if s.contains("shall") || s.contains("must") {
        return ClauseIntent::Obligation;
    }

    if s.contains("may") || s.contains("can") {
        return ClauseIntent::Right;
    }

    ClauseIntent::Neutral
}
