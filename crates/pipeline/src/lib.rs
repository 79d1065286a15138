//! The contract analysis pipeline.
//!
//! Runs the stages a reviewer would work through by hand: extract the text,
//! detect its language, split and classify the clauses, aggregate risk, then
//! screen the full text for entities and compliance flags and write the
//! summary. Synchronous and CPU-bound; callers on an async runtime should
//! run it on a blocking thread.

use clauselens_core::analysis::{aggregate_risk_score, ClauseAnalysis, ContractReport};
use clauselens_core::clause::split_clauses;
use clauselens_core::compliance::check_compliance;
use clauselens_core::entity::extract_entities;
use clauselens_core::language::detect_language;
use clauselens_core::risk::RiskLevel;
use clauselens_core::summary::summarize;
use clauselens_extract::{extract_text, DocumentFormat, ExtractError};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Extraction succeeded but produced no usable text (e.g. a scanned
    /// PDF with no text layer).
    #[error("Could not extract text from document")]
    EmptyDocument,
}

/// Analyze a contract document and assemble its [`ContractReport`].
pub fn analyze(bytes: &[u8], format: DocumentFormat) -> Result<ContractReport, PipelineError> {
    let text = extract_text(bytes, format)?;
    if text.trim().is_empty() {
        return Err(PipelineError::EmptyDocument);
    }

    let language = detect_language(&text);

    let clauses: Vec<ClauseAnalysis> = split_clauses(&text)
        .into_iter()
        .map(ClauseAnalysis::from_clause)
        .collect();

    let risk_score = aggregate_risk_score(&clauses);
    let risk_level = RiskLevel::from_score(risk_score);

    tracing::debug!(
        language = %language,
        clause_count = clauses.len(),
        risk_score,
        "Contract analyzed"
    );

    Ok(ContractReport {
        language,
        risk_score,
        risk_level,
        entities: extract_entities(&text),
        compliance: check_compliance(&text),
        summary: summarize(&text),
        clauses,
    })
}
