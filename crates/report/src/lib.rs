//! PDF rendering of a [`ContractReport`].
//!
//! Output is an A4 document set in the built-in Helvetica faces, so no font
//! assets need to ship with the binary. Layout is a single top-down flow of
//! wrapped paragraphs with automatic page breaks.

use std::io::BufWriter;

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use clauselens_core::analysis::ContractReport;
use clauselens_core::types::Timestamp;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to render PDF: {0}")]
    Render(String),
}

// Page geometry (A4 portrait), in millimetres.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 20.0;
const MARGIN_TOP: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 20.0;

// Type sizes and vertical rhythm.
const TITLE_SIZE: f32 = 16.0;
const HEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.0;
const LINE_STEP: f32 = 5.0;

/// Body text wraps at this many characters, sized for Helvetica at
/// [`BODY_SIZE`] across the printable width.
const WRAP_COLS: usize = 95;

/// Entities beyond this count are omitted from the report.
const MAX_REPORT_ENTITIES: usize = 20;

/// Clause text is cut to this many characters before printing.
const CLAUSE_PREVIEW_CHARS: usize = 500;

/// Render `report` into PDF bytes.
pub fn render(report: &ContractReport, generated_at: Timestamp) -> Result<Vec<u8>, ReportError> {
    let mut page = PageWriter::new("Contract Analysis Report")?;

    page.paragraph("Contract Analysis Report", TITLE_SIZE, true, 6.0);
    page.paragraph(
        &format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S UTC")),
        BODY_SIZE,
        false,
        2.0,
    );
    page.paragraph(&format!("Language: {}", report.language), BODY_SIZE, false, 2.0);
    page.paragraph(
        &format!("Risk Score: {} ({})", report.risk_score, report.risk_level),
        BODY_SIZE,
        false,
        6.0,
    );

    page.paragraph("Summary", HEADING_SIZE, true, 2.0);
    page.paragraph(&report.summary, BODY_SIZE, false, 6.0);

    page.paragraph("Compliance Flags", HEADING_SIZE, true, 2.0);
    if report.compliance.is_empty() {
        page.paragraph("No major issues found", BODY_SIZE, false, 6.0);
    } else {
        for flag in &report.compliance {
            page.paragraph(&format!("- {flag}"), BODY_SIZE, false, 1.0);
        }
        page.space(5.0);
    }

    page.paragraph("Detected Entities", HEADING_SIZE, true, 2.0);
    for entity in report.entities.iter().take(MAX_REPORT_ENTITIES) {
        page.paragraph(&format!("{} ({})", entity.text, entity.label), BODY_SIZE, false, 0.0);
    }
    page.space(6.0);

    page.paragraph("Clause Analysis", HEADING_SIZE, true, 4.0);
    for clause in &report.clauses {
        page.paragraph(&format!("Clause {}", clause.id), BODY_SIZE, true, 1.0);
        page.paragraph(&clause_preview(&clause.text), BODY_SIZE, false, 1.0);
        page.paragraph(&format!("Intent: {}", clause.intent), BODY_SIZE, false, 1.0);
        page.paragraph(
            &format!("Risk: {} ({})", clause.risk_level, clause.risk_score),
            BODY_SIZE,
            false,
            4.0,
        );
    }

    page.finish()
}

/// First [`CLAUSE_PREVIEW_CHARS`] chars of the clause, always ellipsized.
fn clause_preview(text: &str) -> String {
    let head: String = text.chars().take(CLAUSE_PREVIEW_CHARS).collect();
    format!("{head}...")
}

/// Cursor-based writer: tracks the current layer and vertical position,
/// breaking to a fresh page when the cursor reaches the bottom margin.
struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl PageWriter {
    fn new(title: &str) -> Result<Self, ReportError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(render_err)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(render_err)?;

        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: PAGE_HEIGHT - MARGIN_TOP,
        })
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN_TOP;
    }

    /// Write one pre-wrapped line at the cursor.
    fn line(&mut self, text: &str, size: f32, bold: bool) {
        if self.y < MARGIN_BOTTOM {
            self.new_page();
        }

        let font = if bold { &self.bold } else { &self.regular };
        self.layer
            .use_text(text, size, Mm(MARGIN_LEFT), Mm(self.y), font);
        self.y -= LINE_STEP * (size / BODY_SIZE);
    }

    /// Write a wrapped paragraph followed by `space_after` millimetres.
    fn paragraph(&mut self, text: &str, size: f32, bold: bool, space_after: f32) {
        for line in wrap(text, WRAP_COLS) {
            self.line(&line, size, bold);
        }
        self.y -= space_after;
    }

    fn space(&mut self, mm: f32) {
        self.y -= mm;
    }

    fn finish(self) -> Result<Vec<u8>, ReportError> {
        let PageWriter { doc, .. } = self;

        let mut out = BufWriter::new(Vec::new());
        doc.save(&mut out).map_err(render_err)?;
        out.into_inner()
            .map_err(|e| ReportError::Render(e.to_string()))
    }
}

fn render_err(e: impl std::fmt::Display) -> ReportError {
    ReportError::Render(e.to_string())
}

/// Greedy word wrap by character count. A single word longer than `cols`
/// gets its own line rather than being split.
fn wrap(text: &str, cols: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > cols {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use clauselens_core::analysis::ClauseAnalysis;
    use clauselens_core::clause::ClauseIntent;
    use clauselens_core::entity::{Entity, EntityLabel};
    use clauselens_core::risk::RiskLevel;

    fn sample_report() -> ContractReport {
        ContractReport {
            language: "eng".to_string(),
            risk_score: 45,
            risk_level: RiskLevel::Medium,
            entities: vec![Entity {
                text: "Acme Widgets Ltd".to_string(),
                label: EntityLabel::Org,
            }],
            compliance: vec!["Unlimited liability may be unenforceable".to_string()],
            summary: "The supplier agrees to deliver widgets on time".to_string(),
            clauses: vec![ClauseAnalysis {
                id: 3,
                text: "The supplier accepts unlimited liability for losses.".to_string(),
                intent: ClauseIntent::Neutral,
                risk_score: 30,
                risk_level: RiskLevel::Low,
                keywords: vec!["unlimited liability".to_string()],
            }],
        }
    }

    fn generated_at() -> Timestamp {
        chrono::Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn renders_a_parsable_pdf() {
        let bytes = render(&sample_report(), generated_at()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn report_sections_survive_extraction() {
        let bytes = render(&sample_report(), generated_at()).unwrap();
        let text = pdf_extract::extract_text_from_mem(&bytes).unwrap();

        assert!(text.contains("Contract Analysis Report"));
        assert!(text.contains("Language: eng"));
        assert!(text.contains("Risk Score: 45 (MEDIUM)"));
        assert!(text.contains("Unlimited liability may be unenforceable"));
        assert!(text.contains("Acme Widgets Ltd (ORG)"));
        assert!(text.contains("Clause 3"));
        assert!(text.contains("Intent: Neutral"));
    }

    #[test]
    fn wrap_splits_on_word_boundaries() {
        let lines = wrap("alpha beta gamma delta", 11);
        assert_eq!(lines, vec!["alpha beta", "gamma delta"]);
    }

    #[test]
    fn wrap_keeps_oversized_words_whole() {
        let lines = wrap("supercalifragilistic", 5);
        assert_eq!(lines, vec!["supercalifragilistic"]);
    }

    #[test]
    fn wrap_of_empty_text_is_one_blank_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn many_clauses_paginate_without_panic() {
        let mut report = sample_report();
        let clause = report.clauses[0].clone();
        report.clauses = (1..=60)
            .map(|id| ClauseAnalysis { id, ..clause.clone() })
            .collect();

        let bytes = render(&report, generated_at()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
