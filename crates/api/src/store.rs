//! In-memory registry of completed analyses.
//!
//! Analyses live for the lifetime of the process; the durable artifacts are
//! the files in the upload and report directories.

use std::collections::HashMap;

use serde::Serialize;
use tokio::sync::RwLock;

use clauselens_core::analysis::ContractReport;
use clauselens_core::risk::RiskLevel;
use clauselens_core::types::{AnalysisId, Timestamp};

/// A completed analysis with its artifacts.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRecord {
    pub id: AnalysisId,
    /// Original client filename of the upload.
    pub filename: String,
    pub created_at: Timestamp,
    /// Download path of the generated PDF report.
    pub report_url: String,
    #[serde(flatten)]
    pub report: ContractReport,
}

/// Compact view of a record for list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub id: AnalysisId,
    pub filename: String,
    pub language: String,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub created_at: Timestamp,
    pub report_url: String,
}

impl From<&AnalysisRecord> for AnalysisSummary {
    fn from(record: &AnalysisRecord) -> Self {
        Self {
            id: record.id,
            filename: record.filename.clone(),
            language: record.report.language.clone(),
            risk_score: record.report.risk_score,
            risk_level: record.report.risk_level,
            created_at: record.created_at,
            report_url: record.report_url.clone(),
        }
    }
}

/// Registry of completed analyses, keyed by analysis id.
#[derive(Default)]
pub struct AnalysisStore {
    inner: RwLock<HashMap<AnalysisId, AnalysisRecord>>,
}

impl AnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: AnalysisRecord) {
        self.inner.write().await.insert(record.id, record);
    }

    pub async fn get(&self, id: AnalysisId) -> Option<AnalysisRecord> {
        self.inner.read().await.get(&id).cloned()
    }

    /// All recorded analyses as summaries, newest first.
    pub async fn list(&self) -> Vec<AnalysisSummary> {
        let guard = self.inner.read().await;

        let mut summaries: Vec<AnalysisSummary> = guard.values().map(Into::into).collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        summaries
    }
}
