/// Uploads, analyses, and report files all share one UUID v4 identifier.
pub type AnalysisId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
