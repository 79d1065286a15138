//! Contract upload and analysis.

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};

use clauselens_core::types::AnalysisId;
use clauselens_extract::DocumentFormat;
use clauselens_pipeline::PipelineError;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::store::AnalysisRecord;

/// POST /analyze
///
/// Accept a multipart upload of a single contract document, persist it, run
/// the analysis pipeline, and write the PDF report. Responds with the
/// recorded analysis, including the report download URL.
pub async fn analyze_contract(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<AnalysisRecord>> {
    // The document is the first field that carries a filename.
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        upload = Some((filename, data));
        break;
    }

    let Some((filename, data)) = upload else {
        return Err(AppError::BadRequest(
            "No file received in multipart upload".to_string(),
        ));
    };
    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
    }

    let format = DocumentFormat::from_filename(&filename).map_err(PipelineError::from)?;

    let id: AnalysisId = uuid::Uuid::new_v4();

    // Keep the raw upload next to the generated report.
    let upload_path = state
        .config
        .upload_dir
        .join(format!("{id}.{}", format.extension()));
    tokio::fs::write(&upload_path, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    let created_at = chrono::Utc::now();

    // Extraction, analysis, and rendering are CPU-bound; keep them off the
    // async workers.
    let (report, pdf) = tokio::task::spawn_blocking(move || {
        let report = clauselens_pipeline::analyze(&data, format)?;
        let pdf = clauselens_report::render(&report, created_at)?;
        Ok::<_, AppError>((report, pdf))
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Analysis task failed: {e}")))??;

    let report_name = format!("{id}.pdf");
    let report_path = state.config.report_dir.join(&report_name);
    tokio::fs::write(&report_path, &pdf)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store report: {e}")))?;

    let record = AnalysisRecord {
        id,
        filename,
        created_at,
        report_url: format!("/download/{report_name}"),
        report,
    };
    state.store.insert(record.clone()).await;

    tracing::info!(
        analysis_id = %id,
        language = %record.report.language,
        risk_score = record.report.risk_score,
        risk_level = %record.report.risk_level,
        clause_count = record.report.clauses.len(),
        "Contract analyzed",
    );

    Ok(Json(record))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze_contract))
}
