//! Report download.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use uuid::Uuid;

use clauselens_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /download/{filename}
///
/// Serve a generated PDF report. Only `{uuid}.pdf` names are accepted, so
/// traversal attempts never reach the filesystem.
pub async fn download_report(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> AppResult<Response> {
    let id = filename
        .strip_suffix(".pdf")
        .and_then(|stem| Uuid::parse_str(stem).ok())
        .ok_or_else(|| AppError::BadRequest("Report filename must be '<uuid>.pdf'".to_string()))?;

    let path = state.config.report_dir.join(format!("{id}.pdf"));
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Report",
                id,
            }));
        }
        Err(e) => {
            return Err(AppError::InternalError(format!(
                "Failed to read report: {e}"
            )));
        }
    };

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{id}.pdf\""),
        ),
    ];

    Ok((headers, bytes).into_response())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/download/{filename}", get(download_report))
}
