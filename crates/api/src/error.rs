use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use clauselens_core::error::CoreError;
use clauselens_extract::ExtractError;
use clauselens_pipeline::PipelineError;
use clauselens_report::ReportError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain, pipeline, and report errors and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `clauselens_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An extraction or analysis error from the pipeline.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// A PDF rendering error.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Pipeline errors ---
            AppError::Pipeline(err) => classify_pipeline_error(err),

            // --- Report rendering errors ---
            AppError::Report(err) => {
                tracing::error!(error = %err, "Report rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "REPORT_ERROR",
                    "Failed to generate the PDF report".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a pipeline error into an HTTP status, error code, and message.
///
/// - Unsupported extensions map to 415.
/// - Documents we cannot get text out of map to 422.
fn classify_pipeline_error(err: &PipelineError) -> (StatusCode, &'static str, String) {
    match err {
        PipelineError::Extract(ExtractError::UnsupportedFormat(ext)) => (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "UNSUPPORTED_FORMAT",
            format!("Unsupported document format: {ext}"),
        ),
        PipelineError::Extract(ExtractError::InvalidEncoding) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "INVALID_ENCODING",
            "Document is not valid UTF-8".to_string(),
        ),
        PipelineError::Extract(err) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "UNREADABLE_DOCUMENT",
            err.to_string(),
        ),
        PipelineError::EmptyDocument => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "EMPTY_DOCUMENT",
            "Could not extract text from document".to_string(),
        ),
    }
}
