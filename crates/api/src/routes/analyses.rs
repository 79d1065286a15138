//! Registry endpoints over recorded analyses.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use clauselens_core::error::CoreError;
use clauselens_core::types::AnalysisId;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::store::{AnalysisRecord, AnalysisSummary};

/// GET /analyses -- all recorded analyses, newest first.
pub async fn list_analyses(
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<AnalysisSummary>>> {
    let data = state.store.list().await;
    Json(DataResponse { data })
}

/// GET /analyses/{id} -- one recorded analysis in full.
pub async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<AnalysisId>,
) -> AppResult<Json<DataResponse<AnalysisRecord>>> {
    let record = state.store.get(id).await.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Analysis",
        id,
    }))?;

    Ok(Json(DataResponse { data: record }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/analyses", get(list_analyses))
        .route("/analyses/{id}", get(get_analysis))
}
