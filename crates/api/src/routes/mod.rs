pub mod analyses;
pub mod analyze;
pub mod download;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /health                 service liveness
/// /analyze                upload + analyze a contract (POST)
/// /download/{filename}    fetch a generated PDF report
/// /analyses               list recorded analyses
/// /analyses/{id}          one recorded analysis in full
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(analyze::router())
        .merge(download::router())
        .merge(analyses::router())
}
