use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::AnalysisStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (bind address, artifact directories, limits).
    pub config: Arc<ServerConfig>,
    /// Registry of completed analyses.
    pub store: Arc<AnalysisStore>,
}
