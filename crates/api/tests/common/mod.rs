use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;

use clauselens_api::config::ServerConfig;
use clauselens_api::routes;
use clauselens_api::state::AppState;
use clauselens_api::store::AnalysisStore;

/// Boundary used by [`multipart_file`].
pub const MULTIPART_BOUNDARY: &str = "clauselens-test-boundary";

/// A test application plus the artifact directories backing it.
///
/// The `TempDir` is held so the directories outlive the test body.
pub struct TestEnv {
    pub app: Router,
    pub report_dir: PathBuf,
    pub upload_dir: PathBuf,
    _artifacts: TempDir,
}

/// Build the application with tempdir-backed artifact directories.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, body
/// limit, panic recovery) that production uses.
pub fn test_env() -> TestEnv {
    let artifacts = TempDir::new().expect("tempdir");
    let upload_dir = artifacts.path().join("uploads");
    let report_dir = artifacts.path().join("reports");
    std::fs::create_dir_all(&upload_dir).expect("create upload dir");
    std::fs::create_dir_all(&report_dir).expect("create report dir");

    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir: upload_dir.clone(),
        report_dir: report_dir.clone(),
        max_upload_bytes: 10 * 1024 * 1024,
    };

    let state = AppState {
        config: Arc::new(config),
        store: Arc::new(AnalysisStore::new()),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let request_id_header = HeaderName::from_static("x-request-id");

    let app = Router::new()
        .merge(routes::app_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(axum::extract::DefaultBodyLimit::max(10 * 1024 * 1024))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state);

    TestEnv {
        app,
        report_dir,
        upload_dir,
        _artifacts: artifacts,
    }
}

/// Issue a GET request against a clone of the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    )
    .await
    .expect("response")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("valid JSON body")
}

/// Build a single-file `multipart/form-data` body.
pub fn multipart_file(filename: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{MULTIPART_BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

/// POST a file upload to `/analyze` against a clone of the app.
pub async fn post_file(app: Router, filename: &str, content: &[u8]) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri("/analyze")
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
            )
            .body(Body::from(multipart_file(filename, content)))
            .expect("request"),
    )
    .await
    .expect("response")
}
