// Web server — Axum-based HTTP boundary around the similarity core.
//
// Routes:
//   POST /api/compare  multipart upload of two .txt documents
//   GET  /api/health   liveness check
//
// The server holds no per-request state between calls. Uploads live in
// memory for the duration of one request.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::similarity::{DocumentComparer, TfIdfCosine};

pub mod handlers;
pub mod upload;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub comparer: Arc<dyn DocumentComparer>,
}

impl AppState {
    /// State backed by the default TF-IDF cosine engine.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            comparer: Arc::new(TfIdfCosine),
        }
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config) -> Result<()> {
    let addr = format!("{}:{}", config.bind, config.port);
    let app = build_router(AppState::new(config))?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("docsim listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the router with CORS, tracing and the upload body limit applied.
pub fn build_router(state: AppState) -> Result<Router> {
    let origin = HeaderValue::from_str(&state.config.frontend_url).with_context(|| {
        format!(
            "FRONTEND_URL is not a valid origin: {:?}",
            state.config.frontend_url
        )
    })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let body_limit = state.config.max_body_bytes();

    Ok(Router::new()
        .route("/api/compare", post(handlers::compare::compare_documents))
        .route("/api/health", get(handlers::health::health))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// JSON error body: a short machine-readable code plus a human-readable detail.
pub fn api_error(status: StatusCode, code: &str, details: &str) -> Response {
    (
        status,
        axum::Json(serde_json::json!({ "error": code, "details": details })),
    )
        .into_response()
}
