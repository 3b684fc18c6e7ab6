//! Axum router and server loop.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::Method;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::request::AnalyzeRequest;
use super::response::{JsonUtf8, panic_response};
use crate::config::ServerConfig;
use crate::error::{InfographicError, Result};
use crate::extraction::{AnalysisEngine, AnalysisResult};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AnalysisEngine>,
}

impl AppState {
    pub fn new(engine: AnalysisEngine) -> Self {
        AppState {
            engine: Arc::new(engine),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/analyze", post(analyze))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_origin(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": crate::VERSION }))
}

/// `POST /api/analyze`: `{ "text": ... }` in, an analysis result out.
///
/// The body is taken as raw bytes so that malformed JSON is reported with
/// the same error shape as every other invalid request.
pub async fn analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> std::result::Result<JsonUtf8<AnalysisResult>, InfographicError> {
    let request = AnalyzeRequest::from_slice(&body)?;
    state.engine.validate(&request.text)?;
    info!(length = request.text.chars().count(), "analyzing text");

    let result = state.engine.analyze(&request.text)?;
    Ok(JsonUtf8(result))
}

/// Bind to the configured address and serve until the process stops.
pub async fn serve(config: &ServerConfig, engine: AnalysisEngine) -> Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(AppState::new(engine))).await?;
    Ok(())
}
