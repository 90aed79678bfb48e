//! HTTP API module - generation and health endpoints

mod generate;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::pipeline::GameGenerator;
pub use generate::{GenerateRequest, RequestConfig};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<GameGenerator>,
}

/// Build the API router
pub fn router(generator: Arc<GameGenerator>) -> Router {
    let state = AppState { generator };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ]);

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
        .merge(generate::router())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Root endpoint
async fn root() -> impl IntoResponse {
    Json(RootResponse {
        name: "contestd",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct RootResponse {
    name: &'static str,
    version: &'static str,
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse { status: "healthy" })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}
