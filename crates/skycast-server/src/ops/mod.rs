//! Operational HTTP endpoints.
//!
//! - `/`        : service info (name, version, route list)
//! - `/health`  : liveness
//! - `/metrics` : Prometheus text format

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::app_state::AppState;

/// Service name reported by the info endpoint.
pub const SERVICE_NAME: &str = "Weather Microservice";

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "service": SERVICE_NAME,
        "version": state.cfg().version,
        "endpoints": [
            { "path": "/", "method": "GET", "description": "Service information" },
            { "path": "/health", "method": "GET", "description": "Health check endpoint" },
            { "path": "/metrics", "method": "GET", "description": "Prometheus metrics" },
            { "path": "/weather/{city}", "method": "GET", "description": "Get weather for a city" },
        ],
    }))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.metrics().render();

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}
