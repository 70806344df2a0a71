//! Weather-by-city handler.
//!
//! All outcomes (200/404/500) are resolved at this boundary: counted under
//! `(endpoint, status)`, latency-observed exactly once, and logged at the
//! level matching the outcome. Nothing propagates past the HTTP response.

use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use skycast_core::error::{ClientCode, Result, SkycastError};
use skycast_core::{catalog, reading::Reading};

use crate::app_state::AppState;

/// Metrics label for this route.
const ENDPOINT: &str = "/weather";

pub async fn get_weather(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Response {
    let start = Instant::now();

    let (status, body) = match lookup_and_generate(&city) {
        Ok(reading) => {
            tracing::info!(%city, "weather request successful");
            (StatusCode::OK, json!(reading))
        }
        Err(err) => match err.client_code() {
            ClientCode::NotFound => {
                tracing::warn!(%city, "weather request for unknown city");
                // Display form carries the original-case input.
                (StatusCode::NOT_FOUND, json!({ "error": err.to_string() }))
            }
            _ => {
                tracing::error!(%city, error = %err, "error processing weather request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        },
    };

    let metrics = state.metrics();
    metrics.record_request(ENDPOINT, status.as_u16());
    metrics.observe_latency(ENDPOINT, start.elapsed());

    (status, Json(body)).into_response()
}

fn lookup_and_generate(city: &str) -> Result<Reading> {
    let cfg = catalog::find(city)
        .ok_or_else(|| SkycastError::CityNotFound(city.to_string()))?;
    Reading::generate(cfg, &mut rand::thread_rng())
}
