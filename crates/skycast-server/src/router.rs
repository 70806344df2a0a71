//! Axum router wiring.
//!
//! Four routes: service info, health probe, Prometheus exposition, and
//! weather-by-city.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, weather};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops::index))
        .route("/health", get(ops::health))
        .route("/metrics", get(ops::metrics))
        .route("/weather/:city", get(weather::get_weather))
        .with_state(state)
}
