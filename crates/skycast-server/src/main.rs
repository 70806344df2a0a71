//! skycast — mock weather microservice.
//!
//! - Service info: GET /
//! - Liveness: GET /health
//! - Prometheus exposition: GET /metrics
//! - Mock readings: GET /weather/{city}

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use skycast_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_env().expect("config load failed");
    let listen = SocketAddr::from(([0, 0, 0, 0], cfg.port));

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "skycast starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
