//! Shared application state for the skycast server.
//!
//! The metrics registry is owned here and handed to handlers through axum
//! state, so process-wide aggregation works without ambient globals.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::obs::metrics::ServiceMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    metrics: ServiceMetrics,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics: ServiceMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.inner.metrics
    }
}
