//! Shared application state for the metric aggregator.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::MetricStore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    store: Arc<MetricStore>,
}

struct AppStateInner {
    cfg: ServerConfig,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        Self::with_store(cfg, Arc::new(MetricStore::new()))
    }

    /// Build state around an existing store (tests inspect it directly).
    pub fn with_store(cfg: ServerConfig, store: Arc<MetricStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg }),
            store,
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &MetricStore {
        &self.store
    }

    pub fn store_handle(&self) -> Arc<MetricStore> {
        Arc::clone(&self.store)
    }
}
