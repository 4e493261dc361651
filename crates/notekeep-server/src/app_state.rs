//! Shared application state for the note server.
//!
//! The store is owned here and reaches handlers through axum `State`; the
//! metrics registry doubles as the store's observer so the note series are
//! updated under the store lock.

use std::sync::Arc;

use notekeep_core::NoteStore;

use crate::config::ServerConfig;
use crate::obs::ServerMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<ServerMetrics>,
}

struct AppStateInner {
    cfg: ServerConfig,
    store: NoteStore,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        let metrics = Arc::new(ServerMetrics::default());
        let store = NoteStore::with_observer(metrics.clone());

        Self {
            inner: Arc::new(AppStateInner { cfg, store }),
            metrics,
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &NoteStore {
        &self.inner.store
    }

    pub fn metrics(&self) -> Arc<ServerMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }
}
