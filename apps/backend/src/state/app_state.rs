use std::sync::Arc;

use crate::adapters::sessions_memory::MemorySessionStore;
use crate::config::server::ServerConfig;
use crate::repos::sessions::SessionStore;

/// Application state shared by every worker.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Session result store; in-memory unless another adapter is injected.
    pub sessions: Arc<dyn SessionStore>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(sessions: Arc<dyn SessionStore>, config: ServerConfig) -> Self {
        Self { sessions, config }
    }

    /// Default config over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::new()), ServerConfig::default())
    }

    pub fn upload_max_bytes(&self) -> usize {
        self.config.upload_max_bytes
    }
}
