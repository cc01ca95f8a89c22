use std::sync::Arc;

use tracing::info;

use crate::adapters::sessions_memory::MemorySessionStore;
use crate::config::server::ServerConfig;
use crate::repos::sessions::SessionStore;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    config: ServerConfig,
    sessions: Option<Arc<dyn SessionStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
            sessions: None,
        }
    }

    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Inject a session store; defaults to a fresh in-memory one.
    pub fn with_sessions(mut self, sessions: Arc<dyn SessionStore>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    pub fn build(self) -> AppState {
        let sessions = self.sessions.unwrap_or_else(|| {
            info!("Using in-memory session store");
            Arc::new(MemorySessionStore::new())
        });
        AppState::new(sessions, self.config)
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
