//! In-process adapter for the session repository.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::errors::domain::DomainError;
use crate::repos::sessions::{NewSession, SessionStore, StoredSession};

/// HashMap-backed `SessionStore`; contents are lost on restart.
#[derive(Debug)]
pub struct MemorySessionStore {
    next_id: AtomicI64,
    sessions: RwLock<HashMap<i64, StoredSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, session: NewSession) -> Result<StoredSession, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = StoredSession {
            id,
            summary: session,
        };
        self.sessions.write().insert(id, stored.clone());
        debug!(session_id = id, "Stored game session");
        Ok(stored)
    }

    async fn get(&self, id: i64) -> Result<Option<StoredSession>, DomainError> {
        Ok(self.sessions.read().get(&id).cloned())
    }
}
