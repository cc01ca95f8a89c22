//! Session result repository.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::results::SessionSummary;
use crate::errors::domain::DomainError;

/// Payload accepted for storage.
pub type NewSession = SessionSummary;

/// A persisted session summary with its store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub id: i64,
    #[serde(flatten)]
    pub summary: SessionSummary,
}

/// Storage port for finished sessions.
///
/// Ids are positive, strictly increasing and never reused while the store
/// lives. Records are immutable once created.
#[async_trait]
pub trait SessionStore: Send + Sync + std::fmt::Debug {
    async fn create(&self, session: NewSession) -> Result<StoredSession, DomainError>;

    async fn get(&self, id: i64) -> Result<Option<StoredSession>, DomainError>;
}
