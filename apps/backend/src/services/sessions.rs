//! Session persistence and reporting services.

use time::OffsetDateTime;
use tracing::info;

use crate::domain::badges::{self, Report};
use crate::domain::export;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::sessions::{NewSession, SessionStore, StoredSession};

pub const SESSION_NOT_FOUND: &str = "Game session not found";

/// Rendered CSV export plus its download name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionExport {
    pub file_name: String,
    pub csv: String,
}

/// Store a finished session after basic consistency checks.
pub async fn create_session(
    store: &dyn SessionStore,
    session: NewSession,
) -> Result<StoredSession, DomainError> {
    validate(&session)?;
    let stored = store.create(session).await?;
    info!(
        session_id = stored.id,
        total_score = stored.summary.total_score,
        total_questions = stored.summary.total_questions,
        "Game session saved"
    );
    Ok(stored)
}

pub async fn get_session(store: &dyn SessionStore, id: i64) -> Result<StoredSession, DomainError> {
    store
        .get(id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Session, SESSION_NOT_FOUND))
}

/// CSV of a stored session's results, named after today's date.
pub async fn export_session(
    store: &dyn SessionStore,
    id: i64,
) -> Result<SessionExport, DomainError> {
    let stored = get_session(store, id).await?;
    Ok(SessionExport {
        file_name: export::export_file_name(OffsetDateTime::now_utc().date()),
        csv: export::results_to_csv(&stored.summary.results)?,
    })
}

pub async fn session_report(store: &dyn SessionStore, id: i64) -> Result<Report, DomainError> {
    let stored = get_session(store, id).await?;
    Ok(badges::report(&stored.summary.results))
}

/// Counts must be non-negative by type; the score cannot exceed the
/// number of recorded results.
fn validate(session: &NewSession) -> Result<(), DomainError> {
    if session.total_score as usize > session.results.len() {
        return Err(DomainError::validation(
            ValidationKind::InvalidSession,
            "Invalid game session data",
        ));
    }
    Ok(())
}
