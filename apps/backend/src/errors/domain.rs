//! Domain-level error type used across the game domain, services and repos.
//!
//! This error type is HTTP-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation kinds for business rule violations
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Word bank was empty after normalization
    NoValidWords,
    /// Upload request carried no file
    EmptyUpload,
    /// File extension is not one we can decode
    UnsupportedFileType,
    /// File could not be decoded
    MalformedFile,
    /// Stored session payload is malformed
    InvalidSession,
    /// Operation called in the wrong game phase
    PhaseMismatch,
    /// Current round already has a recorded result
    RoundAlreadyJudged,
    /// Current round has no recorded result yet
    RoundNotJudged,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Session,
    Other(String),
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    StoreUnavailable,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// Human-readable detail without the kind prefix.
    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d) | DomainError::NotFound(_, d) | DomainError::Infra(_, d) => {
                d
            }
        }
    }

    /// Shorthand for the phase guard used by the game state machine.
    pub(crate) fn phase(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::PhaseMismatch, detail)
    }
}
