// Unit tests for error mapping - pure domain logic without HTTP dependencies
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let de = DomainError::validation(ValidationKind::NoValidWords, "No valid words found");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::NoValidWords);
    assert_eq!(app.status().as_u16(), 400);
    assert_eq!(app.detail(), "No valid words found");
}

#[test]
fn maps_upload_kinds() {
    let app: AppError = DomainError::validation(ValidationKind::EmptyUpload, "No file").into();
    assert_eq!(app.code().as_str(), "EMPTY_UPLOAD");

    let app: AppError =
        DomainError::validation(ValidationKind::UnsupportedFileType, "Unsupported").into();
    assert_eq!(app.code().as_str(), "UNSUPPORTED_FILE_TYPE");
    assert_eq!(app.status().as_u16(), 400);

    let other: AppError = DomainError::validation_other("something off").into();
    assert_eq!(other.code().as_str(), "VALIDATION_ERROR");
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Session, "Game session not found");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "SESSION_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let generic: AppError = DomainError::not_found(NotFoundKind::Other("x".into()), "gone").into();
    assert_eq!(generic.code().as_str(), "NOT_FOUND");
}

#[test]
fn maps_infra() {
    let down = DomainError::infra(InfraErrorKind::StoreUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "STORE_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "INTERNAL");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn phase_errors_keep_their_code() {
    let app: AppError = DomainError::validation(ValidationKind::PhaseMismatch, "game over").into();
    assert_eq!(app.code(), ErrorCode::PhaseMismatch);
    assert!(matches!(app, AppError::Validation { .. }));
}

#[test]
fn constructor_helpers() {
    let validation = DomainError::validation(ValidationKind::MalformedFile, "bad xlsx");
    assert!(matches!(
        validation,
        DomainError::Validation(ValidationKind::MalformedFile, _)
    ));
    assert_eq!(validation.detail(), "bad xlsx");

    let not_found = DomainError::not_found(NotFoundKind::Session, "missing");
    assert!(matches!(
        not_found,
        DomainError::NotFound(NotFoundKind::Session, _)
    ));

    let infra = DomainError::infra(InfraErrorKind::StoreUnavailable, "down");
    assert!(matches!(
        infra,
        DomainError::Infra(InfraErrorKind::StoreUnavailable, _)
    ));
}
