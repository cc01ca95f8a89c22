use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;
use crate::trace_ctx;

/// JSON error body.
///
/// `error` carries the human-readable reason and is the field clients of the
/// original API read; the remaining fields are diagnostics.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
    pub status: u16,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation {
        code: ErrorCode,
        detail: String,
        status: StatusCode,
    },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Payload too large: {detail}")]
    PayloadTooLarge { detail: String },
    #[error("Internal error: {detail}")]
    Internal { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Store unavailable: {detail}")]
    StoreUnavailable { detail: String },
}

impl AppError {
    /// Error code for any variant
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::BadRequest { code, .. } => *code,
            AppError::PayloadTooLarge { .. } => ErrorCode::PayloadTooLarge,
            AppError::Internal { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::StoreUnavailable { .. } => ErrorCode::StoreUnavailable,
        }
    }

    /// Error detail for any variant
    pub fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. } => detail.clone(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::PayloadTooLarge { detail } => detail.clone(),
            AppError::Internal { detail, .. } => detail.clone(),
            AppError::Config { detail } => detail.clone(),
            AppError::StoreUnavailable { detail } => detail.clone(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { status, .. } => *status,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn payload_too_large(detail: impl Into<String>) -> Self {
        Self::PayloadTooLarge {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            code: ErrorCode::Internal,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn store_unavailable(detail: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::NoValidWords => ErrorCode::NoValidWords,
                    ValidationKind::EmptyUpload => ErrorCode::EmptyUpload,
                    ValidationKind::UnsupportedFileType => ErrorCode::UnsupportedFileType,
                    ValidationKind::MalformedFile => ErrorCode::MalformedFile,
                    ValidationKind::InvalidSession => ErrorCode::InvalidSession,
                    ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                    ValidationKind::RoundAlreadyJudged => ErrorCode::RoundAlreadyJudged,
                    ValidationKind::RoundNotJudged => ErrorCode::RoundNotJudged,
                    ValidationKind::Other(_) => ErrorCode::ValidationError,
                };
                AppError::invalid(code, detail)
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Session => ErrorCode::SessionNotFound,
                    NotFoundKind::Other(_) => ErrorCode::NotFound,
                };
                AppError::not_found(code, detail)
            }
            DomainError::Infra(kind, detail) => match kind {
                InfraErrorKind::StoreUnavailable => AppError::store_unavailable(detail),
                InfraErrorKind::Other(_) => AppError::internal(detail),
            },
        }
    }
}

impl From<actix_multipart::MultipartError> for AppError {
    fn from(e: actix_multipart::MultipartError) -> Self {
        AppError::bad_request(
            ErrorCode::BadRequest,
            format!("Failed to read upload: {e}"),
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::internal(format!("io error: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();
        let detail = self.detail();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            error!(trace_id = %trace_id, code = %code, detail = %detail, "request failed");
        }

        let body = ErrorBody {
            error: detail,
            code: code.as_str().to_string(),
            status: status.as_u16(),
            trace_id: trace_id.clone(),
        };

        HttpResponse::build(status)
            .insert_header(("x-trace-id", trace_id))
            .json(body)
    }
}
