//! Error codes for the Dictation Champ backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Dictation Champ backend API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,
    /// Multipart request carried no file
    EmptyUpload,
    /// Uploaded file has an extension we cannot read
    UnsupportedFileType,
    /// Input yielded zero alphabetic words
    NoValidWords,
    /// Uploaded file could not be decoded
    MalformedFile,
    /// Uploaded file exceeds the configured limit
    PayloadTooLarge,
    /// Session id in the path is not a positive integer
    InvalidSessionId,
    /// Session payload failed schema validation
    InvalidSession,
    /// Game operation called in the wrong phase
    PhaseMismatch,
    /// Round already has a recorded result
    RoundAlreadyJudged,
    /// Round has not been judged yet
    RoundNotJudged,

    // Resource Not Found
    /// Stored game session not found
    SessionNotFound,
    /// General not found error
    NotFound,

    // System Errors
    /// Session store unavailable
    StoreUnavailable,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::EmptyUpload => "EMPTY_UPLOAD",
            Self::UnsupportedFileType => "UNSUPPORTED_FILE_TYPE",
            Self::NoValidWords => "NO_VALID_WORDS",
            Self::MalformedFile => "MALFORMED_FILE",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::InvalidSessionId => "INVALID_SESSION_ID",
            Self::InvalidSession => "INVALID_SESSION",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::RoundAlreadyJudged => "ROUND_ALREADY_JUDGED",
            Self::RoundNotJudged => "ROUND_NOT_JUDGED",

            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
