//! Error handling for the Dictation Champ backend.

pub mod domain;
pub mod error_code;

#[cfg(test)]
mod tests_error_mapping;

pub use domain::DomainError;
pub use error_code::ErrorCode;
