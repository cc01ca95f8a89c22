//! Shared helpers for backend integration tests: logging bootstrap and
//! assertions on the JSON error contract.

pub mod error_body;
pub mod logging;
