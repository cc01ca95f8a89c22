use std::path::PathBuf;

use dictation_backend::errors::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("provide a word list with --words or --file")]
    NoWordSource,
    #[error("could not read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}", .0.detail())]
    Domain(#[from] DomainError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not save session: {0}")]
    Persist(#[from] reqwest::Error),
    #[error("server rejected session ({status}): {message}")]
    ServerRejected { status: u16, message: String },
}
