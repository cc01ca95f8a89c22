//! Word bank input and result export on the local filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use dictation_backend::domain::{export_file_name, results_to_csv, GameResult, WordBank};
use dictation_backend::services::word_source::parse_upload;
use time::OffsetDateTime;
use tracing::debug;

use crate::error::CliError;

/// Where the word list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// Comma or newline separated text.
    Text(String),
    /// A `.csv`, `.xlsx` or `.xls` file.
    File(PathBuf),
}

impl WordSource {
    pub fn from_args(words: Option<String>, file: Option<PathBuf>) -> Result<Self, CliError> {
        match (words, file) {
            (_, Some(path)) => Ok(Self::File(path)),
            (Some(text), None) => Ok(Self::Text(text)),
            (None, None) => Err(CliError::NoWordSource),
        }
    }

    pub fn load(&self) -> Result<WordBank, CliError> {
        let bank = match self {
            Self::Text(text) => WordBank::from_text(text)?,
            Self::File(path) => {
                let bytes = fs::read(path).map_err(|source| CliError::ReadFile {
                    path: path.clone(),
                    source,
                })?;
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                parse_upload(&name, &bytes)?
            }
        };
        debug!(words = bank.len(), "Word bank loaded");
        Ok(bank)
    }
}

/// Write results as CSV. A directory target gets the dated default file name.
pub fn export_results(target: &Path, results: &[GameResult]) -> Result<PathBuf, CliError> {
    let path = if target.is_dir() {
        target.join(export_file_name(OffsetDateTime::now_utc().date()))
    } else {
        target.to_path_buf()
    };
    let csv = results_to_csv(results)?;
    fs::write(&path, csv).map_err(|source| CliError::WriteFile {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
