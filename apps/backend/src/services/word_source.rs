//! Resolves uploaded files and typed text into a word bank.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Reader};
use tracing::debug;

use crate::domain::words::{extract_words, normalize_tokens, Word, WordBank};
use crate::errors::domain::{DomainError, ValidationKind};

pub const UNSUPPORTED_FILE_TYPE: &str = "Unsupported file type. Please upload CSV or XLSX files.";
pub const NO_VALID_WORDS_IN_FILE: &str = "No valid words found in the file";

/// Upload formats recognized by file-name extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Csv,
    Spreadsheet,
}

impl UploadKind {
    /// Case-insensitive match on `.csv`, `.xlsx` and `.xls`.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".csv") {
            Some(Self::Csv)
        } else if lower.ends_with(".xlsx") || lower.ends_with(".xls") {
            Some(Self::Spreadsheet)
        } else {
            None
        }
    }
}

/// Parse an uploaded file into a non-empty word bank.
pub fn parse_upload(file_name: &str, bytes: &[u8]) -> Result<WordBank, DomainError> {
    let kind = UploadKind::from_file_name(file_name).ok_or_else(|| {
        DomainError::validation(ValidationKind::UnsupportedFileType, UNSUPPORTED_FILE_TYPE)
    })?;

    let words = match kind {
        UploadKind::Csv => extract_words(&String::from_utf8_lossy(bytes)),
        UploadKind::Spreadsheet => spreadsheet_words(bytes)?,
    };
    debug!(file_name, ?kind, word_count = words.len(), "Parsed upload");

    if words.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::NoValidWords,
            NO_VALID_WORDS_IN_FILE,
        ));
    }
    WordBank::new(words)
}

/// Every cell of the first worksheet, row by row.
fn spreadsheet_words(bytes: &[u8]) -> Result<Vec<Word>, DomainError> {
    let malformed = |e: calamine::Error| {
        DomainError::validation(
            ValidationKind::MalformedFile,
            format!("Failed to parse file: {e}"),
        )
    };

    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec())).map_err(malformed)?;
    let Some(range) = workbook.worksheet_range_at(0) else {
        return Ok(Vec::new());
    };
    let range = range.map_err(malformed)?;

    Ok(normalize_tokens(
        range.rows().flat_map(|row| row.iter().map(|cell| cell.to_string())),
    ))
}
