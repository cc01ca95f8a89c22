//! CSV export of round results.

use time::Date;

use crate::domain::results::GameResult;
use crate::errors::domain::{DomainError, InfraErrorKind};

pub const CSV_HEADER: [&str; 4] = ["Word", "User Answer", "Correct", "Hints Used"];

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Render results as CSV: header row, one row per result, `\n` between rows
/// and no trailing newline.
pub fn results_to_csv(results: &[GameResult]) -> Result<String, DomainError> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER).map_err(export_err)?;
    for r in results {
        wtr.write_record([
            r.word.as_str(),
            r.user_answer.as_str(),
            yes_no(r.correct),
            yes_no(r.hints_used),
        ])
        .map_err(export_err)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| export_err(e.into_error()))?;
    let mut text = String::from_utf8(bytes).map_err(export_err)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Download name for an export produced on `date`.
pub fn export_file_name(date: Date) -> String {
    format!(
        "dictation-champ-results-{:04}-{:02}-{:02}.csv",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

fn export_err(e: impl std::fmt::Display) -> DomainError {
    DomainError::infra(
        InfraErrorKind::Other("CSV_EXPORT".into()),
        format!("Failed to render CSV: {e}"),
    )
}
