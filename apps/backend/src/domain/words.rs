//! Word normalization and the immutable word bank.

use std::fmt;

use lazy_regex::regex_is_match;
use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// A normalized word: non-empty, ASCII letters only, lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Normalize a raw token.
    ///
    /// The trimmed token must consist entirely of `[a-zA-Z]`; anything else
    /// (digits, inner spaces, punctuation, empty) is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let token = raw.trim();
        if regex_is_match!(r"^[a-zA-Z]+$", token) {
            Some(Self(token.to_ascii_lowercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first_letter(&self) -> char {
        // Non-empty by construction.
        self.0.chars().next().unwrap_or('?')
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    pub fn contains_letter(&self, letter: char) -> bool {
        self.0.contains(letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Word {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Word::parse(&value).ok_or_else(|| format!("not a word: {value:?}"))
    }
}

impl From<Word> for String {
    fn from(w: Word) -> Self {
        w.0
    }
}

/// Split free text on commas and line breaks and keep the valid words.
pub fn extract_words(text: &str) -> Vec<Word> {
    normalize_tokens(text.split([',', '\n', '\r']))
}

/// Normalize arbitrary tokens (e.g. spreadsheet cells), dropping invalid ones.
pub fn normalize_tokens<I, S>(tokens: I) -> Vec<Word>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .filter_map(|t| Word::parse(t.as_ref()))
        .collect()
}

/// Ordered, non-empty list of words a session draws from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordBank(Vec<Word>);

impl WordBank {
    pub fn new(words: Vec<Word>) -> Result<Self, DomainError> {
        if words.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::NoValidWords,
                "No valid words found",
            ));
        }
        Ok(Self(words))
    }

    /// Build a bank from typed text (comma or newline separated).
    pub fn from_text(text: &str) -> Result<Self, DomainError> {
        Self::new(extract_words(text))
    }

    pub fn words(&self) -> &[Word] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Word> {
        self.0.get(index)
    }
}
