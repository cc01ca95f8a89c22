// Proptest generators for word banks and answers.

use proptest::prelude::*;

use crate::domain::words::{Word, WordBank};

/// A single valid word, 1..=12 lowercase letters.
pub fn word() -> impl Strategy<Value = Word> {
    "[a-z]{1,12}".prop_filter_map("valid word", |s| Word::parse(&s))
}

/// A raw token that may or may not survive normalization.
pub fn raw_token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z]{1,10}",
        " {0,2}[a-zA-Z]{1,8} {0,2}",
        "[a-z0-9]{1,6}",
        "[a-z]{1,4} [a-z]{1,4}",
        Just(String::new()),
    ]
}

/// A non-empty word bank of up to 20 words.
pub fn word_bank() -> impl Strategy<Value = WordBank> {
    prop::collection::vec(word(), 1..20).prop_filter_map("non-empty bank", |w| WordBank::new(w).ok())
}

/// Answers a player might type for `word`: the word in mixed case, with
/// placeholders, or something unrelated.
pub fn answer_for(word: Word) -> impl Strategy<Value = String> {
    let exact = word.to_string();
    let upper = exact.to_ascii_uppercase();
    let padded = format!("_{exact}_");
    prop_oneof![
        Just(exact),
        Just(upper),
        Just(padded),
        "[a-z_]{0,10}",
    ]
}
