use crate::domain::words::Word;

/// Words per play-through.
pub const ROUND_LENGTH: usize = 10;

/// Upper bound on decoy tiles added to a round's pool.
pub const MAX_DECOYS: usize = 3;

/// Pool size the decoys try to fill up to.
pub const POOL_TARGET: usize = 8;

/// Letters decoys are drawn from.
pub const DECOY_ALPHABET: [char; 10] = ['a', 'e', 'i', 'o', 'u', 'r', 's', 't', 'n', 'l'];

/// Number of decoys wanted for a word of `word_len` letters.
///
/// `min(3, 8 - len)`, never negative.
pub fn decoy_count(word_len: usize) -> usize {
    MAX_DECOYS.min(POOL_TARGET.saturating_sub(word_len))
}

/// Hint sentence revealing the first letter of `word`.
pub fn hint_text(word: &Word) -> String {
    let first = word.first_letter().to_ascii_uppercase();
    format!("The word starts with the letter \"{first}\"")
}
