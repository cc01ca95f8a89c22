//! Application services orchestrating domain logic and repositories.

pub mod sessions;
pub mod word_source;
