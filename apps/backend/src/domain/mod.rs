//! Domain layer: pure game logic types and helpers.

pub mod badges;
pub mod export;
pub mod game;
pub mod results;
pub mod rules;
pub mod tiles;
pub mod words;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;

// Re-exports for ergonomics
pub use badges::{report, Badge, Report};
pub use export::{export_file_name, results_to_csv};
pub use game::{GameMachine, Phase, RoundState, Verdict};
pub use results::{GameResult, SessionSummary};
pub use tiles::{LetterBoard, LetterTile, TileId};
pub use words::{extract_words, Word, WordBank};
