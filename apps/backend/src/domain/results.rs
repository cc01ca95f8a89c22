use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Outcome of one judged round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub word: String,
    /// Answer as judged: underscores stripped, lowercased.
    pub user_answer: String,
    pub correct: bool,
    pub hints_used: bool,
}

/// Final aggregate of a finished play-through.
///
/// This is also the body accepted by `POST /api/game-sessions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// Words in the order they were played.
    pub word_bank: Vec<String>,
    pub results: Vec<GameResult>,
    pub total_score: u32,
    pub total_questions: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub completed_at: OffsetDateTime,
}

impl SessionSummary {
    pub fn correct_count(&self) -> usize {
        self.results.iter().filter(|r| r.correct).count()
    }
}
