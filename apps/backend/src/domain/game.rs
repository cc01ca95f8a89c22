//! Game progression: one play-through of ten rounds over a word bank.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use time::OffsetDateTime;

use crate::domain::results::{GameResult, SessionSummary};
use crate::domain::rules::{hint_text, ROUND_LENGTH};
use crate::domain::tiles::{LetterBoard, TileId};
use crate::domain::words::{Word, WordBank};
use crate::errors::domain::{DomainError, ValidationKind};

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// No game words drawn yet. A word bank may be (re)loaded.
    Uninitialized,
    /// Playing round `index` (0-based, < 10).
    InRound { index: usize },
    /// Ten results recorded; the session summary is available.
    Complete,
}

/// State for the round being played.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// 0-based round number.
    pub index: usize,
    pub word: Word,
    /// Player's current answer. Placeholders (`_`) are allowed until judged.
    pub answer: String,
    /// Revealed hint sentence, once requested.
    pub hint: Option<String>,
    pub board: LetterBoard,
    /// Recorded verdict for this round.
    pub verdict: Option<bool>,
}

impl RoundState {
    fn new<R: Rng + ?Sized>(index: usize, word: Word, rng: &mut R) -> Self {
        let board = LetterBoard::new(&word, rng);
        Self {
            index,
            word,
            answer: String::new(),
            hint: None,
            board,
            verdict: None,
        }
    }

    pub fn hint_shown(&self) -> bool {
        self.hint.is_some()
    }

    pub fn is_judged(&self) -> bool {
        self.verdict.is_some()
    }
}

/// Result of judging the current answer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Verdict {
    pub correct: bool,
    /// This was the tenth result; the game is now `Complete`.
    pub session_complete: bool,
}

/// Drives one play-through: load a bank, draw ten words, judge each answer.
#[derive(Debug, Clone)]
pub struct GameMachine {
    rng: StdRng,
    word_bank: Option<WordBank>,
    game_words: Vec<Word>,
    phase: Phase,
    round: Option<RoundState>,
    results: Vec<GameResult>,
    score: u32,
    summary: Option<SessionSummary>,
}

impl Default for GameMachine {
    fn default() -> Self {
        Self::new(None)
    }
}

impl GameMachine {
    /// `Some(seed)` makes word draws and tile shuffles reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            word_bank: None,
            game_words: Vec::new(),
            phase: Phase::Uninitialized,
            round: None,
            results: Vec::new(),
            score: 0,
            summary: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn word_bank(&self) -> Option<&WordBank> {
        self.word_bank.as_ref()
    }

    pub fn game_words(&self) -> &[Word] {
        &self.game_words
    }

    /// Current round; after completion this is the final judged round.
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn results(&self) -> &[GameResult] {
        &self.results
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    pub fn load_word_bank(&mut self, bank: WordBank) -> Result<(), DomainError> {
        if self.phase != Phase::Uninitialized {
            return Err(DomainError::phase(
                "word bank can only be loaded before the game starts",
            ));
        }
        self.word_bank = Some(bank);
        Ok(())
    }

    /// Draw ten words uniformly with replacement and start round 0.
    pub fn initialize_game(&mut self) -> Result<&RoundState, DomainError> {
        if self.phase != Phase::Uninitialized {
            return Err(DomainError::phase("game already initialized"));
        }
        let Some(bank) = self.word_bank.as_ref() else {
            return Err(DomainError::validation(
                ValidationKind::NoValidWords,
                "No valid words found",
            ));
        };

        let words = bank.words();
        let drawn: Vec<Word> = (0..ROUND_LENGTH)
            .map(|_| words[self.rng.random_range(0..words.len())].clone())
            .collect();

        self.results.clear();
        self.score = 0;
        self.summary = None;
        self.game_words = drawn;
        Ok(self.start_round(0))
    }

    /// Replace the typed answer wholesale.
    pub fn set_answer(&mut self, answer: impl Into<String>) -> Result<(), DomainError> {
        let round = self.answering_round("set_answer")?;
        round.answer = answer.into();
        Ok(())
    }

    pub fn place_tile(&mut self, tile: TileId, slot: usize) -> Result<bool, DomainError> {
        let round = self.answering_round("place_tile")?;
        let changed = round.board.place(tile, slot);
        if changed {
            round.answer = round.board.current_answer();
        }
        Ok(changed)
    }

    pub fn place_tile_first_empty(&mut self, tile: TileId) -> Result<Option<usize>, DomainError> {
        let round = self.answering_round("place_tile_first_empty")?;
        let slot = round.board.place_first_empty(tile);
        if slot.is_some() {
            round.answer = round.board.current_answer();
        }
        Ok(slot)
    }

    pub fn clear_slot(&mut self, slot: usize) -> Result<bool, DomainError> {
        let round = self.answering_round("clear_slot")?;
        let changed = round.board.clear_slot(slot);
        if changed {
            round.answer = round.board.current_answer();
        }
        Ok(changed)
    }

    /// Empty every slot and the typed answer.
    pub fn clear_answer(&mut self) -> Result<(), DomainError> {
        let round = self.answering_round("clear_answer")?;
        round.board.clear_all();
        round.answer.clear();
        Ok(())
    }

    /// Reveal the first-letter hint. Repeated calls return the same text.
    pub fn show_hint(&mut self) -> Result<&str, DomainError> {
        let round = self.answering_round("show_hint")?;
        let hint = round.hint.get_or_insert_with(|| hint_text(&round.word));
        Ok(hint.as_str())
    }

    /// Judge the current answer and record exactly one result for the round.
    ///
    /// Underscores are stripped and the rest lowercased before comparing.
    pub fn submit_answer(&mut self) -> Result<Verdict, DomainError> {
        let round = self.answering_round("submit_answer")?;
        let cleaned = round.answer.replace('_', "").to_lowercase();
        let correct = cleaned == round.word.as_str();
        round.verdict = Some(correct);

        let result = GameResult {
            word: round.word.to_string(),
            user_answer: cleaned,
            correct,
            hints_used: round.hint_shown(),
        };
        self.results.push(result);
        if correct {
            self.score += 1;
        }

        let session_complete = self.results.len() == ROUND_LENGTH;
        if session_complete {
            self.phase = Phase::Complete;
            self.summary = Some(self.build_summary(OffsetDateTime::now_utc()));
        }
        Ok(Verdict {
            correct,
            session_complete,
        })
    }

    /// Advance to the next round once the current one is judged.
    pub fn load_next_word(&mut self) -> Result<&RoundState, DomainError> {
        let Phase::InRound { index } = self.phase else {
            return Err(DomainError::phase("no round in progress"));
        };
        if !self.round.as_ref().is_some_and(RoundState::is_judged) {
            return Err(DomainError::validation(
                ValidationKind::RoundNotJudged,
                "submit an answer before moving on",
            ));
        }
        Ok(self.start_round(index + 1))
    }

    /// Back to `Uninitialized` with nothing loaded; a new bank is needed
    /// before the next `initialize_game`.
    pub fn reset_game(&mut self) {
        self.word_bank = None;
        self.game_words.clear();
        self.phase = Phase::Uninitialized;
        self.round = None;
        self.results.clear();
        self.score = 0;
        self.summary = None;
    }

    fn start_round(&mut self, index: usize) -> &RoundState {
        let word = self.game_words[index].clone();
        self.phase = Phase::InRound { index };
        self.round.insert(RoundState::new(index, word, &mut self.rng))
    }

    /// The current round, provided it is still awaiting an answer.
    fn answering_round(&mut self, op: &str) -> Result<&mut RoundState, DomainError> {
        if !matches!(self.phase, Phase::InRound { .. }) {
            return Err(DomainError::phase(format!(
                "{op} requires a round in progress (phase {:?})",
                self.phase
            )));
        }
        match self.round.as_mut() {
            Some(round) if round.is_judged() => Err(DomainError::validation(
                ValidationKind::RoundAlreadyJudged,
                format!("{op}: round {} already has a result", round.index + 1),
            )),
            Some(round) => Ok(round),
            None => Err(DomainError::phase(format!("{op}: no round state"))),
        }
    }

    fn build_summary(&self, completed_at: OffsetDateTime) -> SessionSummary {
        SessionSummary {
            word_bank: self.game_words.iter().map(Word::to_string).collect(),
            results: self.results.clone(),
            total_score: self.score,
            total_questions: ROUND_LENGTH as u32,
            completed_at,
        }
    }
}
