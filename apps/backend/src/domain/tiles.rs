//! Letter tiles and answer slots for one round.
//!
//! Slots remember the identity of the tile they hold, so clearing a slot
//! always returns that exact tile to the pool even when the word repeats a
//! letter.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::rules::{decoy_count, DECOY_ALPHABET};
use crate::domain::words::Word;

/// Identity of one tile instance within a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterTile {
    pub id: TileId,
    pub letter: char,
    pub used: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBoard {
    /// Pool in display order; `tiles[i].id == TileId(i)`.
    tiles: Vec<LetterTile>,
    slots: Vec<Option<TileId>>,
}

impl LetterBoard {
    /// Shuffled pool of the word's letters plus decoys, and one empty slot per letter.
    pub fn new<R: Rng + ?Sized>(word: &Word, rng: &mut R) -> Self {
        let mut letters: Vec<char> = word.letters().collect();
        letters.extend(pick_decoys(word, rng));
        letters.shuffle(rng);
        Self::with_pool(letters, word.len())
    }

    /// Board over an explicit pool, in the given order.
    pub fn with_pool(letters: Vec<char>, slot_count: usize) -> Self {
        let tiles = letters
            .into_iter()
            .enumerate()
            .map(|(i, letter)| LetterTile {
                id: TileId(i),
                letter: letter.to_ascii_lowercase(),
                used: false,
            })
            .collect();
        Self {
            tiles,
            slots: vec![None; slot_count],
        }
    }

    pub fn tiles(&self) -> &[LetterTile] {
        &self.tiles
    }

    pub fn slots(&self) -> &[Option<TileId>] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn tile(&self, id: TileId) -> Option<&LetterTile> {
        self.tiles.get(id.0)
    }

    /// Unused tiles, in pool order.
    pub fn available_tiles(&self) -> impl Iterator<Item = &LetterTile> {
        self.tiles.iter().filter(|t| !t.used)
    }

    /// Letter shown in each slot.
    pub fn slot_letters(&self) -> Vec<Option<char>> {
        self.slots
            .iter()
            .map(|slot| slot.and_then(|id| self.tile(id)).map(|t| t.letter))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Put `id` into `slot`, returning any tile already there to the pool.
    ///
    /// Unknown or used tiles and out-of-range slots leave the board unchanged.
    pub fn place(&mut self, id: TileId, slot: usize) -> bool {
        if !self.is_free(id) || slot >= self.slots.len() {
            return false;
        }
        self.release(slot);
        self.occupy(id, slot);
        true
    }

    /// Put `id` into the lowest-index empty slot; returns that slot.
    pub fn place_first_empty(&mut self, id: TileId) -> Option<usize> {
        if !self.is_free(id) {
            return None;
        }
        let slot = self.slots.iter().position(Option::is_none)?;
        self.occupy(id, slot);
        Some(slot)
    }

    pub fn clear_slot(&mut self, slot: usize) -> bool {
        if slot >= self.slots.len() {
            return false;
        }
        self.release(slot)
    }

    /// Empty every slot; returns whether anything was placed.
    pub fn clear_all(&mut self) -> bool {
        let changed = self.slots.iter().any(Option::is_some);
        self.slots.iter_mut().for_each(|s| *s = None);
        self.tiles.iter_mut().for_each(|t| t.used = false);
        changed
    }

    /// Letters of the filled slots in slot order; empty slots contribute nothing.
    pub fn current_answer(&self) -> String {
        self.slot_letters().into_iter().flatten().collect()
    }

    fn is_free(&self, id: TileId) -> bool {
        self.tile(id).is_some_and(|t| !t.used)
    }

    fn occupy(&mut self, id: TileId, slot: usize) {
        self.tiles[id.0].used = true;
        self.slots[slot] = Some(id);
    }

    fn release(&mut self, slot: usize) -> bool {
        match self.slots[slot].take() {
            Some(prev) => {
                self.tiles[prev.0].used = false;
                true
            }
            None => false,
        }
    }
}

/// Distinct decoy letters not present in `word`.
fn pick_decoys<R: Rng + ?Sized>(word: &Word, rng: &mut R) -> Vec<char> {
    let eligible: Vec<char> = DECOY_ALPHABET
        .iter()
        .copied()
        .filter(|c| !word.contains_letter(*c))
        .collect();
    let wanted = decoy_count(word.len()).min(eligible.len());
    eligible.choose_multiple(rng, wanted).copied().collect()
}
