//! Game state module - the per-game counters
//!
//! `GameState` is a small value type owned by the controller. Transitions
//! return a new value instead of mutating shared fields, so each step of a
//! game can be asserted on in isolation.

use crate::core::scoring::calculate_score;
use crate::types::{BASE_SCORE, TILE_COUNT};

/// Counters for one game: completed pair evaluations, matched tiles,
/// derived score, and the terminal flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    /// Completed pair evaluations ("tries"), matched or not
    pub tries: u32,
    /// Tiles permanently cleared (0..=16, always even)
    pub matched: u8,
    /// Derived from `tries`; unclamped, may go negative
    pub score: i32,
    /// True once all 16 tiles are matched
    pub game_over: bool,
}

impl GameState {
    /// State at the start of a game (and after restart)
    pub fn new() -> Self {
        Self {
            tries: 0,
            matched: 0,
            score: BASE_SCORE,
            game_over: false,
        }
    }

    /// State after one pair evaluation.
    ///
    /// The try count increases whether or not the pair matched; the score is
    /// recomputed from the new try count; the terminal flag flips once the
    /// matched count covers the whole board.
    pub fn after_evaluation(self, pair_matched: bool) -> Self {
        let tries = self.tries + 1;
        let matched = if pair_matched {
            self.matched + 2
        } else {
            self.matched
        };
        Self {
            tries,
            matched,
            score: calculate_score(tries),
            game_over: matched as usize == TILE_COUNT,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
