//! Scoring module - the try-count score formula
//!
//! The player starts at 100 points and keeps them for the first 13 tries.
//! Every try beyond that costs 10 points. The formula is not clamped at
//! zero: a long enough game drives the score negative.

use crate::types::{BASE_SCORE, FREE_TRIES, TRY_PENALTY};

/// Score after `tries` completed pair evaluations.
///
/// `score = 100 - 10 * max(0, tries - 13)`
pub fn calculate_score(tries: u32) -> i32 {
    let over = tries.saturating_sub(FREE_TRIES);
    BASE_SCORE - TRY_PENALTY * over as i32
}
