//! Board controller - the selection/matching state machine
//!
//! Owns the board, the selection, and the game counters. All methods run on
//! the single event-handling thread; the only deferred work is the match
//! evaluation armed through [`GameDisplay::schedule_after`], and that is made
//! tolerant of a restart racing it (the deadline is not cancelled).

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::core::board::Board;
use crate::core::display::GameDisplay;
use crate::core::game_state::GameState;
use crate::types::{TileState, GRID_COLS, GRID_ROWS};

/// Single-player matching game controller.
pub struct BoardController {
    board: Board,
    /// Face-up tiles pending judgment; full selection blocks new reveals
    selection: ArrayVec<usize, 2>,
    state: GameState,
    /// Dwell time between the second reveal and the judgment
    delay_ms: u64,
    rng: StdRng,
}

impl BoardController {
    /// Create a controller with a freshly dealt board.
    ///
    /// `delay_ms` is the face-up dwell time; `seed` makes the deal
    /// deterministic for tests and replays.
    pub fn new(delay_ms: u64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = Board::deal(&mut rng);
        Self {
            board,
            selection: ArrayVec::new(),
            state: GameState::new(),
            delay_ms,
            rng,
        }
    }

    /// Render the covered grid and the initial score.
    pub fn start(&mut self, display: &mut dyn GameDisplay) {
        display.render_grid(GRID_ROWS, GRID_COLS);
        display.set_score_text(self.state.score);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Restart the game: re-shuffle the existing images, clear the selection,
    /// reset the counters, and re-render the covered grid.
    ///
    /// Images are never reloaded from disk. A pending evaluation deadline is
    /// not cancelled; when it fires, `evaluate_selection` sees the cleared
    /// selection and abandons the judgment.
    pub fn restart(&mut self, display: &mut dyn GameDisplay) {
        self.board.reshuffle(&mut self.rng);
        self.selection.clear();
        self.state = GameState::new();
        display.hide_game_over();
        display.render_grid(GRID_ROWS, GRID_COLS);
        display.set_score_text(self.state.score);
        debug!("game restarted");
    }

    /// Handle a click on the tile at `index`.
    ///
    /// No-op when an evaluation is pending (selection full), when the tile is
    /// already face-up or matched, or when the index is out of range.
    /// Otherwise the tile is revealed and added to the selection; the second
    /// reveal of a pair arms the evaluation deadline.
    pub fn on_tile_clicked(&mut self, index: usize, display: &mut dyn GameDisplay) {
        if self.selection.is_full() {
            return;
        }
        let tile = match self.board.tile(index) {
            Some(tile) => *tile,
            None => return,
        };
        if tile.state != TileState::Hidden {
            return;
        }

        self.board.set_state(index, TileState::Revealed);
        display.show_tile_image(index, tile.image);
        self.selection.push(index);
        debug!(index, image = tile.image.0, "tile revealed");

        if self.selection.is_full() {
            display.schedule_after(self.delay_ms);
        }
    }

    /// Judge the current selection once the dwell deadline has elapsed.
    ///
    /// Counts a try whether or not the pair matched, clears the selection,
    /// recomputes the score, and flips the terminal flag when the board is
    /// cleared. If the selection no longer holds two live face-up tiles (a
    /// restart raced the deadline), the judgment is abandoned and any stray
    /// face-up tiles are covered again.
    pub fn evaluate_selection(&mut self, display: &mut dyn GameDisplay) {
        let (first, second) = match (self.selection.first(), self.selection.get(1)) {
            (Some(&a), Some(&b)) => (a, b),
            _ => {
                debug!("evaluation fired without a full selection; ignored");
                return;
            }
        };

        if !self.is_revealed(first) || !self.is_revealed(second) {
            warn!(first, second, "stale evaluation abandoned");
            self.recover_tile(first, display);
            self.recover_tile(second, display);
            self.selection.clear();
            return;
        }

        let pair_matched = self.board.image(first) == self.board.image(second);
        if pair_matched {
            self.board.set_state(first, TileState::Matched);
            self.board.set_state(second, TileState::Matched);
            display.remove_tile(first);
            display.remove_tile(second);
        } else {
            self.board.set_state(first, TileState::Hidden);
            self.board.set_state(second, TileState::Hidden);
            display.hide_tile_image(first);
            display.hide_tile_image(second);
        }
        self.selection.clear();

        self.state = self.state.after_evaluation(pair_matched);
        display.set_score_text(self.state.score);
        debug!(
            tries = self.state.tries,
            matched = self.state.matched,
            score = self.state.score,
            pair_matched,
            "selection evaluated"
        );

        if self.state.game_over {
            display.show_game_over(self.state.tries);
            debug!(tries = self.state.tries, "board cleared");
        }
    }

    fn is_revealed(&self, index: usize) -> bool {
        matches!(
            self.board.tile(index),
            Some(tile) if tile.state == TileState::Revealed
        )
    }

    /// Defensively cover a tile left face-up by an abandoned evaluation.
    fn recover_tile(&mut self, index: usize, display: &mut dyn GameDisplay) {
        if self.is_revealed(index) {
            self.board.set_state(index, TileState::Hidden);
            display.hide_tile_image(index);
        }
    }
}
