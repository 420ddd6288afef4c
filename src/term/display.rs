//! TermDisplay: the terminal-backed Display collaborator.
//!
//! Holds presentation state only: which tiles are covered, face-up, or
//! removed, the score label, the game-over indicator, and the armed
//! evaluation deadline. The controller drives it through [`GameDisplay`];
//! [`GameView`](crate::term::GameView) turns it into a framebuffer.

use std::time::{Duration, Instant};

use crate::core::display::GameDisplay;
use crate::types::{ImageId, TileColor, TILE_COUNT};

/// What a tile currently looks like on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileVisual {
    /// Card back showing
    Covered,
    /// Face up with this image
    Face(ImageId),
    /// Matched and permanently cleared
    Removed,
}

pub struct TermDisplay {
    theme: TileColor,
    /// Short per-image labels standing in for the decoded pictures,
    /// indexed by `ImageId`
    labels: Vec<String>,
    tiles: [TileVisual; TILE_COUNT],
    score_text: String,
    game_over_tries: Option<u32>,
    /// One-shot deadline for the pending match evaluation
    deadline: Option<Instant>,
}

impl TermDisplay {
    pub fn new(theme: TileColor, labels: Vec<String>) -> Self {
        Self {
            theme,
            labels,
            tiles: [TileVisual::Covered; TILE_COUNT],
            score_text: String::new(),
            game_over_tries: None,
            deadline: None,
        }
    }

    pub fn theme(&self) -> TileColor {
        self.theme
    }

    pub fn tiles(&self) -> &[TileVisual] {
        &self.tiles
    }

    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    pub fn game_over_tries(&self) -> Option<u32> {
        self.game_over_tries
    }

    /// Label shown on the face of the given image.
    pub fn label(&self, image: ImageId) -> &str {
        self.labels
            .get(image.0 as usize)
            .map(String::as_str)
            .unwrap_or("?")
    }

    /// The armed evaluation deadline, if any. The event loop uses it to size
    /// its poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the deadline if it has elapsed. Returns true when the caller
    /// must run the match evaluation now.
    pub fn take_due_evaluation(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl GameDisplay for TermDisplay {
    fn render_grid(&mut self, _rows: usize, _cols: usize) {
        self.tiles = [TileVisual::Covered; TILE_COUNT];
    }

    fn show_tile_image(&mut self, index: usize, image: ImageId) {
        if let Some(tile) = self.tiles.get_mut(index) {
            *tile = TileVisual::Face(image);
        }
    }

    fn hide_tile_image(&mut self, index: usize) {
        if let Some(tile) = self.tiles.get_mut(index) {
            *tile = TileVisual::Covered;
        }
    }

    fn remove_tile(&mut self, index: usize) {
        if let Some(tile) = self.tiles.get_mut(index) {
            *tile = TileVisual::Removed;
        }
    }

    fn set_score_text(&mut self, score: i32) {
        self.score_text = format!("Score: {score}");
    }

    fn show_game_over(&mut self, tries: u32) {
        self.game_over_tries = Some(tries);
    }

    fn hide_game_over(&mut self) {
        self.game_over_tries = None;
    }

    fn schedule_after(&mut self, ms: u64) {
        self.deadline = Some(Instant::now() + Duration::from_millis(ms));
    }
}
