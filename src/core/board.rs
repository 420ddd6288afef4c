//! Board module - manages the 4x4 tile grid
//!
//! The board is a flat array of 16 tiles in row-major order. Every image id
//! appears on exactly two tiles; the assignment is a uniformly random
//! permutation produced at deal time and again on every restart.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{ImageId, TileState, GRID_COLS, PAIR_COUNT, TILE_COUNT};

/// One grid cell: an assigned image and its visibility state.
///
/// The covering shape ("card back") is presentation state and lives in the
/// display layer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub image: ImageId,
    pub state: TileState,
}

/// The game board - 16 tiles using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [Tile; TILE_COUNT],
}

impl Board {
    /// Deal a fresh board: two copies of each of the 8 image ids, shuffled
    /// into a uniformly random permutation, all tiles covered.
    pub fn deal<R: Rng>(rng: &mut R) -> Self {
        let mut images = [ImageId(0); TILE_COUNT];
        for (i, slot) in images.iter_mut().enumerate() {
            *slot = ImageId((i % PAIR_COUNT) as u8);
        }
        images.shuffle(rng);

        let tiles = images.map(|image| Tile {
            image,
            state: TileState::Hidden,
        });
        Self { tiles }
    }

    /// Re-shuffle the existing image multiset and cover every tile again.
    ///
    /// Used by restart; the multiset invariant is preserved because the
    /// images are only permuted, never replaced.
    pub fn reshuffle<R: Rng>(&mut self, rng: &mut R) {
        let mut images = self.tiles.map(|tile| tile.image);
        images.shuffle(rng);
        for (tile, image) in self.tiles.iter_mut().zip(images) {
            tile.image = image;
            tile.state = TileState::Hidden;
        }
    }

    /// Calculate flat index from (row, col) coordinates
    pub fn index(row: usize, col: usize) -> usize {
        row * GRID_COLS + col
    }

    /// Get tile at a flat index
    /// Returns None if out of bounds
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Get the image assigned to a tile
    pub fn image(&self, index: usize) -> Option<ImageId> {
        self.tile(index).map(|tile| tile.image)
    }

    /// Set the visibility state of a tile
    /// Returns false if out of bounds
    pub fn set_state(&mut self, index: usize, state: TileState) -> bool {
        match self.tiles.get_mut(index) {
            Some(tile) => {
                tile.state = state;
                true
            }
            None => false,
        }
    }

    /// Number of tiles permanently matched (always even)
    pub fn matched_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|tile| tile.state == TileState::Matched)
            .count()
    }

    /// True when every tile has been matched
    pub fn is_cleared(&self) -> bool {
        self.matched_count() == TILE_COUNT
    }

    /// Get a reference to all tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Find the two tile indices holding the given image.
    ///
    /// Mostly useful in tests and for driving scripted games.
    pub fn positions_of(&self, image: ImageId) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.image == image)
            .map(|(i, _)| i)
            .collect()
    }
}
