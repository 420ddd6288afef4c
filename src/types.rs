//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid dimensions (fixed 4x4 board)
pub const GRID_ROWS: usize = 4;
pub const GRID_COLS: usize = 4;
pub const TILE_COUNT: usize = GRID_ROWS * GRID_COLS;
pub const PAIR_COUNT: usize = TILE_COUNT / 2;

/// Scoring constants
pub const BASE_SCORE: i32 = 100;
/// Number of tries before the score starts dropping
pub const FREE_TRIES: u32 = 13;
/// Points lost per try beyond the free allowance
pub const TRY_PENALTY: i32 = 10;

/// Dwell delay between the second reveal and the match judgment (milliseconds)
pub const FAST_DELAY_MS: u64 = 1000;
pub const NORMAL_DELAY_MS: u64 = 3000;

/// Identifier of one game image. Each id appears on exactly two tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub u8);

/// Per-tile visibility state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    /// Covered by the card back
    Hidden,
    /// Face up, pending match evaluation
    Revealed,
    /// Permanently cleared; terminal for the tile
    Matched,
}

/// Player color theme applied to matched tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileColor {
    Blue,
    Green,
    Magenta,
}

impl TileColor {
    /// Parse theme color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "blue" => Some(TileColor::Blue),
            "green" => Some(TileColor::Green),
            "magenta" => Some(TileColor::Magenta),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            TileColor::Blue => "blue",
            TileColor::Green => "green",
            TileColor::Magenta => "magenta",
        }
    }
}
