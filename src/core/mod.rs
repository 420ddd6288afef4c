//! Core module - board, selection and scoring rules
//!
//! This module contains all the game rules and state transitions. It has no
//! terminal or filesystem dependencies, which keeps it deterministic and
//! unit-testable: every side effect goes through the [`GameDisplay`] trait.

pub mod board;
pub mod controller;
pub mod display;
pub mod game_state;
pub mod scoring;

// Re-export commonly used types
pub use board::{Board, Tile};
pub use controller::BoardController;
pub use display::GameDisplay;
pub use game_state::GameState;
pub use scoring::calculate_score;
