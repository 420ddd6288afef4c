//! Match It! — a single-player tile-matching game for the terminal.
//!
//! The game logic lives in [`core`] and is pure: it talks to the outside world
//! only through the [`core::GameDisplay`] trait and is driven by whoever owns
//! the event loop. The [`term`] module provides the crossterm-backed display,
//! [`assets`] validates the image folder, and [`input`] maps terminal events
//! to game actions.

pub mod assets;
pub mod core;
pub mod input;
pub mod term;
pub mod types;
