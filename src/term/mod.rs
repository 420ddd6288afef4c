//! Terminal rendering module.
//!
//! Renders the board into a simple framebuffer of styled character cells and
//! flushes it to the terminal with crossterm. The framebuffer keeps the view
//! pure and unit-testable; the renderer owns the raw-mode/alternate-screen
//! lifecycle and mouse capture.

pub mod display;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use display::TermDisplay;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
