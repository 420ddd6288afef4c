//! Display seam - everything the core is allowed to do to the outside world
//!
//! The controller never draws anything itself; it issues these calls and the
//! display decides what they look like. Tests substitute a recording fake,
//! the binary plugs in the crossterm-backed [`crate::term::TermDisplay`].

use crate::types::ImageId;

/// Rendering and timing capabilities consumed by the board controller.
///
/// `schedule_after` arms a one-shot deadline after which the owner of the
/// event loop must call [`BoardController::evaluate_selection`]. At most one
/// deadline is outstanding at a time because a full selection blocks further
/// reveals.
///
/// [`BoardController::evaluate_selection`]: crate::core::BoardController::evaluate_selection
pub trait GameDisplay {
    /// Draw the full covered grid (initial render and restart).
    fn render_grid(&mut self, rows: usize, cols: usize);

    /// Uncover a tile, showing the given image face-up.
    fn show_tile_image(&mut self, index: usize, image: ImageId);

    /// Cover a tile back up after a failed match.
    fn hide_tile_image(&mut self, index: usize);

    /// Permanently remove a matched tile's image and card back.
    fn remove_tile(&mut self, index: usize);

    /// Update the score label.
    fn set_score_text(&mut self, score: i32);

    /// Show the end-of-game indicator with the final try count.
    fn show_game_over(&mut self, tries: u32);

    /// Hide the end-of-game indicator (restart).
    fn hide_game_over(&mut self);

    /// Arm the one-shot evaluation deadline `ms` milliseconds from now.
    fn schedule_after(&mut self, ms: u64);
}
