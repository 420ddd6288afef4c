//! GameView: maps `TermDisplay` state into a terminal framebuffer.
//!
//! This module is pure (no I/O) and owns the board geometry, so the same
//! math drives both drawing and click hit-testing.

use crate::term::display::{TermDisplay, TileVisual};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{TileColor, GRID_COLS, GRID_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the 4x4 board, score line, and game-over banner.
pub struct GameView {
    /// Tile width in terminal columns (includes a 1-column gap)
    cell_w: u16,
    /// Tile height in terminal rows (includes a 1-row gap)
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 10x3 keeps tiles roughly square under typical glyph aspect ratio.
        Self {
            cell_w: 10,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(3),
            cell_h: cell_h.max(2),
        }
    }

    /// Render the current display state into a framebuffer.
    pub fn render(&self, display: &TermDisplay, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.origin(viewport);

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        if start_y > 0 {
            fb.put_str(
                start_x,
                start_y - 1,
                "Match it!",
                CellStyle::default().bold(),
            );
        }

        for row in 0..GRID_ROWS as u16 {
            for col in 0..GRID_COLS as u16 {
                let index = (row as usize) * GRID_COLS + col as usize;
                self.draw_tile(
                    &mut fb,
                    display,
                    display.tiles()[index],
                    start_x + 1 + col * self.cell_w,
                    start_y + 1 + row * self.cell_h,
                );
            }
        }

        // Status lines under the board.
        let status = CellStyle::default();
        fb.put_str(start_x, start_y + frame_h, display.score_text(), status);
        let hint = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(0, 0, 0));
        fb.put_str(
            start_x,
            start_y + frame_h + 1,
            "click: reveal   r: restart   q: quit",
            hint,
        );

        if let Some(tries) = display.game_over_tries() {
            let text = format!("Game Over! Tries: {tries}");
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, &text);
        }

        fb
    }

    /// Map a terminal coordinate to the tile index under it.
    pub fn tile_at(&self, viewport: Viewport, col: u16, row: u16) -> Option<usize> {
        let (start_x, start_y) = self.origin(viewport);
        let dx = col.checked_sub(start_x + 1)?;
        let dy = row.checked_sub(start_y + 1)?;
        let c = (dx / self.cell_w) as usize;
        let r = (dy / self.cell_h) as usize;
        if c >= GRID_COLS || r >= GRID_ROWS {
            return None;
        }
        Some(r * GRID_COLS + c)
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            GRID_COLS as u16 * self.cell_w + 2,
            GRID_ROWS as u16 * self.cell_h + 2,
        )
    }

    fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        // Leave room for the two status lines under the board.
        let start_y = viewport.height.saturating_sub(frame_h + 2) / 2;
        (start_x, start_y)
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        display: &TermDisplay,
        visual: TileVisual,
        x: u16,
        y: u16,
    ) {
        // 1-column/1-row gap keeps neighboring tiles visually separate.
        let w = self.cell_w - 1;
        let h = self.cell_h - 1;

        match visual {
            TileVisual::Covered => {
                let back = CellStyle::new(Rgb::new(90, 70, 10), Rgb::new(190, 160, 40));
                fb.fill_rect(x, y, w, h, ' ', back);
            }
            TileVisual::Face(image) => {
                let face = CellStyle::new(Rgb::new(235, 235, 235), Rgb::new(40, 40, 60));
                fb.fill_rect(x, y, w, h, ' ', face);

                let label = fit_label(display.label(image), w.saturating_sub(2) as usize);
                let lx = x + (w.saturating_sub(label.chars().count() as u16)) / 2;
                fb.put_str(lx, y + h / 2, &label, face.bold());
            }
            TileVisual::Removed => {
                let matched = CellStyle::new(Rgb::new(0, 0, 0), theme_rgb(display.theme()));
                fb.fill_rect(x, y, w, h, ' ', matched);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        text: &str,
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let len = text.chars().count() as u16;
        let tx = x + w.saturating_sub(len) / 2;
        let ty = y + h / 2;
        // Clear a band behind the text so it reads over the tiles.
        fb.fill_rect(x + 1, ty, w.saturating_sub(2), 1, ' ', style);
        fb.put_str(tx, ty, text, style);
    }
}

fn fit_label(label: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    label.chars().take(max).collect()
}

fn theme_rgb(color: TileColor) -> Rgb {
    match color {
        TileColor::Blue => Rgb::new(60, 90, 200),
        TileColor::Green => Rgb::new(40, 160, 70),
        TileColor::Magenta => Rgb::new(190, 60, 170),
    }
}
