//! Terminal Match It! runner.
//!
//! Parses the CLI, validates the image folder, then drives the board
//! controller from a crossterm event loop: mouse clicks select tiles, `r`
//! restarts, `q` quits. The pending match evaluation is a deadline polled
//! between events, so everything stays on one thread.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event;
use tracing::info;
use tracing_subscriber::EnvFilter;

use match_it::assets;
use match_it::core::BoardController;
use match_it::input::{map_event, InputAction};
use match_it::term::{GameView, TermDisplay, TerminalRenderer, Viewport};
use match_it::types::{TileColor, FAST_DELAY_MS, NORMAL_DELAY_MS, PAIR_COUNT};

/// Idle poll timeout when no evaluation deadline is armed.
const IDLE_POLL_MS: u64 = 250;

/// A single player matching game.
#[derive(Parser, Debug)]
#[command(name = "match-it")]
#[command(about = "A single player matching game")]
struct Args {
    /// What color would you like for the player?
    #[arg(value_parser = ["blue", "green", "magenta"])]
    color: String,

    /// What folder contains the game images?
    image_folder: PathBuf,

    /// Fast or slow game?
    #[arg(short, long)]
    fast: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let color = TileColor::from_str(&args.color).context("unsupported player color")?;
    let delay_ms = if args.fast {
        FAST_DELAY_MS
    } else {
        NORMAL_DELAY_MS
    };

    // Validate the folder before touching the terminal; insufficient assets
    // abort startup with a plain error message.
    let images = assets::list_usable_images(&args.image_folder)?;
    let labels: Vec<String> = images
        .iter()
        .take(PAIR_COUNT)
        .map(|handle| handle.label.clone())
        .collect();
    info!(
        folder = %args.image_folder.display(),
        usable = images.len(),
        delay_ms,
        "starting game"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, color, labels, delay_ms);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    color: TileColor,
    labels: Vec<String>,
    delay_ms: u64,
) -> Result<()> {
    let mut display = TermDisplay::new(color, labels);
    let mut controller = BoardController::new(delay_ms, rand::random());
    controller.start(&mut display);

    let view = GameView::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let fb = view.render(&display, viewport);
        term.draw(&fb)?;

        // Wake up for the armed evaluation deadline, or idle-poll.
        let timeout = display
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::from_millis(IDLE_POLL_MS));

        if event::poll(timeout)? {
            let ev = event::read()?;
            match map_event(&ev) {
                Some(InputAction::Quit) => return Ok(()),
                Some(InputAction::Restart) => controller.restart(&mut display),
                Some(InputAction::Click { col, row }) => {
                    if let Some(index) = view.tile_at(viewport, col, row) {
                        controller.on_tile_clicked(index, &mut display);
                    }
                }
                // Resize and other terminal noise; the next render picks it up.
                None => {}
            }
        }

        if display.take_due_evaluation(Instant::now()) {
            controller.evaluate_selection(&mut display);
        }
    }
}
