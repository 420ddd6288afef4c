use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use match_it::core::{Board, BoardController, GameDisplay};
use match_it::types::ImageId;

/// Display that swallows every call; the benches measure core logic only.
struct NopDisplay;

impl GameDisplay for NopDisplay {
    fn render_grid(&mut self, _rows: usize, _cols: usize) {}
    fn show_tile_image(&mut self, _index: usize, _image: ImageId) {}
    fn hide_tile_image(&mut self, _index: usize) {}
    fn remove_tile(&mut self, _index: usize) {}
    fn set_score_text(&mut self, _score: i32) {}
    fn show_game_over(&mut self, _tries: u32) {}
    fn hide_game_over(&mut self) {}
    fn schedule_after(&mut self, _ms: u64) {}
}

fn bench_deal(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);

    c.bench_function("board_deal", |b| {
        b.iter(|| black_box(Board::deal(&mut rng)))
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("perfect_game_8_pairs", |b| {
        b.iter(|| {
            let mut display = NopDisplay;
            let mut controller = BoardController::new(black_box(1000), 12345);
            controller.start(&mut display);

            for id in 0..8u8 {
                let positions = controller.board().positions_of(ImageId(id));
                controller.on_tile_clicked(positions[0], &mut display);
                controller.on_tile_clicked(positions[1], &mut display);
                controller.evaluate_selection(&mut display);
            }
            black_box(controller.state())
        })
    });
}

fn bench_restart(c: &mut Criterion) {
    let mut display = NopDisplay;
    let mut controller = BoardController::new(1000, 12345);
    controller.start(&mut display);

    c.bench_function("restart", |b| {
        b.iter(|| controller.restart(&mut display))
    });
}

criterion_group!(benches, bench_deal, bench_full_game, bench_restart);
criterion_main!(benches);
