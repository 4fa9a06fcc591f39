use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{traversal, Collaborators, EngineConfig, GameEngine, Grid, SimpleRng, TileId};
use tui_2048::types::Direction;

fn new_engine() -> GameEngine {
    GameEngine::new(EngineConfig::instant(), Collaborators::new(SimpleRng::new(12345)))
        .expect("default config is valid")
}

fn bench_move_cycle(c: &mut Criterion) {
    let mut game = new_engine();

    c.bench_function("move_cycle", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                if !game.attempt_move(black_box(dir)) && game.game_over() {
                    game.new_game();
                }
            }
        })
    });
}

fn bench_full_row_merge(c: &mut Criterion) {
    let mut game = new_engine();
    let mut values = [0u32; 16];
    values[..4].copy_from_slice(&[4, 4, 4, 4]);

    c.bench_function("merge_full_row", |b| {
        b.iter(|| {
            game.load_values(&values, 0).expect("16 values");
            game.attempt_move(black_box(Direction::Left));
        })
    });
}

fn bench_traversal(c: &mut Criterion) {
    c.bench_function("traversal_8x8", |b| {
        b.iter(|| traversal(black_box(8), Direction::Down.vector()).positions().count())
    });
}

fn bench_game_over_check(c: &mut Criterion) {
    let values: Vec<u32> = (0..16)
        .map(|i| if (i / 4 + i % 4) % 2 == 0 { 2 } else { 4 })
        .collect();
    let mut next = 0;
    let grid = Grid::from_values(4, &values, || {
        next += 1;
        TileId(next)
    })
    .expect("16 values");

    c.bench_function("moves_available_full_grid", |b| {
        b.iter(|| black_box(&grid).moves_available())
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut game = new_engine();

    c.bench_function("place_random_tile", |b| {
        b.iter(|| {
            if game.place_random_tile().is_none() {
                game.load_values(&[0; 16], 0).expect("16 values");
            }
        })
    });
}

criterion_group!(
    benches,
    bench_move_cycle,
    bench_full_row_merge,
    bench_traversal,
    bench_game_over_check,
    bench_spawn
);
criterion_main!(benches);
