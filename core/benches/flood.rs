use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sweep_core::*;

fn first_click_hard(c: &mut Criterion) {
    let options = Difficulty::Hard.options();
    let mut seed = 0;

    c.bench_function("first click, hard", |b| {
        b.iter(|| {
            seed += 1;
            let mut session = GameSession::with_seed(options, seed);
            black_box(session.reveal(black_box(0)).unwrap())
        })
    });
}

fn flood_open_board(c: &mut Criterion) {
    let grid = Grid::new_empty(255, 255);

    c.bench_function("flood, 255x255 open board", |b| {
        b.iter(|| black_box(chain_reveal(black_box(32512), &grid)).len())
    });
}

criterion_group!(benches, first_click_hard, flood_open_board);
criterion_main!(benches);
