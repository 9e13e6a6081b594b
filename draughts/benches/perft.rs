use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use draughts::*;

fn perft_benchmark(c: &mut Criterion) {
    let startpos = Game::default();
    c.bench_function("Startpos Perft 8", |b| {
        b.iter(|| {
            let game = black_box(&startpos);
            let depth = black_box(8);
            black_box(perft(game, depth))
        });
    });

    // A capture-heavy middlegame, to exercise the jump-chain search
    let midgame = Game::from_fen("W:W21,22,25,26,27,29,30,K14:B6,7,9,10,11,K18").unwrap();
    c.bench_function("Midgame Perft 8", |b| {
        b.iter(|| {
            let game = black_box(&midgame);
            let depth = black_box(8);
            black_box(perft(game, depth))
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(50).measurement_time(Duration::from_secs(30));
    targets = perft_benchmark
}
criterion_main!(benches);
