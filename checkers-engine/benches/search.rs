use criterion::{black_box, criterion_group, criterion_main, Criterion};

use checkers_engine::coretypes::Side;
use checkers_engine::evaluation::ScoringMode;
use checkers_engine::search::Optimization;
use checkers_engine::*;

pub fn criterion_search_start_position(c: &mut Criterion) {
    // Setup
    let position = Position::start_position();
    let mut pruning = EngineBuilder::new()
        .scoring(ScoringMode::NumberAndPotential)
        .no_random(true)
        .build();
    let mut plain = EngineBuilder::new()
        .scoring(ScoringMode::NumberAndPotential)
        .optimization(Optimization::O0)
        .no_random(true)
        .build();

    // Benchmarks

    for depth in [3, 5] {
        c.bench_function(&format!("start_position: pruning depth {depth}"), |b| {
            b.iter(|| pruning.find_best_turns(black_box(&position), Side::White, black_box(depth)))
        });
        c.bench_function(&format!("start_position: O0 depth {depth}"), |b| {
            b.iter(|| plain.find_best_turns(black_box(&position), Side::White, black_box(depth)))
        });
    }
}

pub fn criterion_search_kings_endgame(c: &mut Criterion) {
    // Setup
    let position = Position::parse_layout(
        "......../..B...../......../......../...W..../......../.....w../W.......",
    )
    .unwrap();
    let mut engine = EngineBuilder::new().no_random(true).build();

    // Benchmarks

    c.bench_function("kings_endgame: pruning depth 4", |b| {
        b.iter(|| engine.search(black_box(&position), Side::Black, black_box(4)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().without_plots().sample_size(20);
    targets = criterion_search_start_position, criterion_search_kings_endgame
}
criterion_main!(benches);
