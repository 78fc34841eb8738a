//! Level generation and snapshot benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use card_arith::core::{GameRng, SequentialIds};
use card_arith::levels::{FactorGenerator, FractionGenerator, LevelGenerator};
use card_arith::puzzle::Puzzle;

fn bench_generate(c: &mut Criterion) {
    let fractions = FractionGenerator::new();
    let factors = FactorGenerator::new();
    let mut rng = GameRng::new(42);
    let mut ids = SequentialIds::new();

    c.bench_function("generate_fraction_master", |b| {
        b.iter(|| fractions.generate(black_box(6), &mut rng, &mut ids))
    });

    c.bench_function("generate_factor_master", |b| {
        b.iter(|| factors.generate(black_box(6), &mut rng, &mut ids))
    });
}

fn bench_view(c: &mut Criterion) {
    let data = FractionGenerator::new()
        .generate(6, &mut GameRng::new(7), &mut SequentialIds::new())
        .unwrap();
    let mut puzzle = Puzzle::new(data);
    puzzle.apply(0).unwrap();

    c.bench_function("puzzle_view", |b| b.iter(|| black_box(puzzle.view())));
}

criterion_group!(benches, bench_generate, bench_view);
criterion_main!(benches);
