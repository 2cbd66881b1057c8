//! Sampler benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use picker_engine::rng::PickRng;
use picker_engine::sampler::{draw_integers, shuffle_take};

fn bench_draw_integers(c: &mut Criterion) {
    let mut rng = PickRng::new();
    c.bench_function("draw_integers_1000", |b| {
        b.iter(|| draw_integers(&mut rng, 1, 6, black_box(1_000)))
    });
}

fn bench_shuffle_take(c: &mut Criterion) {
    let mut rng = PickRng::new();
    let pool: Vec<usize> = (0..1_000).collect();
    c.bench_function("shuffle_take_1000_take_10", |b| {
        b.iter(|| shuffle_take(&mut rng, black_box(&pool), 10))
    });
}

criterion_group!(benches, bench_draw_integers, bench_shuffle_take);
criterion_main!(benches);
