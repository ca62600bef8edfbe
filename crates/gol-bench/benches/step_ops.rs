//! Criterion micro-benchmarks for grid and batch stepping.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use gol_bench::{reference_batch, stress_batch};
use gol_test_utils::random_grid;

/// Benchmark: One step of a single 100x100 grid.
fn bench_grid_step_100x100(c: &mut Criterion) {
    let mut grid = random_grid(100, 100, 42);

    c.bench_function("grid_step_100x100", |b| {
        b.iter(|| {
            grid.step();
            black_box(grid.alive_count());
        });
    });
}

/// Benchmark: count_nearby() on every cell of a 100x100 grid.
fn bench_count_nearby_10k(c: &mut Criterion) {
    let grid = random_grid(100, 100, 7);

    c.bench_function("count_nearby_10k", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for r in 0..100i32 {
                for col in 0..100i32 {
                    total += u32::from(grid.count_nearby(r, col));
                }
            }
            black_box(total);
        });
    });
}

/// Benchmark: step_all() over 1000 grids of 20x20.
fn bench_step_all_reference(c: &mut Criterion) {
    let mut batch = reference_batch(42).unwrap();

    c.bench_function("step_all_1000x20x20", |b| {
        b.iter(|| {
            black_box(batch.step_all());
        });
    });
}

/// Benchmark: step_all() over 8 grids of 316x316.
fn bench_step_all_stress(c: &mut Criterion) {
    let mut batch = stress_batch(42).unwrap();

    c.bench_function("step_all_8x316x316", |b| {
        b.iter(|| {
            black_box(batch.step_all());
        });
    });
}

criterion_group!(
    benches,
    bench_grid_step_100x100,
    bench_count_nearby_10k,
    bench_step_all_reference,
    bench_step_all_stress
);
criterion_main!(benches);
