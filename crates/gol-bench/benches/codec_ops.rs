//! Criterion micro-benchmarks for snapshot encoding and decoding.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use gol_bench::reference_batch;
use gol_codec::{decode_json, decode_text, encode_json, encode_text};
use gol_engine::encode;

/// Benchmark: Encode the reference batch as text.
fn bench_encode_text(c: &mut Criterion) {
    let snapshot = encode(&reference_batch(1).unwrap());

    c.bench_function("encode_text_1000x20x20", |b| {
        b.iter(|| black_box(encode_text(&snapshot)));
    });
}

/// Benchmark: Decode the same batch from text.
fn bench_decode_text(c: &mut Criterion) {
    let text = encode_text(&encode(&reference_batch(1).unwrap()));

    c.bench_function("decode_text_1000x20x20", |b| {
        b.iter(|| black_box(decode_text(&text).unwrap()));
    });
}

/// Benchmark: Encode and decode the reference batch as JSON.
fn bench_json_round_trip(c: &mut Criterion) {
    let snapshot = encode(&reference_batch(1).unwrap());

    c.bench_function("json_round_trip_1000x20x20", |b| {
        b.iter(|| {
            let json = encode_json(&snapshot).unwrap();
            black_box(decode_json(&json).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_encode_text,
    bench_decode_text,
    bench_json_round_trip
);
criterion_main!(benches);
