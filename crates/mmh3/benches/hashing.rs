// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mmh3 contributors

//! Digest throughput across payload sizes.
//!
//! Small sizes exercise the tail path, large sizes the 16-byte block loop.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mmh3::{hash128, token};

fn bench_hash128(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash128_x64");
    for size in [15usize, 16, 64, 256, 1024, 16 * 1024] {
        let data: Vec<u8> = (0..size).map(|i| (i * 31) as u8).collect();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| hash128(black_box(data), black_box(0)));
        });
    }
    group.finish();
}

fn bench_token(c: &mut Criterion) {
    let key = b"partition:0042:sensor-telemetry";
    c.bench_function("token_31b_key", |b| {
        b.iter(|| token(black_box(key)));
    });
}

criterion_group!(benches, bench_hash128, bench_token);
criterion_main!(benches);
