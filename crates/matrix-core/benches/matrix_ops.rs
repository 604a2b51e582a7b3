// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for matrix operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matrix_core::{multiply, multiply_chain, Matrix};

/// Deterministic, diagonally dominant `n x n` matrix.
fn dominant(n: usize) -> Matrix {
    let mut m = Matrix::new(
        n,
        n,
        (0..n * n).map(|i| ((i * 7 % 13) as f64 - 6.0) / 13.0).collect(),
    )
    .expect("square");
    for i in 0..n {
        m.set(i, i, n as f64 + 1.0);
    }
    m
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    for n in [4usize, 16, 64] {
        let a = dominant(n);
        let b = dominant(n).transposed();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| multiply(black_box(&a), black_box(&b)))
        });
    }
    group.finish();

    let (a, b, c3) = (dominant(16), dominant(16), dominant(16));
    c.bench_function("multiply_chain/3x16", |bench| {
        bench.iter(|| multiply_chain(black_box(&a), black_box(&b), [black_box(&c3)]))
    });
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");
    for n in [2usize, 4, 16, 64] {
        let m = dominant(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| black_box(&m).inverse())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_multiply, bench_inverse);
criterion_main!(benches);
