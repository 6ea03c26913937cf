//! Criterion benches for the twisted negacyclic NTT.
//!
//! Input vectors are deterministic across runs (LCG-based) so results are
//! comparable over time.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use glyph_ring::ntt::{forward, inverse};
use glyph_ring::params::ParamSet;
use glyph_ring::twiddle::TwiddleTables;

/// Deterministic "random" coefficient vector of length `n`, seeded by `seed`.
#[inline]
fn det_vec(n: usize, q: u16, seed: u64) -> Vec<u16> {
    const A: u64 = 1_664_525;
    const C: u64 = 1_013_904_223;
    const M: u64 = 1u64 << 32;

    let mut a = A.wrapping_mul(seed).wrapping_add(C);
    (0..n)
        .map(|_| {
            a = a.wrapping_mul(A).wrapping_add(C) % M;
            (a % u64::from(q)) as u16
        })
        .collect()
}

fn bench_ntt(c: &mut Criterion) {
    let mut group = c.benchmark_group("ntt_glyph1024");

    for set in [ParamSet::Glyph1024Q12289, ParamSet::Glyph1024Q59393Wide] {
        let p = set.params();
        let tw = TwiddleTables::build(&p);
        group.throughput(Throughput::Elements(p.n as u64));

        let base = det_vec(p.n, p.q, 2024);

        group.bench_function(BenchmarkId::new("forward", format!("{:?}", set)), |b| {
            b.iter_batched(
                || black_box(base.clone()),
                |mut v| {
                    forward(black_box(&mut v), &p, &tw);
                    black_box(v);
                },
                BatchSize::LargeInput,
            )
        });

        let mut evals = base.clone();
        forward(&mut evals, &p, &tw);

        group.bench_function(BenchmarkId::new("inverse", format!("{:?}", set)), |b| {
            b.iter_batched(
                || black_box(evals.clone()),
                |mut v| {
                    inverse(black_box(&mut v), &p, &tw);
                    black_box(v);
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ntt);
criterion_main!(benches);
