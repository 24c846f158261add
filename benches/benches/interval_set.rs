// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use zoombox_interval::{Interval, IntervalSet};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn next_f64(&mut self, upper: f64) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX) * upper
    }
}

fn gen_intervals(n: usize, span: f64, max_len: f64, seed: u64) -> Vec<Interval> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| {
            let from = rng.next_f64(span);
            Interval::new(from, from + rng.next_f64(max_len))
        })
        .collect()
}

fn bench_merge_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_set");

    for n in [16_usize, 128, 1024] {
        let inputs = gen_intervals(n, 100_000.0, 50.0, 42);
        group.bench_function(format!("merge_insert_{n}"), |b| {
            b.iter_batched(
                IntervalSet::new,
                |mut set| {
                    for &iv in &inputs {
                        set.merge_insert(iv);
                    }
                    set
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_set");

    let mut set = IntervalSet::new();
    for iv in gen_intervals(1024, 100_000.0, 50.0, 7) {
        set.merge_insert(iv);
    }
    let bounds = Interval::new(0.0, 100_000.0);
    let probes = gen_intervals(256, 100_000.0, 20.0, 99);

    group.bench_function("locate_256", |b| {
        b.iter(|| {
            for &p in &probes {
                black_box(set.locate(p));
            }
        });
    });

    group.bench_function("nearest_free_256", |b| {
        b.iter(|| {
            for &p in &probes {
                black_box(set.nearest_free(bounds, p.from, p.length()));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_merge_insert, bench_queries);
criterion_main!(benches);
