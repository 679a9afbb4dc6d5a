// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use sextant_ordered::{OrderedMap, OrderedSet, compare};
use sextant_tiles::visible_tiles;
use sextant_zorder::ZOrder;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_keys(order: &str, n: usize) -> Vec<u64> {
    match order {
        "ascending" => (0..n as u64).collect(),
        "descending" => (0..n as u64).rev().collect(),
        _ => {
            let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
            (0..n).map(|_| rng.next_u64()).collect()
        }
    }
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_set_insert");
    for &n in &[1_000usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        for order in ["ascending", "descending", "random"] {
            let keys = gen_keys(order, n);
            group.bench_function(format!("{order}_n{n}"), |b| {
                b.iter_batched(
                    OrderedSet::<u64>::natural,
                    |mut set| {
                        for &k in &keys {
                            set.insert(k);
                        }
                        black_box(set.compute_depth());
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_insert_remove_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_map_churn");
    let n = 10_000usize;
    let keys = gen_keys("random", n);
    group.throughput(Throughput::Elements(n as u64));
    group.bench_function("set_then_remove_half", |b| {
        b.iter_batched(
            OrderedMap::<u64, u32>::natural,
            |mut map| {
                for (i, &k) in keys.iter().enumerate() {
                    map.set(k, i as u32);
                }
                for k in keys.iter().step_by(2) {
                    black_box(map.remove(k));
                }
                black_box(map.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_neighbor_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_set_neighbors");
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let mut set = OrderedSet::new(compare::f64_total);
    for _ in 0..100_000 {
        set.insert(rng.next_f64() * 1000.0);
    }
    let probes: Vec<f64> = (0..1024).map(|_| rng.next_f64() * 1000.0).collect();
    group.throughput(Throughput::Elements(probes.len() as u64));
    group.bench_function("value_before_after_n100000", |b| {
        b.iter(|| {
            for p in &probes {
                black_box(set.value_before(p));
                black_box(set.value_at_or_after(p));
            }
        })
    });
    group.finish();
}

fn bench_tiles_and_zorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("consumers");
    group.bench_function("visible_tiles_antimeridian_z8", |b| {
        b.iter(|| black_box(visible_tiles(Rect::new(-0.2, 0.3, 0.2, 0.5), 8).len()))
    });
    group.bench_function("zorder_bring_to_front_1000", |b| {
        b.iter_batched(
            || {
                let mut z = ZOrder::new();
                for i in 0..1000_u32 {
                    z.insert(i, f64::from(i % 16));
                }
                z
            },
            |mut z| {
                for i in (0..1000_u32).step_by(7) {
                    z.bring_to_front(&i);
                }
                black_box(z.top());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_insert_remove_churn,
    bench_neighbor_queries,
    bench_tiles_and_zorder,
);
criterion_main!(benches);
