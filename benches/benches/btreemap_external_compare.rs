// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sextant_ordered::OrderedMap;

fn gen_keys(n: usize) -> Vec<i64> {
    // Multiplying by an odd constant permutes the residues, giving a shuffled order.
    (0..n as i64)
        .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15_u64 as i64) >> 16)
        .collect()
}

fn bench_btreemap_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("btreemap_external_compare");
    for &n in &[10_000usize, 100_000] {
        let keys = gen_keys(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("sextant_build_floor_n{}", n), |b| {
            b.iter_batched(
                OrderedMap::<i64, usize>::natural,
                |mut map| {
                    for (i, &k) in keys.iter().enumerate() {
                        map.set(k, i);
                    }
                    let hits = keys
                        .iter()
                        .filter(|k| map.entry_before(k).is_some())
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("btreemap_build_floor_n{}", n), |b| {
            b.iter_batched(
                BTreeMap::<i64, usize>::new,
                |mut map| {
                    for (i, &k) in keys.iter().enumerate() {
                        map.insert(k, i);
                    }
                    let hits = keys
                        .iter()
                        .filter(|k| map.range(..**k).next_back().is_some())
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_btreemap_external_compare);
criterion_main!(benches);
