// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered map and set basics.
//!
//! Build a set and a composite-key map, run the four neighbor queries, and check the
//! tree depth.
//!
//! Run:
//! - `cargo run -p sextant_demos --example ordered_basics`

use sextant_ordered::{OrderedMap, OrderedSet, compare};

fn main() {
    let mut set = OrderedSet::new(compare::f64_total);
    for k in [3.0, 0.0, 2.0, 1.0] {
        set.insert(k);
    }
    println!("set: {set:?}");
    println!("value_before(2.5)     = {:?}", set.value_before(&2.5));
    println!("value_at_or_before(1) = {:?}", set.value_at_or_before(&1.0));
    println!("value_after(999)      = {:?}", set.value_after(&999.0));
    println!("value_at_or_after(-9) = {:?}", set.value_at_or_after(&-9.0));

    // Series keyed by (series id, x): range scans become neighbor queries.
    let mut samples = OrderedMap::new(compare::pair(compare::natural::<u32>(), compare::f64_total));
    for (series, x, y) in [(1, 0.5, 10.0), (1, 1.5, 12.0), (2, 0.2, 7.0), (1, 1.0, 11.0)] {
        samples.set((series, x), y);
    }
    println!(
        "first sample of series 1: {:?}",
        samples.entry_at_or_after(&(1, f64::NEG_INFINITY))
    );
    println!(
        "last sample of series 1:  {:?}",
        samples.entry_at_or_before(&(1, f64::INFINITY))
    );

    let mut big = OrderedSet::natural();
    for i in 0..100_000_u32 {
        big.insert(i);
    }
    println!(
        "ascending inserts: n={} depth={}",
        big.len(),
        big.compute_depth()
    );
}
