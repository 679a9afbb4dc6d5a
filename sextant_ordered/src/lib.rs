// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sextant Ordered: comparator-ordered maps and sets on a self-balancing AA-tree.
//!
//! - [`OrderedMap`] stores unique keys with values, [`OrderedSet`] stores unique keys.
//! - Ordering comes from an explicit [`Comparator`], any `Fn(&K, &K) -> Ordering`.
//!   Keys never need to implement [`Ord`], so composite keys, floats and wrapped
//!   (modular) domains are all expressed by choosing the comparator.
//! - Insert, remove, lookup and four directional neighbor queries are `O(log n)` for
//!   any insertion order.
//! - Absence is always reported as `None`; nothing panics under normal use.
//!
//! Nodes are stored in a slot arena and linked by index, so rotations never move
//! keys or values and freed slots are reused.
//!
//! # Example
//!
//! ```rust
//! use sextant_ordered::{OrderedSet, compare};
//!
//! let mut set = OrderedSet::new(compare::f64_total);
//! for k in [3.0, 1.0, 0.0, 2.0] {
//!     set.insert(k);
//! }
//!
//! assert_eq!(set.value_before(&2.5), Some(&2.0));
//! assert_eq!(set.value_at_or_before(&1.0), Some(&1.0));
//! assert_eq!(set.value_after(&999.0), None);
//! assert_eq!(set.value_at_or_after(&-999.0), Some(&0.0));
//! ```
//!
//! ## Neighbor queries
//!
//! | Map | Set | Finds |
//! |---|---|---|
//! | [`OrderedMap::entry_before`] | [`OrderedSet::value_before`] | greatest key `< k` |
//! | [`OrderedMap::entry_at_or_before`] | [`OrderedSet::value_at_or_before`] | greatest key `<= k` |
//! | [`OrderedMap::entry_after`] | [`OrderedSet::value_after`] | least key `> k` |
//! | [`OrderedMap::entry_at_or_after`] | [`OrderedSet::value_at_or_after`] | least key `>= k` |
//!
//! ## Balance
//!
//! Every node carries a level. After each insert or removal, skew (rotate right to remove
//! a left link at the same level) and split (rotate left and promote to remove two
//! right links at the same level) run bottom-up along the search path. The resulting
//! height is at most `2·log2(n + 1)`, observable through
//! [`OrderedMap::compute_depth`].

#![no_std]

extern crate alloc;

pub mod compare;
pub mod iter;
pub mod map;
pub mod set;
mod tree;

pub use compare::{Comparator, Natural};
pub use iter::{Iter, Keys, Values};
pub use map::OrderedMap;
pub use set::OrderedSet;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn map_and_set_agree_on_order() {
        let keys = [9_i64, -3, 14, 0, 7, -12, 5];
        let mut map = OrderedMap::natural();
        let mut set = OrderedSet::natural();
        for k in keys {
            map.set(k, k * k);
            set.insert(k);
        }
        let from_map: Vec<_> = map.keys().copied().collect();
        let from_set: Vec<_> = set.iter().copied().collect();
        assert_eq!(from_map, from_set);
        assert_eq!(from_set, [-12, -3, 0, 5, 7, 9, 14]);
    }

    #[test]
    fn iteration_is_restartable() {
        let set: OrderedSet<u16> = (0..50).rev().collect();
        let first: Vec<_> = set.iter().collect();
        let second: Vec<_> = set.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 50);
    }

    #[test]
    fn reversed_comparator_flips_neighbors() {
        let mut set = OrderedSet::new(compare::reverse::<u8, _>(compare::natural()));
        set.extend([1, 2, 3]);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
        assert_eq!(set.value_after(&2), Some(&1));
        assert_eq!(set.value_before(&2), Some(&3));
    }
}
