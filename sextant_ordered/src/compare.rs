// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Comparators: the explicit ordering every map and set is built with.
//!
//! A comparator is anything implementing [`Comparator`]. Every
//! `Fn(&K, &K) -> Ordering` closure or function pointer already does, so most callers
//! never name the trait. Named comparator types (such as a tile ordering carrying
//! per-instance state) can implement it directly to keep the collection type nameable.
//!
//! The comparator must impose a strict total order and must answer consistently across
//! calls. This is a caller contract; the collections do not detect violations. A broken
//! comparator produces unspecified (but memory-safe) results.

use core::cmp::Ordering;

/// A total order over keys of type `K`.
pub trait Comparator<K: ?Sized> {
    /// Compare two keys. `Equal` means the collection treats them as the same key.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// Function-pointer comparator type produced by [`natural`].
pub type Natural<K> = fn(&K, &K) -> Ordering;

/// The key type's own [`Ord`] ordering.
pub fn natural<K: Ord>() -> Natural<K> {
    <K as Ord>::cmp
}

/// Total order over `f64` using [`f64::total_cmp`].
///
/// Infinities sort at the ends, which makes them usable as open bounds in composite
/// queries. Note that `-0.0` sorts strictly before `0.0` under this order.
pub fn f64_total(a: &f64, b: &f64) -> Ordering {
    a.total_cmp(b)
}

/// Invert an existing comparator.
pub fn reverse<K, C>(inner: C) -> impl Fn(&K, &K) -> Ordering
where
    C: Comparator<K>,
{
    move |a: &K, b: &K| inner.compare(b, a)
}

/// Lexicographic order over pairs: `first` decides, `second` breaks ties.
///
/// ```
/// use sextant_ordered::{OrderedMap, compare};
///
/// let mut map = OrderedMap::new(compare::pair(compare::f64_total, compare::f64_total));
/// map.set((1.0, 2.0), "b");
/// map.set((1.0, 1.0), "a");
/// assert_eq!(map.entry_at_or_after(&(1.0, f64::NEG_INFINITY)), Some((&(1.0, 1.0), &"a")));
/// ```
pub fn pair<A, B, CA, CB>(first: CA, second: CB) -> impl Fn(&(A, B), &(A, B)) -> Ordering
where
    CA: Comparator<A>,
    CB: Comparator<B>,
{
    move |a: &(A, B), b: &(A, B)| {
        first
            .compare(&a.0, &b.0)
            .then_with(|| second.compare(&a.1, &b.1))
    }
}
