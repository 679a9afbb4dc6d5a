// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`OrderedSet`]: a thin wrapper over [`OrderedMap`] with unit values.

use core::fmt::Debug;

use crate::compare::{Comparator, Natural};
use crate::iter::Keys;
use crate::map::OrderedMap;

/// A set of unique keys, kept in ascending comparator order.
///
/// ```
/// use sextant_ordered::OrderedSet;
///
/// let mut set = OrderedSet::new(|a: &u32, b: &u32| a.cmp(b));
/// for k in [3, 0, 2, 1] {
///     set.insert(k);
/// }
/// assert_eq!(set.value_before(&1), Some(&0));
/// assert_eq!(set.value_at_or_after(&4), None);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);
/// ```
#[derive(Clone)]
pub struct OrderedSet<K, C = Natural<K>> {
    map: OrderedMap<K, (), C>,
}

impl<K: Ord> OrderedSet<K> {
    /// Create an empty set ordered by the key type's [`Ord`].
    pub fn natural() -> Self {
        Self {
            map: OrderedMap::natural(),
        }
    }
}

impl<K: Ord> Default for OrderedSet<K> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<K, C> OrderedSet<K, C> {
    /// Create an empty set ordered by `comparator`.
    pub const fn new(comparator: C) -> Self {
        Self {
            map: OrderedMap::new(comparator),
        }
    }

    /// Number of keys.
    pub const fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the set is empty.
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The comparator this set orders by.
    pub const fn comparator(&self) -> &C {
        self.map.comparator()
    }

    /// Drop every key.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Smallest key.
    pub fn first(&self) -> Option<&K> {
        self.map.first().map(|(k, _)| k)
    }

    /// Largest key.
    pub fn last(&self) -> Option<&K> {
        self.map.last().map(|(k, _)| k)
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> Keys<'_, K, ()> {
        self.map.keys()
    }

    /// Longest root-to-leaf path in edges; `0` when empty.
    pub fn compute_depth(&self) -> usize {
        self.map.compute_depth()
    }
}

impl<K, C: Comparator<K>> OrderedSet<K, C> {
    /// Add `key`. Returns `false`, leaving the set untouched, if an equal key is present.
    pub fn insert(&mut self, key: K) -> bool {
        self.map.set(key, ()).is_none()
    }

    /// Whether an equal key is present.
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// The stored key equal to `key`.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.map.get_key_value(key).map(|(k, _)| k)
    }

    /// Remove the key equal to `key`, returning the stored one. No-op if absent.
    pub fn remove(&mut self, key: &K) -> Option<K> {
        self.map.remove(key).map(|(k, ())| k)
    }

    /// Greatest key strictly less than `key`.
    pub fn value_before(&self, key: &K) -> Option<&K> {
        self.map.entry_before(key).map(|(k, _)| k)
    }

    /// Greatest key less than or equal to `key`.
    pub fn value_at_or_before(&self, key: &K) -> Option<&K> {
        self.map.entry_at_or_before(key).map(|(k, _)| k)
    }

    /// Least key strictly greater than `key`.
    pub fn value_after(&self, key: &K) -> Option<&K> {
        self.map.entry_after(key).map(|(k, _)| k)
    }

    /// Least key greater than or equal to `key`.
    pub fn value_at_or_after(&self, key: &K) -> Option<&K> {
        self.map.entry_at_or_after(key).map(|(k, _)| k)
    }
}

impl<K: Debug, C> Debug for OrderedSet<K, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, K, C> IntoIterator for &'a OrderedSet<K, C> {
    type Item = &'a K;
    type IntoIter = Keys<'a, K, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, C: Comparator<K>> Extend<K> for OrderedSet<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for k in iter {
            self.insert(k);
        }
    }
}

impl<K: Ord> FromIterator<K> for OrderedSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::natural();
        set.extend(iter);
        set
    }
}
