// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`OrderedMap`]: unique keys mapped to values, ordered by an explicit comparator.

use core::fmt::Debug;

use crate::compare::{Comparator, Natural, natural};
use crate::iter::{Iter, Keys, Values};
use crate::tree::AaTree;

/// A map from unique keys to values, kept in ascending comparator order.
///
/// Mutation and lookup are `O(log n)`. Two keys are the same key exactly when the
/// comparator returns [`Equal`](core::cmp::Ordering::Equal) for them; the structural
/// identity of the key values never matters.
///
/// Keys must not be mutated in a way that changes their order while stored. The map
/// cannot detect this and would silently misbehave.
///
/// ```
/// use sextant_ordered::OrderedMap;
///
/// let mut map = OrderedMap::new(|a: &i32, b: &i32| a.cmp(b));
/// map.set(3, "d");
/// map.set(1, "b");
/// assert_eq!(map.get(&1), Some(&"b"));
/// assert_eq!(map.entry_after(&1), Some((&3, &"d")));
/// assert_eq!(map.entry_before(&1), None);
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V, C = Natural<K>> {
    tree: AaTree<K, V, C>,
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Create an empty map ordered by the key type's [`Ord`].
    pub fn natural() -> Self {
        Self::new(natural())
    }
}

impl<K: Ord, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<K, V, C> OrderedMap<K, V, C> {
    /// Create an empty map ordered by `comparator`.
    pub const fn new(comparator: C) -> Self {
        Self {
            tree: AaTree::new(comparator),
        }
    }

    /// Number of entries.
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether the map has no entries.
    pub const fn is_empty(&self) -> bool {
        self.tree.len() == 0
    }

    /// The comparator this map orders by.
    pub const fn comparator(&self) -> &C {
        self.tree.comparator()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.tree.first()
    }

    /// Entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.tree.last()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.tree.iter()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.tree.iter())
    }

    /// Values in ascending key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.tree.iter())
    }

    /// Longest root-to-leaf path in edges; `0` when empty.
    ///
    /// Stays within `2·log2(n + 1)` for any insertion order.
    pub fn compute_depth(&self) -> usize {
        self.tree.depth()
    }
}

impl<K, V, C: Comparator<K>> OrderedMap<K, V, C> {
    /// Insert `value` under `key`, or overwrite the value of an equal key.
    ///
    /// Returns the previous value when one was overwritten. Overwriting keeps the stored
    /// key and does not restructure the tree.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.tree.insert(key, value)
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.get(key).map(|(_, v)| v)
    }

    /// Stored key and value equal to `key`.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.tree.get(key)
    }

    /// Mutable access to the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.tree.get_mut(key)
    }

    /// Whether an equal key is stored.
    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.get(key).is_some()
    }

    /// Remove the entry equal to `key`, returning the stored key and value.
    ///
    /// Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        self.tree.remove(key)
    }

    /// Entry with the greatest key strictly less than `key`.
    pub fn entry_before(&self, key: &K) -> Option<(&K, &V)> {
        self.tree.floor(key, false)
    }

    /// Entry with the greatest key less than or equal to `key`.
    pub fn entry_at_or_before(&self, key: &K) -> Option<(&K, &V)> {
        self.tree.floor(key, true)
    }

    /// Entry with the least key strictly greater than `key`.
    pub fn entry_after(&self, key: &K) -> Option<(&K, &V)> {
        self.tree.ceil(key, false)
    }

    /// Entry with the least key greater than or equal to `key`.
    pub fn entry_at_or_after(&self, key: &K) -> Option<(&K, &V)> {
        self.tree.ceil(key, true)
    }
}

impl<K: Debug, V: Debug, C> Debug for OrderedMap<K, V, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, C> IntoIterator for &'a OrderedMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for OrderedMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::natural();
        map.extend(iter);
        map
    }
}
