// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-order iterators over maps and sets.
//!
//! Every iterator walks the tree lazily with an explicit stack per end, so a traversal
//! costs O(n) overall and O(log n) extra memory. Calling `iter()` again starts a fresh walk.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::tree::{Node, Slot};

/// Ascending iterator over `(key, value)` pairs of an [`OrderedMap`](crate::OrderedMap).
pub struct Iter<'a, K, V> {
    nodes: &'a [Option<Node<K, V>>],
    front: Vec<Slot>,
    back: Vec<Slot>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(nodes: &'a [Option<Node<K, V>>], root: Option<Slot>, len: usize) -> Self {
        let mut iter = Self {
            nodes,
            front: Vec::new(),
            back: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter.push_right_spine(root);
        iter
    }

    fn node(&self, slot: Slot) -> Option<&'a Node<K, V>> {
        self.nodes.get(slot.idx())?.as_ref()
    }

    fn push_left_spine(&mut self, mut link: Option<Slot>) {
        while let Some(slot) = link {
            self.front.push(slot);
            link = self.node(slot).and_then(|n| n.left);
        }
    }

    fn push_right_spine(&mut self, mut link: Option<Slot>) {
        while let Some(slot) = link {
            self.back.push(slot);
            link = self.node(slot).and_then(|n| n.right);
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K, V> core::fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.front.pop()?;
        let node = self.node(slot)?;
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.back.pop()?;
        let node = self.node(slot)?;
        self.push_right_spine(node.left);
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Ascending iterator over the keys of an [`OrderedMap`](crate::OrderedMap), or the
/// elements of an [`OrderedSet`](crate::OrderedSet).
#[derive(Clone, Debug)]
pub struct Keys<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.0.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Values of an [`OrderedMap`](crate::OrderedMap), in ascending key order.
#[derive(Clone, Debug)]
pub struct Values<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.0.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

#[cfg(test)]
mod tests {
    use crate::OrderedMap;
    use alloc::vec::Vec;

    #[test]
    fn alternating_ends_meet_in_the_middle() {
        let map: OrderedMap<u32, u32> = (0..101).rev().map(|k| (k, k + 1)).collect();
        let mut it = map.iter();
        let mut seen = Vec::new();
        while let Some((k, v)) = it.next() {
            assert_eq!(*v, k + 1);
            seen.push(*k);
            if let Some((k, _)) = it.next_back() {
                seen.push(*k);
            }
            assert_eq!(it.len(), 101 - seen.len());
        }
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
        seen.sort_unstable();
        assert_eq!(seen, (0..101).collect::<Vec<_>>());
    }

    #[test]
    fn keys_and_values_walk_in_key_order() {
        let map: OrderedMap<i8, char> = [(3, 'c'), (-1, 'a'), (2, 'b')].into_iter().collect();
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), [-1, 2, 3]);
        assert_eq!(map.values().rev().copied().collect::<Vec<_>>(), ['c', 'b', 'a']);
    }
}
