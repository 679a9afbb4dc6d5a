// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena-backed AA-tree: storage, rebalancing, and ordered queries.
//!
//! Nodes live in a `Vec` of slots and link to each other by slot index. A missing child
//! is `None` and counts as level 0. Freed slots go on a free list and are reused by the
//! next insertion, so no index is ever exposed outside the crate.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::mem;

use crate::compare::Comparator;
use crate::iter::Iter;

/// Index of a node slot in the arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Slot(u32);

impl Slot {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Arena slots are 32-bit; a tree never holds more than u32::MAX nodes."
    )]
    const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    level: u32,
    pub(crate) left: Option<Slot>,
    pub(crate) right: Option<Slot>,
}

/// The balanced tree shared by [`OrderedMap`](crate::OrderedMap) and
/// [`OrderedSet`](crate::OrderedSet).
#[derive(Clone)]
pub(crate) struct AaTree<K, V, C> {
    nodes: Vec<Option<Node<K, V>>>,
    free_list: Vec<usize>,
    root: Option<Slot>,
    len: usize,
    cmp: C,
}

impl<K, V, C> AaTree<K, V, C> {
    pub(crate) const fn new(cmp: C) -> Self {
        Self {
            nodes: Vec::new(),
            free_list: Vec::new(),
            root: None,
            len: 0,
            cmp,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn comparator(&self) -> &C {
        &self.cmp
    }

    pub(crate) fn clear(&mut self) {
        self.root = None;
        self.len = 0;
        self.nodes.clear();
        self.free_list.clear();
    }

    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.nodes, self.root, self.len)
    }

    pub(crate) fn node(&self, slot: Slot) -> &Node<K, V> {
        self.nodes[slot.idx()].as_ref().expect("dangling tree slot")
    }

    fn node_mut(&mut self, slot: Slot) -> &mut Node<K, V> {
        self.nodes[slot.idx()].as_mut().expect("dangling tree slot")
    }

    fn level(&self, link: Option<Slot>) -> u32 {
        link.map_or(0, |s| self.node(s).level)
    }

    fn alloc(&mut self, key: K, value: V) -> Slot {
        let node = Node {
            key,
            value,
            level: 1,
            left: None,
            right: None,
        };
        self.len += 1;
        if let Some(idx) = self.free_list.pop() {
            self.nodes[idx] = Some(node);
            Slot::new(idx)
        } else {
            self.nodes.push(Some(node));
            Slot::new(self.nodes.len() - 1)
        }
    }

    fn release(&mut self, slot: Slot) -> Node<K, V> {
        let node = self.nodes[slot.idx()].take().expect("dangling tree slot");
        self.free_list.push(slot.idx());
        self.len -= 1;
        node
    }

    /// Remove a left horizontal link by rotating right.
    fn skew(&mut self, t: Slot) -> Slot {
        let Some(l) = self.node(t).left else {
            return t;
        };
        if self.node(l).level != self.node(t).level {
            return t;
        }
        let lr = self.node(l).right;
        self.node_mut(t).left = lr;
        self.node_mut(l).right = Some(t);
        l
    }

    /// Remove two consecutive right horizontal links by rotating left and promoting the
    /// middle node.
    fn split(&mut self, t: Slot) -> Slot {
        let Some(r) = self.node(t).right else {
            return t;
        };
        let Some(rr) = self.node(r).right else {
            return t;
        };
        if self.node(rr).level != self.node(t).level {
            return t;
        }
        let rl = self.node(r).left;
        self.node_mut(t).right = rl;
        let mid = self.node_mut(r);
        mid.left = Some(t);
        mid.level += 1;
        r
    }

    /// Restore the invariants at `t` after a node disappeared somewhere beneath it.
    fn rebalance_after_remove(&mut self, t: Slot) -> Slot {
        let (left, right) = (self.node(t).left, self.node(t).right);
        let should_be = self.level(left).min(self.level(right)) + 1;
        if should_be < self.node(t).level {
            self.node_mut(t).level = should_be;
            if let Some(r) = right
                && should_be < self.node(r).level
            {
                self.node_mut(r).level = should_be;
            }
        }

        let t = self.skew(t);
        if let Some(r) = self.node(t).right {
            let r = self.skew(r);
            self.node_mut(t).right = Some(r);
            if let Some(rr) = self.node(r).right {
                let rr = self.skew(rr);
                self.node_mut(r).right = Some(rr);
            }
        }
        let t = self.split(t);
        if let Some(r) = self.node(t).right {
            let r = self.split(r);
            self.node_mut(t).right = Some(r);
        }
        t
    }

    /// Detach the minimum of the subtree at `t`. Returns the new subtree root and the
    /// detached slot, which stays allocated.
    fn unlink_min(&mut self, t: Slot) -> (Option<Slot>, Slot) {
        match self.node(t).left {
            None => (self.node(t).right, t),
            Some(l) => {
                let (l, min) = self.unlink_min(l);
                self.node_mut(t).left = l;
                (Some(self.rebalance_after_remove(t)), min)
            }
        }
    }

    fn first_slot(&self) -> Option<Slot> {
        let mut cur = self.root?;
        while let Some(l) = self.node(cur).left {
            cur = l;
        }
        Some(cur)
    }

    fn last_slot(&self) -> Option<Slot> {
        let mut cur = self.root?;
        while let Some(r) = self.node(cur).right {
            cur = r;
        }
        Some(cur)
    }

    pub(crate) fn first(&self) -> Option<(&K, &V)> {
        self.first_slot().map(|s| self.entry(s))
    }

    pub(crate) fn last(&self) -> Option<(&K, &V)> {
        self.last_slot().map(|s| self.entry(s))
    }

    fn entry(&self, slot: Slot) -> (&K, &V) {
        let node = self.node(slot);
        (&node.key, &node.value)
    }

    /// Longest root-to-leaf path, counted in edges. Zero for an empty or single-node tree.
    pub(crate) fn depth(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };
        let mut max = 0;
        let mut stack = Vec::from([(root, 0_usize)]);
        while let Some((slot, depth)) = stack.pop() {
            max = max.max(depth);
            let node = self.node(slot);
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        max
    }
}

impl<K, V, C: Comparator<K>> AaTree<K, V, C> {
    /// Insert or overwrite. Returns the previous value when the key was already present;
    /// the stored key is kept and the shape of the tree is untouched in that case.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut replaced = None;
        let root = self.insert_at(self.root, key, value, &mut replaced);
        self.root = Some(root);
        replaced
    }

    fn insert_at(
        &mut self,
        link: Option<Slot>,
        key: K,
        value: V,
        replaced: &mut Option<V>,
    ) -> Slot {
        let Some(t) = link else {
            return self.alloc(key, value);
        };
        match self.cmp.compare(&key, &self.node(t).key) {
            Ordering::Less => {
                let left = self.node(t).left;
                let l = self.insert_at(left, key, value, replaced);
                self.node_mut(t).left = Some(l);
            }
            Ordering::Greater => {
                let right = self.node(t).right;
                let r = self.insert_at(right, key, value, replaced);
                self.node_mut(t).right = Some(r);
            }
            Ordering::Equal => {
                *replaced = Some(mem::replace(&mut self.node_mut(t).value, value));
                return t;
            }
        }
        if replaced.is_some() {
            return t;
        }
        let t = self.skew(t);
        self.split(t)
    }

    pub(crate) fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let mut removed = None;
        self.root = self.remove_at(self.root, key, &mut removed);
        removed
    }

    fn remove_at(
        &mut self,
        link: Option<Slot>,
        key: &K,
        removed: &mut Option<(K, V)>,
    ) -> Option<Slot> {
        let t = link?;
        match self.cmp.compare(key, &self.node(t).key) {
            Ordering::Less => {
                let left = self.node(t).left;
                let l = self.remove_at(left, key, removed);
                self.node_mut(t).left = l;
            }
            Ordering::Greater => {
                let right = self.node(t).right;
                let r = self.remove_at(right, key, removed);
                self.node_mut(t).right = r;
            }
            Ordering::Equal => {
                let node = self.release(t);
                *removed = Some((node.key, node.value));
                // A node without a right child sits at level 1, so it has no left child either.
                let Some(right) = node.right else {
                    return node.left;
                };
                let (right, successor) = self.unlink_min(right);
                let s = self.node_mut(successor);
                s.left = node.left;
                s.right = right;
                s.level = node.level;
                return Some(self.rebalance_after_remove(successor));
            }
        }
        if removed.is_none() {
            return Some(t);
        }
        Some(self.rebalance_after_remove(t))
    }

    fn find(&self, key: &K) -> Option<Slot> {
        let mut cur = self.root;
        while let Some(t) = cur {
            let node = self.node(t);
            cur = match self.cmp.compare(key, &node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(t),
            };
        }
        None
    }

    pub(crate) fn get(&self, key: &K) -> Option<(&K, &V)> {
        self.find(key).map(|s| self.entry(s))
    }

    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let slot = self.find(key)?;
        Some(&mut self.node_mut(slot).value)
    }

    /// Greatest entry below `key`, or at it when `inclusive`.
    pub(crate) fn floor(&self, key: &K, inclusive: bool) -> Option<(&K, &V)> {
        let mut cur = self.root;
        let mut best = None;
        while let Some(t) = cur {
            let node = self.node(t);
            match self.cmp.compare(&node.key, key) {
                Ordering::Less => {
                    best = Some(t);
                    cur = node.right;
                }
                Ordering::Equal if inclusive => return Some(self.entry(t)),
                _ => cur = node.left,
            }
        }
        best.map(|s| self.entry(s))
    }

    /// Least entry above `key`, or at it when `inclusive`.
    pub(crate) fn ceil(&self, key: &K, inclusive: bool) -> Option<(&K, &V)> {
        let mut cur = self.root;
        let mut best = None;
        while let Some(t) = cur {
            let node = self.node(t);
            match self.cmp.compare(&node.key, key) {
                Ordering::Greater => {
                    best = Some(t);
                    cur = node.left;
                }
                Ordering::Equal if inclusive => return Some(self.entry(t)),
                _ => cur = node.right,
            }
        }
        best.map(|s| self.entry(s))
    }
}

#[cfg(test)]
impl<K, V, C: Comparator<K>> AaTree<K, V, C> {
    /// Panics unless every AA invariant and the key order hold.
    pub(crate) fn assert_invariants(&self) {
        let mut count = 0;
        if let Some(root) = self.root {
            self.check_subtree(root, &mut count);
        }
        assert_eq!(count, self.len, "len out of sync with reachable nodes");
        let live = self.nodes.iter().filter(|n| n.is_some()).count();
        assert_eq!(live, self.len, "leaked or double-linked slots");

        let mut prev: Option<&K> = None;
        for (k, _) in self.iter() {
            if let Some(p) = prev {
                assert_eq!(self.cmp.compare(p, k), Ordering::Less, "keys out of order");
            }
            prev = Some(k);
        }
    }

    fn check_subtree(&self, t: Slot, count: &mut usize) {
        *count += 1;
        let node = self.node(t);
        let level = node.level;
        assert!(level >= 1, "levels start at 1");
        if node.left.is_none() && node.right.is_none() {
            assert_eq!(level, 1, "leaf above level 1");
        }
        assert_eq!(self.level(node.left), level - 1, "left child level must drop by one");
        let right_level = self.level(node.right);
        assert!(
            right_level == level || right_level + 1 == level,
            "right child level must equal or drop by one"
        );
        if let Some(r) = node.right {
            assert!(
                self.level(self.node(r).right) < level,
                "two right horizontal links in a row"
            );
        }
        if level > 1 {
            assert!(
                node.left.is_some() && node.right.is_some(),
                "internal node missing a child"
            );
        }
        for child in [node.left, node.right].into_iter().flatten() {
            self.check_subtree(child, count);
        }
    }
}
