// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`ZOrder`]: items stacked by numeric rank, ties broken by insertion order.

use core::cmp::Ordering;

use sextant_ordered::{Comparator, OrderedMap};

use crate::error::ZOrderError;

/// Position of an item in the stack: its rank, then when it got that rank.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Rank {
    z: f64,
    seq: u64,
}

impl Rank {
    /// Sorts before every item ranked `z`.
    const fn lowest(z: f64) -> Self {
        Self { z, seq: 0 }
    }

    /// Sorts after every item ranked `z`.
    const fn highest(z: f64) -> Self {
        Self { z, seq: u64::MAX }
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct ByRank;

impl Comparator<Rank> for ByRank {
    fn compare(&self, a: &Rank, b: &Rank) -> Ordering {
        a.z.total_cmp(&b.z).then(a.seq.cmp(&b.seq))
    }
}

/// A stack of items ordered bottom to top by an `f64` rank.
///
/// Items with equal ranks stack in the order they received that rank: a later
/// [`insert`](Self::insert) or [`set_z_index`](Self::set_z_index) lands on top of its
/// equals. Works equally for z-indices of overlapping panes and for positions of
/// draggable tags along an axis.
///
/// Every operation is `O(log n)`. Rank lookups on items that are not in the stack are
/// treated as caller bugs: [`z_index`](Self::z_index) and
/// [`set_z_index`](Self::set_z_index) panic, and the `try_` variants report
/// [`ZOrderError::NotFound`].
///
/// ```
/// use sextant_zorder::ZOrder;
///
/// let mut panes = ZOrder::new();
/// panes.insert("plot", 0.0);
/// panes.insert("legend", 1.0);
/// panes.insert("tooltip", 0.0);
///
/// let stack: Vec<_> = panes.iter().map(|(p, _)| *p).collect();
/// assert_eq!(stack, ["plot", "tooltip", "legend"]);
/// assert_eq!(panes.z_index(&"legend"), 1.0);
/// assert_eq!(panes.above(&"plot"), Some(&"tooltip"));
/// ```
#[derive(Clone, Debug)]
pub struct ZOrder<T> {
    by_rank: OrderedMap<Rank, T, ByRank>,
    by_item: OrderedMap<T, Rank>,
    next_seq: u64,
}

impl<T: Ord + Clone> Default for ZOrder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> ZOrder<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            by_rank: OrderedMap::new(ByRank),
            by_item: OrderedMap::natural(),
            next_seq: 1,
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.by_item.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.by_item.is_empty()
    }

    /// Whether `item` is in the stack.
    pub fn contains(&self, item: &T) -> bool {
        self.by_item.contains_key(item)
    }

    /// Drop every item. Insertion order restarts.
    pub fn clear(&mut self) {
        self.by_rank.clear();
        self.by_item.clear();
        self.next_seq = 1;
    }

    fn next_rank(&mut self, z: f64) -> Rank {
        let seq = self.next_seq;
        self.next_seq += 1;
        Rank { z, seq }
    }

    /// Put `item` at rank `z`, on top of any items already ranked `z`.
    ///
    /// Returns the previous rank if an equal item was already present. That item is
    /// replaced by `item`.
    pub fn insert(&mut self, item: T, z: f64) -> Option<f64> {
        let previous = self.by_item.remove(&item).map(|(_, rank)| rank);
        if let Some(old) = previous {
            self.by_rank.remove(&old);
        }
        let rank = self.next_rank(z);
        self.by_rank.set(rank, item.clone());
        self.by_item.set(item, rank);
        #[cfg(feature = "logging")]
        if let Some(old) = previous {
            log::trace!("z-order: rank {} -> {z} (seq {})", old.z, rank.seq);
        }
        previous.map(|r| r.z)
    }

    /// Remove `item`, returning its rank. No-op if absent.
    pub fn remove(&mut self, item: &T) -> Option<f64> {
        let (_, rank) = self.by_item.remove(item)?;
        self.by_rank.remove(&rank);
        Some(rank.z)
    }

    /// Rank of `item`, or [`ZOrderError::NotFound`].
    pub fn try_z_index(&self, item: &T) -> Result<f64, ZOrderError> {
        self.by_item
            .get(item)
            .map(|r| r.z)
            .ok_or(ZOrderError::NotFound)
    }

    /// Rank of `item`.
    ///
    /// # Panics
    ///
    /// If `item` is not in the stack. Check with [`contains`](Self::contains) first when
    /// membership is not already guaranteed.
    #[track_caller]
    pub fn z_index(&self, item: &T) -> f64 {
        match self.try_z_index(item) {
            Ok(z) => z,
            Err(err) => panic!("z_index: {err}"),
        }
    }

    /// Move `item` to rank `z`, on top of any items already ranked `z`, or report
    /// [`ZOrderError::NotFound`].
    ///
    /// The stored item is kept; `item` only selects it.
    pub fn try_set_z_index(&mut self, item: &T, z: f64) -> Result<(), ZOrderError> {
        let (stored, old) = self
            .by_item
            .get_key_value(item)
            .map(|(stored, rank)| (stored.clone(), *rank))
            .ok_or(ZOrderError::NotFound)?;
        self.by_rank.remove(&old);
        let rank = self.next_rank(z);
        self.by_rank.set(rank, stored.clone());
        self.by_item.set(stored, rank);
        #[cfg(feature = "logging")]
        log::trace!("z-order: rank {} -> {z} (seq {})", old.z, rank.seq);
        Ok(())
    }

    /// Move `item` to rank `z`, on top of any items already ranked `z`.
    ///
    /// # Panics
    ///
    /// If `item` is not in the stack.
    #[track_caller]
    pub fn set_z_index(&mut self, item: &T, z: f64) {
        if let Err(err) = self.try_set_z_index(item, z) {
            panic!("set_z_index: {err}");
        }
    }

    /// Raise `item` one unit above the current top. No change if it is already on top.
    ///
    /// # Panics
    ///
    /// If `item` is not in the stack.
    #[track_caller]
    pub fn bring_to_front(&mut self, item: &T) {
        let Some((top, z)) = self.top() else {
            panic!("bring_to_front: {}", ZOrderError::NotFound);
        };
        if top == item {
            return;
        }
        self.set_z_index(item, z + 1.0);
    }

    /// Lower `item` one unit below the current bottom. No change if it is already at the
    /// bottom.
    ///
    /// # Panics
    ///
    /// If `item` is not in the stack.
    #[track_caller]
    pub fn send_to_back(&mut self, item: &T) {
        let Some((bottom, z)) = self.bottom() else {
            panic!("send_to_back: {}", ZOrderError::NotFound);
        };
        if bottom == item {
            return;
        }
        self.set_z_index(item, z - 1.0);
    }

    /// Items with their ranks, bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&T, f64)> + ExactSizeIterator {
        self.by_rank.iter().map(|(r, item)| (item, r.z))
    }

    /// Items with their ranks, top to bottom.
    pub fn iter_top_down(&self) -> impl Iterator<Item = (&T, f64)> {
        self.iter().rev()
    }

    /// Lowest item.
    pub fn bottom(&self) -> Option<(&T, f64)> {
        self.by_rank.first().map(|(r, item)| (item, r.z))
    }

    /// Highest item.
    pub fn top(&self) -> Option<(&T, f64)> {
        self.by_rank.last().map(|(r, item)| (item, r.z))
    }

    /// The item directly above `item`; `None` if `item` is on top or absent.
    pub fn above(&self, item: &T) -> Option<&T> {
        let rank = self.by_item.get(item)?;
        self.by_rank.entry_after(rank).map(|(_, above)| above)
    }

    /// The item directly below `item`; `None` if `item` is at the bottom or absent.
    pub fn below(&self, item: &T) -> Option<&T> {
        let rank = self.by_item.get(item)?;
        self.by_rank.entry_before(rank).map(|(_, below)| below)
    }

    /// The highest item ranked at or below `z`.
    ///
    /// For tags placed along an axis, this is the tag a drag at position `z` snaps back to.
    pub fn at_or_below(&self, z: f64) -> Option<(&T, f64)> {
        self.by_rank
            .entry_at_or_before(&Rank::highest(z))
            .map(|(r, item)| (item, r.z))
    }

    /// The lowest item ranked at or above `z`.
    pub fn at_or_above(&self, z: f64) -> Option<(&T, f64)> {
        self.by_rank
            .entry_at_or_after(&Rank::lowest(z))
            .map(|(r, item)| (item, r.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn stack(z: &ZOrder<&'static str>) -> Vec<&'static str> {
        z.iter().map(|(item, _)| *item).collect()
    }

    #[test]
    fn equal_ranks_stack_in_insertion_order() {
        let mut z = ZOrder::new();
        z.insert("a", 1.0);
        z.insert("b", 1.0);
        z.insert("c", 0.0);
        z.insert("d", 1.0);
        assert_eq!(stack(&z), ["c", "a", "b", "d"]);
        assert_eq!(z.len(), 4);
    }

    #[test]
    fn reinsert_moves_and_reports_previous_rank() {
        let mut z = ZOrder::new();
        z.insert("a", 1.0);
        z.insert("b", 1.0);
        assert_eq!(z.insert("a", 1.0), Some(1.0));
        assert_eq!(stack(&z), ["b", "a"]);
        assert_eq!(z.len(), 2);
    }

    #[test]
    fn set_z_index_reranks_on_top_of_equals() {
        let mut z = ZOrder::new();
        for (item, rank) in [("a", 0.0), ("b", 1.0), ("c", 2.0)] {
            z.insert(item, rank);
        }
        z.set_z_index(&"a", 1.0);
        assert_eq!(stack(&z), ["b", "a", "c"]);
        assert_eq!(z.z_index(&"a"), 1.0);
        assert_eq!(z.above(&"b"), Some(&"a"));
        assert_eq!(z.below(&"c"), Some(&"a"));
        assert_eq!(z.below(&"b"), None);
    }

    #[test]
    fn missing_items_are_reported() {
        let mut z: ZOrder<u32> = ZOrder::new();
        z.insert(1, 0.0);
        assert_eq!(z.try_z_index(&2), Err(ZOrderError::NotFound));
        assert_eq!(z.try_set_z_index(&2, 5.0), Err(ZOrderError::NotFound));
        assert_eq!(z.above(&2), None);
        assert_eq!(z.remove(&2), None);
        assert_eq!(z.len(), 1);
    }

    #[test]
    #[should_panic(expected = "set_z_index: item not found in z-order")]
    fn set_z_index_on_missing_item_panics() {
        let mut z: ZOrder<u32> = ZOrder::new();
        z.set_z_index(&7, 1.0);
    }

    #[test]
    #[should_panic(expected = "z_index: item not found in z-order")]
    fn z_index_on_missing_item_panics() {
        let mut z: ZOrder<u32> = ZOrder::new();
        z.insert(1, 0.0);
        z.remove(&1);
        let _ = z.z_index(&1);
    }

    #[test]
    fn front_and_back() {
        let mut z = ZOrder::new();
        for (item, rank) in [("a", 0.0), ("b", 5.0), ("c", 2.0)] {
            z.insert(item, rank);
        }
        z.bring_to_front(&"a");
        assert_eq!(z.top(), Some((&"a", 6.0)));
        z.bring_to_front(&"a");
        assert_eq!(z.z_index(&"a"), 6.0);
        z.send_to_back(&"b");
        assert_eq!(z.bottom(), Some((&"b", 1.0)));
        assert_eq!(stack(&z), ["b", "c", "a"]);
        let top_down: Vec<_> = z.iter_top_down().map(|(i, _)| *i).collect();
        assert_eq!(top_down, ["a", "c", "b"]);
    }

    #[test]
    fn drag_snapping_between_tags() {
        let mut tags = ZOrder::new();
        for (tag, position) in [("t0", 0.0), ("t1", 10.0), ("t2", 10.0), ("t3", 25.0)] {
            tags.insert(tag, position);
        }
        assert_eq!(tags.at_or_below(12.0), Some((&"t2", 10.0)));
        assert_eq!(tags.at_or_below(10.0), Some((&"t2", 10.0)));
        assert_eq!(tags.at_or_above(10.0), Some((&"t1", 10.0)));
        assert_eq!(tags.at_or_above(11.0), Some((&"t3", 25.0)));
        assert_eq!(tags.at_or_below(-1.0), None);
        assert_eq!(tags.at_or_above(26.0), None);
    }

    /// Equal by `id` only, so two tags can be the same item with different labels.
    #[derive(Copy, Clone, Debug)]
    struct Tag {
        id: u32,
        label: &'static str,
    }

    impl PartialEq for Tag {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl Eq for Tag {}

    impl PartialOrd for Tag {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tag {
        fn cmp(&self, other: &Self) -> Ordering {
            self.id.cmp(&other.id)
        }
    }

    fn labels(z: &ZOrder<Tag>) -> Vec<&'static str> {
        z.iter().map(|(tag, _)| tag.label).collect()
    }

    #[test]
    fn reinsert_replaces_the_stored_item() {
        let mut z = ZOrder::new();
        z.insert(Tag { id: 1, label: "old" }, 0.0);
        z.insert(Tag { id: 2, label: "other" }, 1.0);
        assert_eq!(z.insert(Tag { id: 1, label: "new" }, 2.0), Some(0.0));
        assert_eq!(labels(&z), ["other", "new"]);

        // Re-ranking reads the stored item back, so the new label survives.
        z.set_z_index(&Tag { id: 1, label: "lookup" }, -1.0);
        assert_eq!(labels(&z), ["new", "other"]);
        assert_eq!(z.below(&Tag { id: 2, label: "" }).map(|t| t.label), Some("new"));
    }

    #[test]
    fn set_z_index_moves_both_directions_together() {
        let mut z = ZOrder::new();
        for id in 0..20 {
            z.insert(Tag { id, label: "tag" }, f64::from(id));
        }
        for id in 0..20 {
            z.set_z_index(&Tag { id, label: "key" }, f64::from(20 - id));
        }
        assert_eq!(z.len(), 20);
        assert_eq!(z.iter().len(), 20);
        assert!(labels(&z).iter().all(|l| *l == "tag"));
        for (tag, rank) in z.iter() {
            assert_eq!(z.z_index(tag), rank);
        }
        assert_eq!(z.top().map(|(t, r)| (t.id, r)), Some((0, 20.0)));
        assert_eq!(z.bottom().map(|(t, r)| (t.id, r)), Some((19, 1.0)));
    }

    #[test]
    fn clear_restarts_tiebreak() {
        let mut z = ZOrder::new();
        z.insert("x", 0.0);
        z.clear();
        assert!(z.is_empty());
        z.insert("y", 0.0);
        z.insert("x", 0.0);
        assert_eq!(stack(&z), ["y", "x"]);
    }
}
