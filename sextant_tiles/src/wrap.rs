// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tile comparators that treat columns modulo the world width.
//!
//! Columns `c` and `c + k·2^zoom` are the same tile. Both comparators here normalize a
//! column into a window of width `2^zoom` centered on a chosen center column before
//! comparing, so every equivalent column collapses onto the representative closest to
//! the center. The collections themselves know nothing about geography; wraparound
//! exists only in these comparators.

use core::cmp::Ordering;

use kurbo::Point;
use sextant_ordered::Comparator;

use crate::tile::TileIndex;

/// Column normalization for a single zoom level.
///
/// As a [`Comparator`] over `(row, column)` cells it orders by row, then by normalized
/// column.
///
/// ```
/// use sextant_ordered::Comparator;
/// use sextant_tiles::ColumnWrap;
///
/// let wrap = ColumnWrap::for_zoom(2, 0);
/// assert_eq!(wrap.normalize(3), -1);
/// assert_eq!(wrap.compare(&(1, 3), &(1, -1)), core::cmp::Ordering::Equal);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColumnWrap {
    column_count: i64,
    center_column: i64,
}

impl ColumnWrap {
    /// Wrap columns at `zoom` around `center_column`.
    ///
    /// The center is pulled in from the ends of `i64` far enough that the whole window
    /// stays representable.
    ///
    /// # Panics
    ///
    /// If `zoom` is above [`MAX_ZOOM`](crate::MAX_ZOOM).
    #[track_caller]
    pub const fn for_zoom(zoom: u8, center_column: i64) -> Self {
        let column_count = TileIndex::column_count(zoom);
        let half = column_count / 2;
        let center_column = if center_column < i64::MIN + half {
            i64::MIN + half
        } else if center_column > i64::MAX - half {
            i64::MAX - half
        } else {
            center_column
        };
        Self {
            column_count,
            center_column,
        }
    }

    /// Number of distinct columns.
    pub const fn column_count(&self) -> i64 {
        self.column_count
    }

    /// The column the window is centered on.
    pub const fn center_column(&self) -> i64 {
        self.center_column
    }

    /// Map `column` into `[center - count/2, center - count/2 + count)`.
    pub const fn normalize(&self, column: i64) -> i64 {
        let count = self.column_count;
        let low = self.center_column - count / 2;
        low + (column.rem_euclid(count) - low.rem_euclid(count)).rem_euclid(count)
    }

    /// Order two `(row, column)` cells: row first, then normalized column.
    pub fn compare_cells(&self, a: (i64, i64), b: (i64, i64)) -> Ordering {
        a.0.cmp(&b.0)
            .then_with(|| self.normalize(a.1).cmp(&self.normalize(b.1)))
    }
}

impl Comparator<(i64, i64)> for ColumnWrap {
    fn compare(&self, a: &(i64, i64), b: &(i64, i64)) -> Ordering {
        self.compare_cells(*a, *b)
    }
}

/// Comparator over [`TileIndex`] for every zoom level at once.
///
/// Orders by zoom, then row, then column normalized around the column that contains
/// `center` at that zoom. `center` is in world space (the world spans the unit square),
/// typically the center of the viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TileOrdering {
    center: Point,
}

impl Default for TileOrdering {
    fn default() -> Self {
        Self::new(Point::new(0.5, 0.5))
    }
}

impl TileOrdering {
    /// Wrap columns around the tile containing `center`.
    pub const fn new(center: Point) -> Self {
        Self { center }
    }

    /// The world-space center this ordering wraps around.
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Column normalization used for tiles at `zoom`.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        reason = "Column counts up to MAX_ZOOM are exact in f64 and the floored column fits i64."
    )]
    pub fn wrap_for(&self, zoom: u8) -> ColumnWrap {
        let count = TileIndex::column_count(zoom) as f64;
        let center_column = Point::new(self.center.x * count, 0.0).floor().x as i64;
        ColumnWrap::for_zoom(zoom, center_column)
    }
}

impl Comparator<TileIndex> for TileOrdering {
    fn compare(&self, a: &TileIndex, b: &TileIndex) -> Ordering {
        a.zoom.cmp(&b.zoom).then_with(|| {
            self.wrap_for(a.zoom)
                .compare_cells((a.row, a.column), (b.row, b.column))
        })
    }
}
