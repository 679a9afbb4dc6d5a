// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tile addresses in a web-mercator pyramid.

use kurbo::Rect;

/// Deepest zoom level supported. Column arithmetic stays well inside `i64` up to here.
pub const MAX_ZOOM: u8 = 30;

/// Address of a tile: zoom level, row (y, from the north edge) and column (x, from the
/// antimeridian going east).
///
/// Columns are not required to lie in `0..column_count`: a viewport that crosses the
/// antimeridian produces columns outside that range, which name the same tile as their
/// [wrapped](TileIndex::wrapped) form. Rows are never wrapped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TileIndex {
    /// Zoom level; the world is `2^zoom` tiles wide and tall.
    pub zoom: u8,
    /// Row, `0` at the north edge.
    pub row: i64,
    /// Column, possibly outside `0..2^zoom`.
    pub column: i64,
}

impl TileIndex {
    /// Create a tile address.
    ///
    /// # Panics
    ///
    /// If `zoom` is above [`MAX_ZOOM`].
    #[track_caller]
    pub const fn new(zoom: u8, row: i64, column: i64) -> Self {
        assert!(zoom <= MAX_ZOOM, "zoom above MAX_ZOOM");
        Self { zoom, row, column }
    }

    /// Number of columns (and rows) at `zoom`.
    ///
    /// # Panics
    ///
    /// If `zoom` is above [`MAX_ZOOM`].
    #[track_caller]
    pub const fn column_count(zoom: u8) -> i64 {
        assert!(zoom <= MAX_ZOOM, "zoom above MAX_ZOOM");
        1 << zoom
    }

    /// The same tile with its column normalized into `0..2^zoom`.
    pub const fn wrapped(self) -> Self {
        Self {
            column: self.column.rem_euclid(Self::column_count(self.zoom)),
            ..self
        }
    }

    /// Bounds in world space, where the whole world spans the unit square.
    ///
    /// Unwrapped columns produce bounds left of `0` or right of `1`, which is where the
    /// tile is drawn when the view spans the antimeridian.
    #[allow(
        clippy::cast_precision_loss,
        reason = "Tile coordinates at MAX_ZOOM fit in an f64 mantissa."
    )]
    pub fn world_bounds(self) -> Rect {
        let size = 1.0 / Self::column_count(self.zoom) as f64;
        let x = self.column as f64 * size;
        let y = self.row as f64 * size;
        Rect::new(x, y, x + size, y + size)
    }

    /// The tile one zoom level up that contains this one.
    pub const fn parent(self) -> Option<Self> {
        if self.zoom == 0 {
            return None;
        }
        Some(Self {
            zoom: self.zoom - 1,
            row: self.row.div_euclid(2),
            column: self.column.div_euclid(2),
        })
    }

    /// The four tiles one zoom level down, in row-major order.
    pub const fn children(self) -> [Self; 4] {
        let zoom = self.zoom + 1;
        let (row, column) = (self.row * 2, self.column * 2);
        [
            Self::new(zoom, row, column),
            Self::new(zoom, row, column + 1),
            Self::new(zoom, row + 1, column),
            Self::new(zoom, row + 1, column + 1),
        ]
    }
}
