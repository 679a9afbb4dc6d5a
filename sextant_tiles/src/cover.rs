// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which tiles a viewport needs.

use kurbo::Rect;
use sextant_ordered::OrderedSet;

use crate::tile::TileIndex;
use crate::wrap::TileOrdering;

/// A set of tiles in which wrapped duplicates are the same element.
pub type TileSet = OrderedSet<TileIndex, TileOrdering>;

/// Tiles at `zoom` whose world bounds intersect `viewport` (world space, unit square).
///
/// Rows are clamped to the world. Columns are not: a viewport extending past the
/// antimeridian yields columns below `0` or at/above `2^zoom`, in row-major order.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "Cell bounds are integral after expand() and bounded by the viewport span at MAX_ZOOM."
)]
pub fn cover(viewport: Rect, zoom: u8) -> impl Iterator<Item = TileIndex> {
    let count = TileIndex::column_count(zoom) as f64;
    let cells = viewport.abs().scale_from_origin(count).expand();
    let rows = cells.y0.max(0.0) as i64..cells.y1.min(count) as i64;
    let columns = cells.x0 as i64..cells.x1 as i64;
    rows.flat_map(move |row| {
        columns
            .clone()
            .map(move |column| TileIndex::new(zoom, row, column))
    })
}

/// The distinct tiles needed to draw `viewport` at `zoom`.
///
/// Columns wrap around the viewport center, so a view wider than the world requests each
/// tile once. Stored tiles carry the column closest to the center, which is where
/// they should be drawn.
pub fn visible_tiles(viewport: Rect, zoom: u8) -> TileSet {
    let ordering = TileOrdering::new(viewport.center());
    let wrap = ordering.wrap_for(zoom);
    let mut set = TileSet::new(ordering);
    set.extend(cover(viewport, zoom).map(|tile| TileIndex {
        column: wrap.normalize(tile.column),
        ..tile
    }));
    #[cfg(feature = "logging")]
    log::debug!(
        "tile cover z{zoom}: {} distinct of {} requested",
        set.len(),
        cover(viewport, zoom).count()
    );
    set
}
