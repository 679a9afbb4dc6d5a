// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tile requests for views that cross the antimeridian.
//!
//! Run:
//! - `cargo run -p sextant_demos --example tile_wraparound`

use kurbo::Rect;
use sextant_ordered::{Comparator, OrderedMap};
use sextant_tiles::{ColumnWrap, TileIndex, cover, visible_tiles};

fn main() {
    // A view 0.6 worlds wide, centered on the antimeridian.
    let view = Rect::new(-0.3, 0.25, 0.3, 0.5);
    let raw: Vec<_> = cover(view, 3).collect();
    println!("cover z3: {} tiles", raw.len());
    for tile in visible_tiles(view, 3).iter() {
        println!("  {:?} -> draw at {:?}", tile.wrapped(), tile.world_bounds());
    }

    // Wider than the world: duplicates collapse.
    let wide = Rect::new(-1.0, 0.0, 2.0, 1.0);
    println!(
        "z2 over three worlds: {} requested, {} distinct",
        cover(wide, 2).count(),
        visible_tiles(wide, 2).len()
    );

    // Cached tile payloads keyed by (row, column) at one zoom level.
    let wrap = ColumnWrap::for_zoom(2, 0);
    let mut cache = OrderedMap::new(wrap);
    cache.set((1, TileIndex::column_count(2) - 1), "west tile");
    println!("lookup via column 395: {:?}", cache.get(&(1, 395)));
    println!(
        "3 vs -397: {:?}",
        wrap.compare(&(1, 3), &(1, -397))
    );
}
