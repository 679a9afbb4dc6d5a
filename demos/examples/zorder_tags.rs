// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pane stacking and draggable tags.
//!
//! Run:
//! - `cargo run -p sextant_demos --example zorder_tags`

use sextant_zorder::ZOrder;

fn main() {
    let mut panes = ZOrder::new();
    panes.insert("heatmap", 0.0);
    panes.insert("lines", 0.0);
    panes.insert("axes", 1.0);
    panes.insert("tooltip", 2.0);

    panes.bring_to_front(&"heatmap");
    println!("top down:");
    for (pane, z) in panes.iter_top_down() {
        println!("  {pane:<8} z={z}");
    }

    // Tags on a gradient axis; a drag snaps between its neighbors.
    let mut tags = ZOrder::new();
    for (name, at) in [("cold", 0.0), ("mild", 0.4), ("hot", 1.0)] {
        tags.insert(name, at);
    }
    let drag_to = 0.7;
    println!(
        "dragging to {drag_to}: between {:?} and {:?}",
        tags.at_or_below(drag_to),
        tags.at_or_above(drag_to)
    );
    tags.set_z_index(&"mild", drag_to);

    match tags.try_z_index(&"warm") {
        Ok(z) => println!("warm at {z}"),
        Err(err) => println!("warm: {err}"),
    }
}
