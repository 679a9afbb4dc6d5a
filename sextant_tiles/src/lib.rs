// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sextant Tiles: ordering and coverage of web-mercator tiles across the antimeridian.
//!
//! - [`TileIndex`] addresses a tile by zoom, row and (possibly unwrapped) column.
//! - [`ColumnWrap`] and [`TileOrdering`] are comparators for
//!   [`sextant_ordered`] collections that treat columns modulo `2^zoom` as equal,
//!   normalizing around a center column.
//! - [`cover`] and [`visible_tiles`] turn a world-space viewport ([`kurbo::Rect`]) into
//!   the tiles it needs.
//!
//! World space is the unit square: x grows east from the antimeridian, y grows south
//! from the north edge.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Rect;
//! use sextant_tiles::{TileIndex, visible_tiles};
//!
//! // A view straddling the antimeridian.
//! let tiles = visible_tiles(Rect::new(-0.3, 0.0, 0.3, 0.2), 2);
//! assert_eq!(tiles.len(), 4);
//! // Column 3 and column -1 are the same tile.
//! assert!(tiles.contains(&TileIndex::new(2, 0, 3)));
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo for float math.
//! - `logging`: emit `log` records for tile cover computation.

#![no_std]

extern crate alloc;

pub mod cover;
pub mod tile;
pub mod wrap;

pub use cover::{TileSet, cover, visible_tiles};
pub use tile::{MAX_ZOOM, TileIndex};
pub use wrap::{ColumnWrap, TileOrdering};
