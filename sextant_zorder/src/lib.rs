// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sextant Z-Order: stacking order for panes, layers and draggable tags.
//!
//! [`ZOrder`] ranks items by an `f64` and breaks ties by the order in which items
//! received their rank, so the most recently raised item among equals is drawn on top.
//! It is built from two [`sextant_ordered`] maps (rank → item and item → rank), which
//! makes every operation `O(log n)` including neighbor queries such as
//! [`ZOrder::above`] and [`ZOrder::at_or_below`].
//!
//! Absence is a value for queries (`Option`), but reading or writing the rank of an item
//! that is not in the stack is a caller bug: [`ZOrder::z_index`] and
//! [`ZOrder::set_z_index`] panic. Use [`ZOrder::try_z_index`] and
//! [`ZOrder::try_set_z_index`] to get a [`ZOrderError`] instead.
//!
//! # Example
//!
//! ```rust
//! use sextant_zorder::ZOrder;
//!
//! // Tags on a color-scale axis, ordered by position.
//! let mut tags = ZOrder::new();
//! tags.insert("low", 0.1);
//! tags.insert("mid", 0.5);
//! tags.insert("high", 0.9);
//!
//! // Dragging to 0.6 sits between "mid" and "high".
//! assert_eq!(tags.at_or_below(0.6), Some((&"mid", 0.5)));
//! assert_eq!(tags.at_or_above(0.6), Some((&"high", 0.9)));
//!
//! tags.set_z_index(&"mid", 0.6);
//! assert_eq!(tags.z_index(&"mid"), 0.6);
//! assert!(tags.try_z_index(&"missing").is_err());
//! ```
//!
//! ## Features
//!
//! - `logging`: emit `log` trace records when items are re-ranked.

#![no_std]

extern crate alloc;

pub mod error;
pub mod order;

pub use error::ZOrderError;
pub use order::ZOrder;
