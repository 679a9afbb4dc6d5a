// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`ZOrder`](crate::ZOrder).

use thiserror::Error;

/// Misuse of a [`ZOrder`](crate::ZOrder) rank lookup.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ZOrderError {
    /// The item is not in the stack.
    #[error("item not found in z-order")]
    NotFound,
}
