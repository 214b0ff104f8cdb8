// Copyright 2026 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Reason a mapping or bounds check could not be performed.
///
/// The default code paths treat these conditions as caller preconditions and
/// never fail; this error is only produced by the checked (`try_`) variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundsError {
    /// The image bounds have zero (or non‑finite) width or height.
    DegenerateImage,
    /// The viewport bounds have zero (or non‑finite) width or height.
    DegenerateViewport,
    /// The transform has a zero determinant and cannot be inverted.
    NonInvertible,
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateImage => f.write_str("image bounds have no area"),
            Self::DegenerateViewport => f.write_str("viewport bounds have no area"),
            Self::NonInvertible => f.write_str("transform is not invertible"),
        }
    }
}

impl core::error::Error for BoundsError {}
