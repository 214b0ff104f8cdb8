// Copyright 2026 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use zoomable_view::ScaleLimits;

/// Which gesture components the controller applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Apply the rotation of two‑pointer gestures.
    pub rotation: bool,
    /// Apply pinch scaling, and allow programmatic zooms.
    pub scale: bool,
    /// Apply panning.
    pub translation: bool,
}

impl Default for FeatureFlags {
    /// Pan and zoom, no rotation.
    fn default() -> Self {
        Self {
            rotation: false,
            scale: true,
            translation: true,
        }
    }
}

/// Tunables of a [`ZoomableController`](crate::ZoomableController).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Minimum scale (enforced) and maximum scale (double‑tap target).
    pub limits: ScaleLimits,
    /// Enabled gesture components.
    pub features: FeatureFlags,
    /// Total length of a programmatic zoom, in milliseconds.
    pub animation_duration_ms: u64,
    /// Delay between animation frames, in milliseconds.
    pub animation_tick_ms: u64,
    /// Decimal places animated scales are rounded to.
    pub scale_precision: i32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            limits: ScaleLimits::default(),
            features: FeatureFlags::default(),
            animation_duration_ms: 500,
            animation_tick_ms: 40,
            scale_precision: 2,
        }
    }
}
