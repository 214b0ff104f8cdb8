// Copyright 2026 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timed scale animation toward a target zoom.

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `cos`, `round` and `powi`
use kurbo::Point;

use crate::config::ZoomConfig;

/// Accelerate/decelerate easing: slow start, fast middle, slow end.
///
/// Maps `0.0` to `0.0` and `1.0` to `1.0`.
#[must_use]
pub fn ease_in_out(t: f64) -> f64 {
    ((t + 1.0) * PI).cos() / 2.0 + 0.5
}

/// Rounds `value` half away from zero to `places` decimal places.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10.0_f64.powi(places);
    (value * factor).round() / factor
}

/// One programmatic zoom from a start scale to a target scale about a pivot.
///
/// The animation is a plain value: [`ZoomAnimation::scale_at`] is a pure
/// function of the session and the current time, so hosts may call it with
/// any clock reading. The controller owns at most one of these at a time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomAnimation {
    start_scale: f64,
    target_scale: f64,
    pivot: Point,
    start_ms: u64,
    duration_ms: u64,
    tick_ms: u64,
    precision: i32,
    last_scale: f64,
}

impl ZoomAnimation {
    /// Creates an animation starting at `start_ms`, timed by `config`.
    #[must_use]
    pub fn new(
        start_scale: f64,
        target_scale: f64,
        pivot: Point,
        start_ms: u64,
        config: &ZoomConfig,
    ) -> Self {
        Self {
            start_scale,
            target_scale,
            pivot,
            start_ms,
            duration_ms: config.animation_duration_ms,
            tick_ms: config.animation_tick_ms,
            precision: config.scale_precision,
            last_scale: start_scale,
        }
    }

    /// Scale at the start of the animation.
    #[must_use]
    pub fn start_scale(&self) -> f64 {
        self.start_scale
    }

    /// Scale the animation ends at, before constraints.
    #[must_use]
    pub fn target_scale(&self) -> f64 {
        self.target_scale
    }

    /// Point held fixed while zooming, in view coordinates.
    #[must_use]
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Timestamp the animation started at.
    #[must_use]
    pub fn start_ms(&self) -> u64 {
        self.start_ms
    }

    /// Delay between frames.
    #[must_use]
    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    /// Scale produced by the most recent [`ZoomAnimation::advance`].
    #[must_use]
    pub fn last_scale(&self) -> f64 {
        self.last_scale
    }

    /// Linear progress in `[0, 1]` at `now_ms`.
    #[must_use]
    pub fn progress(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms) as f64;
        (elapsed / self.duration_ms as f64).min(1.0)
    }

    /// Returns `true` once the full duration has elapsed.
    #[must_use]
    pub fn is_complete(&self, now_ms: u64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Eased, rounded scale at `now_ms`.
    ///
    /// A positive scale never rounds down to zero; it is returned unrounded
    /// instead.
    #[must_use]
    pub fn scale_at(&self, now_ms: u64) -> f64 {
        let t = ease_in_out(self.progress(now_ms));
        let scale = self.start_scale + t * (self.target_scale - self.start_scale);
        let rounded = round_to(scale, self.precision);
        if rounded <= 0.0 && scale > 0.0 {
            scale
        } else {
            rounded
        }
    }

    /// Computes the scale at `now_ms` and records it as the last reported one.
    pub fn advance(&mut self, now_ms: u64) -> f64 {
        self.last_scale = self.scale_at(now_ms);
        self.last_scale
    }
}
