// Copyright 2026 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Affine;

/// Receives every change of the active transform, synchronously.
///
/// Implemented for any `FnMut(Affine)`.
pub trait TransformListener {
    /// Called with the new active transform.
    fn on_transform_changed(&mut self, transform: Affine);
}

impl<F: FnMut(Affine)> TransformListener for F {
    fn on_transform_changed(&mut self, transform: Affine) {
        self(transform);
    }
}

/// Host timer used to drive zoom animations.
///
/// When the controller wants another animation frame it calls
/// [`AnimationScheduler::request_tick`]; the host must then call
/// [`ZoomableController::on_animation_tick`](crate::ZoomableController::on_animation_tick)
/// once `after_ms` milliseconds have passed. Implemented for any `FnMut(u64)`.
pub trait AnimationScheduler {
    /// Requests one tick after `after_ms` milliseconds.
    fn request_tick(&mut self, after_ms: u64);
}

impl<F: FnMut(u64)> AnimationScheduler for F {
    fn request_tick(&mut self, after_ms: u64) {
        self(after_ms);
    }
}
