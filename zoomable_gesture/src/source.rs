// Copyright 2026 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between raw input and a zoom controller.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

/// Cumulative transform reported by a gesture source since the gesture
/// (re)started.
///
/// Deltas are cumulative, not incremental: each update describes the whole
/// motion from the current baseline, so a consumer rebuilds its transform
/// from its committed state on every update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformDelta {
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in radians.
    pub rotation: f64,
    /// Point held fixed by scale and rotation, in view coordinates.
    pub pivot: Point,
    /// Translation in view coordinates.
    pub translation: Vec2,
}

impl TransformDelta {
    /// A delta that changes nothing.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation: 0.0,
        pivot: Point::ZERO,
        translation: Vec2::ZERO,
    };

    /// A pure scale about `pivot`.
    #[must_use]
    pub fn scale_about(scale: f64, pivot: Point) -> Self {
        Self {
            scale,
            pivot,
            ..Self::IDENTITY
        }
    }

    /// A pure translation.
    #[must_use]
    pub fn translate(translation: Vec2) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }
}

impl Default for TransformDelta {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Session boundaries and updates emitted by a [`GestureSource`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// A gesture started.
    Begin,
    /// The gesture moved; carries the cumulative delta.
    Update(TransformDelta),
    /// The gesture ended.
    End,
}

/// Something that turns raw input events into gesture events.
///
/// Implementations push every gesture event caused by `event` into `out`, in
/// order, and return whether the event was consumed.
pub trait GestureSource {
    /// Raw input event type.
    type Event;

    /// Processes one raw event.
    fn on_touch_event(&mut self, event: &Self::Event, out: &mut Vec<GestureEvent>) -> bool;

    /// Moves the delta baseline to the current input state.
    ///
    /// Called by the consumer after it corrected the transform, so that the
    /// next delta is measured from the corrected position.
    fn restart_gesture(&mut self);

    /// Drops all tracked state without emitting events.
    fn reset(&mut self);
}
