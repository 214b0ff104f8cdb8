// Copyright 2026 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two‑pointer transform gesture detector.
//!
//! ## Usage
//!
//! 1) Feed every [`TouchEvent`] into [`TransformGestureDetector::on_touch_event`].
//! 2) The detector emits [`GestureEvent::Begin`] when the first pointer lands,
//!    [`GestureEvent::Update`] on every move and [`GestureEvent::End`] when the
//!    last pointer lifts.
//! 3) Whenever the set of pointers changes, the current gesture ends and a new
//!    one begins from the current positions.
//!
//! Only the first two pointers are tracked. With one pointer the delta is a
//! pure translation; with two it also carries scale (distance ratio) and
//! rotation (angle difference), pivoting about the start midpoint.

use alloc::vec::Vec;

use kurbo::Point;
use smallvec::SmallVec;

use crate::source::{GestureEvent, GestureSource, TransformDelta};
use crate::touch::{PointerId, TouchEvent, TouchPhase};

const MAX_POINTERS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq)]
struct TrackedPointer {
    id: PointerId,
    start: Point,
    current: Point,
}

/// Produces cumulative pan/pinch/rotate deltas from up to two pointers.
#[derive(Clone, Debug, Default)]
pub struct TransformGestureDetector {
    pointers: SmallVec<[TrackedPointer; MAX_POINTERS]>,
    in_progress: bool,
}

impl TransformGestureDetector {
    /// Creates an idle detector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    /// Number of tracked pointers.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Computes the cumulative delta from the baseline to the current positions.
    #[must_use]
    pub fn delta(&self) -> TransformDelta {
        match self.pointers.as_slice() {
            [] => TransformDelta::IDENTITY,
            [p] => TransformDelta {
                pivot: p.start,
                translation: p.current - p.start,
                ..TransformDelta::IDENTITY
            },
            [a, b, ..] => {
                let start_mid = a.start.midpoint(b.start);
                let current_mid = a.current.midpoint(b.current);
                let start_span = b.start - a.start;
                let current_span = b.current - a.current;
                let start_len = start_span.hypot();
                let scale = if start_len > 0.0 {
                    current_span.hypot() / start_len
                } else {
                    1.0
                };
                TransformDelta {
                    scale,
                    rotation: current_span.atan2() - start_span.atan2(),
                    pivot: start_mid,
                    translation: current_mid - start_mid,
                }
            }
        }
    }

    fn start_gesture(&mut self, out: &mut Vec<GestureEvent>) {
        if !self.pointers.is_empty() {
            self.in_progress = true;
            out.push(GestureEvent::Begin);
        }
    }

    fn stop_gesture(&mut self, out: &mut Vec<GestureEvent>) {
        if self.in_progress {
            self.in_progress = false;
            out.push(GestureEvent::End);
        }
    }

    fn track(&mut self, event: &TouchEvent) {
        self.pointers = event
            .remaining_pointers()
            .take(MAX_POINTERS)
            .map(|p| TrackedPointer {
                id: p.id,
                start: p.position,
                current: p.position,
            })
            .collect();
    }
}

impl GestureSource for TransformGestureDetector {
    type Event = TouchEvent;

    fn on_touch_event(&mut self, event: &TouchEvent, out: &mut Vec<GestureEvent>) -> bool {
        match event.phase {
            TouchPhase::Move => {
                for tracked in self.pointers.iter_mut() {
                    if let Some(sample) = event.pointer(tracked.id) {
                        tracked.current = sample.position;
                    }
                }
                if self.in_progress {
                    out.push(GestureEvent::Update(self.delta()));
                }
            }
            TouchPhase::Down | TouchPhase::PointerDown | TouchPhase::PointerUp | TouchPhase::Up => {
                self.stop_gesture(out);
                self.track(event);
                self.start_gesture(out);
            }
            TouchPhase::Cancel => {
                self.stop_gesture(out);
                self.pointers.clear();
            }
        }
        true
    }

    fn restart_gesture(&mut self) {
        if !self.in_progress {
            return;
        }
        for tracked in self.pointers.iter_mut() {
            tracked.start = tracked.current;
        }
    }

    fn reset(&mut self) {
        self.pointers.clear();
        self.in_progress = false;
    }
}
