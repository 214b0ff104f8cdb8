// Copyright 2026 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host‑agnostic touch events.
//!
//! A [`TouchEvent`] is a snapshot of every pointer currently in contact plus
//! the pointer whose state changed. Hosts translate their platform events
//! (Android `MotionEvent`, web `TouchEvent`, winit touches, ...) into this
//! shape before handing them to a detector.

use kurbo::Point;
use smallvec::SmallVec;

/// Identifier of a touch pointer, stable for the lifetime of the contact.
pub type PointerId = u64;

/// What happened to the changed pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    /// The first pointer touched down.
    Down,
    /// An additional pointer touched down while others are in contact.
    PointerDown,
    /// One or more pointers moved.
    Move,
    /// A pointer lifted while others stay in contact.
    PointerUp,
    /// The last pointer lifted.
    Up,
    /// The platform aborted the touch sequence.
    Cancel,
}

/// A single pointer in contact with the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPointer {
    /// Pointer identifier.
    pub id: PointerId,
    /// Position in view coordinates.
    pub position: Point,
}

impl TouchPointer {
    /// Creates a pointer sample.
    #[must_use]
    pub fn new(id: PointerId, position: Point) -> Self {
        Self { id, position }
    }
}

/// A touch sample.
///
/// `pointers` lists every pointer in contact, including the one that is
/// lifting for [`TouchPhase::PointerUp`] and [`TouchPhase::Up`].
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// What happened.
    pub phase: TouchPhase,
    /// The pointer that went down or up. For moves this is informational.
    pub changed: PointerId,
    /// All pointers in contact.
    pub pointers: SmallVec<[TouchPointer; 2]>,
    /// Event timestamp in milliseconds, from a monotonic host clock.
    pub time_ms: u64,
}

impl TouchEvent {
    /// Creates a touch event.
    #[must_use]
    pub fn new(
        phase: TouchPhase,
        changed: PointerId,
        pointers: &[TouchPointer],
        time_ms: u64,
    ) -> Self {
        Self {
            phase,
            changed,
            pointers: SmallVec::from_slice(pointers),
            time_ms,
        }
    }

    /// A single pointer touching down.
    #[must_use]
    pub fn single_down(id: PointerId, position: Point, time_ms: u64) -> Self {
        Self::new(TouchPhase::Down, id, &[TouchPointer::new(id, position)], time_ms)
    }

    /// A single pointer moving.
    #[must_use]
    pub fn single_move(id: PointerId, position: Point, time_ms: u64) -> Self {
        Self::new(TouchPhase::Move, id, &[TouchPointer::new(id, position)], time_ms)
    }

    /// A single pointer lifting.
    #[must_use]
    pub fn single_up(id: PointerId, position: Point, time_ms: u64) -> Self {
        Self::new(TouchPhase::Up, id, &[TouchPointer::new(id, position)], time_ms)
    }

    /// Returns the sample for pointer `id`, if it is in contact.
    #[must_use]
    pub fn pointer(&self, id: PointerId) -> Option<&TouchPointer> {
        self.pointers.iter().find(|p| p.id == id)
    }

    /// Returns the sample for the changed pointer, if present.
    #[must_use]
    pub fn changed_pointer(&self) -> Option<&TouchPointer> {
        self.pointer(self.changed)
    }

    /// Returns `true` if this event lifts the changed pointer.
    #[must_use]
    pub fn is_lift(&self) -> bool {
        matches!(self.phase, TouchPhase::PointerUp | TouchPhase::Up)
    }

    /// Iterates over the pointers that remain in contact after this event.
    pub fn remaining_pointers(&self) -> impl Iterator<Item = &TouchPointer> + '_ {
        let lifted = self.is_lift().then_some(self.changed);
        self.pointers
            .iter()
            .filter(move |p| self.phase != TouchPhase::Cancel && Some(p.id) != lifted)
    }
}
