// Copyright 2026 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap and double‑tap recognition.
//!
//! A tap is a single‑pointer down/up pair that is short and does not travel
//! beyond the touch slop. A double tap is reported on the *down* of a second
//! tap that lands close to the first, shortly after it lifted; the reported
//! point is where the first tap landed.
//!
//! Any additional pointer cancels recognition until every pointer has lifted.

use kurbo::Point;

use crate::touch::{TouchEvent, TouchPhase};

/// Tolerances for [`DoubleTapDetector`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoubleTapConfig {
    /// Maximum duration of a tap, in milliseconds.
    pub tap_timeout_ms: u64,
    /// Maximum travel of a tap, in view units.
    pub touch_slop: f64,
    /// Maximum delay between the first tap lifting and the second landing.
    pub double_tap_timeout_ms: u64,
    /// Maximum distance between the two taps of a double tap.
    pub double_tap_slop: f64,
}

impl Default for DoubleTapConfig {
    fn default() -> Self {
        Self {
            tap_timeout_ms: 300,
            touch_slop: 8.0,
            double_tap_timeout_ms: 300,
            double_tap_slop: 100.0,
        }
    }
}

/// Outcome of feeding one event to a [`DoubleTapDetector`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TapResult {
    /// Nothing recognized.
    None,
    /// A single tap completed at the given point.
    Tap(Point),
    /// A double tap was recognized; the point is where the first tap landed.
    DoubleTap(Point),
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Press {
    pos: Point,
    time_ms: u64,
}

/// Recognizes taps and double taps from touch events.
#[derive(Clone, Debug, Default)]
pub struct DoubleTapDetector {
    config: DoubleTapConfig,
    down: Option<Press>,
    last_tap: Option<Press>,
    // The current press already produced a double tap; its release is not a tap.
    consumed: bool,
    // A multi‑pointer contact disqualified the current sequence.
    cancelled: bool,
}

impl DoubleTapDetector {
    /// Creates a detector with the given tolerances.
    #[must_use]
    pub fn new(config: DoubleTapConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the detector tolerances.
    #[must_use]
    pub fn config(&self) -> DoubleTapConfig {
        self.config
    }

    /// Forgets any pending tap.
    pub fn reset(&mut self) {
        self.down = None;
        self.last_tap = None;
        self.consumed = false;
        self.cancelled = false;
    }

    /// Processes one touch event.
    pub fn on_touch_event(&mut self, event: &TouchEvent) -> TapResult {
        let Some(sample) = event.changed_pointer().copied() else {
            if event.phase == TouchPhase::Cancel {
                self.reset();
            }
            return TapResult::None;
        };
        let press = Press {
            pos: sample.position,
            time_ms: event.time_ms,
        };

        match event.phase {
            TouchPhase::Down => self.on_down(press),
            TouchPhase::Move => {
                if let Some(down) = self.down
                    && (press.pos - down.pos).hypot() > self.config.touch_slop
                {
                    self.down = None;
                }
                TapResult::None
            }
            TouchPhase::Up => self.on_up(press),
            TouchPhase::PointerDown | TouchPhase::PointerUp => {
                self.cancelled = true;
                self.down = None;
                self.last_tap = None;
                TapResult::None
            }
            TouchPhase::Cancel => {
                self.reset();
                TapResult::None
            }
        }
    }

    fn on_down(&mut self, press: Press) -> TapResult {
        self.cancelled = false;
        self.consumed = false;
        self.down = Some(press);

        let Some(first) = self.last_tap.take() else {
            return TapResult::None;
        };
        let in_time =
            press.time_ms.saturating_sub(first.time_ms) <= self.config.double_tap_timeout_ms;
        let close = (press.pos - first.pos).hypot() <= self.config.double_tap_slop;
        if in_time && close {
            self.consumed = true;
            TapResult::DoubleTap(first.pos)
        } else {
            TapResult::None
        }
    }

    fn on_up(&mut self, press: Press) -> TapResult {
        let down = self.down.take();
        if self.cancelled || core::mem::take(&mut self.consumed) {
            self.cancelled = false;
            return TapResult::None;
        }
        let Some(down) = down else {
            return TapResult::None;
        };
        let short = press.time_ms.saturating_sub(down.time_ms) <= self.config.tap_timeout_ms;
        let still = (press.pos - down.pos).hypot() <= self.config.touch_slop;
        if short && still {
            // The double‑tap window is measured from this release, at the
            // position where the tap landed.
            self.last_tap = Some(Press {
                pos: down.pos,
                time_ms: press.time_ms,
            });
            TapResult::Tap(down.pos)
        } else {
            TapResult::None
        }
    }
}
