// Copyright 2026 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double‑tap zoom on top of a [`ZoomableController`].

use kurbo::Point;
use log::debug;
use zoomable_gesture::GestureSource;
use zoomable_gesture::tap::{DoubleTapConfig, DoubleTapDetector, TapResult};
use zoomable_gesture::touch::{TouchEvent, TouchPhase};

use crate::controller::ZoomableController;

/// Toggles between the minimum and maximum scale on double tap.
///
/// Every touch event goes through here before it reaches the controller. A
/// double tap zooms out to the minimum scale when the image is zoomed in, and
/// to the maximum scale otherwise, about the point that was tapped.
///
/// The press that completes a double tap is withheld from the controller so
/// its own movement cannot cancel the zoom it started. If a second pointer
/// lands during that press, the press is handed back to the controller and a
/// pinch takes over.
#[derive(Clone, Debug, Default)]
pub struct DoubleTapZoom {
    detector: DoubleTapDetector,
    withholding: bool,
}

impl DoubleTapZoom {
    /// Creates a double‑tap zoom with the given tap tolerances.
    #[must_use]
    pub fn new(config: DoubleTapConfig) -> Self {
        Self {
            detector: DoubleTapDetector::new(config),
            withholding: false,
        }
    }

    /// Returns the tap tolerances.
    #[must_use]
    pub fn config(&self) -> DoubleTapConfig {
        self.detector.config()
    }

    /// Returns `true` while the press that triggered a double tap is down.
    #[must_use]
    pub fn is_withholding(&self) -> bool {
        self.withholding
    }

    /// Forgets any pending tap.
    pub fn reset(&mut self) {
        self.detector.reset();
        self.withholding = false;
    }

    /// Processes one touch event for `controller`.
    ///
    /// Returns `false` while the controller is disabled. Otherwise returns
    /// `true` for events consumed by double‑tap handling and the controller's
    /// own result for everything else.
    pub fn on_touch_event<S>(
        &mut self,
        controller: &mut ZoomableController<S>,
        event: &TouchEvent,
    ) -> bool
    where
        S: GestureSource<Event = TouchEvent>,
    {
        if !controller.is_enabled() {
            self.reset();
            return false;
        }

        if let TapResult::DoubleTap(point) = self.detector.on_touch_event(event)
            && self.on_double_tap(controller, point, event.time_ms)
        {
            self.withholding = true;
            return true;
        }

        if self.withholding {
            match event.phase {
                TouchPhase::Move => return true,
                TouchPhase::Up => {
                    self.withholding = false;
                    return true;
                }
                TouchPhase::PointerDown | TouchPhase::Cancel | TouchPhase::Down => {
                    self.withholding = false;
                }
                TouchPhase::PointerUp => {}
            }
        }
        controller.on_touch_event(event)
    }

    /// Runs the double‑tap zoom at `point`, as if a double tap landed there.
    ///
    /// Returns whether an animation was started.
    pub fn on_double_tap<S: GestureSource>(
        &mut self,
        controller: &mut ZoomableController<S>,
        point: Point,
        now_ms: u64,
    ) -> bool {
        let limits = controller.scale_limits();
        let target = if controller.zoom_scale() > limits.min {
            limits.min
        } else {
            limits.max
        };
        debug!("double tap at ({}, {}), zoom to {target}", point.x, point.y);
        controller.zoom_to_view_point(target, point, now_ms)
    }
}
