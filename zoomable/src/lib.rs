// Copyright 2026 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomable: pinch, pan and double‑tap zoom for image views.
//!
//! [`ZoomableController`] owns the zoom transform of one image inside one
//! view. It consumes gesture events from a [`GestureSource`], composes them
//! onto its committed transform, keeps the result at or above the minimum
//! scale and inside the view, and reports every change to a
//! [`TransformListener`]. Programmatic zooms run as timed animations driven by
//! the host through an [`AnimationScheduler`].
//!
//! The controller is headless: it draws nothing and reads no clock. Hosts
//! supply view and image bounds, translate their platform touch events, pass
//! timestamps, and apply the resulting [`kurbo::Affine`] when drawing.
//!
//! ## Pinch to zoom
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use zoomable::ZoomableController;
//! use zoomable_gesture::touch::{TouchEvent, TouchPhase, TouchPointer};
//! use zoomable_gesture::transform::TransformGestureDetector;
//!
//! let mut zoom = ZoomableController::new(TransformGestureDetector::new());
//! zoom.set_image_bounds(Rect::new(0.0, 0.0, 100.0, 200.0));
//! zoom.set_view_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));
//! zoom.set_enabled(true);
//!
//! let a = TouchPointer::new(0, Point::new(40.0, 50.0));
//! let b = TouchPointer::new(1, Point::new(60.0, 50.0));
//! zoom.on_touch_event(&TouchEvent::new(TouchPhase::Down, 0, &[a], 0));
//! zoom.on_touch_event(&TouchEvent::new(TouchPhase::PointerDown, 1, &[a, b], 10));
//!
//! // Spread the two fingers to twice their distance.
//! let a = TouchPointer::new(0, Point::new(30.0, 50.0));
//! let b = TouchPointer::new(1, Point::new(70.0, 50.0));
//! zoom.on_touch_event(&TouchEvent::new(TouchPhase::Move, 1, &[a, b], 30));
//! assert!((zoom.scale_factor() - 2.0).abs() < 1e-9);
//!
//! // The point under the pinch stays under the pinch.
//! let rel = zoom.map_view_to_image(Point::new(50.0, 50.0));
//! assert!((rel.x - 0.5).abs() < 1e-9 && (rel.y - 0.25).abs() < 1e-9);
//! ```
//!
//! ## Animated zoom
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use zoomable::{AnimationStep, ZoomableController};
//! use zoomable_gesture::transform::TransformGestureDetector;
//!
//! let mut zoom = ZoomableController::new(TransformGestureDetector::new());
//! zoom.set_image_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));
//! zoom.set_view_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));
//! zoom.set_enabled(true);
//!
//! assert!(zoom.zoom_to_view_point(3.0, Point::new(50.0, 50.0), 0));
//! let mut now = 0;
//! while let AnimationStep::Running { next_tick_in_ms, .. } = zoom.on_animation_tick(now) {
//!     now += next_tick_in_ms;
//! }
//! assert!((zoom.scale_factor() - 3.0).abs() < 1e-9);
//! ```
//!
//! ## Model
//!
//! - The *base* transform is committed; the *active* transform is the base
//!   while idle and the in‑progress result during a gesture or animation.
//! - Gesture deltas are cumulative. Each update rebuilds the active transform
//!   from the base: rotate, then scale, about the gesture pivot; enforce the
//!   minimum scale about the pivot; translate; then keep the image in bounds.
//! - When a bounds correction moves the image, the base is rebased to the
//!   corrected transform and the source is asked to restart its baseline, so
//!   the next update does not jump.
//! - Gestures win over animations: the first update of a gesture cancels a
//!   running zoom, keeping the last animated frame.
//! - `scale_factor()` is the horizontal scale coefficient of the affine.
//!   The minimum scale and animations work on `zoom_scale()`, the uniform
//!   scale `sqrt(|det|)`, which stays correct under rotation.
//!
//! ## Features
//!
//! - `std` (default): build with the standard library.
//! - `libm`: `no_std` float math through `libm`.
//! - `double_tap` (default): [`DoubleTapZoom`], toggling between the minimum
//!   and maximum scale.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod animation;
mod callbacks;
mod config;
mod controller;
#[cfg(feature = "double_tap")]
mod double_tap;

pub use animation::{ZoomAnimation, ease_in_out, round_to};
pub use callbacks::{AnimationScheduler, TransformListener};
pub use config::{FeatureFlags, ZoomConfig};
pub use controller::{AnimationStep, ZoomableController};
#[cfg(feature = "double_tap")]
pub use double_tap::DoubleTapZoom;

pub use zoomable_gesture::{GestureEvent, GestureSource, TransformDelta};
pub use zoomable_view::{BoundsError, ImageMapper, ScaleLimits};
