// Copyright 2026 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomable Gesture: touch gesture sources for zoomable views.
//!
//! This crate turns raw multi‑touch samples into the higher level signals a
//! zoom controller consumes. Each module handles one interaction pattern:
//!
//! - [`touch`]: A minimal, host‑agnostic touch event model
//! - [`source`]: The [`GestureSource`] seam plus the begin/update/end events it emits
//! - [`transform`]: A two‑pointer detector producing pan/pinch/rotate deltas
//! - [`tap`]: Tap and double‑tap recognition with spatial/temporal tolerance
//!
//! ## Design Philosophy
//!
//! The detectors are small state machines fed with pre‑translated touch
//! events. They know nothing about the image being zoomed; a controller (see
//! the `zoomable` crate) composes their output onto its own transform. Hosts
//! with a platform gesture recognizer can skip [`transform`] entirely and
//! implement [`GestureSource`] for it instead.
//!
//! ### Transform Gestures
//!
//! ```rust
//! # #[cfg(feature = "transform")]
//! # fn example() {
//! use kurbo::Point;
//! use zoomable_gesture::{GestureEvent, GestureSource};
//! use zoomable_gesture::touch::{TouchEvent, TouchPhase, TouchPointer};
//! use zoomable_gesture::transform::TransformGestureDetector;
//!
//! let mut detector = TransformGestureDetector::new();
//! let mut out = Vec::new();
//!
//! let a = TouchPointer::new(0, Point::new(40.0, 50.0));
//! let b = TouchPointer::new(1, Point::new(60.0, 50.0));
//! detector.on_touch_event(&TouchEvent::new(TouchPhase::Down, 0, &[a], 0), &mut out);
//! detector.on_touch_event(&TouchEvent::new(TouchPhase::PointerDown, 1, &[a, b], 5), &mut out);
//!
//! // Spread the fingers to twice their distance.
//! let a = TouchPointer::new(0, Point::new(30.0, 50.0));
//! let b = TouchPointer::new(1, Point::new(70.0, 50.0));
//! out.clear();
//! detector.on_touch_event(&TouchEvent::new(TouchPhase::Move, 1, &[a, b], 20), &mut out);
//! let GestureEvent::Update(delta) = out[0] else { unreachable!() };
//! assert!((delta.scale - 2.0).abs() < 1e-9);
//! # }
//! ```
//!
//! ### Double Taps
//!
//! ```rust
//! # #[cfg(feature = "tap")]
//! # fn example() {
//! use kurbo::Point;
//! use zoomable_gesture::tap::{DoubleTapDetector, TapResult};
//! use zoomable_gesture::touch::TouchEvent;
//!
//! let mut taps = DoubleTapDetector::default();
//! let p = Point::new(50.0, 50.0);
//! taps.on_touch_event(&TouchEvent::single_down(0, p, 1000));
//! assert_eq!(taps.on_touch_event(&TouchEvent::single_up(0, p, 1080)), TapResult::Tap(p));
//! assert_eq!(taps.on_touch_event(&TouchEvent::single_down(0, p, 1200)), TapResult::DoubleTap(p));
//! # }
//! ```
//!
//! ## Features
//!
//! - `transform`: Enable the reference two‑pointer [`transform::TransformGestureDetector`]
//! - `tap`: Enable [`tap::DoubleTapDetector`]
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod source;
#[cfg(feature = "tap")]
pub mod tap;
pub mod touch;
#[cfg(feature = "transform")]
pub mod transform;

pub use source::{GestureEvent, GestureSource, TransformDelta};
