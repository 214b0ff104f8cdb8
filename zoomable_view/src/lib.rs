// Copyright 2026 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomable View: geometry and constraint primitives for zoomable image views.
//!
//! This crate provides the headless, allocation‑free math underneath a
//! pinch‑to‑zoom image viewer. It focuses on:
//! - Affine helpers (horizontal scale extraction, rectangle mapping).
//! - Coordinate conversion between view space and image‑relative `0..1` space.
//! - Constraints that keep a zoomed image at or above a minimum scale and
//!   inside its viewport.
//!
//! It does **not** track gestures or own any transform state. Callers are
//! expected to:
//! - Keep their own committed/working transforms (see the `zoomable` crate).
//! - Feed the current transform and bounds into [`ImageMapper`] and
//!   [`Constraints`] whenever they need a mapping or a correction.
//!
//! ## Constraining a proposed transform
//!
//! ```rust
//! use kurbo::{Affine, Point, Rect};
//! use zoomable_view::{Constraints, ScaleLimits};
//!
//! let constraints = Constraints::new(
//!     ScaleLimits::default(),
//!     Rect::new(0.0, 0.0, 100.0, 200.0),
//!     Rect::new(0.0, 0.0, 100.0, 100.0),
//! );
//!
//! // The user pinched the image down to half size: the correction scales it
//! // back up to the minimum and re-centers it.
//! let pivot = Point::new(50.0, 50.0);
//! let proposed = Affine::scale_about(0.5, pivot);
//! let fixed = constraints.apply(proposed, pivot);
//! assert!((fixed.transform.as_coeffs()[0] - 1.0).abs() < 1e-9);
//! assert!(fixed.scale_correction.is_some());
//! ```
//!
//! ## Image‑relative coordinates
//!
//! ```rust
//! use kurbo::{Affine, Point, Rect};
//! use zoomable_view::ImageMapper;
//!
//! let mapper = ImageMapper::new(Rect::new(0.0, 0.0, 200.0, 100.0));
//! let zoomed = Affine::scale(2.0);
//! let rel = mapper.to_image_relative(zoomed, Point::new(200.0, 100.0));
//! assert!((rel.x - 0.5).abs() < 1e-9);
//! assert!((rel.y - 0.5).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - "Scale factor" means the horizontal scale coefficient of the affine
//!   (`as_coeffs()[0]`). With rotation disabled this is the uniform zoom.
//! - Degenerate bounds are a caller precondition. The unchecked paths never
//!   panic on them; the `try_` variants report a [`BoundsError`] instead.
//!
//! This crate is `no_std`.

#![no_std]

mod constraints;
mod error;
pub mod geometry;
mod mapper;

pub use constraints::{
    Constrained, Constraints, ScaleLimits, axis_offset, limit_scale, limit_translation,
};
pub use error::BoundsError;
pub use mapper::ImageMapper;
