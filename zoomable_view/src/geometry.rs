// Copyright 2026 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small affine and rectangle helpers shared by the mapper, the constraints and
//! the controller.
//!
//! Everything here composes with Kurbo's "then" convention: `a.then_x(..)`
//! applies `a` first and the new operation afterwards, which is the
//! post‑multiplication order used throughout this workspace.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`
use kurbo::{Affine, Point, Rect, Vec2};

/// Returns the horizontal scale coefficient of `transform`.
///
/// For a transform built only from uniform scales and translations this is
/// the zoom factor. Rotation mixes it with the cosine of the angle.
#[must_use]
pub fn scale_factor(transform: Affine) -> f64 {
    transform.as_coeffs()[0]
}

/// Returns the uniform scale of `transform`, `sqrt(|det|)`.
///
/// Unlike [`scale_factor`] this is independent of rotation: a transform made
/// of a rotation, a uniform scale `s` and a translation reports `s` at any
/// angle.
#[must_use]
pub fn uniform_scale(transform: Affine) -> f64 {
    transform.determinant().abs().sqrt()
}

/// Post‑scales `transform` uniformly by `factor` about `pivot`.
#[must_use]
pub fn post_scale_about(transform: Affine, factor: f64, pivot: Point) -> Affine {
    transform.then_scale_about(factor, pivot)
}

/// Post‑rotates `transform` by `radians` about `pivot`.
#[must_use]
pub fn post_rotate_about(transform: Affine, radians: f64, pivot: Point) -> Affine {
    transform.then_rotate_about(radians, pivot)
}

/// Post‑translates `transform` by `delta`.
#[must_use]
pub fn post_translate(transform: Affine, delta: Vec2) -> Affine {
    transform.then_translate(delta)
}

/// Maps `rect` through `transform` and returns the axis‑aligned bounding box.
#[must_use]
pub fn map_rect(transform: Affine, rect: Rect) -> Rect {
    // Transform the four corners and take their bounding box so rotated
    // transforms still produce a sensible rectangle.
    let q0 = transform * Point::new(rect.x0, rect.y0);
    let q1 = transform * Point::new(rect.x1, rect.y0);
    let q2 = transform * Point::new(rect.x0, rect.y1);
    let q3 = transform * Point::new(rect.x1, rect.y1);
    let min_x = q0.x.min(q1.x).min(q2.x).min(q3.x);
    let min_y = q0.y.min(q1.y).min(q2.y).min(q3.y);
    let max_x = q0.x.max(q1.x).max(q2.x).max(q3.x);
    let max_y = q0.y.max(q1.y).max(q2.y).max(q3.y);
    Rect::new(min_x, min_y, max_x, max_y)
}

/// Returns `true` if `rect` has a strictly positive, finite width and height.
#[must_use]
pub fn has_area(rect: Rect) -> bool {
    let (w, h) = (rect.width(), rect.height());
    w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0
}

/// Returns `true` if `transform` can be inverted.
#[must_use]
pub fn is_invertible(transform: Affine) -> bool {
    let det = transform.determinant();
    det.is_finite() && det != 0.0
}
