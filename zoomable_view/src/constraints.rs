// Copyright 2026 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::error::BoundsError;
use crate::geometry::{has_area, map_rect, uniform_scale};

/// Minimum and maximum zoom factors for an image view.
///
/// `min` is enforced on every transform the controller produces; `max` is the
/// zoom‑in target for programmatic zooms such as double‑tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    /// Smallest allowed scale factor.
    pub min: f64,
    /// Largest scale factor used as a zoom target.
    pub max: f64,
}

impl ScaleLimits {
    /// Creates scale limits, swapping the values if `min > max`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }
}

impl Default for ScaleLimits {
    /// The image may not shrink below its laid‑out size and zooms in up to 3×.
    fn default() -> Self {
        Self { min: 1.0, max: 3.0 }
    }
}

/// Result of running a transform through [`Constraints`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constrained {
    /// The corrected transform.
    pub transform: Affine,
    /// Extra uniform scale applied to reach the minimum scale, if any.
    pub scale_correction: Option<f64>,
    /// Extra translation applied to keep the image in bounds, if any.
    pub translation_correction: Option<Vec2>,
}

/// Scale limits plus the image and viewport rectangles they apply to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    /// Scale limits.
    pub limits: ScaleLimits,
    /// Untransformed image rectangle inside the viewport.
    pub image_bounds: Rect,
    /// Viewport rectangle.
    pub view_bounds: Rect,
}

impl Constraints {
    /// Creates a constraint set.
    #[must_use]
    pub fn new(limits: ScaleLimits, image_bounds: Rect, view_bounds: Rect) -> Self {
        Self {
            limits,
            image_bounds,
            view_bounds,
        }
    }

    /// Applies the minimum‑scale correction about `pivot`.
    #[must_use]
    pub fn limit_scale(&self, transform: Affine, pivot: Point) -> (Affine, Option<f64>) {
        limit_scale(transform, self.limits.min, pivot)
    }

    /// Applies the in‑bounds translation correction.
    #[must_use]
    pub fn limit_translation(&self, transform: Affine) -> (Affine, Option<Vec2>) {
        limit_translation(transform, self.image_bounds, self.view_bounds)
    }

    /// Applies the minimum‑scale correction about `pivot`, then the bounds
    /// correction.
    #[must_use]
    pub fn apply(&self, transform: Affine, pivot: Point) -> Constrained {
        let (transform, scale_correction) = self.limit_scale(transform, pivot);
        let (transform, translation_correction) = self.limit_translation(transform);
        Constrained {
            transform,
            scale_correction,
            translation_correction,
        }
    }

    /// Reports degenerate image or viewport rectangles.
    pub fn validate(&self) -> Result<(), BoundsError> {
        if !has_area(self.image_bounds) {
            return Err(BoundsError::DegenerateImage);
        }
        if !has_area(self.view_bounds) {
            return Err(BoundsError::DegenerateViewport);
        }
        Ok(())
    }
}

/// Brings the uniform scale of `transform` up to `min_scale` by post‑scaling
/// about `pivot`.
///
/// The scale is measured with [`uniform_scale`], so rotated transforms are
/// held to the same minimum as unrotated ones. Returns the corrected transform
/// and the correction factor that was applied. Transforms already at least
/// `min_scale`, and singular or non‑finite ones that no uniform scale can
/// repair, are returned unchanged.
#[must_use]
pub fn limit_scale(transform: Affine, min_scale: f64, pivot: Point) -> (Affine, Option<f64>) {
    let current = uniform_scale(transform);
    if !current.is_finite() || current <= 0.0 || current >= min_scale {
        return (transform, None);
    }
    let factor = min_scale / current;
    (transform.then_scale_about(factor, pivot), Some(factor))
}

/// Keeps the image inside the viewport.
///
/// `image_bounds` is mapped through `transform`; on each axis an image smaller
/// than the viewport is centered, and a larger one is clamped so that it never
/// reveals space beyond its own edges. The viewport's own coordinate frame has
/// its origin at the view's top‑left corner. Returns the corrected transform
/// and the translation that was added, if any.
#[must_use]
pub fn limit_translation(
    transform: Affine,
    image_bounds: Rect,
    view_bounds: Rect,
) -> (Affine, Option<Vec2>) {
    let bounds = map_rect(transform, image_bounds);
    let left = axis_offset(bounds.x0, bounds.width(), view_bounds.width());
    let top = axis_offset(bounds.y0, bounds.height(), view_bounds.height());
    if left == bounds.x0 && top == bounds.y0 {
        return (transform, None);
    }
    let delta = Vec2::new(left - bounds.x0, top - bounds.y0);
    (transform.then_translate(delta), Some(delta))
}

/// Computes the corrected leading‑edge offset for one axis.
///
/// With `diff = view_dim - image_dim`, a positive `diff` centers the image at
/// `diff / 2`; otherwise `offset` is clamped into `[diff, 0]`.
#[must_use]
pub fn axis_offset(offset: f64, image_dim: f64, view_dim: f64) -> f64 {
    let diff = view_dim - image_dim;
    if diff > 0.0 {
        diff / 2.0
    } else {
        offset.max(diff).min(0.0)
    }
}
