// Copyright 2026 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};

use crate::error::BoundsError;
use crate::geometry::{has_area, is_invertible};

/// Converts between view coordinates and image‑relative coordinates.
///
/// Image‑relative coordinates place the untransformed image rectangle at
/// `[0, 1] × [0, 1]`. Conversions go through the zoom transform supplied by
/// the caller, so the same mapper can be reused across frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageMapper {
    image_bounds: Rect,
}

impl ImageMapper {
    /// Creates a mapper for an image laid out at `image_bounds`.
    #[must_use]
    pub fn new(image_bounds: Rect) -> Self {
        Self { image_bounds }
    }

    /// Returns the image bounds used for normalization.
    #[must_use]
    pub fn image_bounds(&self) -> Rect {
        self.image_bounds
    }

    /// Normalizes an absolute image‑space point into `0..1` coordinates.
    #[must_use]
    pub fn absolute_to_relative(&self, pt: Point) -> Point {
        let b = self.image_bounds;
        Point::new((pt.x - b.x0) / b.width(), (pt.y - b.y0) / b.height())
    }

    /// Expands a `0..1` point into absolute image‑space coordinates.
    #[must_use]
    pub fn relative_to_absolute(&self, pt: Point) -> Point {
        let b = self.image_bounds;
        Point::new(pt.x * b.width() + b.x0, pt.y * b.height() + b.y0)
    }

    /// Maps a view point into image‑relative coordinates under `transform`.
    ///
    /// Degenerate image bounds produce non‑finite coordinates; use
    /// [`ImageMapper::try_to_image_relative`] to detect that case.
    #[must_use]
    pub fn to_image_relative(&self, transform: Affine, view_pt: Point) -> Point {
        self.absolute_to_relative(transform.inverse() * view_pt)
    }

    /// Maps an image‑relative point into view coordinates under `transform`.
    #[must_use]
    pub fn to_view(&self, transform: Affine, relative_pt: Point) -> Point {
        transform * self.relative_to_absolute(relative_pt)
    }

    /// Maps every point in `points` from view into image‑relative coordinates.
    ///
    /// The transform is inverted once for the whole batch.
    pub fn to_image_relative_in_place(&self, transform: Affine, points: &mut [Point]) {
        let inverse = transform.inverse();
        for pt in points.iter_mut() {
            *pt = self.absolute_to_relative(inverse * *pt);
        }
    }

    /// Maps every point in `points` from image‑relative into view coordinates.
    pub fn to_view_in_place(&self, transform: Affine, points: &mut [Point]) {
        for pt in points.iter_mut() {
            *pt = transform * self.relative_to_absolute(*pt);
        }
    }

    /// Checked variant of [`ImageMapper::to_image_relative`].
    pub fn try_to_image_relative(
        &self,
        transform: Affine,
        view_pt: Point,
    ) -> Result<Point, BoundsError> {
        self.check(transform)?;
        Ok(self.to_image_relative(transform, view_pt))
    }

    /// Checked variant of [`ImageMapper::to_view`].
    pub fn try_to_view(&self, transform: Affine, relative_pt: Point) -> Result<Point, BoundsError> {
        self.check(transform)?;
        Ok(self.to_view(transform, relative_pt))
    }

    fn check(&self, transform: Affine) -> Result<(), BoundsError> {
        if !has_area(self.image_bounds) {
            return Err(BoundsError::DegenerateImage);
        }
        if !is_invertible(transform) {
            return Err(BoundsError::NonInvertible);
        }
        Ok(())
    }
}
