// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// A 2D affine map with independent per-axis scale and translation.
///
/// Maps a point `(px, py)` to `(px * scale_x + translate_x,
/// py * scale_y + translate_y)`. Rotation and skew are intentionally not
/// representable, so mapping a rectangle always yields an axis-aligned
/// rectangle. The type is a plain value; every "update" produces a new one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTranslate {
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
    /// Horizontal translation, applied after scaling.
    pub translate_x: f64,
    /// Vertical translation, applied after scaling.
    pub translate_y: f64,
}

impl ScaleTranslate {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Creates a transform from its scale and translation components.
    #[must_use]
    pub fn new(scale_x: f64, scale_y: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale_x,
            scale_y,
            translate_x,
            translate_y,
        }
    }

    /// Maps a point through the transform.
    #[must_use]
    pub fn map_point(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale_x + self.translate_x,
            pt.y * self.scale_y + self.translate_y,
        )
    }

    /// Maps a rectangle to the axis-aligned bounding box of its image.
    ///
    /// All four corners are transformed and the per-axis min/max taken. With
    /// non-uniform scale this is the exact image; the corner form also keeps
    /// the result well-ordered if a scale factor is negative.
    #[must_use]
    pub fn map_rect(&self, rect: Rect) -> Rect {
        let q0 = self.map_point(rect.origin());
        let q1 = self.map_point(Point::new(rect.x1, rect.y0));
        let q2 = self.map_point(Point::new(rect.x0, rect.y1));
        let q3 = self.map_point(Point::new(rect.x1, rect.y1));
        let min_x = q0.x.min(q1.x).min(q2.x).min(q3.x);
        let min_y = q0.y.min(q1.y).min(q2.y).min(q3.y);
        let max_x = q0.x.max(q1.x).max(q2.x).max(q3.x);
        let max_y = q0.y.max(q1.y).max(q2.y).max(q3.y);
        Rect::new(min_x, min_y, max_x, max_y)
    }
}

impl Default for ScaleTranslate {
    fn default() -> Self {
        Self::IDENTITY
    }
}
