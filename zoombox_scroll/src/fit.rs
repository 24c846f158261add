// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use zoombox_interval::Interval;

use crate::ScaleTranslate;

/// Minimum viewport dimension for which a fit is meaningful.
///
/// Below this, [`bring_into_view`] declines: there is no useful way to show
/// a margin-inflated target in a degenerate viewport.
pub const MIN_FIT_VIEWPORT: f64 = 40.0;

/// Margin added around the target on all sides before fitting, so that the
/// brought-in content does not sit flush against the viewport edge.
pub const FIT_MARGIN: f64 = 10.0;

/// Projects a rectangle onto the horizontal axis.
#[must_use]
pub fn x_proj(rect: Rect) -> Interval {
    Interval::new(rect.x0, rect.x1)
}

/// Projects a rectangle onto the vertical axis.
#[must_use]
pub fn y_proj(rect: Rect) -> Interval {
    Interval::new(rect.y0, rect.y1)
}

fn contains_rect(outer: Rect, inner: Rect) -> bool {
    outer.x0 <= inner.x0 && inner.x1 <= outer.x1 && outer.y0 <= inner.y0 && inner.y1 <= outer.y1
}

/// Computes the per-axis shift that moves `rect` inside `viewport`.
///
/// Each axis uses the one-sided [`Interval::subtract`] probe: no protrusion
/// yields a zero component; a protrusion before the viewport start yields a
/// negative component (pull content right/down into view); otherwise the
/// component is positive (pull content left/up).
#[must_use]
pub fn shift_into_view(rect: Rect, viewport: Rect) -> Vec2 {
    let x = match x_proj(rect).subtract(x_proj(viewport)) {
        None => 0.0,
        Some(p) if p.from < viewport.x0 => p.from - viewport.x0,
        Some(p) => p.to - viewport.x1,
    };
    let y = match y_proj(rect).subtract(y_proj(viewport)) {
        None => 0.0,
        Some(p) if p.from < viewport.y0 => p.from - viewport.y0,
        Some(p) => p.to - viewport.y1,
    };
    Vec2::new(x, y)
}

/// Computes the transform that brings `target` fully into view, if one is
/// needed and possible.
///
/// `target` is expressed in the content's transformed coordinate space and is
/// inflated by [`FIT_MARGIN`] before fitting. Returns `None` as a no-op when:
/// - `anchor_present` is false (there is nothing to measure against),
/// - either viewport dimension is below [`MIN_FIT_VIEWPORT`], or
/// - the inflated target is already fully visible.
///
/// When the target fits at the current zoom, only the translation changes.
/// Otherwise the transform is zoomed out by `min(vw/tw, vh/th)` and shifted.
/// The translation adjustment is `-shift` in the unscaled branch and `+shift`
/// in the rescaled branch; the rescale has already relocated the anchor, and
/// callers rely on this exact behavior.
///
/// The call is stateless; the caller owns the current transform and applies
/// the returned one.
#[must_use]
pub fn bring_into_view(
    target: Rect,
    viewport: Size,
    transform: ScaleTranslate,
    anchor_present: bool,
) -> Option<ScaleTranslate> {
    if !anchor_present {
        return None;
    }
    if viewport.width < MIN_FIT_VIEWPORT || viewport.height < MIN_FIT_VIEWPORT {
        return None;
    }

    let target = target.inflate(FIT_MARGIN, FIT_MARGIN);
    let vp = Rect::from_origin_size(Point::ORIGIN, viewport);
    if contains_rect(vp, target) {
        return None;
    }

    if target.width() <= viewport.width && target.height() <= viewport.height {
        let shift = shift_into_view(target, vp);
        Some(ScaleTranslate::new(
            transform.scale_x,
            transform.scale_y,
            transform.translate_x - shift.x,
            transform.translate_y - shift.y,
        ))
    } else {
        let scale = (viewport.width / target.width()).min(viewport.height / target.height());
        let scaled = Rect::new(
            target.x0 * scale,
            target.y0 * scale,
            target.x1 * scale,
            target.y1 * scale,
        );
        let shift = shift_into_view(scaled, vp);
        Some(ScaleTranslate::new(
            transform.scale_x * scale,
            transform.scale_y * scale,
            transform.translate_x + shift.x,
            transform.translate_y + shift.y,
        ))
    }
}
