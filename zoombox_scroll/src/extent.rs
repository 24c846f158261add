// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::ScaleTranslate;

/// Scrollable state derived from a content rectangle and a transform.
///
/// A read-only snapshot: it is recomputed by [`calculate_scrollable`] after
/// every transform change and never independently mutated.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Logical total scrollable size implied by the current pan/zoom.
    pub extent: Size,
    /// Visible window size, independent of zoom.
    pub viewport: Size,
    /// Portion of content shifted above/left of the viewport origin.
    pub offset: Vec2,
}

/// Computes the scrollable extent along one axis.
///
/// `min` and `len` describe the transformed content's projection on the axis;
/// `viewport_len` is the visible window on that axis.
fn axis_extent(viewport_len: f64, min: f64, len: f64) -> f64 {
    if len < viewport_len {
        // Content smaller than the viewport still needs scrollable room for
        // whatever part was pulled outside it.
        let mut out = viewport_len;
        if min < 0.0 {
            out += min.abs();
        } else {
            let translated = len + min;
            if translated > out {
                out = translated;
            }
        }
        out
    } else if len > viewport_len {
        // Zoomed-in case: the content itself is the extent.
        len
    } else {
        // Exactly viewport-sized but possibly shifted.
        len + min.abs()
    }
}

/// Calculates the scrollable state for `source` under `transform`.
///
/// The source rectangle's own (untransformed) size is treated as the visible
/// viewport; the transformed content is measured against it per axis. Only
/// negative (left/top) displacement is reported as `offset`; positive
/// displacement grows the extent instead. This yields a scrollbar-compatible
/// model where dragging a thumb corresponds linearly to panning the
/// transform. Degenerate (negative) source dimensions are treated as zero.
///
/// ```rust
/// use kurbo::{Rect, Size, Vec2};
/// use zoombox_scroll::{ScaleTranslate, calculate_scrollable};
///
/// let state = calculate_scrollable(
///     Rect::new(0.0, 0.0, 100.0, 100.0),
///     ScaleTranslate::IDENTITY,
/// );
/// assert_eq!(state.extent, Size::new(100.0, 100.0));
/// assert_eq!(state.viewport, Size::new(100.0, 100.0));
/// assert_eq!(state.offset, Vec2::ZERO);
/// ```
#[must_use]
pub fn calculate_scrollable(source: Rect, transform: ScaleTranslate) -> ScrollState {
    let bounds = Rect::from_origin_size(
        Point::ORIGIN,
        Size::new(source.width().max(0.0), source.height().max(0.0)),
    );
    let viewport = bounds.size();
    let transformed = transform.map_rect(bounds);

    let extent = Size::new(
        axis_extent(viewport.width, transformed.x0, transformed.width()),
        axis_extent(viewport.height, transformed.y0, transformed.height()),
    );
    let offset = Vec2::new((-transformed.x0).max(0.0), (-transformed.y0).max(0.0));

    ScrollState {
        extent,
        viewport,
        offset,
    }
}
