// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};

use crate::{ScaleTranslate, ScrollState, bring_into_view, calculate_scrollable};

/// Stateful wrapper tying the transform to its derived scroll state.
///
/// `ZoomModel` owns the transform currently in force and the [`ScrollState`]
/// snapshot derived from it. Hosts drive it from three directions: direct
/// transform changes (pan/zoom gestures), scrollbar offset changes, and
/// bring-into-view requests. Each mutating entry point is protected by a
/// non-reentrant guard: the host's reaction to a change notification may not
/// re-enter the update path while the first update is still in flight, and
/// such calls are dropped rather than queued. The model is single-threaded;
/// the guard is a plain flag, not a concurrency primitive.
#[derive(Clone, Debug, Default)]
pub struct ZoomModel {
    transform: ScaleTranslate,
    scroll: ScrollState,
    updating: bool,
}

impl ZoomModel {
    /// Creates a model with the identity transform and empty scroll state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the transform currently in force.
    #[must_use]
    pub fn transform(&self) -> ScaleTranslate {
        self.transform
    }

    /// Returns the current scroll-state snapshot.
    ///
    /// Valid after the first [`invalidate`](Self::invalidate) (or any
    /// mutating call) with the host's source bounds.
    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    /// The step applied per line-scroll request.
    #[must_use]
    pub fn scroll_size(&self) -> Size {
        Size::new(1.0, 1.0)
    }

    /// The step applied per page-scroll request.
    #[must_use]
    pub fn page_scroll_size(&self) -> Size {
        Size::new(10.0, 10.0)
    }

    /// Recomputes the scroll state for `source` under the current transform.
    ///
    /// Hosts call this after layout changes that move or resize the content
    /// without touching the transform.
    pub fn invalidate(&mut self, source: Rect) {
        self.scroll = calculate_scrollable(source, self.transform);
    }

    /// Installs a new transform and refreshes the scroll state.
    ///
    /// Returns `false` if the call was dropped because an update is already
    /// in flight.
    pub fn set_transform(&mut self, transform: ScaleTranslate, source: Rect) -> bool {
        if self.updating {
            return false;
        }
        self.updating = true;
        self.transform = transform;
        self.invalidate(source);
        self.updating = false;
        true
    }

    /// Applies a scrollbar offset change by panning the transform.
    ///
    /// The translation moves by the offset delta (`old - new`, per axis);
    /// scales are untouched. Returns `false` if the call was dropped because
    /// an update is already in flight.
    pub fn set_offset(&mut self, offset: Vec2, source: Rect) -> bool {
        if self.updating {
            return false;
        }
        self.updating = true;
        let delta = self.scroll.offset - offset;
        self.transform = ScaleTranslate::new(
            self.transform.scale_x,
            self.transform.scale_y,
            self.transform.translate_x + delta.x,
            self.transform.translate_y + delta.y,
        );
        self.invalidate(source);
        self.updating = false;
        true
    }

    /// Brings `target` into view against the cached viewport.
    ///
    /// `target` is expressed in the content's transformed coordinate space;
    /// `anchor_present` reports whether the host could establish that frame.
    /// Returns `true` only when the transform actually changed. Declined
    /// fits, already-visible targets, and calls dropped by the guard all
    /// leave the model untouched and return `false`.
    pub fn bring_into_view(&mut self, target: Rect, source: Rect, anchor_present: bool) -> bool {
        if self.updating {
            return false;
        }
        self.updating = true;
        let changed = match bring_into_view(target, self.scroll.viewport, self.transform, anchor_present)
        {
            Some(transform) => {
                self.transform = transform;
                self.invalidate(source);
                true
            }
            None => false,
        };
        self.updating = false;
        changed
    }

    /// Snapshot of the current model state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomModelDebugInfo {
        ZoomModelDebugInfo {
            transform: self.transform,
            extent: self.scroll.extent,
            viewport: self.scroll.viewport,
            offset: self.scroll.offset,
            updating: self.updating,
        }
    }
}

/// Debug snapshot of a [`ZoomModel`] state.
#[derive(Clone, Copy, Debug)]
pub struct ZoomModelDebugInfo {
    /// Transform currently in force.
    pub transform: ScaleTranslate,
    /// Logical scrollable extent.
    pub extent: Size,
    /// Visible viewport size.
    pub viewport: Size,
    /// Current scroll offset.
    pub offset: Vec2,
    /// Whether an update is in flight.
    pub updating: bool,
}
