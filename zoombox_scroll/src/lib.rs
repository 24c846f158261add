// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoombox Scroll: scroll-extent and viewport-fit engine for pan/zoom views.
//!
//! This crate provides small, headless models of the scrollable state implied
//! by a pan/zoom transform over a content rectangle. It focuses on:
//! - A scale + translate transform with independent per-axis scale
//!   ([`ScaleTranslate`]).
//! - Deriving a scrollbar-compatible (extent, viewport, offset) snapshot from
//!   a content rectangle and the current transform
//!   ([`calculate_scrollable`]).
//! - Computing the minimal pan/zoom adjustment that brings a target rectangle
//!   fully into view ([`bring_into_view`]).
//! - A non-reentrant stateful wrapper for hosts that wire the two together
//!   ([`ZoomModel`]).
//!
//! It does **not** own any widget tree, input handling, or rendering. Callers
//! are expected to:
//! - Own the current transform and re-render when it changes.
//! - Supply target rectangles already expressed in the content's transformed
//!   coordinate space.
//! - Feed the derived [`ScrollState`] into their own scrollbar machinery.
//!
//! ## Scroll-extent example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use zoombox_scroll::{ScaleTranslate, calculate_scrollable};
//!
//! let source = Rect::new(0.0, 0.0, 100.0, 100.0);
//!
//! // Zoomed in 2x and panned up-left: half the content is off-screen.
//! let zoomed = ScaleTranslate::new(2.0, 2.0, -50.0, -50.0);
//! let state = calculate_scrollable(source, zoomed);
//! assert_eq!(state.extent, Size::new(200.0, 200.0));
//! assert_eq!(state.offset.x, 50.0);
//! ```
//!
//! ## Bring-into-view example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use zoombox_scroll::{ScaleTranslate, bring_into_view};
//!
//! // Target hangs off the right edge of a 400x300 viewport.
//! let target = Rect::new(450.0, 100.0, 500.0, 150.0);
//! let viewport = Size::new(400.0, 300.0);
//! let fixed = bring_into_view(target, viewport, ScaleTranslate::IDENTITY, true)
//!     .expect("target is out of view");
//! assert_eq!(fixed.translate_x, -110.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod extent;
mod fit;
mod model;
mod transform;

pub use extent::{ScrollState, calculate_scrollable};
pub use fit::{FIT_MARGIN, MIN_FIT_VIEWPORT, bring_into_view, shift_into_view, x_proj, y_proj};
pub use model::{ZoomModel, ZoomModelDebugInfo};
pub use transform::ScaleTranslate;
