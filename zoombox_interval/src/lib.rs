// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoombox Interval: sorted disjoint interval algebra.
//!
//! This crate maintains ordered collections of non-overlapping closed numeric
//! ranges and provides the small algebra the Zoombox scroll machinery is
//! built on:
//! - Merge-insert into a sorted, disjoint, non-touching set ([`IntervalSet`]).
//! - Intersection and one-sided subtraction of individual [`Interval`]s.
//! - Nearest-free-slot search around an anchor point.
//!
//! It does **not** know anything about rectangles, transforms, or scrolling.
//! Higher layers (for example `zoombox_scroll`) project rectangles onto axes
//! and feed the resulting intervals through this algebra.
//!
//! ## Merge-insert example
//!
//! ```rust
//! use zoombox_interval::{Interval, IntervalSet};
//!
//! let mut set = IntervalSet::new();
//! set.merge_insert(Interval::new(0.0, 3.0));
//! set.merge_insert(Interval::new(10.0, 12.0));
//!
//! // Bridging insert absorbs both neighbors.
//! set.merge_insert(Interval::new(3.0, 10.0));
//! assert_eq!(set.as_slice(), &[Interval::new(0.0, 12.0)]);
//! ```
//!
//! ## Nearest-free-slot example
//!
//! ```rust
//! use zoombox_interval::{Interval, IntervalSet};
//!
//! let mut set = IntervalSet::new();
//! set.merge_insert(Interval::new(8.0, 20.0));
//!
//! // `[10, 15]` collides with `[8, 20]`; the near edge is at 8, so the slot
//! // is moved down to `8 - 5 = 3`.
//! let slot = set.nearest_free(Interval::new(0.0, 100.0), 10.0, 5.0);
//! assert_eq!(slot, Some(3.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod interval;
mod set;

pub use interval::Interval;
pub use set::{IntervalSet, Located};
