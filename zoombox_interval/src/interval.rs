// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A closed numeric range `[from, to]`.
///
/// The invariant `from <= to` must hold; inverted intervals are a caller
/// contract violation and are rejected in debug builds. Equality is exact
/// field equality with no epsilon tolerance, and ordering within an
/// [`IntervalSet`](crate::IntervalSet) is by `from` ascending.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Interval {
    /// Inclusive lower bound.
    pub from: f64,
    /// Inclusive upper bound.
    pub to: f64,
}

impl Interval {
    /// Creates a new interval from its inclusive bounds.
    #[must_use]
    pub fn new(from: f64, to: f64) -> Self {
        debug_assert!(from <= to, "inverted interval: `from` exceeds `to`");
        Self { from, to }
    }

    /// Returns the length of the interval (`to - from`).
    #[must_use]
    pub fn length(&self) -> f64 {
        self.to - self.from
    }

    /// Returns `true` if `pt` lies within the closed bounds of this interval.
    #[must_use]
    pub fn contains_point(&self, pt: f64) -> bool {
        self.from <= pt && pt <= self.to
    }

    /// Returns `true` if `other` lies entirely within this interval.
    #[must_use]
    pub fn contains(&self, other: Self) -> bool {
        self.from <= other.from && other.to <= self.to
    }

    /// Returns the intersection of two intervals, if any.
    ///
    /// Touching counts as intersecting: intervals that share only a single
    /// endpoint produce a valid zero-length intersection.
    ///
    /// ```rust
    /// use zoombox_interval::Interval;
    ///
    /// let a = Interval::new(1.0, 5.0);
    /// let b = Interval::new(4.0, 9.0);
    /// assert_eq!(a.intersect(b), Some(Interval::new(4.0, 5.0)));
    /// assert_eq!(Interval::new(1.0, 2.0).intersect(Interval::new(5.0, 9.0)), None);
    /// ```
    #[must_use]
    pub fn intersect(&self, other: Self) -> Option<Self> {
        let from = self.from.max(other.from);
        let to = self.to.min(other.to);
        (from <= to).then(|| Self::new(from, to))
    }

    /// Returns the part of `self` protruding outside `other`, one side only.
    ///
    /// This is a directional "how far outside" probe, **not** a set
    /// difference: when `self` protrudes on both sides of `other`, only the
    /// left protrusion is reported.
    ///
    /// ```rust
    /// use zoombox_interval::Interval;
    ///
    /// // Left protrusion wins even though `[6, 10]` also protrudes.
    /// let a = Interval::new(1.0, 10.0);
    /// let b = Interval::new(3.0, 6.0);
    /// assert_eq!(a.subtract(b), Some(Interval::new(1.0, 3.0)));
    /// ```
    #[must_use]
    pub fn subtract(&self, other: Self) -> Option<Self> {
        if self.from < other.from {
            Some(Self::new(self.from, self.to.min(other.from)))
        } else if self.to > other.to {
            Some(Self::new(self.from.max(other.to), self.to))
        } else {
            None
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2};{:.2}]", self.from, self.to)
    }
}
