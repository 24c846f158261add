// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::Interval;

/// Result of locating a target interval within an [`IntervalSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Located {
    /// An existing interval at this index intersects or touches the target.
    ///
    /// When a run of set intervals touches the target, the index refers to
    /// the earliest interval of that run.
    Overlapping(usize),
    /// No existing interval overlaps or touches the target; inserting at
    /// this index preserves the ascending sort order.
    InsertAt(usize),
}

/// An ordered set of pairwise disjoint, non-touching closed intervals.
///
/// The set is sorted ascending by [`Interval::from`] and is mutated only by
/// [`merge_insert`](Self::merge_insert), which coalesces any overlapping or
/// touching intervals into one. Insertion order is irrelevant: the same
/// collection of inserts always yields the same final set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntervalSet {
    intervals: SmallVec<[Interval; 4]>,
}

impl IntervalSet {
    /// Creates a new empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            intervals: SmallVec::new(),
        }
    }

    /// Returns the number of disjoint intervals in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the set contains no intervals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns the intervals as a sorted slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    /// Returns an iterator over the intervals in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Interval> + '_ {
        self.intervals.iter().copied()
    }

    /// Locates `target` within the set by binary search.
    ///
    /// Touching counts as overlapping. Resolving [`Located::Overlapping`]
    /// walks backward to the first interval of a possibly-touching run.
    ///
    /// # Panics
    ///
    /// Panics if the search exhausts its bounds without resolving, which can
    /// only happen when the set's sorted/disjoint invariant is broken.
    /// Continuing from such a state would corrupt further merges, so this is
    /// fatal rather than reportable.
    #[must_use]
    pub fn locate(&self, target: Interval) -> Located {
        let s = &self.intervals;
        if s.is_empty() {
            return Located::InsertAt(0);
        }

        let mut first = 0_usize;
        let mut last = s.len() - 1;
        while first <= last {
            let mid = (first + last) / 2;
            if target.to < s[mid].from {
                // Strictly left of the probe; placed here only if the
                // preceding interval does not touch the target either.
                if mid == 0 {
                    return Located::InsertAt(0);
                }
                if s[mid - 1].to < target.from {
                    return Located::InsertAt(mid);
                }
                last = mid - 1;
            } else if target.from > s[mid].to {
                if mid == last {
                    return Located::InsertAt(mid + 1);
                }
                if target.to < s[mid + 1].from {
                    return Located::InsertAt(mid + 1);
                }
                first = mid + 1;
            } else {
                // Overlaps or touches the probe; back up to the earliest
                // interval of the touching run.
                let mut i = mid;
                while i > 0 && s[i - 1].to >= target.from {
                    i -= 1;
                }
                return Located::Overlapping(i);
            }
        }

        unreachable!("interval set invariant broken: intervals are not sorted and disjoint");
    }

    /// Inserts `target`, coalescing any overlapping or touching intervals.
    ///
    /// Closed-interval semantics: `[0, 5]` and `[5, 8]` merge into `[0, 8]`.
    /// A target fully contained in an existing interval leaves the set
    /// unchanged.
    pub fn merge_insert(&mut self, target: Interval) {
        let index = match self.locate(target) {
            Located::Overlapping(i) => {
                if self.intervals[i].contains(target) {
                    return;
                }
                i
            }
            Located::InsertAt(i) => i,
        };

        // Read-only pass: compute the merged replacement and the range of
        // absorbed intervals, then rebuild with one removal and one insert.
        let mut from = target.from;
        if let Some(iv) = self.intervals.get(index) {
            from = from.min(iv.from);
        }
        let mut to = target.to;
        let mut end = index;
        while end < self.intervals.len() && self.intervals[end].from <= target.to {
            to = to.max(self.intervals[end].to);
            end += 1;
        }

        self.intervals.drain(index..end);
        self.intervals.insert(index, Interval::new(from, to));
    }

    /// Finds the point nearest to `at`, within `bounds`, where a span of
    /// `delta` does not overlap any interval in the set.
    ///
    /// If `[at, at + delta]` is already free, `at` itself is returned.
    /// Otherwise the shorter detour around the blocking interval is tried
    /// first; a candidate is accepted only when it lies within `bounds`.
    /// `delta` must be non-negative.
    #[must_use]
    pub fn nearest_free(&self, bounds: Interval, at: f64, delta: f64) -> Option<f64> {
        match self.locate(Interval::new(at, at + delta)) {
            Located::InsertAt(_) => Some(at),
            Located::Overlapping(i) => {
                let found = self.intervals[i];
                if found.to - at < at - found.from {
                    let up = found.to + delta;
                    if bounds.contains_point(up) {
                        return Some(up);
                    }
                }
                let down = found.from - delta;
                bounds.contains_point(down).then_some(down)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Interval, IntervalSet, Located};

    fn iv(from: f64, to: f64) -> Interval {
        Interval::new(from, to)
    }

    /// Asserts the set is sorted ascending, pairwise disjoint and non-touching.
    fn assert_invariant(set: &IntervalSet) {
        let s = set.as_slice();
        for pair in s.windows(2) {
            assert!(
                pair[0].to < pair[1].from,
                "intervals {} and {} overlap or touch",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn locate_on_empty_set() {
        let set = IntervalSet::new();
        assert_eq!(set.locate(iv(1.0, 2.0)), Located::InsertAt(0));
    }

    #[test]
    fn locate_finds_insert_position_and_overlap() {
        let mut set = IntervalSet::new();
        set.merge_insert(iv(0.0, 1.0));
        set.merge_insert(iv(4.0, 5.0));
        set.merge_insert(iv(8.0, 9.0));

        assert_eq!(set.locate(iv(2.0, 3.0)), Located::InsertAt(1));
        assert_eq!(set.locate(iv(10.0, 11.0)), Located::InsertAt(3));
        assert_eq!(set.locate(iv(4.5, 6.0)), Located::Overlapping(1));
        // Touching counts as overlapping.
        assert_eq!(set.locate(iv(5.0, 6.0)), Located::Overlapping(1));
        assert_eq!(set.locate(iv(3.0, 4.0)), Located::Overlapping(1));
    }

    #[test]
    fn locate_walks_back_to_earliest_of_run() {
        let mut set = IntervalSet::new();
        set.merge_insert(iv(0.0, 1.0));
        set.merge_insert(iv(3.0, 4.0));
        set.merge_insert(iv(6.0, 7.0));
        set.merge_insert(iv(9.0, 10.0));

        // Spans everything from the second interval onward.
        assert_eq!(set.locate(iv(3.5, 9.5)), Located::Overlapping(1));
    }

    #[test]
    fn touching_intervals_coalesce() {
        let mut set = IntervalSet::new();
        set.merge_insert(iv(2.0, 5.0));
        set.merge_insert(iv(5.0, 8.0));
        assert_eq!(set.as_slice(), &[iv(2.0, 8.0)]);
    }

    #[test]
    fn bridging_merge_absorbs_both_neighbors() {
        let mut set = IntervalSet::new();
        set.merge_insert(iv(0.0, 3.0));
        set.merge_insert(iv(10.0, 12.0));
        set.merge_insert(iv(3.0, 10.0));
        assert_eq!(set.as_slice(), &[iv(0.0, 12.0)]);
    }

    #[test]
    fn contained_target_is_a_no_op() {
        let mut set = IntervalSet::new();
        set.merge_insert(iv(0.0, 10.0));
        set.merge_insert(iv(2.0, 3.0));
        assert_eq!(set.as_slice(), &[iv(0.0, 10.0)]);
    }

    #[test]
    fn partial_overlap_extends_either_side() {
        let mut set = IntervalSet::new();
        set.merge_insert(iv(5.0, 10.0));
        set.merge_insert(iv(2.0, 6.0));
        assert_eq!(set.as_slice(), &[iv(2.0, 10.0)]);

        set.merge_insert(iv(9.0, 14.0));
        assert_eq!(set.as_slice(), &[iv(2.0, 14.0)]);
    }

    #[test]
    fn disjoint_inserts_stay_sorted() {
        let mut set = IntervalSet::new();
        set.merge_insert(iv(8.0, 9.0));
        set.merge_insert(iv(0.0, 1.0));
        set.merge_insert(iv(4.0, 5.0));
        assert_eq!(set.as_slice(), &[iv(0.0, 1.0), iv(4.0, 5.0), iv(8.0, 9.0)]);
        assert_invariant(&set);
    }

    #[test]
    fn final_set_is_insertion_order_independent() {
        let bridging = [iv(0.0, 3.0), iv(10.0, 12.0), iv(3.0, 10.0)];
        let disjoint = [iv(0.0, 1.0), iv(4.0, 5.0), iv(2.0, 3.0)];
        let orders: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];

        for order in orders {
            let mut set = IntervalSet::new();
            for &i in &order {
                set.merge_insert(bridging[i]);
            }
            assert_eq!(set.as_slice(), &[iv(0.0, 12.0)], "order {order:?}");
            assert_invariant(&set);

            let mut set = IntervalSet::new();
            for &i in &order {
                set.merge_insert(disjoint[i]);
            }
            assert_eq!(
                set.as_slice(),
                &[iv(0.0, 1.0), iv(2.0, 3.0), iv(4.0, 5.0)],
                "order {order:?}"
            );
            assert_invariant(&set);
        }
    }

    #[test]
    fn nearest_free_returns_anchor_when_unoccupied() {
        let mut set = IntervalSet::new();
        set.merge_insert(iv(50.0, 60.0));
        assert_eq!(set.nearest_free(iv(0.0, 100.0), 10.0, 5.0), Some(10.0));
    }

    #[test]
    fn nearest_free_prefers_shorter_detour() {
        // Near edge of the blocker is on the left: move down to `8 - 5`.
        let mut set = IntervalSet::new();
        set.merge_insert(iv(8.0, 20.0));
        assert_eq!(set.nearest_free(iv(0.0, 100.0), 10.0, 5.0), Some(3.0));

        // Near edge on the right: move up to `20 + 5`.
        let mut set = IntervalSet::new();
        set.merge_insert(iv(0.0, 20.0));
        assert_eq!(set.nearest_free(iv(0.0, 100.0), 18.0, 5.0), Some(25.0));
    }

    #[test]
    fn nearest_free_respects_bounds() {
        // Preferred upward candidate is out of bounds; fall back downward.
        let mut set = IntervalSet::new();
        set.merge_insert(iv(80.0, 98.0));
        assert_eq!(set.nearest_free(iv(0.0, 100.0), 95.0, 5.0), Some(75.0));

        // Both candidates out of bounds.
        let mut set = IntervalSet::new();
        set.merge_insert(iv(0.0, 100.0));
        assert_eq!(set.nearest_free(iv(0.0, 100.0), 50.0, 5.0), None);
    }

    #[test]
    fn iter_and_len_track_contents() {
        let mut set = IntervalSet::new();
        assert!(set.is_empty());
        set.merge_insert(iv(0.0, 1.0));
        set.merge_insert(iv(3.0, 4.0));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().map(|i| i.length()).sum::<f64>(), 2.0);
    }
}
