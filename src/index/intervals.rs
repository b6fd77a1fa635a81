use crate::index::neighbors::NeighborSet;
use serde::{Deserialize, Serialize};
use std::ops::{Bound, RangeInclusive};

/// A run of consecutive cell codes, scanned as the half-open range `[lo, hi)`.
///
/// The last code is stored inclusively so the top code `u64::MAX` (the
/// north-east corner at precision 32) stays representable. A run ending there
/// has no exclusive bound in u64, so [`Interval::hi`] returns `None` for it and
/// the scan runs to the end of the keyspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Interval {
    lo: u64,
    last: u64,
}

impl Interval {
    /// Creates the interval covering `lo..=last`. Returns `None` if `last < lo`.
    pub fn new(lo: u64, last: u64) -> Option<Self> {
        (lo <= last).then_some(Self { lo, last })
    }

    /// Interval holding a single code.
    pub fn single(code: u64) -> Self {
        Self { lo: code, last: code }
    }

    pub fn lo(&self) -> u64 {
        self.lo
    }

    /// Exclusive upper bound, or `None` when the run ends at `u64::MAX`.
    pub fn hi(&self) -> Option<u64> {
        self.last.checked_add(1)
    }

    /// Scan bounds for ordered maps, e.g. `BTreeMap::range(interval.to_bounds())`.
    pub fn to_bounds(&self) -> (Bound<u64>, Bound<u64>) {
        let end = match self.hi() {
            Some(hi) => Bound::Excluded(hi),
            None => Bound::Unbounded,
        };
        (Bound::Included(self.lo), end)
    }

    /// Inclusive upper bound.
    pub fn last(&self) -> u64 {
        self.last
    }

    /// Number of codes covered.
    pub fn count(&self) -> u64 {
        self.last - self.lo + 1
    }

    pub fn contains(&self, code: u64) -> bool {
        (self.lo..=self.last).contains(&code)
    }

    pub fn to_range_inclusive(&self) -> RangeInclusive<u64> {
        self.lo..=self.last
    }

    /// Big-endian storage keys of the first and last code, both inclusive.
    pub fn to_key_range(&self) -> ([u8; 8], [u8; 8]) {
        (self.lo.to_be_bytes(), self.last.to_be_bytes())
    }

    /// Absorbs `code` if it repeats or directly follows the last code.
    fn try_extend(&mut self, code: u64) -> bool {
        if code == self.last {
            return true;
        }
        match self.last.checked_add(1) {
            Some(next) if next == code => {
                self.last = code;
                true
            }
            _ => false,
        }
    }
}

/// Merges the 3x3 neighborhood into the fewest contiguous ranges.
pub fn coalesce(codes: [u64; 9]) -> Vec<Interval> {
    coalesce_codes(&codes)
}

/// Merges any set of codes into sorted, non-overlapping, non-adjacent ranges.
///
/// Duplicates are absorbed, so the ranges cover each distinct code once.
pub fn coalesce_codes(codes: &[u64]) -> Vec<Interval> {
    let mut sorted = codes.to_vec();
    sorted.sort_unstable();

    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut intervals = Vec::new();
    let mut current = Interval::single(first);
    for code in iter {
        if !current.try_extend(code) {
            intervals.push(current);
            current = Interval::single(code);
        }
    }
    intervals.push(current);

    intervals
}

impl NeighborSet {
    /// Scan ranges covering this neighborhood.
    pub fn intervals(&self) -> Vec<Interval> {
        coalesce(self.to_array())
    }
}
