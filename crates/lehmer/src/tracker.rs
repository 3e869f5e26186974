// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Left-right free-slot tracker.
//!
//! Keeps the set `{0, .., n-1}` as free slots and removes them by rank
//! ("take the k-th smallest free index") or by value ("take index i, tell me
//! its rank") in `O(log n)`.
//!
//! # Layout
//!
//! The index range is bisected recursively into an implicit balanced binary
//! tree. Every internal node `[lo, hi]` with `mid = lo + (hi - lo) / 2` stores,
//! at `segment_free[mid]`, the number of free slots in its left half
//! `[lo, mid]`. Each index below `n - 1` is the midpoint of exactly one
//! internal node, so the array needs no extra room. Index `n - 1` is only
//! ever a leaf and holds its own free count.
//!
//! Reference: J. Arndt, "Matters Computational", left-right array.

use crate::error::TrackerError;

/// Tracks which of `0..len` are still free.
#[derive(Debug, Clone)]
pub struct FreeIndexTracker {
    len: usize,
    remaining: usize,
    segment_free: Vec<usize>,
    is_free: Vec<bool>,
}

impl FreeIndexTracker {
    /// Creates a tracker with every index in `0..len` free.
    pub fn new(len: usize) -> Self {
        let mut segment_free = vec![0usize; len];

        if len > 0 {
            Self::init_segment(&mut segment_free, 0, len - 1);
            segment_free[len - 1] = 1;
        }

        Self {
            len,
            remaining: len,
            segment_free,
            is_free: vec![true; len],
        }
    }

    fn init_segment(segment_free: &mut [usize], lo: usize, hi: usize) {
        if lo == hi {
            return;
        }

        let mid = lo + (hi - lo) / 2;
        segment_free[mid] = mid - lo + 1;

        Self::init_segment(segment_free, lo, mid);
        Self::init_segment(segment_free, mid + 1, hi);
    }

    /// Number of tracked slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tracker was built over zero slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots still free.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Returns `true` once every slot has been taken.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Returns `true` if `index` is tracked and still free.
    #[inline]
    pub fn is_free(&self, index: usize) -> bool {
        self.is_free.get(index).copied().unwrap_or(false)
    }

    /// Removes and returns the `k`-th smallest free index (zero-based).
    ///
    /// `k` is relative to the slots free at call time, not to the original
    /// range.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Exhausted`] if `k >= self.remaining()`. The
    /// tracker is left untouched in that case.
    pub fn take_free(&mut self, mut k: usize) -> Result<usize, TrackerError> {
        if k >= self.remaining {
            return Err(TrackerError::Exhausted {
                requested: k,
                remaining: self.remaining,
            });
        }

        self.remaining -= 1;

        let mut lo = 0;
        let mut hi = self.len - 1;

        loop {
            let mid = lo + (hi - lo) / 2;
            let left_free = self.segment_free[mid];

            // `mid` is the (k+1)-th free slot of [lo, mid] and it is still free.
            if left_free == k + 1 && self.is_free[mid] {
                self.segment_free[mid] -= 1;
                self.is_free[mid] = false;
                return Ok(mid);
            }

            debug_assert!(lo < hi, "segment counts out of sync at {mid}");

            if left_free > k {
                self.segment_free[mid] -= 1;
                hi = mid;
            } else {
                lo = mid + 1;
                k -= left_free;
            }
        }
    }

    /// Removes `index` and returns its rank among the slots free at call time.
    ///
    /// Inverse of [`take_free`](Self::take_free): if `take_free(k)` would
    /// return `index`, then `take_index(index)` returns `k` and leaves the
    /// tracker in the same state.
    ///
    /// # Errors
    ///
    /// - [`TrackerError::IndexOutOfRange`] if `index >= self.len()`
    /// - [`TrackerError::AlreadyTaken`] if `index` was removed before
    pub fn take_index(&mut self, index: usize) -> Result<usize, TrackerError> {
        if index >= self.len {
            return Err(TrackerError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        if !self.is_free[index] {
            return Err(TrackerError::AlreadyTaken { index });
        }

        self.remaining -= 1;

        let mut rank = 0;
        let mut lo = 0;
        let mut hi = self.len - 1;

        loop {
            let mid = lo + (hi - lo) / 2;

            if index == mid {
                // `index` itself is free, so it is counted in its own left half.
                rank += self.segment_free[mid] - 1;
                self.segment_free[mid] -= 1;
                self.is_free[mid] = false;
                return Ok(rank);
            }

            if index < mid {
                self.segment_free[mid] -= 1;
                hi = mid;
            } else {
                rank += self.segment_free[mid];
                lo = mid + 1;
            }
        }
    }
}
