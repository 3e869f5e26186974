// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rand::{Rng, RngCore};

/// Source of uniformly distributed integers.
///
/// Every [`RngCore`] is a `UniformSource`, so seeded generators such as
/// `StdRng::seed_from_u64(..)` can be injected directly. The source is not
/// synchronized; callers running generators on several threads give each
/// thread its own source.
pub trait UniformSource {
    /// Returns a uniform integer in `[0, bound)`.
    ///
    /// Callers always pass `bound >= 1`. Implementations that return a value
    /// `>= bound` are rejected by the generators with an error.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<R: RngCore + ?Sized> UniformSource for R {
    #[inline]
    fn next_below(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}
