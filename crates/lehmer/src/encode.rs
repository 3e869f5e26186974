// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::digits::FactorialDigits;
use crate::error::{EncodeError, TrackerError};
use crate::permutation::Permutation;
use crate::tracker::FreeIndexTracker;

/// Lehmer code of `values`, the inverse of [`decode`](crate::decode).
///
/// Digit `k` is the rank of `values[k]` among the values not used by earlier
/// positions, found in `O(log n)` per position.
///
/// # Errors
///
/// Returns [`EncodeError::Permutation`] if `values` is not a bijection on
/// `{0, .., n-1}`.
pub fn encode(values: &[usize]) -> Result<FactorialDigits, EncodeError> {
    let permutation = Permutation::try_from(values.to_vec())?;
    encode_permutation(&permutation)
}

/// Lehmer code of an already validated permutation.
pub fn encode_permutation(permutation: &Permutation) -> Result<FactorialDigits, EncodeError> {
    let n = permutation.len();
    let mut tracker = FreeIndexTracker::new(n);

    let digits = permutation
        .as_slice()
        .iter()
        .take(n.saturating_sub(1))
        .map(|&value| tracker.take_index(value))
        .collect::<Result<Vec<_>, TrackerError>>()?;

    // A rank among the n - k values still free is always below the radix n - k.
    Ok(FactorialDigits::from_digits_unchecked(digits, n))
}
