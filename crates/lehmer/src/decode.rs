// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Factorial digits to permutation.
//!
//! Two decoders with identical output for every valid input:
//!
//! - [`decode`] / [`decode_digits`]: tracker based, `O(n log n)`
//! - [`decode_by_shift`] / [`decode_digits_by_shift`]: block rotation on the
//!   identity, `O(n^2)`, kept as the reference implementation

use crate::digits::FactorialDigits;
use crate::error::DecodeError;
use crate::permutation::Permutation;
use crate::tracker::FreeIndexTracker;

/// Decodes raw `digits` for a permutation of length `n`.
///
/// # Errors
///
/// Returns [`DecodeError::Digits`] if `digits` is not a valid factorial digit
/// sequence for `n`.
pub fn decode(digits: &[usize], n: usize) -> Result<Permutation, DecodeError> {
    let digits = FactorialDigits::new(digits.to_vec(), n)?;
    decode_digits(&digits)
}

/// Decodes validated digits with a [`FreeIndexTracker`].
///
/// Position `k` receives the `digits[k]`-th smallest value not used yet; the
/// last position receives the only value left.
pub fn decode_digits(digits: &FactorialDigits) -> Result<Permutation, DecodeError> {
    let n = digits.len_perm();
    let mut tracker = FreeIndexTracker::new(n);
    let mut values = Vec::with_capacity(n);

    for &digit in digits.as_slice() {
        values.push(tracker.take_free(digit)?);
    }

    if n > 0 {
        values.push(tracker.take_free(0)?);
    }

    Ok(Permutation::from_values_unchecked(values))
}

/// Reference decoder over raw `digits`.
///
/// # Errors
///
/// Returns [`DecodeError::Digits`] if `digits` is not a valid factorial digit
/// sequence for `n`.
pub fn decode_by_shift(digits: &[usize], n: usize) -> Result<Permutation, DecodeError> {
    let digits = FactorialDigits::new(digits.to_vec(), n)?;
    Ok(decode_digits_by_shift(&digits))
}

/// Reference decoder: starts from the identity and, for each position `k`
/// with shift `s`, moves the element at `k + s` to `k`, shifting the elements
/// in between one slot to the right.
pub fn decode_digits_by_shift(digits: &FactorialDigits) -> Permutation {
    let mut values: Vec<usize> = (0..digits.len_perm()).collect();

    for (k, &shift) in digits.as_slice().iter().enumerate() {
        if shift != 0 {
            values[k..=k + shift].rotate_right(1);
        }
    }

    Permutation::from_values_unchecked(values)
}
