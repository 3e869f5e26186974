// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::{DigitsError, GenerateError};
use crate::traits::UniformSource;

/// Shuffles `items` in place with the Durstenfeld variant of Fisher-Yates.
///
/// Baseline for comparison with the digit-based generators; they do not use it.
///
/// # Errors
///
/// Returns [`GenerateError::Digits`] if `source` yields a value outside the
/// bound it was asked for. `items` may be partially shuffled in that case.
pub fn shuffle<T, S: UniformSource + ?Sized>(
    items: &mut [T],
    source: &mut S,
) -> Result<(), GenerateError> {
    for i in (1..items.len()).rev() {
        let j = source.next_below(i + 1);
        if j > i {
            return Err(DigitsError::DigitOutOfRange {
                position: i,
                digit: j,
                radix: i + 1,
            }
            .into());
        }
        items.swap(i, j);
    }

    Ok(())
}
