// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Sign of a permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Even number of transpositions (sign `+1`).
    Even,
    /// Odd number of transpositions (sign `-1`).
    Odd,
}

impl Parity {
    /// Parity of a factorial digit sum, which equals the parity of the
    /// decoded permutation's inversion count.
    #[inline]
    pub fn from_digit_sum(sum: usize) -> Self {
        if sum % 2 == 0 { Self::Even } else { Self::Odd }
    }

    /// Returns the opposite parity.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Self::Even => Self::Odd,
            Self::Odd => Self::Even,
        }
    }

    #[inline]
    pub fn is_even(self) -> bool {
        self == Self::Even
    }
}
