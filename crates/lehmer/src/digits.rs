// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Factorial number system digits (Lehmer code).
//!
//! A permutation of length `n` is described by `n - 1` digits; the digit at
//! position `k` lies in `[0, n - k)` and picks a rank among the values not yet
//! used. The last slot has a single candidate left and needs no digit.

use crate::error::DigitsError;
use crate::parity::Parity;

/// Validated mixed-radix digit sequence for a permutation of length `n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FactorialDigits {
    digits: Vec<usize>,
    n: usize,
}

impl FactorialDigits {
    /// Validates `digits` against the radices of a length-`n` permutation.
    ///
    /// # Errors
    ///
    /// - [`DigitsError::LengthMismatch`] if `digits.len() != n - 1` (`0` for `n = 0`)
    /// - [`DigitsError::DigitOutOfRange`] if any digit is `>= n - position`
    pub fn new(digits: Vec<usize>, n: usize) -> Result<Self, DigitsError> {
        let expected = Self::digit_count(n);

        if digits.len() != expected {
            return Err(DigitsError::LengthMismatch {
                expected,
                got: digits.len(),
            });
        }

        for (position, &digit) in digits.iter().enumerate() {
            let radix = n - position;
            if digit >= radix {
                return Err(DigitsError::DigitOutOfRange {
                    position,
                    digit,
                    radix,
                });
            }
        }

        Ok(Self { digits, n })
    }

    pub(crate) fn from_digits_unchecked(digits: Vec<usize>, n: usize) -> Self {
        debug_assert!(Self::new(digits.clone(), n).is_ok());
        Self { digits, n }
    }

    /// All-zero digits, which decode to the identity.
    pub fn zero(n: usize) -> Self {
        Self {
            digits: vec![0; Self::digit_count(n)],
            n,
        }
    }

    #[inline]
    fn digit_count(n: usize) -> usize {
        n.saturating_sub(1)
    }

    /// Radix of `position`, i.e. the number of candidates left at that step.
    #[inline]
    pub fn radix(&self, position: usize) -> usize {
        self.n - position
    }

    /// Length of the permutation these digits describe.
    #[inline]
    pub fn len_perm(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.digits
    }

    #[inline]
    pub fn into_inner(self) -> Vec<usize> {
        self.digits
    }

    /// Sum of all digits. Equals the inversion count of the decoded permutation.
    pub fn sum(&self) -> usize {
        self.digits.iter().sum()
    }

    /// Parity of the decoded permutation.
    pub fn parity(&self) -> Parity {
        Parity::from_digit_sum(self.sum())
    }

    /// Makes the decoded permutation even by flipping the last digit.
    ///
    /// The last digit has radix 2, so toggling it between `0` and `1` changes
    /// the digit sum by exactly one and keeps every earlier digit intact. Over
    /// uniformly drawn digits this maps odd permutations one-to-one onto even
    /// ones, so the result is uniform over the alternating group.
    ///
    /// Returns `true` if a digit was flipped. Sequences for `n < 2` have no
    /// digit and are left unchanged.
    pub fn correct_parity(&mut self) -> bool {
        if self.parity().is_even() {
            return false;
        }

        match self.digits.last_mut() {
            Some(last) => {
                *last = 1 - *last;
                true
            }
            None => false,
        }
    }

    /// Digits of the permutation with lexicographic index `rank`.
    ///
    /// # Errors
    ///
    /// Returns [`DigitsError::RankOutOfRange`] if `rank >= n!`.
    pub fn from_rank(rank: u128, n: usize) -> Result<Self, DigitsError> {
        let count = Self::digit_count(n);
        let mut digits = vec![0; count];
        let mut rest = rank;

        for position in (0..count).rev() {
            let radix = (n - position) as u128;
            digits[position] = (rest % radix) as usize;
            rest /= radix;
        }

        if rest != 0 {
            return Err(DigitsError::RankOutOfRange { rank, n });
        }

        Ok(Self { digits, n })
    }

    /// Lexicographic index of the permutation these digits describe.
    ///
    /// # Errors
    ///
    /// Returns [`DigitsError::RankOverflow`] if the index does not fit in a `u128`.
    pub fn rank(&self) -> Result<u128, DigitsError> {
        let overflow = DigitsError::RankOverflow { n: self.n };

        self.digits
            .iter()
            .enumerate()
            .try_fold(0u128, |acc, (position, &digit)| {
                acc.checked_mul(self.radix(position) as u128)?
                    .checked_add(digit as u128)
            })
            .ok_or(overflow)
    }
}

impl AsRef<[usize]> for FactorialDigits {
    fn as_ref(&self) -> &[usize] {
        &self.digits
    }
}
