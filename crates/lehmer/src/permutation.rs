// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::Index;

use crate::error::PermutationError;
use crate::parity::Parity;

/// A bijection on `{0, .., n-1}`, stored in one-line notation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    values: Vec<usize>,
}

impl Permutation {
    /// The identity permutation `[0, 1, .., n-1]`.
    pub fn identity(n: usize) -> Self {
        Self {
            values: (0..n).collect(),
        }
    }

    /// Wraps values the caller already knows to be a bijection.
    pub(crate) fn from_values_unchecked(values: Vec<usize>) -> Self {
        debug_assert!(Self::validate(&values).is_ok());
        Self { values }
    }

    fn validate(values: &[usize]) -> Result<(), PermutationError> {
        let len = values.len();
        let mut seen = vec![false; len];

        for (position, &value) in values.iter().enumerate() {
            if value >= len {
                return Err(PermutationError::ValueOutOfRange {
                    position,
                    value,
                    len,
                });
            }

            if seen[value] {
                return Err(PermutationError::DuplicateValue { position, value });
            }

            seen[value] = true;
        }

        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.values
    }

    #[inline]
    pub fn into_vec(self) -> Vec<usize> {
        self.values
    }

    /// Parity via cycle decomposition: a permutation with `c` cycles on `n`
    /// points is a product of `n - c` transpositions.
    pub fn parity(&self) -> Parity {
        let n = self.values.len();
        let mut visited = vec![false; n];
        let mut cycles = 0;

        for start in 0..n {
            if visited[start] {
                continue;
            }

            cycles += 1;
            let mut current = start;
            while !visited[current] {
                visited[current] = true;
                current = self.values[current];
            }
        }

        Parity::from_digit_sum(n - cycles)
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.parity().is_even()
    }

    /// The permutation `q` with `q[p[k]] = k`.
    pub fn inverse(&self) -> Self {
        let mut values = vec![0; self.values.len()];
        for (position, &value) in self.values.iter().enumerate() {
            values[value] = position;
        }
        Self { values }
    }

    /// Reorders `items` so that `out[k] = items[self[k]]`.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError::LengthMismatch`] if `items.len() != self.len()`.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Result<Vec<T>, PermutationError> {
        if items.len() != self.values.len() {
            return Err(PermutationError::LengthMismatch {
                expected: self.values.len(),
                got: items.len(),
            });
        }

        Ok(self.values.iter().map(|&k| items[k].clone()).collect())
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = PermutationError;

    fn try_from(values: Vec<usize>) -> Result<Self, Self::Error> {
        Self::validate(&values)?;
        Ok(Self { values })
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(permutation: Permutation) -> Self {
        permutation.values
    }
}

impl AsRef<[usize]> for Permutation {
    fn as_ref(&self) -> &[usize] {
        &self.values
    }
}

impl Index<usize> for Permutation {
    type Output = usize;

    fn index(&self, index: usize) -> &usize {
        &self.values[index]
    }
}
