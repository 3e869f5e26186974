// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Uniform random permutations and even permutations without rejection.
//!
//! # Algorithm
//!
//! 1. Draw digit `k` uniformly from `[0, n - k)` for `k = 0 .. n-2`
//! 2. (even only) If the digit sum is odd, toggle the last digit
//! 3. Decode with the tracker decoder
//!
//! Step 1 is the factorial-number-system form of a Fisher-Yates choice among
//! the `n - k` remaining candidates. Step 2 is a bijection between odd and even
//! digit sequences that differ only in the last digit, so the result is uniform
//! over the `n!/2` even permutations.
//!
//! Reference: J. Arndt, "Generating Random Permutations", algorithm 7.4.

use tracing::{debug, trace};

use crate::decode::decode_digits;
use crate::digits::FactorialDigits;
use crate::error::{DigitsError, GenerateError};
use crate::permutation::Permutation;
use crate::traits::UniformSource;

/// Draws uniformly random factorial digits for a permutation of length `n`.
///
/// # Errors
///
/// Returns [`GenerateError::Digits`] if `source` yields a value outside the
/// bound it was asked for.
pub fn random_digits<S: UniformSource + ?Sized>(
    n: usize,
    source: &mut S,
) -> Result<FactorialDigits, GenerateError> {
    let digits = (0..n.saturating_sub(1))
        .map(|position| {
            let radix = n - position;
            let digit = source.next_below(radix);
            if digit < radix {
                Ok(digit)
            } else {
                Err(DigitsError::DigitOutOfRange {
                    position,
                    digit,
                    radix,
                })
            }
        })
        .collect::<Result<Vec<_>, DigitsError>>()?;

    Ok(FactorialDigits::new(digits, n)?)
}

/// Uniformly random permutation of `{0, .., n-1}`.
pub fn generate_random_permutation<S: UniformSource + ?Sized>(
    n: usize,
    source: &mut S,
) -> Result<Permutation, GenerateError> {
    let digits = random_digits(n, source)?;
    Ok(decode_digits(&digits)?)
}

/// Uniformly random even permutation of `{0, .., n-1}`.
///
/// For `n < 2` the only permutation is the identity, which is even; it is
/// returned without drawing from `source`.
pub fn generate_random_even_permutation<S: UniformSource + ?Sized>(
    n: usize,
    source: &mut S,
) -> Result<Permutation, GenerateError> {
    if n < 2 {
        debug!(n, "no digit to correct, returning identity");
        return Ok(Permutation::identity(n));
    }

    let mut digits = random_digits(n, source)?;
    let last = digits.as_slice()[n - 2];

    if digits.correct_parity() {
        trace!(n, from = last, to = 1 - last, "flipped last digit for even parity");
    }

    Ok(decode_digits(&digits)?)
}

/// Owns a [`UniformSource`] and hands out permutations drawn from it.
///
/// # Example
///
/// ```rust
/// use lehmer::PermutationSampler;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut sampler = PermutationSampler::new(StdRng::seed_from_u64(7));
///
/// let p = sampler.even_permutation(10).expect("Failed to sample even permutation");
/// assert_eq!(p.len(), 10);
/// assert!(p.is_even());
/// ```
#[derive(Debug, Clone)]
pub struct PermutationSampler<S> {
    source: S,
}

impl<S: UniformSource> PermutationSampler<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// See [`random_digits`].
    pub fn digits(&mut self, n: usize) -> Result<FactorialDigits, GenerateError> {
        random_digits(n, &mut self.source)
    }

    /// See [`generate_random_permutation`].
    pub fn permutation(&mut self, n: usize) -> Result<Permutation, GenerateError> {
        generate_random_permutation(n, &mut self.source)
    }

    /// See [`generate_random_even_permutation`].
    pub fn even_permutation(&mut self, n: usize) -> Result<Permutation, GenerateError> {
        generate_random_even_permutation(n, &mut self.source)
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}
