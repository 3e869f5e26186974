// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # lehmer
//!
//! Uniform random permutations of `{0, .., n-1}` built from factorial number
//! system digits (Lehmer codes), including uniform *even* permutations
//! (the alternating group) without rejection sampling.
//!
//! ## Core Types
//!
//! - [`FreeIndexTracker`]: `O(log n)` "take the k-th free index" structure
//! - [`FactorialDigits`]: validated mixed-radix digits, one per position but the last
//! - [`Permutation`]: validated bijection with parity, inverse and apply
//! - [`PermutationSampler`]: owns a [`UniformSource`] and draws permutations
//!
//! ## Operations
//!
//! - [`decode`] / [`decode_by_shift`]: digits to permutation, `O(n log n)` and `O(n^2)`
//! - [`encode`]: permutation to digits, `O(n log n)`
//! - [`generate_random_permutation`]: uniform over all `n!` permutations
//! - [`generate_random_even_permutation`]: uniform over the `n!/2` even permutations
//! - [`shuffle`]: Fisher-Yates baseline
//!
//! ## Example
//!
//! ```rust
//! use lehmer::{decode, decode_by_shift, encode, generate_random_even_permutation};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let p = decode(&[2, 1, 0], 4).expect("Failed to decode");
//! assert_eq!(p.as_slice(), &[2, 1, 0, 3]);
//! assert_eq!(decode_by_shift(&[2, 1, 0], 4).expect("Failed to decode"), p);
//! assert_eq!(encode(p.as_slice()).expect("Failed to encode").as_slice(), &[2, 1, 0]);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let even = generate_random_even_permutation(8, &mut rng).expect("Failed to generate");
//! assert!(even.is_even());
//! ```
//!
//! ## Randomness
//!
//! The source of randomness is always injected. Any [`rand::RngCore`] works;
//! tests can pass a seeded generator or one of the mocks in `test_utils`.
//! Nothing here is suitable for cryptographic use beyond what the injected
//! source provides.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod decode;
mod digits;
mod encode;
mod error;
mod generate;
mod parity;
mod permutation;
mod shuffle;
mod support;
mod tracker;
mod traits;

pub use decode::{decode, decode_by_shift, decode_digits, decode_digits_by_shift};
pub use digits::FactorialDigits;
pub use encode::{encode, encode_permutation};
pub use error::{
    DecodeError, DigitsError, EncodeError, GenerateError, PermutationError, TrackerError,
};
pub use generate::{
    PermutationSampler, generate_random_even_permutation, generate_random_permutation,
    random_digits,
};
pub use parity::Parity;
pub use permutation::Permutation;
pub use shuffle::shuffle;
pub use tracker::FreeIndexTracker;
pub use traits::UniformSource;

#[cfg(any(test, feature = "test_utils"))]
pub use support::test_utils;
