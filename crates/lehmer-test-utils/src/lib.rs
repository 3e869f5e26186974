// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for lehmer crates.
//!
//! Independent, deliberately naive reference code: exhaustive enumeration,
//! inversion counting and a chi-squared statistic, used to check the
//! production decoders and generators against something obviously correct.
//!
//! ## License
//!
//! GPL-3.0-only

mod permutations;
mod stats;

pub use permutations::{
    apply_permutation, factorial, index_permutations, inversion_count, invert_perm,
    is_bijection, lehmer_decode,
};
pub use stats::{chi_squared, chi_squared_bounds};
