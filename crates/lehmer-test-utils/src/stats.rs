// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Pearson chi-squared statistic of `counts` against a uniform expectation.
///
/// `categories` is the number of possible outcomes; outcomes never observed
/// are expected to be missing from `counts` and contribute `expected` each.
pub fn chi_squared<'a>(counts: impl IntoIterator<Item = &'a usize>, categories: usize) -> f64 {
    let counts: Vec<usize> = counts.into_iter().copied().collect();
    let samples: usize = counts.iter().sum();
    let expected = samples as f64 / categories as f64;

    let observed: f64 = counts
        .iter()
        .map(|&count| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum();

    let missing = categories.saturating_sub(counts.len()) as f64;
    observed + missing * expected
}

/// Loose acceptance interval for a chi-squared statistic with `df` degrees of
/// freedom: mean `df`, standard deviation `sqrt(2 df)`, `sigmas` either side.
pub fn chi_squared_bounds(df: usize, sigmas: f64) -> (f64, f64) {
    let df = df as f64;
    let spread = sigmas * (2.0 * df).sqrt();
    ((df - spread).max(0.0), df + spread)
}
