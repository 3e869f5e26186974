// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use lehmer_test_utils::is_bijection;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{DigitsError, GenerateError};
use crate::generate::{
    PermutationSampler, generate_random_even_permutation, generate_random_permutation,
    random_digits,
};
use crate::support::test_utils::{
    MockUniformSource, MockUniformSourceBehaviour, ScriptedUniformSource,
};

#[test]
fn test_random_digits_requests_decreasing_radices() {
    let mut source = ScriptedUniformSource::new([2, 1, 0]);

    let digits = random_digits(4, &mut source).expect("Failed to random_digits()");

    assert_eq!(digits.as_slice(), &[2, 1, 0]);
    assert_eq!(source.bounds(), &[4, 3, 2]);
    assert_eq!(source.pending(), 0);
}

#[test]
fn test_random_digits_rejects_out_of_range_draw() {
    let mut source = ScriptedUniformSource::new([1, 3]);

    assert_eq!(
        random_digits(4, &mut source),
        Err(GenerateError::Digits(DigitsError::DigitOutOfRange {
            position: 1,
            digit: 3,
            radix: 3
        }))
    );
}

#[test]
fn test_generate_random_permutation_decodes_drawn_digits() {
    let mut source = ScriptedUniformSource::new([2, 1, 0]);

    let p = generate_random_permutation(4, &mut source).expect("Failed to generate");

    assert_eq!(p.as_slice(), &[2, 1, 0, 3]);
}

#[test]
fn test_generate_random_even_permutation_corrects_odd_draw() {
    // Digit sum 3 is odd: the last digit flips to 1, giving [2, 1, 1].
    let mut source = ScriptedUniformSource::new([2, 1, 0]);

    let p = generate_random_even_permutation(4, &mut source).expect("Failed to generate");

    assert_eq!(p.as_slice(), &[2, 1, 3, 0]);
    assert!(p.is_even());
}

#[test]
fn test_generate_random_even_permutation_keeps_even_draw() {
    let mut source = ScriptedUniformSource::new([3, 0, 1]);

    let p = generate_random_even_permutation(4, &mut source).expect("Failed to generate");

    assert_eq!(p.as_slice(), &[3, 0, 2, 1]);
    assert!(p.is_even());
}

#[test]
fn test_generate_random_even_permutation_n2_is_identity() {
    for draw in [0, 1] {
        let mut source = ScriptedUniformSource::new([draw]);

        let p = generate_random_even_permutation(2, &mut source).expect("Failed to generate");

        assert_eq!(p.as_slice(), &[0, 1]);
    }
}

#[test]
fn test_generate_degenerate_sizes_do_not_draw() {
    for n in [0, 1] {
        let mut source = ScriptedUniformSource::new([]);

        let even = generate_random_even_permutation(n, &mut source).expect("Failed to generate");
        let any = generate_random_permutation(n, &mut source).expect("Failed to generate");

        assert_eq!(even.len(), n);
        assert_eq!(any.len(), n);
        assert!(source.bounds().is_empty());
    }
}

#[test]
fn test_generate_propagates_out_of_range_source() {
    let mut source = MockUniformSource::new(1, MockUniformSourceBehaviour::OutOfRange);
    let expected = Err(GenerateError::Digits(DigitsError::DigitOutOfRange {
        position: 0,
        digit: 5,
        radix: 5,
    }));

    assert_eq!(generate_random_permutation(5, &mut source), expected);
    assert_eq!(generate_random_even_permutation(5, &mut source), expected);
}

#[test]
fn test_generate_with_extreme_sources() {
    let mut source = MockUniformSource::new(1, MockUniformSourceBehaviour::AlwaysZero);
    let p = generate_random_permutation(6, &mut source).expect("Failed to generate");
    assert_eq!(p.as_slice(), &[0, 1, 2, 3, 4, 5]);

    source.change_behaviour(MockUniformSourceBehaviour::AlwaysMax);
    let p = generate_random_permutation(6, &mut source).expect("Failed to generate");
    assert_eq!(p.as_slice(), &[5, 4, 3, 2, 1, 0]);

    // Reversal of 3 has 3 inversions, so the last digit flips from 1 to 0.
    let p = generate_random_even_permutation(3, &mut source).expect("Failed to generate");
    assert_eq!(p.as_slice(), &[2, 0, 1]);
}

#[test]
fn test_generate_random_even_permutation_is_always_even() {
    let mut rng = StdRng::seed_from_u64(0xA17E);

    for trial in 0..2000 {
        let n = 2 + trial % 30;
        let p = generate_random_even_permutation(n, &mut rng).expect("Failed to generate");

        assert!(is_bijection(p.as_slice()), "not a bijection: {:?}", p);
        assert!(p.is_even(), "odd permutation: {:?}", p);
    }
}

#[test]
fn test_generate_random_permutation_is_bijection() {
    let mut source = MockUniformSource::new(99, MockUniformSourceBehaviour::None);

    for n in 0..=200 {
        let p = generate_random_permutation(n, &mut source).expect("Failed to generate");
        assert_eq!(p.len(), n);
        assert!(is_bijection(p.as_slice()));
    }
}

#[test]
fn test_generate_random_permutation_hits_both_parities() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut even = 0;
    let mut odd = 0;

    for _ in 0..200 {
        let p = generate_random_permutation(7, &mut rng).expect("Failed to generate");
        if p.is_even() {
            even += 1;
        } else {
            odd += 1;
        }
    }

    assert!(even > 0 && odd > 0);
}

#[test]
fn test_sampler_is_deterministic_per_seed() {
    let mut a = PermutationSampler::new(StdRng::seed_from_u64(11));
    let mut b = PermutationSampler::new(StdRng::seed_from_u64(11));

    for n in 0..20 {
        assert_eq!(a.permutation(n), b.permutation(n));
        assert_eq!(a.even_permutation(n), b.even_permutation(n));
        assert_eq!(a.digits(n), b.digits(n));
    }
}

#[test]
fn test_sampler_source_access() {
    let mut sampler = PermutationSampler::new(ScriptedUniformSource::new([1, 0]));

    let p = sampler.permutation(3).expect("Failed to permutation()");
    assert_eq!(p.as_slice(), &[1, 0, 2]);
    assert_eq!(sampler.source_mut().bounds(), &[3, 2]);

    let source = sampler.into_inner();
    assert_eq!(source.pending(), 0);
}
