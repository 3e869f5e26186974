// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::support::test_utils::{MockUniformSource, MockUniformSourceBehaviour};
use crate::traits::UniformSource;

#[test]
fn test_mock_uniform_source_behaviour_none() {
    let mut mock = MockUniformSource::new(42, MockUniformSourceBehaviour::None);

    for bound in 1..100 {
        assert!(mock.next_below(bound) < bound);
    }
}

#[test]
fn test_mock_uniform_source_none_is_seeded() {
    let mut a = MockUniformSource::new(42, MockUniformSourceBehaviour::None);
    let mut b = MockUniformSource::new(42, MockUniformSourceBehaviour::None);

    for bound in 1..100 {
        assert_eq!(a.next_below(bound), b.next_below(bound));
    }
}

#[test]
fn test_mock_uniform_source_fixed_behaviours() {
    let mut mock = MockUniformSource::new(42, MockUniformSourceBehaviour::AlwaysZero);
    assert_eq!(mock.next_below(10), 0);

    mock.change_behaviour(MockUniformSourceBehaviour::AlwaysMax);
    assert_eq!(mock.next_below(10), 9);

    mock.change_behaviour(MockUniformSourceBehaviour::OutOfRange);
    assert_eq!(mock.next_below(10), 10);
}

#[test]
fn test_mock_uniform_source_change_behaviour() {
    let mut mock = MockUniformSource::new(42, MockUniformSourceBehaviour::None);

    // First works
    assert!(mock.next_below(5) < 5);

    // Change behaviour
    mock.change_behaviour(MockUniformSourceBehaviour::OutOfRange);

    // Now out of range
    assert_eq!(mock.next_below(5), 5);

    // Change back
    mock.change_behaviour(MockUniformSourceBehaviour::None);

    // Works again
    assert!(mock.next_below(5) < 5);
}
