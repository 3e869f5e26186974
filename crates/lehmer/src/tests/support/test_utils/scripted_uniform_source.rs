// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::support::test_utils::ScriptedUniformSource;
use crate::traits::UniformSource;

#[test]
fn test_scripted_uniform_source_replays_then_zero() {
    let mut source = ScriptedUniformSource::new([3, 1]);

    assert_eq!(source.pending(), 2);
    assert_eq!(source.next_below(4), 3);
    assert_eq!(source.next_below(3), 1);
    assert_eq!(source.next_below(2), 0);
    assert_eq!(source.pending(), 0);
    assert_eq!(source.bounds(), &[4, 3, 2]);
}

#[test]
fn test_scripted_uniform_source_does_not_clamp() {
    let mut source = ScriptedUniformSource::new([7]);

    assert_eq!(source.next_below(2), 7);
}
