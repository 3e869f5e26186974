// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::traits::UniformSource;

/// Configurable behavior for [`MockUniformSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockUniformSourceBehaviour {
    /// Normal operation (delegates to a seeded generator).
    None,
    /// Always returns `0`.
    AlwaysZero,
    /// Always returns `bound - 1`.
    AlwaysMax,
    /// Returns `bound`, which is outside the requested range.
    OutOfRange,
}

/// Mock uniform source for testing.
///
/// Wraps a seeded [`StdRng`] but allows forcing edge-case draws via
/// [`MockUniformSourceBehaviour`].
pub struct MockUniformSource {
    inner: StdRng,
    behaviour: MockUniformSourceBehaviour,
}

impl MockUniformSource {
    /// Creates a new mock source seeded with `seed`.
    pub fn new(seed: u64, behaviour: MockUniformSourceBehaviour) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            behaviour,
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockUniformSourceBehaviour) {
        self.behaviour = behaviour;
    }
}

impl UniformSource for MockUniformSource {
    fn next_below(&mut self, bound: usize) -> usize {
        match self.behaviour {
            MockUniformSourceBehaviour::None => self.inner.next_below(bound),
            MockUniformSourceBehaviour::AlwaysZero => 0,
            MockUniformSourceBehaviour::AlwaysMax => bound - 1,
            MockUniformSourceBehaviour::OutOfRange => bound,
        }
    }
}
