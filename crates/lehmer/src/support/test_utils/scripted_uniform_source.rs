// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::VecDeque;

use crate::traits::UniformSource;

/// Replays a fixed list of draws, then returns `0` forever.
///
/// Draws are returned as-is, without checking them against the bound.
#[derive(Debug, Clone, Default)]
pub struct ScriptedUniformSource {
    draws: VecDeque<usize>,
    bounds: Vec<usize>,
}

impl ScriptedUniformSource {
    /// Creates a source that yields `draws` in order.
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            bounds: Vec::new(),
        }
    }

    /// Bounds requested so far, in call order.
    pub fn bounds(&self) -> &[usize] {
        &self.bounds
    }

    /// Draws not consumed yet.
    pub fn pending(&self) -> usize {
        self.draws.len()
    }
}

impl UniformSource for ScriptedUniformSource {
    fn next_below(&mut self, bound: usize) -> usize {
        self.bounds.push(bound);
        self.draws.pop_front().unwrap_or(0)
    }
}
