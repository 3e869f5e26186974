// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for mocking uniform sources.
//!
//! Provides deterministic sources with configurable behavior for testing.

mod mock_uniform_source;
mod scripted_uniform_source;

pub use mock_uniform_source::{MockUniformSource, MockUniformSourceBehaviour};
pub use scripted_uniform_source::ScriptedUniformSource;
