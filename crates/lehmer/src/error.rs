// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors returned by [`FreeIndexTracker`](crate::FreeIndexTracker).
#[derive(Debug, Error, Eq, PartialEq)]
pub enum TrackerError {
    /// Requested the `requested`-th free slot while only `remaining` are left.
    ///
    /// This is a broken precondition on the caller's side: a valid digit
    /// sequence never asks for more free slots than remain.
    #[error("Exhausted[requested {requested}, remaining {remaining}]")]
    Exhausted {
        /// Zero-based rank that was requested.
        requested: usize,
        /// Free slots still available at the time of the request.
        remaining: usize,
    },

    /// Index lookup outside `[0, len)`.
    #[error("IndexOutOfRange[index {index}, len {len}]")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of tracked slots.
        len: usize,
    },

    /// Index lookup for a slot that was already consumed.
    #[error("AlreadyTaken[index {index}]")]
    AlreadyTaken {
        /// Offending index.
        index: usize,
    },
}

/// Errors produced while building or converting [`FactorialDigits`](crate::FactorialDigits).
#[derive(Debug, Error, Eq, PartialEq)]
pub enum DigitsError {
    /// Digit sequence length does not match `n - 1`.
    #[error("LengthMismatch[expected {expected}, got {got}]")]
    LengthMismatch {
        /// Expected number of digits.
        expected: usize,
        /// Actual number of digits.
        got: usize,
    },

    /// Digit lies outside `[0, radix)` for its position.
    #[error("DigitOutOfRange[position {position}, digit {digit}, radix {radix}]")]
    DigitOutOfRange {
        /// Position of the digit in the sequence.
        position: usize,
        /// Offending digit value.
        digit: usize,
        /// Radix of that position (`n - position`).
        radix: usize,
    },

    /// Rank is not below `n!`.
    #[error("RankOutOfRange[rank {rank}, n {n}]")]
    RankOutOfRange {
        /// Offending rank.
        rank: u128,
        /// Permutation length.
        n: usize,
    },

    /// Rank does not fit in a `u128`.
    #[error("RankOverflow[n {n}]")]
    RankOverflow {
        /// Permutation length.
        n: usize,
    },
}

/// Errors produced while validating a [`Permutation`](crate::Permutation).
#[derive(Debug, Error, Eq, PartialEq)]
pub enum PermutationError {
    /// Value is not in `[0, len)`.
    #[error("ValueOutOfRange[position {position}, value {value}, len {len}]")]
    ValueOutOfRange {
        /// Position of the value.
        position: usize,
        /// Offending value.
        value: usize,
        /// Permutation length.
        len: usize,
    },

    /// Value appears more than once.
    #[error("DuplicateValue[position {position}, value {value}]")]
    DuplicateValue {
        /// Position of the second occurrence.
        position: usize,
        /// Repeated value.
        value: usize,
    },

    /// Slice length does not match the permutation length.
    #[error("LengthMismatch[expected {expected}, got {got}]")]
    LengthMismatch {
        /// Permutation length.
        expected: usize,
        /// Slice length.
        got: usize,
    },
}

/// Errors returned by the decoders.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum DecodeError {
    /// Malformed digit input.
    #[error(transparent)]
    Digits(#[from] DigitsError),

    /// Tracker rejected a request.
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

/// Errors returned by [`encode`](crate::encode).
#[derive(Debug, Error, Eq, PartialEq)]
pub enum EncodeError {
    /// Input is not a permutation.
    #[error(transparent)]
    Permutation(#[from] PermutationError),

    /// Tracker rejected a request.
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

/// Errors returned by the random generators.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum GenerateError {
    /// The uniform source produced a draw outside the requested bound.
    #[error(transparent)]
    Digits(#[from] DigitsError),

    /// Decoding the drawn digits failed.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
