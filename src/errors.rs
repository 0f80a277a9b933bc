// Copyright (C) 2025 Jeremy J. Carroll.

//! Error types for configuration and evaluation.

use crate::shortcuts::ShortcutKey;
use thiserror::Error;

/// Errors that can occur while configuring or running an evaluator.
///
/// All of these are configuration problems: the recurrence itself has no
/// recoverable failure modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The low-order window is outside the supported range.
    #[error("suffix digits must be between 1 and {max}, got {suffix_digits}", max = crate::memo::MAX_SUFFIX_DIGITS)]
    SuffixDigits { suffix_digits: u32 },

    /// The output bound leaves no prefix digits or does not fit in a u64.
    #[error(
        "output digits must be between {} and {max}, got {output_digits}",
        .suffix_digits + 1,
        max = crate::memo::MAX_OUTPUT_DIGITS
    )]
    OutputDigits { output_digits: u32, suffix_digits: u32 },

    /// The sequence outgrew the configured number of output digits.
    #[error("a[{index}] = {value} has more than {output_digits} digits; raise output digits")]
    CapacityExceeded {
        index: u64,
        value: u64,
        output_digits: u32,
    },

    /// A shortcut key does not fit the store's bounds.
    #[error("shortcut key {key:?} out of bounds ({levels} zero-run levels, suffix modulus {modulus})")]
    KeyOutOfBounds {
        key: ShortcutKey,
        levels: usize,
        modulus: u64,
    },

    /// A seed store was recorded under a different suffix window.
    #[error("seed shortcuts use suffix modulus {found}, evaluator uses {expected}")]
    SeedModulus { expected: u64, found: u64 },
}
