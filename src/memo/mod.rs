// Copyright (C) 2025 Jeremy J. Carroll.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! - Digit sums of every low-order suffix value
//! - Plain digit helpers shared by the driver and the tests

pub mod digit_sums;

pub use digit_sums::{digit_sum, trailing_zeros, DigitSumCache};

/// Largest supported suffix window (10^6 cached digit sums).
pub const MAX_SUFFIX_DIGITS: u32 = 6;

/// Largest supported output size; every value below 10^19 fits in a u64
/// with room for one more step.
pub const MAX_OUTPUT_DIGITS: u32 = 19;
