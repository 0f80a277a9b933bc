// Copyright (C) 2025 Jeremy J. Carroll.

//! Current sequence position and its prefix/suffix decomposition.

use crate::memo::{trailing_zeros, DigitSumCache};

/// Split of a value into `prefix · modulus + suffix`.
///
/// # Example
///
/// ```
/// use digit_sum_sequence::memo::DigitSumCache;
/// use digit_sum_sequence::state::Decomposition;
///
/// let cache = DigitSumCache::new(3);
/// let d = Decomposition::of(4_990_012, &cache);
/// assert_eq!(d.prefix, 4990);
/// assert_eq!(d.prefix_digit_sum, 22);
/// assert_eq!(d.zero_run, 1);
/// assert_eq!(d.suffix, 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decomposition {
    /// `value / modulus`.
    pub prefix: u64,
    /// Digit sum of the prefix (unchanged by its trailing zeros).
    pub prefix_digit_sum: u32,
    /// Trailing zero digits of the prefix; 0 when the prefix is 0.
    pub zero_run: usize,
    /// `value % modulus`.
    pub suffix: u64,
}

impl Decomposition {
    pub fn of(value: u64, cache: &DigitSumCache) -> Self {
        let prefix = value / cache.modulus();
        Self {
            prefix,
            prefix_digit_sum: cache.digit_sum(prefix),
            zero_run: trailing_zeros(prefix),
            suffix: value % cache.modulus(),
        }
    }

    /// Increment applied by one step of the recurrence.
    #[inline]
    pub fn step_increment(&self, cache: &DigitSumCache) -> u64 {
        (self.prefix_digit_sum + cache.get(self.suffix)) as u64
    }
}

/// The driver's current position: `value` is the term at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceState {
    pub index: u64,
    pub value: u64,
    /// Kept in step with `value`. The suffix is refreshed on every step,
    /// the prefix fields only when the prefix can have changed.
    pub decomposition: Decomposition,
}

impl SequenceState {
    /// Position `index` holding the initial value 1.
    pub fn start(index: u64, cache: &DigitSumCache) -> Self {
        Self {
            index,
            value: 1,
            decomposition: Decomposition::of(1, cache),
        }
    }
}
