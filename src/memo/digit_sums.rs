// Copyright (C) 2025 Jeremy J. Carroll.

//! Digit-sum lookup table for the low-order suffix window.
//!
//! Every step of the sequence adds the digit sum of the current value. The
//! value is split into a prefix and a `suffix_digits`-wide suffix; the suffix
//! changes on every step, so its digit sum comes from a table built once at
//! construction instead of being recomputed digit by digit.
//!
//! # Example
//!
//! ```
//! use digit_sum_sequence::memo::DigitSumCache;
//!
//! let cache = DigitSumCache::new(3);
//! assert_eq!(cache.modulus(), 1000);
//! assert_eq!(cache.get(987), 24);
//! assert_eq!(cache.digit_sum(1_000_987), 25);
//! ```

/// Sum of the decimal digits of `n`.
#[inline]
pub fn digit_sum(mut n: u64) -> u32 {
    let mut sum = 0;
    while n != 0 {
        sum += (n % 10) as u32;
        n /= 10;
    }
    sum
}

/// Number of trailing zero digits of `n`. Zero has none.
#[inline]
pub fn trailing_zeros(mut n: u64) -> usize {
    if n == 0 {
        return 0;
    }
    let mut zeros = 0;
    while n % 10 == 0 {
        zeros += 1;
        n /= 10;
    }
    zeros
}

/// Precomputed digit sums for `0..10^suffix_digits`.
///
/// # Memory
///
/// One byte per entry (the largest digit sum for 6 digits is 54), so the
/// biggest supported table is 1 MB.
#[derive(Debug, Clone)]
pub struct DigitSumCache {
    modulus: u64,
    sums: Vec<u8>,
}

impl DigitSumCache {
    /// Build the table for a window of `suffix_digits` decimal digits.
    ///
    /// Entries are filled incrementally: the digit sum of `i` is the digit
    /// sum of `i / 10` plus the last digit.
    pub fn new(suffix_digits: u32) -> Self {
        let modulus = 10u64.pow(suffix_digits);
        let mut sums = vec![0u8; modulus as usize];
        for i in 1..sums.len() {
            sums[i] = sums[i / 10] + (i % 10) as u8;
        }
        tracing::debug!(modulus, "digit-sum cache initialized");
        Self { modulus, sums }
    }

    /// The suffix modulus, `10^suffix_digits`.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Digit sum of a suffix value.
    ///
    /// # Panics
    ///
    /// Panics if `suffix >= modulus()`.
    #[inline]
    pub fn get(&self, suffix: u64) -> u32 {
        self.sums[suffix as usize] as u32
    }

    /// Digit sum of an arbitrary value, one suffix-sized chunk at a time.
    pub fn digit_sum(&self, mut n: u64) -> u32 {
        let mut sum = 0;
        while n != 0 {
            sum += self.get(n % self.modulus);
            n /= self.modulus;
        }
        sum
    }

    pub fn len(&self) -> usize {
        self.sums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }
}
