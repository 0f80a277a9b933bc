// Copyright (C) 2025 Jeremy J. Carroll.

//! Evaluator configuration.

use crate::errors::EvalError;
use crate::memo::{MAX_OUTPUT_DIGITS, MAX_SUFFIX_DIGITS};

/// Which term is called term `n`.
///
/// Both conventions describe the same values; they are offset by one index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indexing {
    /// `a[0] = 1`, `a[n] = a[n-1] + digitsum(a[n-1])`: 1, 2, 4, 8, 16, ...
    #[default]
    Recurrence,
    /// `a[0] = 1`, `a[n]` = digit sum of all preceding terms: 1, 1, 2, 4, 8, ...
    /// This is the numbering under which `a[10^6] = 31054319`.
    PrecedingDigitSums,
}

impl Indexing {
    /// Index at which the sequence holds its initial value 1 and the
    /// recurrence starts.
    pub fn start_index(self) -> u64 {
        match self {
            Indexing::Recurrence => 0,
            Indexing::PrecedingDigitSums => 1,
        }
    }
}

/// Parameters of an [`Evaluator`](super::Evaluator).
///
/// # Example
///
/// ```
/// use digit_sum_sequence::{EvaluatorConfig, Indexing};
///
/// let config = EvaluatorConfig::default()
///     .with_suffix_digits(4)
///     .with_indexing(Indexing::PrecedingDigitSums);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.modulus(), 10_000);
/// assert_eq!(config.levels(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Width of the low-order window; the suffix modulus is `10^suffix_digits`.
    pub suffix_digits: u32,
    /// Upper bound on the number of digits of any value reached.
    pub output_digits: u32,
    pub indexing: Indexing,
    /// When false every term is computed by a single step and nothing is
    /// recorded.
    pub shortcuts: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            suffix_digits: 3,
            output_digits: MAX_OUTPUT_DIGITS,
            indexing: Indexing::Recurrence,
            shortcuts: true,
        }
    }
}

impl EvaluatorConfig {
    pub fn with_suffix_digits(mut self, suffix_digits: u32) -> Self {
        self.suffix_digits = suffix_digits;
        self
    }

    pub fn with_output_digits(mut self, output_digits: u32) -> Self {
        self.output_digits = output_digits;
        self
    }

    pub fn with_indexing(mut self, indexing: Indexing) -> Self {
        self.indexing = indexing;
        self
    }

    pub fn with_shortcuts(mut self, shortcuts: bool) -> Self {
        self.shortcuts = shortcuts;
        self
    }

    /// Check all bounds. Everything downstream relies on this having passed.
    pub fn validate(&self) -> Result<(), EvalError> {
        if !(1..=MAX_SUFFIX_DIGITS).contains(&self.suffix_digits) {
            return Err(EvalError::SuffixDigits {
                suffix_digits: self.suffix_digits,
            });
        }
        if self.output_digits <= self.suffix_digits || self.output_digits > MAX_OUTPUT_DIGITS {
            return Err(EvalError::OutputDigits {
                output_digits: self.output_digits,
                suffix_digits: self.suffix_digits,
            });
        }
        Ok(())
    }

    /// Suffix modulus, `10^suffix_digits`.
    pub fn modulus(&self) -> u64 {
        10u64.pow(self.suffix_digits)
    }

    /// Number of zero-run levels: one per possible prefix digit.
    pub fn levels(&self) -> usize {
        (self.output_digits - self.suffix_digits) as usize
    }

    /// Smallest value with more than `output_digits` digits.
    pub fn capacity(&self) -> u64 {
        10u64.pow(self.output_digits)
    }
}
