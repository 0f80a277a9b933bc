// Copyright (C) 2025 Jeremy J. Carroll.

//! Sequence driver.
//!
//! The driver walks the sequence from its initial value towards the target
//! index. Each iteration:
//!
//! 1. Looks one step ahead. If the next step changes the prefix, every
//!    zero-run level whose upper part changes has reached the end of its
//!    regime; valid snapshots at those levels are turned into shortcuts and
//!    all of them are invalidated.
//! 2. Looks for a stored shortcut from the current zero run down to level 0
//!    that does not overshoot the target, and takes the first one found.
//!    Levels at and below the one taken are invalidated, since their regimes
//!    ended somewhere inside the jump.
//! 3. Otherwise takes one ordinary step.
//! 4. Refreshes the decomposition. After a prefix change a new regime starts
//!    at every level up to the new zero run.
//!
//! # Example
//!
//! ```
//! use digit_sum_sequence::{Evaluator, EvaluatorConfig};
//!
//! let mut evaluator = Evaluator::new(EvaluatorConfig::default()).unwrap();
//! assert_eq!(evaluator.evaluate(8).unwrap(), 49);
//! assert_eq!(evaluator.evaluate(999_999).unwrap(), 31_054_319);
//! ```

pub mod config;

pub use config::{EvaluatorConfig, Indexing};

use crate::errors::EvalError;
use crate::memo::DigitSumCache;
use crate::shortcuts::{ShortcutEntry, ShortcutKey, ShortcutStore};
use crate::state::{BaseLevels, BaseState, Counters, Decomposition, SequenceState, Statistics};
use tracing::{debug, info};

/// Evaluate term `target` (recurrence indexing) with a fresh evaluator.
///
/// `suffix_digits` sets the low-order window and `output_digits` bounds the
/// size of every value reached; the result does not depend on either as long
/// as both are valid.
///
/// ```
/// assert_eq!(digit_sum_sequence::evaluate(0, 3, 19).unwrap(), 1);
/// assert_eq!(digit_sum_sequence::evaluate(1, 3, 19).unwrap(), 2);
/// ```
pub fn evaluate(target: u64, suffix_digits: u32, output_digits: u32) -> Result<u64, EvalError> {
    let config = EvaluatorConfig::default()
        .with_suffix_digits(suffix_digits)
        .with_output_digits(output_digits);
    Evaluator::new(config)?.evaluate(target)
}

/// Accelerated evaluator for the digit-sum sequence.
///
/// The shortcut store survives between calls to [`Evaluator::evaluate`], so
/// later evaluations reuse everything learned by earlier ones.
#[derive(Debug, Clone)]
pub struct Evaluator {
    config: EvaluatorConfig,
    digit_sums: DigitSumCache,
    shortcuts: ShortcutStore,
    levels: BaseLevels,
    statistics: Statistics,
}

impl Evaluator {
    /// Create an evaluator with an empty shortcut store.
    pub fn new(config: EvaluatorConfig) -> Result<Self, EvalError> {
        config.validate()?;
        debug!(
            suffix_digits = config.suffix_digits,
            output_digits = config.output_digits,
            "creating evaluator"
        );
        Ok(Self {
            digit_sums: DigitSumCache::new(config.suffix_digits),
            shortcuts: ShortcutStore::new(config.levels(), config.modulus()),
            levels: BaseLevels::new(config.levels()),
            statistics: Statistics::new(),
            config,
        })
    }

    /// Create an evaluator seeded with previously recorded shortcuts.
    ///
    /// The seed must share this configuration's suffix window, since a key's
    /// suffix means something else under another modulus. Every entry is
    /// checked against this configuration's bounds.
    pub fn with_shortcuts(config: EvaluatorConfig, seed: &ShortcutStore) -> Result<Self, EvalError> {
        let mut evaluator = Self::new(config)?;
        if seed.modulus() != config.modulus() {
            return Err(EvalError::SeedModulus {
                expected: config.modulus(),
                found: seed.modulus(),
            });
        }
        for (key, entry) in seed.iter() {
            evaluator.shortcuts.insert(*key, *entry)?;
        }
        debug!(shortcuts = evaluator.shortcuts.len(), "seeded shortcut store");
        Ok(evaluator)
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn shortcuts(&self) -> &ShortcutStore {
        &self.shortcuts
    }

    pub fn into_shortcuts(self) -> ShortcutStore {
        self.shortcuts
    }

    /// Counters for the most recent evaluation.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Compute term `target` under the configured indexing.
    ///
    /// Fails with [`EvalError::CapacityExceeded`] if a value on the way has
    /// more than `output_digits` digits.
    pub fn evaluate(&mut self, target: u64) -> Result<u64, EvalError> {
        let modulus = self.digit_sums.modulus();
        let capacity = self.config.capacity();
        let mut state = SequenceState::start(self.config.indexing.start_index(), &self.digit_sums);
        self.levels.clear();
        self.statistics.reset();
        debug!(target, known_shortcuts = self.shortcuts.len(), "evaluation started");

        while state.index < target {
            let current = state.decomposition;
            let next = state.value + current.step_increment(&self.digit_sums);
            let next_prefix = next / modulus;
            let transition = next_prefix != current.prefix;
            if transition && current.prefix != 0 && self.config.shortcuts {
                self.close_regimes(current.prefix, next_prefix, &state)?;
            }

            let jumped = self.config.shortcuts && self.try_shortcut(&mut state, target);
            if jumped {
                self.statistics.increment_counter(Counters::Jumps);
            } else {
                state.value = next;
                state.index += 1;
                self.statistics.increment_counter(Counters::Increments);
            }

            if transition || jumped {
                if state.value >= capacity {
                    return Err(EvalError::CapacityExceeded {
                        index: state.index,
                        value: state.value,
                        output_digits: self.config.output_digits,
                    });
                }
                state.decomposition = Decomposition::of(state.value, &self.digit_sums);
            } else {
                state.decomposition.suffix = state.value % modulus;
            }

            if transition {
                self.statistics.increment_counter(Counters::Transitions);
                let d = state.decomposition;
                self.levels.reset_through(
                    d.zero_run,
                    BaseState {
                        prefix_digit_sum: d.prefix_digit_sum,
                        suffix: d.suffix,
                        index: state.index,
                        value: state.value,
                    },
                );
            }
        }

        info!(
            target,
            value = state.value,
            increments = self.statistics.get(Counters::Increments),
            jumps = self.statistics.get(Counters::Jumps),
            recorded = self.statistics.get(Counters::ShortcutsRecorded),
            transitions = self.statistics.get(Counters::Transitions),
            "evaluation finished"
        );
        Ok(state.value)
    }

    /// Record shortcuts for every level whose regime ends with the step from
    /// `prefix` to `next_prefix`, and invalidate those levels.
    fn close_regimes(
        &mut self,
        prefix: u64,
        next_prefix: u64,
        state: &SequenceState,
    ) -> Result<(), EvalError> {
        let top = highest_changed_level(prefix, next_prefix).min(self.levels.len() - 1);
        for level in (0..=top).rev() {
            let Some(base) = self.levels.take(level) else {
                continue;
            };
            let steps = state.index - base.index;
            if steps == 0 {
                continue;
            }
            let key = ShortcutKey::new(level, base.prefix_digit_sum, base.suffix);
            self.shortcuts
                .insert(key, ShortcutEntry::new(steps, state.value - base.value))?;
            self.statistics.increment_counter(Counters::ShortcutsRecorded);
        }
        Ok(())
    }

    /// Take the most specific stored shortcut that stays within `target`.
    fn try_shortcut(&mut self, state: &mut SequenceState, target: u64) -> bool {
        let d = state.decomposition;
        if d.prefix_digit_sum == 0 {
            return false;
        }
        for level in (0..=d.zero_run).rev() {
            let key = ShortcutKey::new(level, d.prefix_digit_sum, d.suffix);
            let Some(entry) = self.shortcuts.get(&key) else {
                continue;
            };
            if state.index + entry.steps <= target {
                state.index += entry.steps;
                state.value += entry.delta;
                self.levels.invalidate_through(level);
                return true;
            }
        }
        false
    }
}

/// Highest level `z` for which `old / 10^z` and `new / 10^z` differ.
///
/// Every level up to and including it sees its upper part change.
fn highest_changed_level(old: u64, new: u64) -> usize {
    let (mut old, mut new) = (old / 10, new / 10);
    let mut level = 0;
    while old != new {
        old /= 10;
        new /= 10;
        level += 1;
    }
    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memo::digit_sum;

    fn naive(target: u64) -> u64 {
        let mut a = 1;
        for _ in 0..target {
            a += digit_sum(a) as u64;
        }
        a
    }

    #[test]
    fn test_highest_changed_level() {
        assert_eq!(highest_changed_level(4992, 4996), 0);
        assert_eq!(highest_changed_level(4998, 5002), 3);
        assert_eq!(highest_changed_level(1299, 1300), 2);
        assert_eq!(highest_changed_level(9, 10), 1);
        assert_eq!(highest_changed_level(0, 1), 0);
    }

    #[test]
    fn test_first_terms() {
        let mut evaluator = Evaluator::new(EvaluatorConfig::default()).unwrap();
        let expected = [1, 2, 4, 8, 16, 23, 28, 38, 49, 62, 70, 77];
        for (n, &value) in expected.iter().enumerate() {
            assert_eq!(evaluator.evaluate(n as u64).unwrap(), value, "term {}", n);
        }
    }

    #[test]
    fn test_target_zero_takes_no_steps() {
        let mut evaluator = Evaluator::new(EvaluatorConfig::default()).unwrap();
        assert_eq!(evaluator.evaluate(0).unwrap(), 1);
        assert_eq!(evaluator.statistics(), &Statistics::new());
    }

    #[test]
    fn test_preceding_digit_sums_indexing() {
        let config = EvaluatorConfig::default().with_indexing(Indexing::PrecedingDigitSums);
        let mut evaluator = Evaluator::new(config).unwrap();
        assert_eq!(evaluator.evaluate(0).unwrap(), 1);
        assert_eq!(evaluator.evaluate(1).unwrap(), 1);
        assert_eq!(evaluator.evaluate(2).unwrap(), 2);
        assert_eq!(evaluator.evaluate(9).unwrap(), 49);
        assert_eq!(evaluator.evaluate(10).unwrap(), 62);
    }

    #[test]
    fn test_matches_naive_for_every_suffix_width() {
        for suffix_digits in 1..=4 {
            let config = EvaluatorConfig::default().with_suffix_digits(suffix_digits);
            let mut evaluator = Evaluator::new(config).unwrap();
            for target in [0, 1, 5, 99, 500, 3_096, 10_000, 54_321] {
                assert_eq!(
                    evaluator.evaluate(target).unwrap(),
                    naive(target),
                    "suffix_digits={} target={}",
                    suffix_digits,
                    target
                );
            }
        }
    }

    #[test]
    fn test_shortcuts_are_used() {
        let mut evaluator = Evaluator::new(EvaluatorConfig::default()).unwrap();
        assert_eq!(evaluator.evaluate(1_000_000).unwrap(), 31_054_345);
        let stats = evaluator.statistics();
        assert!(stats.get(Counters::Jumps) > 0);
        assert!(stats.get(Counters::ShortcutsRecorded) > 0);
        assert!(stats.get(Counters::Increments) + stats.get(Counters::Jumps) < 20_000);
        assert!(!evaluator.shortcuts().is_empty());
    }

    #[test]
    fn test_disabled_shortcuts_step_every_term() {
        let config = EvaluatorConfig::default().with_shortcuts(false);
        let mut evaluator = Evaluator::new(config).unwrap();
        assert_eq!(evaluator.evaluate(20_000).unwrap(), naive(20_000));
        assert_eq!(evaluator.statistics().get(Counters::Increments), 20_000);
        assert_eq!(evaluator.statistics().get(Counters::Jumps), 0);
        assert!(evaluator.shortcuts().is_empty());
    }

    #[test]
    fn test_capacity_exceeded() {
        let config = EvaluatorConfig::default().with_output_digits(4);
        let mut evaluator = Evaluator::new(config).unwrap();
        assert_eq!(evaluator.evaluate(593).unwrap(), 9_968);
        assert_eq!(
            evaluator.evaluate(1_000),
            Err(EvalError::CapacityExceeded {
                index: 594,
                value: 10_000,
                output_digits: 4
            })
        );
    }

    #[test]
    fn test_seeded_store_must_fit() {
        let mut wide = Evaluator::new(EvaluatorConfig::default()).unwrap();
        wide.evaluate(1_000_000_000).unwrap();

        // Five zero-run levels and prefix digit sums up to 45 cannot hold
        // what an 11-digit run learned.
        let narrow = EvaluatorConfig::default().with_output_digits(8);
        let result = Evaluator::with_shortcuts(narrow, wide.shortcuts());
        assert!(matches!(result, Err(EvalError::KeyOutOfBounds { .. })));
    }

    #[test]
    fn test_seed_from_other_suffix_width_is_rejected() {
        let narrow = EvaluatorConfig::default().with_suffix_digits(2);
        let wide = ShortcutStore::new(16, 1_000);
        let result = Evaluator::with_shortcuts(narrow, &wide);
        assert_eq!(
            result.unwrap_err(),
            EvalError::SeedModulus {
                expected: 100,
                found: 1_000
            }
        );
    }

    #[test]
    fn test_free_function_rejects_bad_config() {
        assert_eq!(
            evaluate(10, 0, 19),
            Err(EvalError::SuffixDigits { suffix_digits: 0 })
        );
        assert_eq!(
            evaluate(10, 3, 3),
            Err(EvalError::OutputDigits {
                output_digits: 3,
                suffix_digits: 3
            })
        );
    }
}
