// Copyright (C) 2025 Jeremy J. Carroll.

//! Statistics
//!
//! Counters are kept by the evaluator and reset at the start of every
//! evaluation.

use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Single fallback steps.
    Increments,
    /// Shortcuts taken.
    Jumps,
    /// Shortcuts written to the store.
    ShortcutsRecorded,
    /// Steps that changed the prefix.
    Transitions,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    #[inline]
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    pub(crate) fn reset(&mut self) {
        self.stats = [0; Counters::COUNT];
    }
}
