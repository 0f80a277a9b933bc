// Copyright (C) 2025 Jeremy J. Carroll.

//! Regime snapshots, one per zero-run level.
//!
//! When the prefix changes, a new regime starts at every level up to the
//! new prefix's zero run, and each level remembers where it started. When the
//! part of the prefix above a level changes, that level's regime is over and
//! the distance travelled since the snapshot becomes a shortcut.

/// Where a regime started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseState {
    pub prefix_digit_sum: u32,
    pub suffix: u64,
    pub index: u64,
    pub value: u64,
}

/// Snapshots indexed by zero-run level. `None` marks a level whose regime
/// was already recorded or was skipped over by a shortcut.
#[derive(Debug, Clone)]
pub struct BaseLevels {
    slots: Vec<Option<BaseState>>,
}

impl BaseLevels {
    pub fn new(levels: usize) -> Self {
        Self {
            slots: vec![None; levels],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[cfg(test)]
    fn get(&self, level: usize) -> Option<&BaseState> {
        self.slots[level].as_ref()
    }

    /// Remove the snapshot at `level`, leaving it invalid.
    pub fn take(&mut self, level: usize) -> Option<BaseState> {
        self.slots[level].take()
    }

    /// Invalidate levels `0..=level`.
    pub fn invalidate_through(&mut self, level: usize) {
        for slot in &mut self.slots[..=level] {
            *slot = None;
        }
    }

    /// Start a new regime at levels `0..=level`.
    pub fn reset_through(&mut self, level: usize, base: BaseState) {
        for slot in &mut self.slots[..=level] {
            *slot = Some(base);
        }
    }

    pub fn clear(&mut self) {
        self.slots.fill(None);
    }
}
