// Copyright (C) 2025 Jeremy J. Carroll.

//! Sparse shortcut table.
//!
//! The number of keys that can occur is `levels × 9·levels × modulus`, which
//! for a 3-digit suffix and 19 output digits is about 36 million, while a run
//! to 10^15 records fewer than ten thousand. The table is therefore a hash map
//! with the bounds checked on insertion.

use crate::errors::EvalError;
use std::collections::HashMap;

/// Regime a shortcut applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShortcutKey {
    /// Number of zero prefix digits the shortcut's window spans.
    pub zero_run: usize,
    /// Digit sum of the prefix. Zero never forms a valid key.
    pub prefix_digit_sum: u32,
    /// Low-order suffix at the start of the regime.
    pub suffix: u64,
}

impl ShortcutKey {
    pub fn new(zero_run: usize, prefix_digit_sum: u32, suffix: u64) -> Self {
        Self {
            zero_run,
            prefix_digit_sum,
            suffix,
        }
    }
}

/// Effect of replaying a regime: `steps` terms later the value is larger by
/// exactly `delta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutEntry {
    pub steps: u64,
    pub delta: u64,
}

impl ShortcutEntry {
    pub fn new(steps: u64, delta: u64) -> Self {
        Self { steps, delta }
    }
}

/// Mapping from [`ShortcutKey`] to [`ShortcutEntry`].
///
/// Entries are only ever added or overwritten, never removed. A store is
/// owned by one evaluator but can be cloned out and used to seed another
/// one (see `Evaluator::with_shortcuts`).
#[derive(Debug, Clone)]
pub struct ShortcutStore {
    levels: usize,
    modulus: u64,
    entries: HashMap<ShortcutKey, ShortcutEntry>,
}

impl ShortcutStore {
    /// Create an empty store for `levels` zero-run levels and a suffix
    /// window of size `modulus`.
    pub fn new(levels: usize, modulus: u64) -> Self {
        Self {
            levels,
            modulus,
            entries: HashMap::new(),
        }
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Largest prefix digit sum a key can carry: every prefix digit a 9.
    pub fn max_prefix_digit_sum(&self) -> u32 {
        9 * self.levels as u32
    }

    /// Check whether a key fits this store's bounds.
    pub fn fits(&self, key: &ShortcutKey) -> bool {
        key.zero_run < self.levels
            && key.prefix_digit_sum > 0
            && key.prefix_digit_sum <= self.max_prefix_digit_sum()
            && key.suffix < self.modulus
    }

    /// Look up a shortcut. Keys with a zero prefix digit sum never match.
    #[inline]
    pub fn get(&self, key: &ShortcutKey) -> Option<ShortcutEntry> {
        if key.prefix_digit_sum == 0 {
            return None;
        }
        self.entries.get(key).copied()
    }

    /// Record a shortcut, returning the entry it replaced.
    ///
    /// Fails with [`EvalError::KeyOutOfBounds`] if the key does not fit.
    pub fn insert(
        &mut self,
        key: ShortcutKey,
        entry: ShortcutEntry,
    ) -> Result<Option<ShortcutEntry>, EvalError> {
        if !self.fits(&key) {
            return Err(EvalError::KeyOutOfBounds {
                key,
                levels: self.levels,
                modulus: self.modulus,
            });
        }
        debug_assert!(entry.steps > 0, "empty shortcut for {:?}", key);
        Ok(self.entries.insert(key, entry))
    }

    /// Number of recorded shortcuts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all recorded shortcuts, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&ShortcutKey, &ShortcutEntry)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing() {
        let store = ShortcutStore::new(16, 1000);
        assert!(store.is_empty());
        assert_eq!(store.get(&ShortcutKey::new(0, 5, 17)), None);
    }

    #[test]
    fn test_insert_and_overwrite() {
        let mut store = ShortcutStore::new(16, 1000);
        let key = ShortcutKey::new(2, 22, 3);

        let previous = store.insert(key, ShortcutEntry::new(3, 85)).unwrap();
        assert_eq!(previous, None);
        assert_eq!(store.get(&key), Some(ShortcutEntry::new(3, 85)));

        let previous = store.insert(key, ShortcutEntry::new(4, 90)).unwrap();
        assert_eq!(previous, Some(ShortcutEntry::new(3, 85)));
        assert_eq!(store.get(&key), Some(ShortcutEntry::new(4, 90)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_zero_prefix_digit_sum_is_never_a_key() {
        let mut store = ShortcutStore::new(16, 1000);
        let key = ShortcutKey::new(0, 0, 12);
        assert!(!store.fits(&key));
        assert!(store.insert(key, ShortcutEntry::new(1, 1)).is_err());
        assert_eq!(store.get(&key), None);
    }

    #[test]
    fn test_bounds() {
        let mut store = ShortcutStore::new(16, 1000);
        assert_eq!(store.max_prefix_digit_sum(), 144);

        assert!(store.fits(&ShortcutKey::new(15, 144, 999)));
        assert!(!store.fits(&ShortcutKey::new(16, 1, 0)));
        assert!(!store.fits(&ShortcutKey::new(0, 145, 0)));
        assert!(!store.fits(&ShortcutKey::new(0, 1, 1000)));

        let key = ShortcutKey::new(16, 1, 0);
        let err = store.insert(key, ShortcutEntry::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            EvalError::KeyOutOfBounds {
                key,
                levels: 16,
                modulus: 1000
            }
        );
        assert!(store.is_empty());
    }
}
