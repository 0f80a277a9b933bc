// Copyright (C) 2025 Jeremy J. Carroll.

//! Shortcut store: replayable (steps, delta) jumps keyed by regime.
//!
//! # Why shortcuts are exact
//!
//! Write a value as `a = U · 10^z · M + w` where `M` is the suffix modulus,
//! `U` is everything above the lowest `z` prefix digits, and `w < 10^z · M`
//! is the low window. Each step adds `digitsum(U) + digitsum(w)`. As long as
//! `U` does not change, the evolution of `w` depends on `digitsum(U)` only,
//! not on the digits of `U`. So the number of steps until `U` changes and the
//! total increase over those steps are functions of
//! `(z, digitsum(U), w at the start)`.
//!
//! A key is recorded at level `z` only from a value whose window is `z` zero
//! digits followed by the suffix, so the key is `(z, prefix digit sum, suffix)`.
//! Any later value with at least `z` trailing prefix zeros, the same prefix
//! digit sum and the same suffix replays the same jump, whatever its prefix.

pub mod store;

pub use store::{ShortcutEntry, ShortcutKey, ShortcutStore};
