// Copyright (C) 2025 Jeremy J. Carroll.

//! Tier 2: DYNAMIC state (mutable, owned by one evaluator).
//!
//! - The current position in the sequence and its prefix/suffix split
//! - One regime snapshot per zero-run level
//! - Per-run counters

pub mod base;
pub mod sequence;
pub mod statistics;

pub use base::{BaseLevels, BaseState};
pub use sequence::{Decomposition, SequenceState};
pub use statistics::{Counters, Statistics};
