// Copyright (C) 2025 Jeremy J. Carroll.

//! Accelerated evaluation of the digit-sum sequence.
//!
//! The sequence starts at 1 and each term adds the digit sum of the previous
//! one: 1, 2, 4, 8, 16, 23, 28, 38, 49, 62, ... This crate computes term `n`
//! for `n` up to about 10^15 without visiting every term.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed once per evaluator:
//! - Digit sums of every value of the low-order suffix window
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Owned by one evaluator:
//! - Shortcut store: `(zero run, prefix digit sum, suffix) -> (steps, delta)`
//! - One regime snapshot per zero-run level
//! - Current index and value
//!
//! # Algorithm
//!
//! A value is split into a prefix and a fixed-width suffix. While the prefix
//! (or the part of it above a run of trailing zeros) stays the same, the
//! low-order digits evolve in a way that depends only on the prefix's digit
//! sum. The evaluator records how far each such regime carried the sequence
//! and replays that distance in one jump whenever the same regime reappears.
//! A run to 10^15 takes under 10^5 steps and jumps.
//!
//! # Indexing
//!
//! [`Indexing::Recurrence`] numbers the terms 1, 2, 4, ... from 0.
//! [`Indexing::PrecedingDigitSums`] numbers them 1, 1, 2, 4, ... from 0,
//! where each term is the digit sum of all terms before it.

pub mod engine;
pub mod errors;
pub mod memo;
pub mod shortcuts;
pub mod state;

// Re-export commonly used types
pub use engine::{evaluate, Evaluator, EvaluatorConfig, Indexing};
pub use errors::EvalError;
pub use shortcuts::{ShortcutEntry, ShortcutKey, ShortcutStore};
pub use state::{Counters, Statistics};
