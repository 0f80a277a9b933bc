// Copyright (C) 2025 Jeremy J. Carroll.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use digit_sum_sequence::memo::digit_sum;

/// The first `count` terms computed one step at a time.
pub fn naive_terms(count: usize) -> Vec<u64> {
    let mut terms = Vec::with_capacity(count);
    let mut a = 1u64;
    for _ in 0..count {
        terms.push(a);
        a += digit_sum(a) as u64;
    }
    terms
}

/// A spread of indices below `limit`: every index up to 300 plus a
/// deterministic scatter above it.
pub fn sample_indices(limit: u64) -> Vec<u64> {
    let mut indices: Vec<u64> = (0..300.min(limit)).collect();
    let mut x = 0x9E37_79B9_7F4A_7C15u64;
    for _ in 0..60 {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        indices.push(x % limit);
    }
    indices
}
