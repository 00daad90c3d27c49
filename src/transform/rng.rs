// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Key-seeded deterministic pseudo-random source.
//!
//! All key-driven transforms (xor, shuffle, invert) draw from a ChaCha20 PRNG
//! constructed identically from the integer key, so the same key reproduces
//! the same mask, permutation, and channel choices on every call. The
//! generator is built fresh inside each transform call — there is no hidden
//! process-wide random state, and concurrent calls never share a generator.
//!
//! # Seed derivation
//!
//! The 32-byte ChaCha20 seed is the key's 8 little-endian bytes tiled four
//! times. This mapping is part of the format: a port in another language must
//! derive the same seed to interoperate.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Build the deterministic PRNG for `key`.
pub(crate) fn key_rng(key: i64) -> ChaCha20Rng {
    let kb = key.to_le_bytes();
    let mut seed = [0u8; 32];
    for (i, b) in seed.iter_mut().enumerate() {
        *b = kb[i % 8];
    }
    ChaCha20Rng::from_seed(seed)
}
