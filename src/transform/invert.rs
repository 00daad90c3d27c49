// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Per-channel inversion transform (self-inverse).
//!
//! Uses the key to decide, per channel, whether to replace values with their
//! complement (`255 - v`) or pass them through. A 3-D buffer gets one
//! decision per channel; a 2-D grayscale buffer gets a single decision.
//! Inverting a channel twice restores it, so the transform is self-inverse.
//!
//! The decision rule is part of the format: draw `channels` bytes from the
//! key-seeded PRNG and invert channel `c` iff bit 0 of byte `c` is set.

use rand::RngCore;
use rayon::prelude::*;

use crate::buffer::PixelBuffer;
use crate::transform::rng::key_rng;

/// Key-seeded boolean per channel: `true` means invert.
fn channel_flags(key: i64, channels: usize) -> Vec<bool> {
    let mut draws = vec![0u8; channels];
    key_rng(key).fill_bytes(&mut draws);
    draws.iter().map(|b| b & 1 == 1).collect()
}

/// Invert the key-selected channels of every pixel unit.
pub(crate) fn apply(buffer: &PixelBuffer, key: i64) -> PixelBuffer {
    let flags = channel_flags(key, buffer.unit_len());
    if flags.iter().all(|&f| !f) {
        return buffer.clone();
    }

    let u = buffer.unit_len();
    let out: Vec<u8> = buffer
        .as_bytes()
        .par_iter()
        .enumerate()
        .map(|(i, &v)| if flags[i % u] { 255 - v } else { v })
        .collect();
    buffer.with_data(out)
}
