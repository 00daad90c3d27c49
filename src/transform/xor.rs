// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! XOR mask transform (self-inverse).
//!
//! Generates a pseudo-random byte mask the same size as the buffer from the
//! key-seeded PRNG and XORs it in element-wise. XOR is its own inverse, so
//! the same call both obscures and restores.

use rand::RngCore;
use rayon::prelude::*;

use crate::buffer::PixelBuffer;
use crate::transform::rng::key_rng;

/// XOR every sample against a key-seeded mask.
pub(crate) fn apply(buffer: &PixelBuffer, key: i64) -> PixelBuffer {
    // The mask is drawn sequentially (it is a single PRNG stream); the XOR
    // pass itself is element-wise and runs in parallel.
    let mut mask = vec![0u8; buffer.as_bytes().len()];
    key_rng(key).fill_bytes(&mut mask);

    let out: Vec<u8> = buffer
        .as_bytes()
        .par_iter()
        .zip(mask.par_iter())
        .map(|(&v, &m)| v ^ m)
        .collect();
    buffer.with_data(out)
}
