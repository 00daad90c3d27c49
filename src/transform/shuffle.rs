// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Pixel-position shuffle transform.
//!
//! Treats the buffer as a flat sequence of pixel units (one spatial
//! position's full channel tuple) and permutes their positions with a
//! key-seeded Fisher-Yates shuffle. Forward scatters unit `i` to slot
//! `P[i]`; inverse gathers unit `i` from slot `P[i]`. Both directions
//! regenerate the identical permutation from the key — it is never stored.
//!
//! # Cross-platform portability
//!
//! The Fisher-Yates shuffle uses `u32` for `gen_range` (not `usize`) to
//! ensure identical permutations on all platforms. `usize` is 32-bit on WASM
//! but 64-bit on native, which causes `rand::Rng::gen_range` to consume
//! different amounts of PRNG entropy per step — producing completely
//! different shuffles.

use rand::Rng;
use rayon::prelude::*;

use crate::buffer::PixelBuffer;
use crate::transform::rng::key_rng;

/// Generate the permutation of `[0, n)` for `key`.
///
/// `P[i]` is the destination slot for the unit originally at position `i`.
/// Shared by both directions so scatter and gather are exact inverses of the
/// same bijection.
fn seeded_permutation(key: i64, n: usize) -> Vec<usize> {
    let mut rng = key_rng(key);
    let mut perm: Vec<usize> = (0..n).collect();
    for i in (1..n).rev() {
        let j = rng.gen_range(0..=(i as u32)) as usize;
        perm.swap(i, j);
    }
    perm
}

/// Forward direction: move unit `i` to slot `P[i]`.
pub(crate) fn scatter(buffer: &PixelBuffer, key: i64) -> PixelBuffer {
    let u = buffer.unit_len();
    let perm = seeded_permutation(key, buffer.unit_count());
    let src = buffer.as_bytes();

    let mut out = vec![0u8; src.len()];
    for (i, &dst) in perm.iter().enumerate() {
        out[dst * u..(dst + 1) * u].copy_from_slice(&src[i * u..(i + 1) * u]);
    }
    buffer.with_data(out)
}

/// Inverse direction: take unit `i` from slot `P[i]`.
pub(crate) fn gather(buffer: &PixelBuffer, key: i64) -> PixelBuffer {
    let u = buffer.unit_len();
    let perm = seeded_permutation(key, buffer.unit_count());
    let src = buffer.as_bytes();

    // Each output unit reads from an independent source slot, so the gather
    // parallelizes cleanly.
    let mut out = vec![0u8; src.len()];
    out.par_chunks_mut(u)
        .zip(perm.par_iter())
        .for_each(|(unit, &from)| {
            unit.copy_from_slice(&src[from * u..(from + 1) * u]);
        });
    buffer.with_data(out)
}
