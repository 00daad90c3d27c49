// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Modular shift transform.
//!
//! Adds the key to every sample modulo 256. Values wrap at the 0/255
//! boundary rather than clamping — clamping would destroy information and
//! break the round-trip law. The inverse is the same formula with the key
//! negated; the dispatcher handles the negation, not the caller.

use rayon::prelude::*;

use crate::buffer::PixelBuffer;

/// Add `key` to every sample, wrapping modulo 256.
pub(crate) fn apply(buffer: &PixelBuffer, key: i64) -> PixelBuffer {
    // Only the key's residue mod 256 matters; reduce once so the per-sample
    // arithmetic fits in i16 (the wider type that absorbs the pre-modulo sum).
    let k = key.rem_euclid(256) as i16;
    let out: Vec<u8> = buffer
        .as_bytes()
        .par_iter()
        .map(|&v| ((v as i16 + k) % 256) as u8)
        .collect();
    buffer.with_data(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_key_mod_256() {
        let buf = PixelBuffer::gray(2, 2, vec![10, 20, 30, 40]).unwrap();
        let shifted = apply(&buf, 5);
        assert_eq!(shifted.as_bytes(), &[15, 25, 35, 45]);
    }

    #[test]
    fn wraps_at_boundary() {
        let buf = PixelBuffer::gray(1, 3, vec![250, 255, 0]).unwrap();
        let shifted = apply(&buf, 10);
        assert_eq!(shifted.as_bytes(), &[4, 9, 10]);
    }

    #[test]
    fn negative_key_wraps_downward() {
        let buf = PixelBuffer::gray(1, 2, vec![3, 200]).unwrap();
        let shifted = apply(&buf, -5);
        assert_eq!(shifted.as_bytes(), &[254, 195]);
    }

    #[test]
    fn negated_key_is_exact_inverse() {
        let data: Vec<u8> = (0..=255).collect();
        let buf = PixelBuffer::gray(16, 16, data).unwrap();
        for key in [0i64, 1, 5, 255, 256, 1000, -1, -300, i64::MAX, i64::MIN] {
            let forward = apply(&buf, key);
            let back = apply(&forward, key.wrapping_neg());
            assert_eq!(back, buf, "round-trip failed for key {key}");
        }
    }

    #[test]
    fn key_multiple_of_256_is_identity() {
        let buf = PixelBuffer::gray(1, 4, vec![0, 100, 200, 255]).unwrap();
        assert_eq!(apply(&buf, 512), buf);
        assert_eq!(apply(&buf, -256), buf);
    }
}
