// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Transform engine: dispatch over the four keyed obfuscation methods.
//!
//! [`apply`] is the engine's whole contract: given a pixel buffer, an integer
//! key, a [`Method`], and a [`Direction`], it returns a fresh buffer of the
//! identical shape. Each call is a pure function — the engine holds no state,
//! seeds no global generator, and never touches the input buffer, so any
//! number of calls may run concurrently on independent buffers.
//!
//! Direction handling is the engine's job, not the caller's: xor and invert
//! are self-inverse (direction is ignored), shift negates the key for the
//! inverse, and shuffle switches between scatter and gather over the same
//! key-derived permutation.

pub mod error;
mod invert;
mod rng;
mod shift;
mod shuffle;
mod xor;

use std::fmt;
use std::str::FromStr;

use crate::buffer::PixelBuffer;
use error::TransformError;

/// The four obfuscation methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// XOR against a key-seeded pseudo-random mask. Self-inverse.
    Xor,
    /// Per-sample modular add of the key (wraps at 256).
    Shift,
    /// Key-seeded permutation of pixel positions.
    Shuffle,
    /// Key-selected per-channel value inversion. Self-inverse.
    Invert,
}

impl Method {
    /// All methods, in their canonical order.
    pub const ALL: [Method; 4] = [Method::Xor, Method::Shift, Method::Shuffle, Method::Invert];

    /// The canonical string identifier (`"xor"`, `"shift"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xor => "xor",
            Self::Shift => "shift",
            Self::Shuffle => "shuffle",
            Self::Invert => "invert",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xor" => Ok(Self::Xor),
            "shift" => Ok(Self::Shift),
            "shuffle" => Ok(Self::Shuffle),
            "invert" => Ok(Self::Invert),
            other => Err(TransformError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// Whether to obscure (`Forward`) or restore (`Inverse`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Inverse,
}

/// Apply one transform to `buffer` and return the result.
///
/// Total over valid buffers: with a parsed [`Method`] no failure is possible,
/// and the output always has the input's exact shape. For every method,
/// applying `Forward` and then `Inverse` with the same key restores the
/// original buffer byte for byte.
pub fn apply(buffer: &PixelBuffer, key: i64, method: Method, direction: Direction) -> PixelBuffer {
    match method {
        Method::Xor => xor::apply(buffer, key),
        Method::Shift => match direction {
            Direction::Forward => shift::apply(buffer, key),
            Direction::Inverse => shift::apply(buffer, key.wrapping_neg()),
        },
        Method::Shuffle => match direction {
            Direction::Forward => shuffle::scatter(buffer, key),
            Direction::Inverse => shuffle::gather(buffer, key),
        },
        Method::Invert => invert::apply(buffer, key),
    }
}

/// [`apply`] with the method given by its string identifier.
///
/// # Errors
/// [`TransformError::UnsupportedMethod`] if `method` is not one of the four
/// known identifiers. The buffer is not touched in that case.
pub fn apply_named(
    buffer: &PixelBuffer,
    key: i64,
    method: &str,
    direction: Direction,
) -> Result<PixelBuffer, TransformError> {
    let method = Method::from_str(method)?;
    Ok(apply(buffer, key, method, direction))
}
