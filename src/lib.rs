// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! # veil-core
//!
//! Pure-Rust engine for keyed, reversible pixel-space obfuscation of raster
//! images. Provides four deterministic transforms over 8-bit pixel buffers,
//! each seeded by an integer key:
//!
//! - **xor**: XOR against a key-seeded pseudo-random mask (self-inverse).
//! - **shift**: per-sample modular add of the key, wrapping at 256.
//! - **shuffle**: key-seeded permutation of pixel positions.
//! - **invert**: key-selected per-channel value inversion (self-inverse).
//!
//! Every transform is a pure function of (buffer, key, method, direction):
//! same inputs always produce byte-identical output, and applying the inverse
//! direction with the same key restores the original buffer exactly. All
//! processing is in-memory and synchronous; GUI frontends and file I/O live
//! outside this crate.
//!
//! This is obfuscation, not encryption — there is no confidentiality
//! guarantee against an attacker who knows the scheme.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use veil_core::{apply, Direction, Method, PixelBuffer};
//!
//! let buf = PixelBuffer::gray(2, 2, vec![10, 20, 30, 40]).unwrap();
//! let scrambled = apply(&buf, 5, Method::Shuffle, Direction::Forward);
//! let restored = apply(&scrambled, 5, Method::Shuffle, Direction::Inverse);
//! assert_eq!(restored.as_bytes(), buf.as_bytes());
//! ```

pub mod buffer;
pub mod pipeline;
pub mod transform;

pub use buffer::{BufferError, PixelBuffer};
pub use pipeline::{decrypt_image, encrypt_image, PipelineError};
pub use transform::error::TransformError;
pub use transform::{apply, apply_named, Direction, Method};
