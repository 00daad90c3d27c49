// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Error types for the transform engine.

use std::fmt;

/// Errors that can occur when dispatching a transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The method name is not one of `xor`, `shift`, `shuffle`, `invert`.
    /// Raised before any buffer work.
    UnsupportedMethod(String),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedMethod(name) => {
                write!(f, "unsupported transform method: {name:?}")
            }
        }
    }
}

impl std::error::Error for TransformError {}
