// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Pixel buffer storage for decoded raster images.
//!
//! Provides [`PixelBuffer`], an owned grid of 8-bit samples with a
//! `(height, width)` or `(height, width, channels)` shape. Samples are stored
//! interleaved in row-major order, so one "pixel unit" — one spatial
//! position's full channel tuple — is a contiguous run of `channels` bytes.
//!
//! 2-D grayscale and 3-D single-channel are distinct shapes: the invert
//! transform makes one boolean draw for a 2-D buffer but one draw per channel
//! for a 3-D buffer, even when that buffer has a single channel.

use std::fmt;

/// Errors from pixel buffer construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Height, width, or channel count is zero.
    Empty,
    /// Sample data length does not match the declared shape.
    LengthMismatch {
        /// height × width × channels.
        expected: usize,
        /// Actual length of the supplied data.
        actual: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "pixel buffer shape has a zero dimension"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "sample data length {actual} does not match shape (expected {expected})")
            }
        }
    }
}

impl std::error::Error for BufferError {}

/// An owned grid of 8-bit pixel samples.
///
/// Shape is `(height, width)` when `channels` is `None` (2-D grayscale) or
/// `(height, width, channels)` otherwise. Every transform in this crate
/// preserves the shape exactly; only the sample values (or their positions)
/// change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    height: usize,
    width: usize,
    /// `None` for a 2-D grayscale grid, `Some(c)` for a 3-D grid.
    channels: Option<usize>,
    /// Interleaved row-major samples: height × width × channels bytes.
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a 2-D grayscale buffer from `height * width` samples.
    ///
    /// # Errors
    /// - [`BufferError::Empty`] if `height` or `width` is zero.
    /// - [`BufferError::LengthMismatch`] if `data.len() != height * width`.
    pub fn gray(height: usize, width: usize, data: Vec<u8>) -> Result<Self, BufferError> {
        Self::build(height, width, None, data)
    }

    /// Create a 3-D buffer from `height * width * channels` interleaved samples.
    ///
    /// `channels` is typically 1, 3, or 4 (grayscale, RGB, RGBA), but any
    /// non-zero count is accepted.
    ///
    /// # Errors
    /// - [`BufferError::Empty`] if any dimension is zero.
    /// - [`BufferError::LengthMismatch`] if the data length does not match.
    pub fn with_channels(
        height: usize,
        width: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, BufferError> {
        Self::build(height, width, Some(channels), data)
    }

    fn build(
        height: usize,
        width: usize,
        channels: Option<usize>,
        data: Vec<u8>,
    ) -> Result<Self, BufferError> {
        if height == 0 || width == 0 || channels == Some(0) {
            return Err(BufferError::Empty);
        }
        let expected = height * width * channels.unwrap_or(1);
        if data.len() != expected {
            return Err(BufferError::LengthMismatch { expected, actual: data.len() });
        }
        Ok(Self { height, width, channels, data })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Channel count, or `None` for a 2-D grayscale buffer.
    pub fn channels(&self) -> Option<usize> {
        self.channels
    }

    /// Bytes per pixel unit: `channels` for 3-D buffers, 1 for 2-D.
    pub fn unit_len(&self) -> usize {
        self.channels.unwrap_or(1)
    }

    /// Number of pixel units (spatial positions): height × width.
    pub fn unit_count(&self) -> usize {
        self.height * self.width
    }

    /// All samples, interleaved in row-major order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its samples.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// A new buffer with this buffer's shape and the given samples.
    ///
    /// Internal helper for transforms, which always produce output of the
    /// input's exact shape. The length is already known to match.
    pub(crate) fn with_data(&self, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), self.data.len());
        Self {
            height: self.height,
            width: self.width,
            channels: self.channels,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_accepts_matching_length() {
        let buf = PixelBuffer::gray(2, 3, vec![0; 6]).unwrap();
        assert_eq!(buf.height(), 2);
        assert_eq!(buf.width(), 3);
        assert_eq!(buf.channels(), None);
        assert_eq!(buf.unit_len(), 1);
        assert_eq!(buf.unit_count(), 6);
    }

    #[test]
    fn with_channels_accepts_matching_length() {
        let buf = PixelBuffer::with_channels(2, 2, 3, vec![0; 12]).unwrap();
        assert_eq!(buf.channels(), Some(3));
        assert_eq!(buf.unit_len(), 3);
        assert_eq!(buf.unit_count(), 4);
    }

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(PixelBuffer::gray(0, 4, vec![]), Err(BufferError::Empty));
        assert_eq!(PixelBuffer::gray(4, 0, vec![]), Err(BufferError::Empty));
        assert_eq!(
            PixelBuffer::with_channels(2, 2, 0, vec![]),
            Err(BufferError::Empty)
        );
    }

    #[test]
    fn length_mismatch_rejected() {
        assert_eq!(
            PixelBuffer::with_channels(2, 2, 3, vec![0; 11]),
            Err(BufferError::LengthMismatch { expected: 12, actual: 11 })
        );
    }

    #[test]
    fn single_channel_3d_is_not_gray() {
        let gray = PixelBuffer::gray(2, 2, vec![0; 4]).unwrap();
        let one_channel = PixelBuffer::with_channels(2, 2, 1, vec![0; 4]).unwrap();
        assert_ne!(gray, one_channel);
    }
}
