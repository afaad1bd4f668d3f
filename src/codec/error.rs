// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/binpix

//! Error types for the byte↔pixel codec.
//!
//! [`CodecError`] covers the fatal failure modes of encode and decode.
//! A checksum mismatch is deliberately *not* an error: the decoder still
//! returns the payload candidate and surfaces the mismatch through the
//! `integrity_ok` flag on [`crate::Decoded`].

use core::fmt;

/// Fatal errors from encoding or decoding.
#[derive(Debug)]
pub enum CodecError {
    /// The payload exceeds the 24-bit length field
    /// ([`crate::MAX_PAYLOAD_BYTES`]).
    PayloadTooLarge {
        /// Actual payload length in bytes.
        len: usize,
    },
    /// The reconstructed frame declares more payload bytes than the image
    /// contains. The image is too small (or truncated) for its own header.
    FrameTruncated {
        /// Payload length declared by the frame header.
        declared: usize,
        /// Payload bytes actually available after the header.
        available: usize,
    },
    /// The input could not be loaded or saved as a raster image.
    InvalidImage(image::ImageError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PayloadTooLarge { len } => {
                write!(f, "payload of {len} bytes exceeds the 24-bit length field")
            }
            Self::FrameTruncated { declared, available } => {
                write!(
                    f,
                    "frame declares {declared} payload bytes but only {available} are available"
                )
            }
            Self::InvalidImage(e) => write!(f, "invalid image: {e}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidImage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for CodecError {
    fn from(e: image::ImageError) -> Self {
        Self::InvalidImage(e)
    }
}
