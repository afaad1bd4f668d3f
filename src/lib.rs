// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/binpix

//! # binpix
//!
//! Bidirectional byte↔pixel codec: packs an arbitrary binary payload into
//! the pixels of a square PNG and recovers the original bytes from that
//! image, even after a lossy resize round-trip.
//!
//! The pipeline:
//!
//! - **Framing**: the payload is wrapped in a CRC-32 + 24-bit length frame
//!   so the decoder can detect corruption (`codec::frame`).
//! - **Quantization**: every frame byte splits into four 2-bit symbols,
//!   each carried by one color channel at levels {0, 85, 170, 255}. The
//!   85-step spacing leaves a ±42 margin per channel, well outside typical
//!   recompression noise (`codec::symbols`).
//! - **Oversampling**: the square canvas is doubled with a box filter
//!   before saving, so every logical pixel becomes a redundant 2×2 block.
//!   Decode halves the image with the same filter family (`raster`).
//!
//! Encode and decode are strict structural inverses; their quantization
//! tables and bit layouts must match exactly or all data is lost.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use binpix::{encode_to_png, decode_png};
//!
//! let png = encode_to_png(b"hello").unwrap();
//! let decoded = decode_png(&png).unwrap();
//! assert_eq!(decoded.payload, b"hello");
//! assert!(decoded.integrity_ok);
//! ```

pub mod codec;
pub mod raster;

pub use codec::error::CodecError;
pub use codec::frame::MAX_PAYLOAD_BYTES;
pub use codec::{decode, decode_png, encode, encode_to_png, encoded_side, Decoded};
pub use raster::PixelGrid;
