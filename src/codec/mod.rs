// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/binpix

//! The byte↔pixel codec.
//!
//! [`encode`] turns a payload into a square, 2×-oversampled pixel grid;
//! [`decode`] is its structural inverse. Both directions share the frame
//! format (`frame`) and the symbol quantization and group layout
//! (`symbols`). The two sides must agree bit-for-bit or all data is
//! lost, which is why the layout lives in one module with dedicated
//! per-mapping tests.

pub mod error;
pub mod frame;
pub mod symbols;
mod pipeline;

pub use pipeline::{decode, decode_png, encode, encode_to_png, encoded_side, Decoded};
