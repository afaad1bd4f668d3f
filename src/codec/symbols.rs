// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/binpix

//! 2-bit symbol quantization and the 3-byte↔4-pixel group layout.
//!
//! Every frame byte decomposes into four 2-bit symbols, most-significant
//! pair first. A symbol rides one 8-bit color channel at levels
//! {0, 85, 170, 255}, so three frame bytes (twelve symbols) fill exactly
//! four RGB pixels:
//!
//! ```text
//! pixel 0 = (b0:7-6, b0:5-4, b0:3-2)
//! pixel 1 = (b0:1-0, b1:7-6, b1:5-4)
//! pixel 2 = (b1:3-2, b1:1-0, b2:7-6)
//! pixel 3 = (b2:5-4, b2:3-2, b2:1-0)
//! ```
//!
//! Encode and decode must use this exact layout; any asymmetry loses all
//! data. A short final group (fewer than 3 bytes) pads absent bytes with
//! zero; the declared frame length keeps the decoder from ever trusting
//! those padding symbols.

/// Channel spacing between adjacent quantization levels: ⌊255 / 3⌋.
///
/// Half a step (42) is the per-channel noise margin the decoder tolerates.
pub const QUANT_STEP: u8 = 85;

/// Frame bytes per group.
pub const GROUP_BYTES: usize = 3;

/// Pixels per group.
pub const GROUP_PIXELS: usize = 4;

/// Symbols (channels) per pixel.
const CHANNELS: usize = 3;

/// Scale a 2-bit symbol to a full-range channel value.
#[inline]
pub fn quantize(symbol: u8) -> u8 {
    debug_assert!(symbol < 4);
    symbol * QUANT_STEP
}

/// Recover the 2-bit symbol nearest to a (possibly noisy) channel value.
///
/// Rounds to the nearest multiple of [`QUANT_STEP`] and clamps to 3:
/// channel values above 233 would round to 4, which is treated as
/// recoverable lossy-channel noise rather than an error.
#[inline]
pub fn dequantize(channel: u8) -> u8 {
    let symbol = (channel as u16 + QUANT_STEP as u16 / 2) / QUANT_STEP as u16;
    symbol.min(3) as u8
}

/// Pack up to 3 frame bytes into 4 quantized RGB pixels.
///
/// Absent trailing bytes in `bytes` contribute symbol value 0.
pub fn pack_group(bytes: &[u8]) -> [[u8; CHANNELS]; GROUP_PIXELS] {
    debug_assert!(!bytes.is_empty() && bytes.len() <= GROUP_BYTES);

    let mut group = [0u8; GROUP_BYTES];
    group[..bytes.len()].copy_from_slice(bytes);

    let mut pixels = [[0u8; CHANNELS]; GROUP_PIXELS];
    for (i, &byte) in group.iter().enumerate() {
        for pair in 0..4 {
            let symbol = (byte >> (6 - 2 * pair)) & 0b11;
            let channel = i * 4 + pair;
            pixels[channel / CHANNELS][channel % CHANNELS] = quantize(symbol);
        }
    }
    pixels
}

/// Reassemble 3 frame bytes from 4 (possibly noisy) RGB pixels.
///
/// Exact inverse of [`pack_group`] for clean input; for perturbed input
/// each channel snaps to the nearest quantization level first.
pub fn unpack_group(pixels: &[[u8; CHANNELS]; GROUP_PIXELS]) -> [u8; GROUP_BYTES] {
    let mut bytes = [0u8; GROUP_BYTES];
    for (channel, value) in pixels.iter().flatten().enumerate() {
        let symbol = dequantize(*value);
        bytes[channel / 4] |= symbol << (6 - 2 * (channel % 4));
    }
    bytes
}
