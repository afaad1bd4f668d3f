// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/binpix

//! Encode/decode pipelines.
//!
//! One-shot and synchronous in both directions; no state crosses calls.
//!
//! Encode: payload → frame → symbol groups → square white canvas → 2× box
//! upsample. Decode is the structural inverse: 2× box downsample →
//! row-major group read (out-of-bounds pixels default to 0) → frame parse
//! with CRC verification.

use crate::codec::error::CodecError;
use crate::codec::frame;
use crate::codec::symbols::{self, GROUP_BYTES, GROUP_PIXELS};
use crate::raster::{self, PixelGrid, FILL};

/// Result of a decode: the payload candidate plus the integrity verdict.
///
/// A CRC mismatch does not suppress the payload: callers get the suspect
/// bytes and decide for themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The recovered payload (exactly the declared length).
    pub payload: Vec<u8>,
    /// True iff the recomputed CRC-32 matched the embedded one.
    pub integrity_ok: bool,
}

/// Encode a payload into a square, 2×-oversampled pixel grid.
///
/// Deterministic: the same payload always produces the same image. The
/// output side length is [`encoded_side`]`(payload.len())`, always even.
///
/// # Errors
/// [`CodecError::PayloadTooLarge`] if the payload exceeds
/// [`frame::MAX_PAYLOAD_BYTES`].
pub fn encode(payload: &[u8]) -> Result<PixelGrid, CodecError> {
    let framed = frame::build_frame(payload)?;

    let groups = div_ceil(framed.len(), GROUP_BYTES);
    let pixel_count = groups * GROUP_PIXELS;
    let side = ceil_sqrt(pixel_count);

    let mut canvas = PixelGrid::filled(side, side, FILL);
    for (g, chunk) in framed.chunks(GROUP_BYTES).enumerate() {
        let pixels = symbols::pack_group(chunk);
        for (j, rgb) in pixels.iter().enumerate() {
            canvas.put(g * GROUP_PIXELS + j, *rgb);
        }
    }

    Ok(raster::upsample2x(&canvas))
}

/// Encode a payload and persist it as PNG bytes.
pub fn encode_to_png(payload: &[u8]) -> Result<Vec<u8>, CodecError> {
    encode(payload)?.to_png()
}

/// Decode a pixel grid back into the payload it carries.
///
/// Tolerates grids that were resized or recompressed in transit: each
/// channel snaps to the nearest quantization level, and the frame CRC
/// reports whether the result is trustworthy.
///
/// # Errors
/// [`CodecError::FrameTruncated`] if the image is too small for the
/// payload length its own header declares.
pub fn decode(grid: &PixelGrid) -> Result<Decoded, CodecError> {
    let half = raster::downsample2x(grid);

    // Full row-major sweep; trailing white padding decodes to 0xFF bytes
    // but the declared length bounds what parse_frame trusts.
    let groups = div_ceil(half.len(), GROUP_PIXELS);
    let mut buf = Vec::with_capacity(groups * GROUP_BYTES);
    for g in 0..groups {
        let mut pixels = [[0u8; 3]; GROUP_PIXELS];
        for (j, pixel) in pixels.iter_mut().enumerate() {
            if let Some(rgb) = half.get(g * GROUP_PIXELS + j) {
                *pixel = rgb;
            }
        }
        buf.extend_from_slice(&symbols::unpack_group(&pixels));
    }

    let parsed = frame::parse_frame(&buf)?;
    Ok(Decoded {
        payload: parsed.payload,
        integrity_ok: parsed.integrity_ok,
    })
}

/// Load an image from bytes (format auto-detected) and decode it.
pub fn decode_png(bytes: &[u8]) -> Result<Decoded, CodecError> {
    decode(&PixelGrid::from_bytes(bytes)?)
}

/// Side length of the final (post-oversampling) image for a payload of
/// `payload_len` bytes: `2 * ceil(sqrt(ceil((len + 8) / 3) * 4))`.
pub fn encoded_side(payload_len: usize) -> u32 {
    let framed = frame::FRAME_OVERHEAD + payload_len;
    let pixel_count = div_ceil(framed, GROUP_BYTES) * GROUP_PIXELS;
    2 * ceil_sqrt(pixel_count)
}

fn div_ceil(n: usize, d: usize) -> usize {
    (n + d - 1) / d
}

/// Smallest `s` with `s * s >= n`. Integer-exact (no float rounding).
fn ceil_sqrt(n: usize) -> u32 {
    let mut s = (n as f64).sqrt() as usize;
    while s * s < n {
        s += 1;
    }
    while s > 0 && (s - 1) * (s - 1) >= n {
        s -= 1;
    }
    s as u32
}
