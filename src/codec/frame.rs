// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/binpix

//! Payload frame construction and parsing.
//!
//! The frame is the unit embedded into pixels. Layout:
//!
//! ```text
//! [4 bytes] CRC-32 of everything that follows (little-endian)
//! [4 bytes] payload length (little-endian u32, low 24 bits significant)
//! [N bytes] payload
//! ```
//!
//! All fields are little-endian. Only the low 24 bits of the length field
//! are trusted on parse, which caps payloads at 16 MiB − 1
//! ([`MAX_PAYLOAD_BYTES`]); `build_frame` enforces the cap so the ceiling
//! is an explicit limit rather than a silent truncation.
//!
//! Parsing distinguishes two failure modes: a frame that declares more
//! bytes than the buffer holds is fatal ([`CodecError::FrameTruncated`]),
//! while a CRC mismatch is recoverable: the payload candidate is still
//! returned with `integrity_ok = false` so the caller decides what to do
//! with suspect data.

use crate::codec::error::CodecError;

/// Checksum field width in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// Length field width in bytes.
pub const LENGTH_LEN: usize = 4;

/// Fixed frame overhead: checksum(4) + length(4) = 8 bytes.
pub const FRAME_OVERHEAD: usize = CHECKSUM_LEN + LENGTH_LEN;

/// Mask selecting the semantically trusted bits of the length field.
pub const LENGTH_MASK: u32 = 0x00FF_FFFF;

/// Maximum payload size in bytes (16 MiB − 1).
///
/// The 24-bit length field cannot represent more; `build_frame` rejects
/// larger payloads with [`CodecError::PayloadTooLarge`].
pub const MAX_PAYLOAD_BYTES: usize = LENGTH_MASK as usize;

/// Build a payload frame: `crc32(4) ‖ length(4) ‖ payload`.
///
/// The CRC-32 covers the length field and the payload, so corruption of
/// either is detected on parse. Pure function, no side effects.
///
/// # Errors
/// [`CodecError::PayloadTooLarge`] if the payload does not fit the 24-bit
/// length field.
pub fn build_frame(payload: &[u8]) -> Result<Vec<u8>, CodecError> {
    if payload.len() > MAX_PAYLOAD_BYTES {
        return Err(CodecError::PayloadTooLarge { len: payload.len() });
    }

    let length_bytes = (payload.len() as u32).to_le_bytes();
    let crc = checksum(&length_bytes, payload);

    let mut frame = Vec::with_capacity(FRAME_OVERHEAD + payload.len());
    frame.extend_from_slice(&crc.to_le_bytes());
    frame.extend_from_slice(&length_bytes);
    frame.extend_from_slice(payload);

    Ok(frame)
}

/// A frame parsed back out of a reconstructed byte buffer.
pub struct ParsedFrame {
    /// The payload candidate (exactly the declared length).
    pub payload: Vec<u8>,
    /// Whether the recomputed CRC-32 matched the stored one.
    pub integrity_ok: bool,
}

/// Parse a frame from a reconstructed buffer, verifying the CRC.
///
/// The buffer may be longer than the actual frame (trailing pixel padding
/// decodes to garbage bytes); the declared length bounds the read.
///
/// # Errors
/// [`CodecError::FrameTruncated`] if the buffer is shorter than the header
/// or than the declared payload length. A CRC mismatch is *not* an error;
/// see [`ParsedFrame::integrity_ok`].
pub fn parse_frame(data: &[u8]) -> Result<ParsedFrame, CodecError> {
    if data.len() < FRAME_OVERHEAD {
        return Err(CodecError::FrameTruncated {
            declared: FRAME_OVERHEAD,
            available: data.len(),
        });
    }

    let stored_crc = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let length_bytes = [data[4], data[5], data[6], data[7]];
    let declared = (u32::from_le_bytes(length_bytes) & LENGTH_MASK) as usize;

    let available = data.len() - FRAME_OVERHEAD;
    if declared > available {
        return Err(CodecError::FrameTruncated { declared, available });
    }

    let payload = data[FRAME_OVERHEAD..FRAME_OVERHEAD + declared].to_vec();
    let integrity_ok = checksum(&length_bytes, &payload) == stored_crc;

    Ok(ParsedFrame { payload, integrity_ok })
}

/// CRC-32 over `length_bytes ‖ payload`.
fn checksum(length_bytes: &[u8; LENGTH_LEN], payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(length_bytes);
    hasher.update(payload);
    hasher.finalize()
}
