// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/binpix

//! End-to-end PNG round-trip tests.
//!
//! Every payload below travels the full pipeline: frame → quantized
//! pixels → 2× oversampled canvas → PNG bytes → load → downsample →
//! dequantize → frame parse.

use binpix::{decode_png, encode_to_png, encoded_side};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Reproducible random payload of exact byte length.
fn random_payload(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen()).collect()
}

#[test]
fn empty_payload_roundtrip() {
    let png = encode_to_png(&[]).unwrap();
    let decoded = decode_png(&png).unwrap();
    assert!(decoded.payload.is_empty());
    assert!(decoded.integrity_ok);
}

#[test]
fn assorted_lengths_roundtrip() {
    for (seed, len) in [1usize, 2, 3, 4, 5, 8, 100, 1000, 4096].into_iter().enumerate() {
        let payload = random_payload(len, seed as u64);
        let png = encode_to_png(&payload).unwrap();
        let decoded = decode_png(&png).unwrap();
        assert_eq!(decoded.payload, payload, "length {len}");
        assert!(decoded.integrity_ok, "length {len}");
    }
}

#[test]
fn group_boundary_lengths_roundtrip() {
    // Frame length = payload + 8; exercise every remainder mod 3 on both
    // sides of a group boundary (tests the zero-padded final group).
    for len in [3usize, 6, 9, 297, 298, 299, 300, 301] {
        let payload = random_payload(len, len as u64);
        let decoded = decode_png(&encode_to_png(&payload).unwrap()).unwrap();
        assert_eq!(decoded.payload, payload, "length {len}");
        assert!(decoded.integrity_ok, "length {len}");
    }
}

#[test]
fn all_byte_values_roundtrip() {
    let payload: Vec<u8> = (0..=255u8).cycle().take(1024).collect();
    let decoded = decode_png(&encode_to_png(&payload).unwrap()).unwrap();
    assert_eq!(decoded.payload, payload);
    assert!(decoded.integrity_ok);
}

#[test]
fn size_matches_formula_and_grows_monotonically() {
    let mut last_side = 0u32;
    for len in [0usize, 1, 7, 16, 64, 256, 1024, 10_000] {
        let png = encode_to_png(&random_payload(len, 42)).unwrap();
        let grid = binpix::PixelGrid::from_bytes(&png).unwrap();

        let expected = encoded_side(len);
        assert_eq!(grid.width(), expected, "length {len}");
        assert_eq!(grid.height(), expected, "length {len}");

        // 2 * ceil(sqrt(ceil((len + 8) / 3) * 4)), computed independently.
        let pixels = ((len + 8 + 2) / 3) * 4;
        let formula = 2 * (pixels as f64).sqrt().ceil() as u32;
        assert_eq!(expected, formula, "length {len}");

        assert!(expected >= last_side, "side must not shrink at length {len}");
        last_side = expected;
    }
}

#[test]
fn decode_failure_reports_no_payload() {
    // A tiny all-white PNG cannot satisfy its own (garbage) header.
    let blank = binpix::PixelGrid::filled(6, 6, [255, 255, 255]);
    let png = blank.to_png().unwrap();
    assert!(matches!(
        decode_png(&png),
        Err(binpix::CodecError::FrameTruncated { .. })
    ));
}
