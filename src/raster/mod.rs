// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/binpix

//! Raster image abstraction over the `image` crate.
//!
//! The codec never touches a concrete image container directly: it works
//! on a [`PixelGrid`] of three 8-bit channels, addressed row-major by
//! linear index. This module provides load (any format the `image` crate
//! detects), save (always PNG; the container must be lossless, the frame
//! CRC exists to catch anything that isn't) and the 2× box resampling in
//! [`resample`].

pub mod resample;

pub use resample::{downsample2x, upsample2x};

use std::io::Cursor;

use image::{ImageOutputFormat, Rgb, RgbImage};

use crate::codec::error::CodecError;

/// Background fill for unused canvas cells.
pub const FILL: [u8; 3] = [255, 255, 255];

/// A row-major RGB pixel grid.
///
/// Linear index `i` maps to `(i % width, i / width)`.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    img: RgbImage,
}

impl PixelGrid {
    /// Create a `width × height` grid with every cell set to `fill`.
    pub fn filled(width: u32, height: u32, fill: [u8; 3]) -> Self {
        Self {
            img: RgbImage::from_pixel(width, height, Rgb(fill)),
        }
    }

    /// Decode a grid from encoded image bytes (format auto-detected).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let img = image::load_from_memory(bytes)?.to_rgb8();
        Ok(Self { img })
    }

    /// Encode the grid as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        self.img
            .write_to(&mut Cursor::new(&mut out), ImageOutputFormat::Png)?;
        Ok(out)
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Total number of pixels.
    pub fn len(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write the pixel at linear index `i`. Panics if out of bounds.
    pub fn put(&mut self, i: usize, rgb: [u8; 3]) {
        let w = self.width() as usize;
        self.img
            .put_pixel((i % w) as u32, (i / w) as u32, Rgb(rgb));
    }

    /// Read the pixel at linear index `i`, or `None` past the grid.
    pub fn get(&self, i: usize) -> Option<[u8; 3]> {
        if i >= self.len() {
            return None;
        }
        let w = self.width() as usize;
        Some(self.img.get_pixel((i % w) as u32, (i / w) as u32).0)
    }

    pub(crate) fn as_image(&self) -> &RgbImage {
        &self.img
    }

    pub(crate) fn from_image(img: RgbImage) -> Self {
        Self { img }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_grid_is_uniform() {
        let grid = PixelGrid::filled(4, 3, FILL);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        for i in 0..grid.len() {
            assert_eq!(grid.get(i), Some(FILL));
        }
        assert_eq!(grid.get(12), None);
    }

    #[test]
    fn linear_index_is_row_major() {
        let mut grid = PixelGrid::filled(3, 3, [0, 0, 0]);
        grid.put(4, [1, 2, 3]); // (1, 1)
        assert_eq!(grid.as_image().get_pixel(1, 1).0, [1, 2, 3]);
        grid.put(7, [9, 9, 9]); // (1, 2)
        assert_eq!(grid.as_image().get_pixel(1, 2).0, [9, 9, 9]);
    }

    #[test]
    fn png_roundtrip_preserves_pixels() {
        let mut grid = PixelGrid::filled(5, 5, FILL);
        grid.put(0, [0, 85, 170]);
        grid.put(13, [255, 0, 85]);

        let png = grid.to_png().unwrap();
        let back = PixelGrid::from_bytes(&png).unwrap();
        assert_eq!(back.width(), 5);
        assert_eq!(back.height(), 5);
        for i in 0..grid.len() {
            assert_eq!(grid.get(i), back.get(i), "pixel {i}");
        }
    }

    #[test]
    fn garbage_bytes_rejected() {
        assert!(matches!(
            PixelGrid::from_bytes(b"not an image"),
            Err(CodecError::InvalidImage(_))
        ));
    }
}
