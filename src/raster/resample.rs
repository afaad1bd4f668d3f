// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/binpix

//! 2× box-filter resampling.
//!
//! The encoder doubles the canvas before saving; the decoder halves the
//! image before reading. Both directions use the box/area kernel so the
//! pair is a clean inverse: upsampling replicates each pixel into a 2×2
//! block, downsampling averages each 2×2 block back into one pixel. Any
//! noise a lossy transport adds inside a block is averaged away as long
//! as it stays within the ±42 quantization margin per channel.

use image::imageops::{self, FilterType};

use crate::raster::PixelGrid;

/// Double the grid with a box filter.
///
/// At an exact 2× ratio the box kernel degenerates to replication: each
/// source pixel becomes an identical 2×2 block (nearest-neighbor computes
/// precisely this).
pub fn upsample2x(grid: &PixelGrid) -> PixelGrid {
    let (w, h) = (grid.width(), grid.height());
    let doubled = imageops::resize(grid.as_image(), w * 2, h * 2, FilterType::Nearest);
    PixelGrid::from_image(doubled)
}

/// Halve the grid with a box filter (area average of each 2×2 block).
///
/// `thumbnail` computes the exact per-block mean at an integer ratio.
/// Odd dimensions (a perturbed input the encoder never produces) floor to
/// `max(1, d / 2)`.
pub fn downsample2x(grid: &PixelGrid) -> PixelGrid {
    let w = (grid.width() / 2).max(1);
    let h = (grid.height() / 2).max(1);
    let halved = imageops::thumbnail(grid.as_image(), w, h);
    PixelGrid::from_image(halved)
}
