//! Tile sourcing and tinting for the tinted pipeline.
//!
//! Base sprites are cropped from a reference sheet laid out on a fixed-stride
//! grid, then each character gets its own look by scaling the color channels
//! and boosting contrast.

use image::{imageops, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for tile sourcing
#[derive(Debug, Error)]
pub enum TileError {
    /// The reference image could not be opened or decoded
    #[error("cannot open reference image '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The requested tile does not fit inside the reference image
    #[error("tile ({col}, {row}) at {x},{y} size {size} exceeds reference image {width}x{height}")]
    OutOfBounds { col: u32, row: u32, x: u32, y: u32, size: u32, width: u32, height: u32 },
}

/// Load the reference sheet as RGBA.
pub fn load_source(path: &Path) -> Result<RgbaImage, TileError> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|source| TileError::Open { path: path.to_path_buf(), source })
}

/// Crop the `size` x `size` tile at grid position (`col`, `row`).
///
/// Tiles start every `stride` pixels, so a stride larger than the tile size
/// skips the gutter between tiles.
pub fn extract_tile(
    source: &RgbaImage,
    col: u32,
    row: u32,
    stride: u32,
    size: u32,
) -> Result<RgbaImage, TileError> {
    let x = col * stride;
    let y = row * stride;
    let (width, height) = source.dimensions();
    if x + size > width || y + size > height {
        return Err(TileError::OutOfBounds { col, row, x, y, size, width, height });
    }
    Ok(imageops::crop_imm(source, x, y, size, size).to_image())
}

/// Scale the red, green and blue channels independently.
///
/// Each channel becomes `min(255, round(value * factor))`; alpha is untouched.
pub fn scale_channels(tile: &RgbaImage, factors: [f32; 3]) -> RgbaImage {
    let mut out = tile.clone();
    for pixel in out.pixels_mut() {
        for (channel, factor) in pixel.0.iter_mut().take(3).zip(factors) {
            *channel = (*channel as f32 * factor).round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// ITU-R 601-2 luma of a pixel, ignoring alpha.
fn luma(pixel: &Rgba<u8>) -> u32 {
    let [r, g, b, _] = pixel.0;
    (r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16
}

/// Mean luma over every pixel of the tile, rounded to the nearest level.
pub fn mean_luma(tile: &RgbaImage) -> u8 {
    let count = (tile.width() as u64 * tile.height() as u64).max(1);
    let total: u64 = tile.pixels().map(|p| luma(p) as u64).sum();
    ((total as f64 / count as f64) + 0.5).floor().min(255.0) as u8
}

/// Push colors away from (or towards) the tile's mean gray.
///
/// `factor` 1.0 leaves the tile unchanged; larger values increase contrast.
/// Alpha is untouched.
pub fn enhance_contrast(tile: &RgbaImage, factor: f32) -> RgbaImage {
    let mean = mean_luma(tile) as f32;
    let mut out = tile.clone();
    for pixel in out.pixels_mut() {
        for channel in pixel.0.iter_mut().take(3) {
            let value = mean + factor * (*channel as f32 - mean);
            *channel = if value <= 0.0 {
                0
            } else if value >= 255.0 {
                255
            } else {
                value as u8
            };
        }
    }
    out
}

/// Full per-character tint: channel scaling followed by contrast.
pub fn tint(tile: &RgbaImage, factors: [f32; 3], contrast: f32) -> RgbaImage {
    enhance_contrast(&scale_channels(tile, factors), contrast)
}
