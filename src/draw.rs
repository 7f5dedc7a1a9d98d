//! Scaled rectangle drawing on an RGBA canvas.
//!
//! A [`Pen`] works in logical pixels: every rectangle is multiplied by the
//! pen's integer scale before it lands on the canvas, so a 32x64 logical
//! figure fills a 256x512 cell at scale 8.

use image::{Rgba, RgbaImage};

use crate::shapes::{clip, rasterize_rect, PixelSet};

/// Integer-scaled rectangle painter borrowing a canvas.
pub struct Pen<'a> {
    canvas: &'a mut RgbaImage,
    scale: u32,
}

impl<'a> Pen<'a> {
    /// Create a pen. A scale of 0 is treated as 1.
    pub fn new(canvas: &'a mut RgbaImage, scale: u32) -> Self {
        Self { canvas, scale: scale.max(1) }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Fill the logical rectangle `(x, y, w, h)` with `color`.
    ///
    /// Overwrites the destination, clipped to the canvas. Does nothing when
    /// either dimension is not positive.
    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba<u8>) {
        let (width, height) = self.canvas.dimensions();
        let s = self.scale;
        for (lx, ly) in clip(rasterize_rect(x, y, w, h), width.div_ceil(s), height.div_ceil(s)) {
            for py in ly * s..((ly + 1) * s).min(height) {
                for px in lx * s..((lx + 1) * s).min(width) {
                    self.canvas.put_pixel(px, py, color);
                }
            }
        }
    }
}

/// Overwrite individual pixels of an unscaled buffer, clipped to its bounds.
pub fn stamp(canvas: &mut RgbaImage, pixels: PixelSet, color: Rgba<u8>) {
    let (width, height) = canvas.dimensions();
    for (x, y) in clip(pixels, width, height) {
        canvas.put_pixel(x, y, color);
    }
}
