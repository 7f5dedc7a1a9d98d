//! Pixel-set rasterization for stamps and rectangle fills.
//!
//! Shapes are returned as ordered sets of integer coordinates so callers can
//! clip and paint them without caring about duplicates.

use std::collections::BTreeSet;

/// A set of pixel coordinates, ordered by (x, y).
pub type PixelSet = BTreeSet<(i32, i32)>;

/// Rasterize a set of points.
///
/// # Examples
///
/// ```
/// use charsheet::shapes::rasterize_points;
///
/// let pixels = rasterize_points(&[(6, 14), (6, 15), (7, 15), (6, 14)]);
/// assert_eq!(pixels.len(), 3);
/// ```
pub fn rasterize_points(points: &[(i32, i32)]) -> PixelSet {
    points.iter().copied().collect()
}

/// Rasterize a line using Bresenham's line algorithm.
///
/// # Examples
///
/// ```
/// use charsheet::shapes::rasterize_line;
///
/// let pixels = rasterize_line((3, 13), (12, 13));
/// assert_eq!(pixels.len(), 10);
/// ```
pub fn rasterize_line(p0: (i32, i32), p1: (i32, i32)) -> PixelSet {
    let mut pixels = PixelSet::new();

    let (mut x0, mut y0) = p0;
    let (x1, y1) = p1;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        pixels.insert((x0, y0));

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }

    pixels
}

/// Rasterize a filled rectangle with top-left corner (x, y) and size (w, h).
///
/// Empty when either dimension is not positive.
pub fn rasterize_rect(x: i32, y: i32, w: i32, h: i32) -> PixelSet {
    let mut pixels = PixelSet::new();
    if w <= 0 || h <= 0 {
        return pixels;
    }
    for dy in 0..h {
        for dx in 0..w {
            pixels.insert((x + dx, y + dy));
        }
    }
    pixels
}

/// Keep only the pixels inside a `width` x `height` canvas.
pub fn clip(pixels: PixelSet, width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    pixels.into_iter().filter_map(move |(x, y)| {
        if x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height {
            Some((x as u32, y as u32))
        } else {
            None
        }
    })
}
