//! Pose decorations for tinted tiles.
//!
//! A pose is a handful of pixel stamps on top of the character's base tile,
//! sometimes after nudging the sprite inside its tile. Stamps overwrite the
//! tile (no blending).

use image::{imageops, Rgba, RgbaImage};

use crate::cast::Pose;
use crate::draw::stamp;
use crate::shapes::{rasterize_line, rasterize_points};

const SCREEN_GLOW: Rgba<u8> = Rgba([90, 170, 220, 220]);
const SCREEN_HIGHLIGHT: Rgba<u8> = Rgba([180, 220, 255, 220]);
const THOUGHT: Rgba<u8> = Rgba([220, 230, 255, 255]);
const THOUGHT_TIP: Rgba<u8> = Rgba([220, 230, 255, 220]);
const LEG_HIGHLIGHT: Rgba<u8> = Rgba([45, 45, 55, 255]);
const CLOSED_EYE: Rgba<u8> = Rgba([35, 35, 45, 255]);

/// Bounding box `(x, y, w, h)` of the pixels with non-zero alpha.
pub fn opaque_bounds(tile: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in tile.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    bounds.map(|(x0, y0, x1, y1)| (x0, y0, x1 - x0 + 1, y1 - y0 + 1))
}

/// Re-pad the sprite inside a canvas of the same size.
///
/// The opaque part of the tile is placed at `round((W - w) * cx)`,
/// `round((H - h) * cy)`, so `(0.5, 0.5)` centers it and other values bias
/// it towards one side. Centering factors are clamped to `0.0..=1.0`. A fully
/// transparent tile is returned unchanged.
pub fn recenter(tile: &RgbaImage, centering: (f32, f32)) -> RgbaImage {
    let Some((bx, by, bw, bh)) = opaque_bounds(tile) else {
        return tile.clone();
    };
    let (width, height) = tile.dimensions();
    let sprite = imageops::crop_imm(tile, bx, by, bw, bh).to_image();

    let x = ((width - bw) as f32 * centering.0.clamp(0.0, 1.0)).round() as i64;
    let y = ((height - bh) as f32 * centering.1.clamp(0.0, 1.0)).round() as i64;

    let mut out = RgbaImage::new(width, height);
    imageops::replace(&mut out, &sprite, x, y);
    out
}

/// Apply the decorations of `pose` to a tinted base tile.
///
/// `glyph` colors the sleeping "z" and is chosen per character. Idle returns
/// the base unchanged.
pub fn decorate(base: &RgbaImage, pose: Pose, glyph: Rgba<u8>) -> RgbaImage {
    match pose {
        Pose::Idle => base.clone(),
        Pose::Typing => {
            // Lit screen under the hands
            let mut tile = recenter(base, (0.5, 0.55));
            stamp(&mut tile, rasterize_line((3, 13), (12, 13)), SCREEN_GLOW);
            stamp(&mut tile, rasterize_points(&[(4, 12), (11, 12)]), SCREEN_HIGHLIGHT);
            tile
        }
        Pose::Thinking => {
            let mut tile = base.clone();
            stamp(&mut tile, rasterize_points(&[(11, 2), (12, 1)]), THOUGHT);
            stamp(&mut tile, rasterize_points(&[(13, 0)]), THOUGHT_TIP);
            tile
        }
        Pose::Walk1 => {
            let mut tile = recenter(base, (0.47, 0.5));
            stamp(&mut tile, rasterize_points(&[(6, 14), (6, 15), (7, 15)]), LEG_HIGHLIGHT);
            tile
        }
        Pose::Walk2 => {
            let mut tile = recenter(base, (0.53, 0.5));
            stamp(&mut tile, rasterize_points(&[(9, 14), (9, 15), (8, 15)]), LEG_HIGHLIGHT);
            tile
        }
        Pose::Sleeping => {
            let mut tile = recenter(base, (0.5, 0.58));
            stamp(&mut tile, rasterize_points(&[(6, 6), (9, 6)]), CLOSED_EYE);
            stamp(&mut tile, rasterize_points(&[(12, 1), (13, 1), (12, 2)]), glyph);
            tile
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: Rgba<u8> = Rgba([200, 100, 50, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);
    const GLYPH: Rgba<u8> = Rgba([240, 210, 120, 255]);

    /// 16x16 tile with an opaque 6x8 body at (2, 2)
    fn off_center_tile() -> RgbaImage {
        let mut tile = RgbaImage::new(16, 16);
        for y in 2..10 {
            for x in 2..8 {
                tile.put_pixel(x, y, BODY);
            }
        }
        tile
    }

    #[test]
    fn test_opaque_bounds() {
        assert_eq!(opaque_bounds(&off_center_tile()), Some((2, 2, 6, 8)));
        assert_eq!(opaque_bounds(&RgbaImage::new(4, 4)), None);
    }

    #[test]
    fn test_recenter_centers_content() {
        let tile = recenter(&off_center_tile(), (0.5, 0.5));
        assert_eq!(opaque_bounds(&tile), Some((5, 4, 6, 8)));
        assert_eq!(tile.pixels().filter(|p| **p == BODY).count(), 48);
    }

    #[test]
    fn test_recenter_bias() {
        // (16 - 6) * 0.47 = 4.7 -> 5, (16 - 6) * 0.53 = 5.3 -> 5
        let left = recenter(&off_center_tile(), (0.47, 0.5));
        let right = recenter(&off_center_tile(), (0.53, 0.5));
        assert_eq!(opaque_bounds(&left).map(|b| b.0), Some(5));
        assert_eq!(opaque_bounds(&right).map(|b| b.0), Some(5));

        // (16 - 8) * 0.58 = 4.64 -> 5
        let low = recenter(&off_center_tile(), (0.5, 0.58));
        assert_eq!(opaque_bounds(&low).map(|b| b.1), Some(5));
    }

    #[test]
    fn test_recenter_full_tile_is_identity() {
        let tile = RgbaImage::from_pixel(16, 16, BODY);
        assert_eq!(recenter(&tile, (0.47, 0.58)), tile);
    }

    #[test]
    fn test_recenter_transparent_tile() {
        let tile = RgbaImage::new(16, 16);
        assert_eq!(recenter(&tile, (0.5, 0.55)), tile);
    }

    #[test]
    fn test_idle_passes_through() {
        let tile = off_center_tile();
        assert_eq!(decorate(&tile, Pose::Idle, GLYPH), tile);
    }

    #[test]
    fn test_typing_glow_row() {
        let tile = decorate(&RgbaImage::new(16, 16), Pose::Typing, GLYPH);
        for x in 3..13 {
            let expected = if x == 4 || x == 11 { SCREEN_HIGHLIGHT } else { CLEAR };
            assert_eq!(*tile.get_pixel(x, 13), SCREEN_GLOW);
            assert_eq!(*tile.get_pixel(x, 12), expected);
        }
        assert_eq!(*tile.get_pixel(2, 13), CLEAR);
        assert_eq!(*tile.get_pixel(13, 13), CLEAR);
    }

    #[test]
    fn test_thinking_spark() {
        let tile = decorate(&off_center_tile(), Pose::Thinking, GLYPH);
        assert_eq!(*tile.get_pixel(11, 2), THOUGHT);
        assert_eq!(*tile.get_pixel(12, 1), THOUGHT);
        assert_eq!(*tile.get_pixel(13, 0), THOUGHT_TIP);
        // Base is not moved
        assert_eq!(*tile.get_pixel(2, 2), BODY);
    }

    #[test]
    fn test_walk_highlights_are_mirrored() {
        let base = RgbaImage::from_pixel(16, 16, BODY);
        let walk1 = decorate(&base, Pose::Walk1, GLYPH);
        let walk2 = decorate(&base, Pose::Walk2, GLYPH);
        for (x, y) in [(6, 14), (6, 15), (7, 15)] {
            assert_eq!(*walk1.get_pixel(x, y), LEG_HIGHLIGHT);
            assert_eq!(*walk2.get_pixel(15 - x, y), LEG_HIGHLIGHT);
        }
        assert_eq!(*walk1.get_pixel(9, 14), BODY);
        assert_eq!(*walk2.get_pixel(6, 14), BODY);
    }

    #[test]
    fn test_sleeping_eyes_and_glyph() {
        let base = RgbaImage::from_pixel(16, 16, BODY);
        let tile = decorate(&base, Pose::Sleeping, GLYPH);
        assert_eq!(*tile.get_pixel(6, 6), CLOSED_EYE);
        assert_eq!(*tile.get_pixel(9, 6), CLOSED_EYE);
        for (x, y) in [(12, 1), (13, 1), (12, 2)] {
            assert_eq!(*tile.get_pixel(x, y), GLYPH);
        }
        assert_eq!(*tile.get_pixel(13, 2), BODY);
    }

    #[test]
    fn test_decorate_keeps_tile_size() {
        for pose in Pose::ALL {
            assert_eq!(decorate(&off_center_tile(), pose, GLYPH).dimensions(), (16, 16));
        }
    }
}
