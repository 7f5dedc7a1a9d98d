//! Alpha compositing of cells onto sheets

use image::{Rgba, RgbaImage};

use crate::spritesheet::CellRect;

/// Composite `sprite` over `canvas` with its top-left corner at (`x`, `y`).
///
/// Uses Porter-Duff "source over". Only pixels inside `clip` (and the canvas)
/// are ever written; fully transparent source pixels leave the destination
/// untouched.
pub fn blit_over(canvas: &mut RgbaImage, sprite: &RgbaImage, x: i64, y: i64, clip: CellRect) {
    let x_min = (clip.x as i64).max(0);
    let y_min = (clip.y as i64).max(0);
    let x_max = (clip.x as i64 + clip.w as i64).min(canvas.width() as i64);
    let y_max = (clip.y as i64 + clip.h as i64).min(canvas.height() as i64);

    for (sy, row) in sprite.rows().enumerate() {
        let dest_y = y + sy as i64;
        if dest_y < y_min {
            continue;
        }
        if dest_y >= y_max {
            break;
        }

        for (sx, src) in row.enumerate() {
            let dest_x = x + sx as i64;
            if dest_x < x_min {
                continue;
            }
            if dest_x >= x_max {
                break;
            }
            // Fully transparent source, skip
            if src[3] == 0 {
                continue;
            }

            let (dx, dy) = (dest_x as u32, dest_y as u32);
            let blended = blend_over(src, canvas.get_pixel(dx, dy));
            canvas.put_pixel(dx, dy, blended);
        }
    }
}

/// Blend a source pixel over a destination pixel.
pub fn blend_over(src: &Rgba<u8>, dst: &Rgba<u8>) -> Rgba<u8> {
    if src[3] == 255 {
        return *src;
    }

    let src_alpha = src[3] as f32 / 255.0;
    let dst_alpha = dst[3] as f32 / 255.0;

    // out_alpha = src_alpha + dst_alpha * (1 - src_alpha)
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
    if out_alpha == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    // out_color = (src * src_alpha + dst * dst_alpha * (1 - src_alpha)) / out_alpha
    let composite = |s: u8, d: u8| -> u8 {
        let s = s as f32 / 255.0;
        let d = d as f32 / 255.0;
        let result = (s * src_alpha + d * dst_alpha * (1.0 - src_alpha)) / out_alpha;
        (result.clamp(0.0, 1.0) * 255.0).round() as u8
    };

    Rgba([
        composite(src[0], dst[0]),
        composite(src[1], dst[1]),
        composite(src[2], dst[2]),
        (out_alpha * 255.0).round() as u8,
    ])
}
