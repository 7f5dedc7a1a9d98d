//! Sheet layout - places character cells into a fixed grid
//!
//! A sheet has one column per character and one row per pose. Each cell
//! slot is `cell_width` x `cell_height` pixels; a rendered cell is scaled,
//! centered in its slot and alpha-composited without touching neighbouring
//! slots.

use image::{Rgba, RgbaImage};
use serde::Serialize;

use crate::blend::blit_over;
use crate::cast::{Character, SheetKind};
use crate::output::scale_image;

/// Transparent color used for empty sheet space
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// A rectangle in sheet pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl CellRect {
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.w && y < self.y + self.h
    }
}

/// Grid geometry shared by both sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub cell_width: u32,
    pub cell_height: u32,
    pub columns: u32,
    pub rows: u32,
}

impl SheetLayout {
    /// Layout with one column per character and one row per pose of a sheet.
    pub fn for_cast(cell_width: u32, cell_height: u32) -> Self {
        Self {
            cell_width,
            cell_height,
            columns: Character::ALL.len() as u32,
            rows: SheetKind::Idle.poses().len() as u32,
        }
    }

    /// Full sheet size in pixels
    pub fn sheet_size(&self) -> (u32, u32) {
        (self.columns * self.cell_width, self.rows * self.cell_height)
    }

    /// Pixel rectangle of the slot at (`col`, `row`)
    pub fn slot(&self, col: u32, row: u32) -> CellRect {
        CellRect {
            x: col * self.cell_width,
            y: row * self.cell_height,
            w: self.cell_width,
            h: self.cell_height,
        }
    }

    /// A fresh, fully transparent sheet
    pub fn new_sheet(&self) -> RgbaImage {
        let (width, height) = self.sheet_size();
        RgbaImage::from_pixel(width, height, TRANSPARENT)
    }
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self::for_cast(256, 512)
    }
}

/// How a rendered cell is fitted into its slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Integer nearest-neighbour enlargement (1 keeps native resolution)
    pub scale: u32,
    /// Extra downward shift after vertical centering
    pub y_offset: i32,
}

impl Placement {
    /// Native resolution, centered, no shift
    pub const NATIVE: Placement = Placement { scale: 1, y_offset: 0 };
}

/// Paste a rendered cell into its slot on the sheet.
///
/// The cell is enlarged by `placement.scale`, centered horizontally, centered
/// vertically plus `placement.y_offset`, and composited over whatever is
/// already there. Pixels that would fall outside the slot are dropped.
///
/// # Examples
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use charsheet::spritesheet::{place_cell, Placement, SheetLayout};
///
/// let layout = SheetLayout::default();
/// let mut sheet = layout.new_sheet();
/// let tile = RgbaImage::from_pixel(16, 16, Rgba([255, 0, 0, 255]));
///
/// place_cell(&mut sheet, &layout, 1, 0, &tile, Placement { scale: 11, y_offset: 70 });
///
/// // 176x176 sprite at x = 256 + 40, y = 168 + 70
/// assert_eq!(sheet.get_pixel(296, 238)[3], 255);
/// assert_eq!(sheet.get_pixel(295, 238)[3], 0);
/// ```
pub fn place_cell(
    sheet: &mut RgbaImage,
    layout: &SheetLayout,
    col: u32,
    row: u32,
    cell: &RgbaImage,
    placement: Placement,
) {
    let slot = layout.slot(col, row);
    let enlarged;
    let cell = if placement.scale > 1 {
        enlarged = scale_image(cell.clone(), placement.scale);
        &enlarged
    } else {
        cell
    };

    let x = slot.x as i64 + (slot.w as i64 - cell.width() as i64) / 2;
    let y = slot.y as i64 + (slot.h as i64 - cell.height() as i64) / 2 + placement.y_offset as i64;
    blit_over(sheet, cell, x, y, slot);
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn test_default_sheet_size() {
        let layout = SheetLayout::default();
        assert_eq!(layout.sheet_size(), (1024, 1536));
        let sheet = layout.new_sheet();
        assert_eq!(sheet.dimensions(), (1024, 1536));
        assert!(sheet.pixels().all(|p| *p == TRANSPARENT));
    }

    #[test]
    fn test_slots_tile_the_sheet() {
        let layout = SheetLayout::for_cast(4, 6);
        let (width, height) = layout.sheet_size();
        for y in 0..height {
            for x in 0..width {
                let owners = (0..layout.columns)
                    .flat_map(|c| (0..layout.rows).map(move |r| (c, r)))
                    .filter(|&(c, r)| layout.slot(c, r).contains(x, y))
                    .count();
                assert_eq!(owners, 1, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_native_cell_fills_slot() {
        let layout = SheetLayout::for_cast(8, 16);
        let mut sheet = layout.new_sheet();
        let cell = RgbaImage::from_pixel(8, 16, RED);
        place_cell(&mut sheet, &layout, 3, 2, &cell, Placement::NATIVE);

        let slot = layout.slot(3, 2);
        for (x, y, pixel) in sheet.enumerate_pixels() {
            assert_eq!(*pixel == RED, slot.contains(x, y), "pixel ({x}, {y})");
        }
    }

    #[test]
    fn test_scaled_cell_is_centered_with_offset() {
        let layout = SheetLayout::default();
        let mut sheet = layout.new_sheet();
        let tile = RgbaImage::from_pixel(16, 16, RED);
        place_cell(&mut sheet, &layout, 0, 2, &tile, Placement { scale: 11, y_offset: 70 });

        // x0 = (256 - 176) / 2 = 40, y0 = 1024 + (512 - 176) / 2 + 70 = 1262
        assert_eq!(*sheet.get_pixel(40, 1262), RED);
        assert_eq!(*sheet.get_pixel(215, 1437), RED);
        assert_eq!(sheet.get_pixel(39, 1262)[3], 0);
        assert_eq!(sheet.get_pixel(216, 1262)[3], 0);
        assert_eq!(sheet.get_pixel(40, 1261)[3], 0);
        assert_eq!(sheet.get_pixel(40, 1438)[3], 0);
        assert_eq!(sheet.pixels().filter(|p| **p == RED).count(), 176 * 176);
    }

    #[test]
    fn test_oversized_cell_stays_in_its_slot() {
        let layout = SheetLayout::for_cast(10, 10);
        let mut sheet = layout.new_sheet();
        let cell = RgbaImage::from_pixel(30, 30, RED);
        place_cell(&mut sheet, &layout, 1, 1, &cell, Placement { scale: 1, y_offset: 7 });

        let slot = layout.slot(1, 1);
        for (x, y, pixel) in sheet.enumerate_pixels() {
            if !slot.contains(x, y) {
                assert_eq!(pixel[3], 0, "pixel ({x}, {y}) outside slot was written");
            }
        }
        assert_eq!(*sheet.get_pixel(slot.x, slot.y), RED);
    }

    #[test]
    fn test_transparent_cell_pixels_preserve_sheet() {
        let layout = SheetLayout::for_cast(4, 4);
        let mut sheet = layout.new_sheet();
        place_cell(&mut sheet, &layout, 0, 0, &RgbaImage::from_pixel(4, 4, RED), Placement::NATIVE);

        let mut overlay = RgbaImage::new(4, 4);
        overlay.put_pixel(0, 0, Rgba([0, 255, 0, 255]));
        place_cell(&mut sheet, &layout, 0, 0, &overlay, Placement::NATIVE);

        assert_eq!(*sheet.get_pixel(0, 0), Rgba([0, 255, 0, 255]));
        assert_eq!(*sheet.get_pixel(1, 1), RED);
    }
}
