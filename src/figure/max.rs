//! Max: the protagonist in a blue hoodie with a headset.

use image::Rgba;

use super::{draw_body, draw_head, face, Anchor, CharacterArt};
use crate::cast::{Character, Pose};
use crate::color::rgb;
use crate::draw::Pen;
use crate::palette::Palette;

/// Hoodie colors and hair for Max
#[derive(Debug, Clone, Copy)]
pub struct Max {
    pub hair: Rgba<u8>,
    pub brow: Rgba<u8>,
    pub hoodie: Rgba<u8>,
    pub hoodie_shade: Rgba<u8>,
    pub zipper: Rgba<u8>,
    pub pocket: Rgba<u8>,
}

impl Max {
    pub const DEFAULT: Max = Max {
        hair: rgb(0x6f3f20),
        brow: rgb(0x4a2d16),
        hoodie: rgb(0x2e6fc8),
        hoodie_shade: rgb(0x1d4b8f),
        zipper: rgb(0x9ac7ff),
        pocket: rgb(0x255aa8),
    };
}

impl CharacterArt for Max {
    fn character(&self) -> Character {
        Character::Max
    }

    fn draw_upper(&self, pen: &mut Pen, palette: &Palette, at: Anchor, pose: Pose) {
        let Anchor { cx, top, torso_y } = at;

        draw_head(pen, palette, cx, top);
        face(pen, palette, cx, top, pose);
        // Hairline and brows
        pen.rect(cx - 5, top - 1, 10, 2, self.hair);
        pen.rect(cx - 4, top + 2, 2, 1, self.brow);
        pen.rect(cx + 2, top + 2, 2, 1, self.brow);

        draw_body(pen, palette, cx, torso_y, 14, 17, self.hoodie, self.hoodie_shade);
        // Hood collar, zipper, pocket
        pen.rect(cx - 7, torso_y - 1, 14, 3, self.hoodie_shade);
        pen.rect(cx, torso_y + 1, 1, 12, self.zipper);
        pen.rect(cx - 4, torso_y + 10, 8, 3, self.pocket);

        // Headset mic
        pen.rect(cx + 6, top + 4, 2, 1, palette.outline);
        pen.rect(cx + 8, top + 4, 1, 1, palette.glow);
    }
}
