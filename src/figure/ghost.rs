//! Ghost: hooded and cloaked, with a purple hem.

use image::Rgba;

use super::{draw_body, draw_head, face, Anchor, CharacterArt};
use crate::cast::{Character, Pose};
use crate::color::rgb;
use crate::draw::Pen;
use crate::palette::Palette;

#[derive(Debug, Clone, Copy)]
pub struct Ghost {
    pub cloak: Rgba<u8>,
    pub hood: Rgba<u8>,
}

impl Ghost {
    pub const DEFAULT: Ghost = Ghost { cloak: rgb(0xc8c4d8), hood: rgb(0x7d7892) };
}

impl CharacterArt for Ghost {
    fn character(&self) -> Character {
        Character::Ghost
    }

    fn draw_upper(&self, pen: &mut Pen, palette: &Palette, at: Anchor, pose: Pose) {
        let Anchor { cx, top, torso_y } = at;

        draw_head(pen, palette, cx, top + 1);
        face(pen, palette, cx, top + 1, pose);
        // Hood pulled low over the brow
        pen.rect(cx - 8, top - 1, 16, 6, self.hood);
        pen.rect(cx - 9, top + 3, 18, 3, palette.outline);

        draw_body(pen, palette, cx, torso_y, 15, 18, self.cloak, self.hood);
        pen.rect(cx - 9, torso_y + 16, 18, 2, palette.purple);
    }
}
