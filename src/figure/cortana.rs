//! Cortana: long hair and a sleek glowing suit.

use image::Rgba;

use super::{draw_body, draw_head, face, Anchor, CharacterArt};
use crate::cast::{Character, Pose};
use crate::color::rgb;
use crate::draw::Pen;
use crate::palette::Palette;

#[derive(Debug, Clone, Copy)]
pub struct Cortana {
    pub suit: Rgba<u8>,
    pub suit_shade: Rgba<u8>,
}

impl Cortana {
    pub const DEFAULT: Cortana = Cortana { suit: rgb(0x5ec8ff), suit_shade: rgb(0x2f6f9a) };
}

impl CharacterArt for Cortana {
    fn character(&self) -> Character {
        Character::Cortana
    }

    fn draw_upper(&self, pen: &mut Pen, palette: &Palette, at: Anchor, pose: Pose) {
        let Anchor { cx, top, torso_y } = at;

        draw_head(pen, palette, cx, top);
        face(pen, palette, cx, top, pose);
        // Hair falls on both sides of the face
        pen.rect(cx - 7, top - 1, 3, 12, self.suit_shade);
        pen.rect(cx + 4, top - 1, 3, 12, self.suit_shade);

        draw_body(pen, palette, cx, torso_y, 12, 18, self.suit, self.suit_shade);
        pen.rect(cx - 5, torso_y + 14, 10, 1, palette.glow);
    }
}
