//! Chief: full helmet with a gold visor over green armor.

use image::Rgba;

use super::{draw_body, draw_head, Anchor, CharacterArt};
use crate::cast::{Character, Pose};
use crate::color::rgb;
use crate::draw::Pen;
use crate::palette::Palette;

/// Armor colors for Chief. The visor color comes from the shared palette.
#[derive(Debug, Clone, Copy)]
pub struct Chief {
    pub helmet: Rgba<u8>,
    pub helmet_ridge: Rgba<u8>,
    pub visor_glint: Rgba<u8>,
    pub neck_guard: Rgba<u8>,
    pub armor: Rgba<u8>,
    pub armor_shade: Rgba<u8>,
    pub chest_plate: Rgba<u8>,
    pub plate_seam: Rgba<u8>,
    pub belt: Rgba<u8>,
}

impl Chief {
    pub const DEFAULT: Chief = Chief {
        helmet: rgb(0x345b28),
        helmet_ridge: rgb(0x4f8a39),
        visor_glint: rgb(0xfff2b5),
        neck_guard: rgb(0x243f1b),
        armor: rgb(0x5a9342),
        armor_shade: rgb(0x355426),
        chest_plate: rgb(0x6ca84d),
        plate_seam: rgb(0x2b4a20),
        belt: rgb(0x253d1d),
    };
}

impl CharacterArt for Chief {
    fn character(&self) -> Character {
        Character::Chief
    }

    /// The helmet hides the face, so no expression is drawn for any pose.
    fn draw_upper(&self, pen: &mut Pen, palette: &Palette, at: Anchor, _pose: Pose) {
        let Anchor { cx, top, torso_y } = at;

        draw_head(pen, palette, cx, top + 1);
        // Helmet shell
        pen.rect(cx - 8, top - 3, 16, 6, self.helmet);
        pen.rect(cx - 8, top - 3, 16, 2, palette.outline);
        pen.rect(cx - 7, top - 1, 14, 1, self.helmet_ridge);
        // Visor
        pen.rect(cx - 5, top + 4, 10, 3, palette.visor);
        pen.rect(cx - 3, top + 5, 6, 1, self.visor_glint);
        pen.rect(cx - 4, top + 8, 8, 2, self.neck_guard);

        draw_body(pen, palette, cx, torso_y, 16, 19, self.armor, self.armor_shade);
        pen.rect(cx - 5, torso_y + 3, 10, 4, self.chest_plate);
        pen.rect(cx - 6, torso_y + 8, 12, 2, self.plate_seam);
        pen.rect(cx - 6, torso_y + 13, 12, 2, self.belt);
        // Shoulder plates
        pen.rect(cx - 11, torso_y + 1, 4, 5, self.armor_shade);
        pen.rect(cx + 7, torso_y + 1, 4, 5, self.armor_shade);
    }
}
