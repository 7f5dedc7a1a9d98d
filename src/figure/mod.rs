//! Redrawn character figures built from filled rectangles.
//!
//! Figures are authored on a 32x64 logical grid and painted through a
//! [`Pen`] at an integer scale. Every character supplies its own upper body
//! (head, headwear, torso, accessories) through [`CharacterArt`]; the shared
//! parts below handle outlines, limbs and faces, and [`render_figure`] adds
//! the pose-dependent pieces around them.

mod chief;
mod cortana;
mod ghost;
mod max;

use image::{Rgba, RgbaImage};

use crate::cast::{Character, Pose};
use crate::draw::Pen;
use crate::palette::Palette;

pub use chief::Chief;
pub use cortana::Cortana;
pub use ghost::Ghost;
pub use max::Max;

/// Logical figure width
pub const LOGICAL_WIDTH: u32 = 32;
/// Logical figure height
pub const LOGICAL_HEIGHT: u32 = 64;

/// Reference points a figure is drawn around, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    /// Horizontal center line
    pub cx: i32,
    /// Top of the head
    pub top: i32,
    /// Top of the torso
    pub torso_y: i32,
}

impl Anchor {
    /// Standing anchor for a pose. Thinking leans one pixel to the right.
    pub fn for_pose(pose: Pose) -> Self {
        let cx = if pose == Pose::Thinking { 17 } else { 16 };
        Self { cx, top: 10, torso_y: 22 }
    }
}

/// Per-character artwork.
///
/// Implementations own their character-specific colors and draw everything
/// above the limbs: head, face (when visible), headwear, torso and details.
pub trait CharacterArt: Sync {
    fn character(&self) -> Character;

    fn draw_upper(&self, pen: &mut Pen, palette: &Palette, at: Anchor, pose: Pose);
}

static MAX: Max = Max::DEFAULT;
static CHIEF: Chief = Chief::DEFAULT;
static CORTANA: Cortana = Cortana::DEFAULT;
static GHOST: Ghost = Ghost::DEFAULT;

/// The artwork registered for a character
pub fn art_for(character: Character) -> &'static dyn CharacterArt {
    match character {
        Character::Max => &MAX,
        Character::Chief => &CHIEF,
        Character::Cortana => &CORTANA,
        Character::Ghost => &GHOST,
    }
}

/// Dark frame one logical pixel larger than the `w` x `h` box centered on `cx`.
pub fn draw_outline(pen: &mut Pen, palette: &Palette, cx: i32, top: i32, w: i32, h: i32) {
    pen.rect(cx - w / 2 - 1, top - 1, w + 2, h + 2, palette.outline);
}

/// 12x11 head with a shaded right side
pub fn draw_head(pen: &mut Pen, palette: &Palette, cx: i32, top: i32) {
    draw_outline(pen, palette, cx, top, 12, 11);
    pen.rect(cx - 6, top, 12, 11, palette.skin);
    pen.rect(cx + 3, top + 2, 3, 8, palette.skin_shade);
}

/// Outlined torso in `main` with a `shade` strip right of center
pub fn draw_body(
    pen: &mut Pen,
    palette: &Palette,
    cx: i32,
    y: i32,
    w: i32,
    h: i32,
    main: Rgba<u8>,
    shade: Rgba<u8>,
) {
    draw_outline(pen, palette, cx, y, w, h);
    pen.rect(cx - w / 2, y, w, h, main);
    pen.rect(cx + (w / 6).max(1), y + 1, (w / 3).max(2), h - 1, shade);
}

/// Horizontal (left, right) leg offsets from the center line
pub fn leg_offsets(pose: Pose) -> (i32, i32) {
    match pose {
        Pose::Walk1 => (-4, 2),
        Pose::Walk2 => (-2, 1),
        _ => (-3, 3),
    }
}

/// Arms hanging from the torso at `y`, then legs and boots below it.
pub fn draw_limbs(pen: &mut Pen, palette: &Palette, cx: i32, y: i32, pose: Pose) {
    pen.rect(cx - 10, y + 2, 3, 11, palette.outline);
    pen.rect(cx + 7, y + 2, 3, 11, palette.outline);
    pen.rect(cx - 9, y + 2, 2, 10, palette.skin_shade);
    pen.rect(cx + 7, y + 2, 2, 10, palette.skin);

    let (lx, rx) = leg_offsets(pose);
    for leg in [lx, rx] {
        pen.rect(cx + leg - 1, y + 13, 4, 14, palette.outline);
    }
    for leg in [lx, rx] {
        pen.rect(cx + leg, y + 13, 3, 12, palette.pants);
    }
    for leg in [lx, rx] {
        pen.rect(cx + leg - 1, y + 25, 5, 3, palette.boots);
    }
}

/// Eyes and mouth for a head whose top is at `y`.
///
/// Sleeping closes the eyes, thinking raises the right one, everything else
/// gets open eyes with a highlight. Typing darkens the mouth.
pub fn face(pen: &mut Pen, palette: &Palette, cx: i32, y: i32, pose: Pose) {
    match pose {
        Pose::Sleeping => {
            pen.rect(cx - 4, y + 4, 3, 1, palette.outline);
            pen.rect(cx + 2, y + 4, 3, 1, palette.outline);
        }
        Pose::Thinking => {
            pen.rect(cx - 4, y + 3, 2, 2, palette.outline);
            pen.rect(cx + 2, y + 2, 2, 2, palette.outline);
        }
        _ => {
            pen.rect(cx - 4, y + 3, 2, 2, palette.outline);
            pen.rect(cx + 2, y + 3, 2, 2, palette.outline);
            pen.rect(cx - 3, y + 3, 1, 1, palette.white);
            pen.rect(cx + 3, y + 3, 1, 1, palette.white);
        }
    }
    let mouth = if pose == Pose::Typing { palette.outline } else { palette.skin_shade };
    pen.rect(cx - 1, y + 7, 2, 1, mouth);
}

/// Slumped over a desk: body, resting head with closed eyes, desk edge.
///
/// Shared by the whole cast; no limbs are drawn.
fn draw_asleep_at_desk(pen: &mut Pen, palette: &Palette) {
    draw_body(pen, palette, 16, 35, 20, 8, palette.shadow, palette.outline);
    draw_head(pen, palette, 11, 29);
    face(pen, palette, 11, 29, Pose::Sleeping);
    pen.rect(0, 43, 32, 3, palette.outline);
}

/// Render one character in one pose onto a fresh transparent canvas of
/// `32 * scale` x `64 * scale` pixels.
pub fn render_figure(character: Character, pose: Pose, palette: &Palette, scale: u32) -> RgbaImage {
    let scale = scale.max(1);
    let mut canvas = RgbaImage::new(LOGICAL_WIDTH * scale, LOGICAL_HEIGHT * scale);
    let mut pen = Pen::new(&mut canvas, scale);

    if pose == Pose::Sleeping {
        draw_asleep_at_desk(&mut pen, palette);
        return canvas;
    }

    let at = Anchor::for_pose(pose);
    art_for(character).draw_upper(&mut pen, palette, at, pose);
    draw_limbs(&mut pen, palette, at.cx, at.torso_y, pose);

    match pose {
        Pose::Typing => {
            // Hands on the keyboard
            pen.rect(at.cx - 11, at.torso_y + 8, 4, 2, palette.outline);
            pen.rect(at.cx + 7, at.torso_y + 8, 4, 2, palette.outline);
        }
        Pose::Thinking => {
            // Thought bubble
            pen.rect(at.cx + 7, at.top - 4, 2, 2, palette.white);
            pen.rect(at.cx + 10, at.top - 7, 3, 3, palette.white);
        }
        _ => {}
    }

    canvas
}
