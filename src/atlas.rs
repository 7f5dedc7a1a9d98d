//! Atlas metadata - where each sprite lives on the two sheets
//!
//! The sheets are sliced by consumers with a fixed `{character}-{pose}` key
//! per cell. Atlases are written next to each sheet as JSON.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::cast::{Character, Pose, SheetKind};
use crate::spritesheet::{CellRect, SheetLayout};

/// Walk cycle playback rate in frames per second
pub const WALK_FPS: u32 = 8;

/// A sprite's position and size within a sheet
pub type AtlasFrame = CellRect;

/// Animation metadata for atlas export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtlasAnimation {
    pub frames: Vec<String>,
    pub fps: u32,
}

/// Complete atlas metadata for one sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtlasMetadata {
    pub image: String,
    pub size: [u32; 2],
    pub frames: BTreeMap<String, AtlasFrame>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub animations: BTreeMap<String, AtlasAnimation>,
}

/// Key a sprite is published under, e.g. `max-idle`
pub fn sprite_key(character: Character, pose: Pose) -> String {
    format!("{}-{}", character.name(), pose.name())
}

/// The sheet and cell rectangle holding `character` in `pose`.
pub fn locate(character: Character, pose: Pose, layout: &SheetLayout) -> (SheetKind, CellRect) {
    let (kind, row) = pose.sheet();
    (kind, layout.slot(character.column(), row))
}

/// Build the atlas of one sheet.
///
/// Every character/pose pair on the sheet gets a frame. The action sheet
/// also carries a two-frame walk animation per character.
pub fn atlas_for(kind: SheetKind, layout: &SheetLayout, image_name: &str) -> AtlasMetadata {
    let (width, height) = layout.sheet_size();
    let mut frames = BTreeMap::new();
    let mut animations = BTreeMap::new();

    for character in Character::ALL {
        for pose in kind.poses() {
            let (_, rect) = locate(character, pose, layout);
            frames.insert(sprite_key(character, pose), rect);
        }
        if kind == SheetKind::Action {
            animations.insert(
                format!("{}-walk", character.name()),
                AtlasAnimation {
                    frames: vec![
                        sprite_key(character, Pose::Walk1),
                        sprite_key(character, Pose::Walk2),
                    ],
                    fps: WALK_FPS,
                },
            );
        }
    }

    AtlasMetadata { image: image_name.to_string(), size: [width, height], frames, animations }
}
