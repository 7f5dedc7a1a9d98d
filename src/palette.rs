//! Shared NES-like palette used by the redrawn figures.
//!
//! Colors that every character uses (outline, skin, clothing basics) live
//! here. Character-specific colors belong to each figure module.

use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::color::{self, rgb};

/// Restrained palette shared across the cast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    #[serde(with = "color::hex")]
    pub outline: Rgba<u8>,
    #[serde(with = "color::hex")]
    pub shadow: Rgba<u8>,
    #[serde(with = "color::hex")]
    pub skin: Rgba<u8>,
    #[serde(with = "color::hex")]
    pub skin_shade: Rgba<u8>,
    #[serde(with = "color::hex")]
    pub white: Rgba<u8>,
    #[serde(with = "color::hex")]
    pub pants: Rgba<u8>,
    #[serde(with = "color::hex")]
    pub boots: Rgba<u8>,
    #[serde(with = "color::hex")]
    pub glow: Rgba<u8>,
    #[serde(with = "color::hex")]
    pub purple: Rgba<u8>,
    #[serde(with = "color::hex")]
    pub visor: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            outline: rgb(0x1a1c2c),
            shadow: rgb(0x2d335b),
            skin: rgb(0xf0c8a0),
            skin_shade: rgb(0xd8a078),
            white: rgb(0xf4f4f4),
            pants: rgb(0x2f355f),
            boots: rgb(0x3a2b1f),
            glow: rgb(0x9de7ff),
            purple: rgb(0x7c4fb8),
            visor: rgb(0xf2d15c),
        }
    }
}

impl Palette {
    /// Colors only ever painted by the limb routine
    pub fn limb_colors(&self) -> [Rgba<u8>; 2] {
        [self.pants, self.boots]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_outline() {
        assert_eq!(Palette::default().outline, Rgba([26, 28, 44, 255]));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let palette: Palette = toml::from_str("skin = \"#FFE0C0\"").unwrap();
        assert_eq!(palette.skin, Rgba([255, 224, 192, 255]));
        assert_eq!(palette.boots, Palette::default().boots);
    }

    #[test]
    fn test_invalid_hex_rejected() {
        let result: Result<Palette, _> = toml::from_str("glow = \"9de7ff\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_all_colors_opaque() {
        let p = Palette::default();
        let all = [
            p.outline, p.shadow, p.skin, p.skin_shade, p.white, p.pants, p.boots, p.glow, p.purple,
            p.visor,
        ];
        assert!(all.iter().all(|c| c[3] == 255));
    }
}
