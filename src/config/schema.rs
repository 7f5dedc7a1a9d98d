//! Configuration schema types
//!
//! Every constant table the generators use lives here. `Config::default()`
//! is the canonical set of values; a TOML file may override any subset.

use image::Rgba;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::cast::Character;
use crate::color::{self, rgb};
use crate::figure::{LOGICAL_HEIGHT, LOGICAL_WIDTH};
use crate::palette::Palette;
use crate::spritesheet::{Placement, SheetLayout};

/// Sheet grid geometry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Width of one cell slot in pixels
    pub cell_width: u32,
    /// Height of one cell slot in pixels
    pub cell_height: u32,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self { cell_width: 256, cell_height: 512 }
    }
}

impl SheetConfig {
    pub fn layout(&self) -> SheetLayout {
        SheetLayout::for_cast(self.cell_width, self.cell_height)
    }
}

/// Output file names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the sheets are written to
    pub dir: PathBuf,
    /// File name of the idle/typing/thinking sheet
    pub idle: String,
    /// File name of the walk/sleeping sheet
    pub action: String,
    /// Write a JSON atlas next to each sheet
    pub atlas: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public"),
            idle: "chars-idle.png".to_string(),
            action: "chars-action.png".to_string(),
            atlas: true,
        }
    }
}

/// Source tile and look of one character in the tinted pipeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileSpec {
    /// Tile column in the reference sheet
    pub col: u32,
    /// Tile row in the reference sheet
    pub row: u32,
    /// Red, green and blue multipliers
    pub tint: [f32; 3],
    /// Color of the sleeping glyph
    #[serde(with = "color::hex")]
    pub glyph: Rgba<u8>,
}

/// Per-character tile specs, always covering the whole cast once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct CastTable(BTreeMap<Character, TileSpec>);

impl CastTable {
    pub fn get(&self, character: Character) -> Option<&TileSpec> {
        self.0.get(&character)
    }

    pub fn insert(&mut self, character: Character, spec: TileSpec) {
        self.0.insert(character, spec);
    }

    pub fn remove(&mut self, character: Character) -> Option<TileSpec> {
        self.0.remove(&character)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Character, &TileSpec)> {
        self.0.iter().map(|(c, s)| (*c, s))
    }
}

impl Default for CastTable {
    /// Tiles from the Kenney roguelike characters sheet
    fn default() -> Self {
        let spec = |col, row, tint, glyph| TileSpec { col, row, tint, glyph };
        Self(BTreeMap::from([
            // Warm protagonist
            (Character::Max, spec(0, 0, [1.12, 1.02, 0.95], rgb(0xf0d278))),
            // Cool armored lead
            (Character::Chief, spec(1, 0, [0.82, 0.95, 1.08], rgb(0x8cbeff))),
            // Cyan tech
            (Character::Cortana, spec(7, 0, [0.90, 1.04, 1.20], rgb(0x78fff0))),
            // Muted stealth
            (Character::Ghost, spec(8, 0, [0.75, 0.80, 0.82], rgb(0xb4b4be))),
        ]))
    }
}

impl Serialize for CastTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(c, s)| (c.name(), s)))
    }
}

impl<'de> Deserialize<'de> for CastTable {
    /// Entries override the defaults one character at a time.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<String, TileSpec>::deserialize(deserializer)?;
        let mut table = CastTable::default();
        for (name, spec) in entries {
            let character = name.parse::<Character>().map_err(de::Error::custom)?;
            table.insert(character, spec);
        }
        Ok(table)
    }
}

/// Tinted pipeline settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TintedConfig {
    /// Reference sheet the base tiles are cropped from
    pub source: PathBuf,
    /// Tile edge length in pixels
    pub tile_size: u32,
    /// Distance between tile origins (tile plus gutter)
    pub stride: u32,
    /// Enlargement applied when placing a tile into its cell
    pub scale: u32,
    /// Downward shift after centering in the cell
    pub y_offset: i32,
    /// Contrast factor applied after channel scaling
    pub contrast: f32,
    pub cast: CastTable,
}

impl Default for TintedConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(
                "tmp_assets/kenney_roguelike/Spritesheet/roguelikeChar_transparent.png",
            ),
            tile_size: 16,
            stride: 17,
            scale: 11,
            y_offset: 70,
            contrast: 1.08,
            cast: CastTable::default(),
        }
    }
}

impl TintedConfig {
    pub fn placement(&self) -> Placement {
        Placement { scale: self.scale, y_offset: self.y_offset }
    }
}

/// Redraw pipeline settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedrawConfig {
    /// Pixels per logical figure pixel
    pub scale: u32,
    pub palette: Palette,
}

impl Default for RedrawConfig {
    fn default() -> Self {
        Self { scale: 8, palette: Palette::default() }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sheet: SheetConfig,
    pub output: OutputConfig,
    pub tinted: TintedConfig,
    pub redraw: RedrawConfig,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "tinted.scale")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.field, self.message)
    }
}

impl Config {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();
        let mut error = |field: String, message: String| {
            errors.push(ConfigValidationError { field, message });
        };

        let SheetConfig { cell_width, cell_height } = self.sheet;
        if cell_width == 0 || cell_height == 0 {
            error("sheet".to_string(), "cell dimensions must be positive".to_string());
        }

        if self.output.idle.is_empty() || self.output.action.is_empty() {
            error("output".to_string(), "sheet file names must be non-empty".to_string());
        } else if self.output.idle == self.output.action {
            error("output.action".to_string(), "must differ from output.idle".to_string());
        }

        let tinted = &self.tinted;
        if tinted.tile_size == 0 {
            error("tinted.tile_size".to_string(), "must be a positive integer".to_string());
        }
        if tinted.stride < tinted.tile_size {
            error("tinted.stride".to_string(), "must be at least tinted.tile_size".to_string());
        }
        if tinted.scale == 0 {
            error("tinted.scale".to_string(), "must be a positive integer".to_string());
        }
        let enlarged = tinted.tile_size.saturating_mul(tinted.scale);
        if enlarged > cell_width || enlarged > cell_height {
            error(
                "tinted.scale".to_string(),
                format!("scaled tile {enlarged}px does not fit a {cell_width}x{cell_height} cell"),
            );
        }
        if !(tinted.contrast.is_finite() && tinted.contrast > 0.0) {
            error("tinted.contrast".to_string(), "must be a positive number".to_string());
        }
        for character in Character::ALL {
            match tinted.cast.get(character) {
                None => error(format!("tinted.cast.{character}"), "is missing".to_string()),
                Some(spec) if spec.tint.iter().any(|f| !f.is_finite() || *f < 0.0) => error(
                    format!("tinted.cast.{character}.tint"),
                    "factors must be non-negative numbers".to_string(),
                ),
                Some(_) => {}
            }
        }

        let scale = self.redraw.scale;
        if scale == 0 {
            error("redraw.scale".to_string(), "must be a positive integer".to_string());
        }
        let (w, h) = (LOGICAL_WIDTH.saturating_mul(scale), LOGICAL_HEIGHT.saturating_mul(scale));
        if w > cell_width || h > cell_height {
            error(
                "redraw.scale".to_string(),
                format!("{w}x{h} figure does not fit a {cell_width}x{cell_height} cell"),
            );
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
