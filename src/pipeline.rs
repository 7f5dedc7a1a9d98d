//! Sheet generation pipelines
//!
//! A [`SheetGenerator`] renders one cell per character and pose; the
//! functions below lay those cells out on the idle and action sheets and
//! write them to disk. Two generators exist: [`TintedGenerator`] decorates
//! recolored tiles from a reference sheet, [`RedrawGenerator`] paints the
//! cast from rectangles.

use image::{Rgba, RgbaImage};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::atlas::atlas_for;
use crate::cast::{Character, Pose, SheetKind};
use crate::config::{Config, ConfigError};
use crate::decorate::decorate;
use crate::figure::render_figure;
use crate::output::{save_json, save_png, OutputError, SheetPaths};
use crate::palette::Palette;
use crate::spritesheet::{place_cell, Placement, SheetLayout};
use crate::tiles::{extract_tile, load_source, tint, TileError};

/// Error type for a generation run
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Tile(#[from] TileError),
    #[error(transparent)]
    Output(#[from] OutputError),
    /// The cast table has no entry for a character
    #[error("no tile configured for character '{0}'")]
    MissingCharacter(Character),
}

/// Renders the cell for any character and pose.
pub trait SheetGenerator {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// How rendered cells are fitted into sheet slots
    fn placement(&self) -> Placement;

    fn render_cell(&self, character: Character, pose: Pose) -> RgbaImage;
}

/// A tinted base tile and the glyph color used when its character sleeps
#[derive(Debug, Clone)]
struct BaseTile {
    tile: RgbaImage,
    glyph: Rgba<u8>,
}

/// Decorated tiles cut from a reference sheet.
#[derive(Debug, Clone)]
pub struct TintedGenerator {
    /// One entry per character, in column order
    bases: Vec<BaseTile>,
    placement: Placement,
}

impl TintedGenerator {
    /// Load the reference sheet at `path` and prepare every character's tile.
    pub fn from_source(path: &Path, config: &Config) -> Result<Self, GenerateError> {
        let source = load_source(path)?;
        info!(path = %path.display(), width = source.width(), height = source.height(), "loaded reference sheet");
        Self::from_image(&source, config)
    }

    /// Prepare every character's tile from an already loaded reference sheet.
    pub fn from_image(source: &RgbaImage, config: &Config) -> Result<Self, GenerateError> {
        let tinted = &config.tinted;
        let bases = Character::ALL
            .into_iter()
            .map(|character| -> Result<BaseTile, GenerateError> {
                let spec =
                    tinted.cast.get(character).ok_or(GenerateError::MissingCharacter(character))?;
                let tile = extract_tile(source, spec.col, spec.row, tinted.stride, tinted.tile_size)?;
                debug!(%character, col = spec.col, row = spec.row, "extracted base tile");
                Ok(BaseTile { tile: tint(&tile, spec.tint, tinted.contrast), glyph: spec.glyph })
            })
            .collect::<Result<Vec<_>, GenerateError>>()?;

        Ok(Self { bases, placement: tinted.placement() })
    }

    /// The tinted, undecorated tile of a character
    pub fn base(&self, character: Character) -> &RgbaImage {
        &self.bases[character.column() as usize].tile
    }
}

impl SheetGenerator for TintedGenerator {
    fn name(&self) -> &'static str {
        "tinted"
    }

    fn placement(&self) -> Placement {
        self.placement
    }

    fn render_cell(&self, character: Character, pose: Pose) -> RgbaImage {
        let base = &self.bases[character.column() as usize];
        decorate(&base.tile, pose, base.glyph)
    }
}

/// Rectangle-drawn figures at native cell resolution.
#[derive(Debug, Clone)]
pub struct RedrawGenerator {
    palette: Palette,
    scale: u32,
}

impl RedrawGenerator {
    pub fn new(config: &Config) -> Self {
        Self { palette: config.redraw.palette, scale: config.redraw.scale }
    }
}

impl SheetGenerator for RedrawGenerator {
    fn name(&self) -> &'static str {
        "redraw"
    }

    fn placement(&self) -> Placement {
        Placement::NATIVE
    }

    fn render_cell(&self, character: Character, pose: Pose) -> RgbaImage {
        render_figure(character, pose, &self.palette, self.scale)
    }
}

/// Both composed sheets
#[derive(Debug, Clone, PartialEq)]
pub struct Sheets {
    pub idle: RgbaImage,
    pub action: RgbaImage,
}

impl Sheets {
    pub fn get(&self, kind: SheetKind) -> &RgbaImage {
        match kind {
            SheetKind::Idle => &self.idle,
            SheetKind::Action => &self.action,
        }
    }
}

/// Compose one sheet: every character across, the sheet's poses down.
pub fn build_sheet<G: SheetGenerator + ?Sized>(
    generator: &G,
    kind: SheetKind,
    layout: &SheetLayout,
) -> RgbaImage {
    let mut sheet = layout.new_sheet();
    let placement = generator.placement();
    for (row, pose) in kind.poses().into_iter().enumerate() {
        for character in Character::ALL {
            let cell = generator.render_cell(character, pose);
            debug!(generator = generator.name(), %character, %pose, "rendered cell");
            place_cell(&mut sheet, layout, character.column(), row as u32, &cell, placement);
        }
    }
    sheet
}

/// Compose the idle and action sheets.
pub fn build_sheets<G: SheetGenerator + ?Sized>(generator: &G, layout: &SheetLayout) -> Sheets {
    Sheets {
        idle: build_sheet(generator, SheetKind::Idle, layout),
        action: build_sheet(generator, SheetKind::Action, layout),
    }
}

/// Write both sheets, and their atlases when `paths` asks for them.
pub fn write_sheets(
    sheets: &Sheets,
    paths: &SheetPaths,
    layout: &SheetLayout,
) -> Result<(), OutputError> {
    for kind in SheetKind::ALL {
        let sheet_path = paths.sheet(kind);
        save_png(sheets.get(kind), sheet_path)?;
        info!(sheet = %kind, path = %sheet_path.display(), "wrote sheet");

        if let Some(atlas_path) = paths.atlas(kind) {
            let image_name = sheet_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            save_json(&atlas_for(kind, layout, &image_name), atlas_path)?;
            info!(sheet = %kind, path = %atlas_path.display(), "wrote atlas");
        }
    }
    Ok(())
}

/// Generate both sheets with `generator` and save them under `out_dir`.
pub fn run<G: SheetGenerator + ?Sized>(
    generator: &G,
    config: &Config,
    out_dir: &Path,
) -> Result<SheetPaths, GenerateError> {
    let layout = config.sheet.layout();
    let (width, height) = layout.sheet_size();
    info!(generator = generator.name(), width, height, "building sprite sheets");

    let sheets = build_sheets(generator, &layout);
    let paths = SheetPaths::in_dir(out_dir, &config.output);
    write_sheets(&sheets, &paths, &layout)?;
    Ok(paths)
}
