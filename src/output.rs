//! PNG output and sheet file paths

use image::imageops::FilterType;
use image::RgbaImage;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cast::SheetKind;
use crate::config::OutputConfig;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    /// Atlas serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Save an RGBA image to a PNG file.
///
/// Parent directories are created when missing.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    create_parent_dirs(path)?;
    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Write a value as pretty-printed JSON.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<(), OutputError> {
    create_parent_dirs(path)?;
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json + "\n")?;
    Ok(())
}

fn create_parent_dirs(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Scale image by integer factor using nearest-neighbor interpolation.
///
/// This preserves crisp pixel edges. A factor of 0 or 1 returns the image
/// unchanged.
pub fn scale_image(image: RgbaImage, factor: u32) -> RgbaImage {
    if factor <= 1 {
        return image;
    }
    let (w, h) = image.dimensions();
    image::imageops::resize(&image, w * factor, h * factor, FilterType::Nearest)
}

/// Where the two sheets (and their atlases) are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetPaths {
    pub idle: PathBuf,
    pub action: PathBuf,
    /// Atlas JSON paths, present when atlas output is enabled
    pub idle_atlas: Option<PathBuf>,
    pub action_atlas: Option<PathBuf>,
}

impl SheetPaths {
    /// Resolve the configured file names inside `dir`.
    ///
    /// Atlases sit next to their sheet with a `.json` extension.
    pub fn in_dir(dir: &Path, output: &OutputConfig) -> Self {
        let idle = dir.join(&output.idle);
        let action = dir.join(&output.action);
        let atlas = |sheet: &Path| output.atlas.then(|| sheet.with_extension("json"));
        Self { idle_atlas: atlas(&idle), action_atlas: atlas(&action), idle, action }
    }

    pub fn sheet(&self, kind: SheetKind) -> &Path {
        match kind {
            SheetKind::Idle => &self.idle,
            SheetKind::Action => &self.action,
        }
    }

    pub fn atlas(&self, kind: SheetKind) -> Option<&Path> {
        match kind {
            SheetKind::Idle => self.idle_atlas.as_deref(),
            SheetKind::Action => self.action_atlas.as_deref(),
        }
    }
}
