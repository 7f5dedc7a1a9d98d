//! Configuration loading
//!
//! There is no implicit discovery: without an explicit path the built-in
//! defaults are used unchanged.

use super::schema::Config;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Load configuration from `path`, or the defaults when `path` is `None`.
///
/// Keys missing from the file fall back to their defaults. The result is
/// validated either way.
///
/// # Example
/// ```ignore
/// let config = load_config(Some(Path::new("charsheet.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config = match path {
        Some(p) => parse_config(&fs::read_to_string(p)?)?,
        None => Config::default(),
    };

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Parse configuration from TOML text without validating it.
pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cast::Character;
    use image::Rgba;
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, contents: &str) -> PathBuf {
        let config_path = temp.path().join("charsheet.toml");
        File::create(&config_path)
            .expect("should create config file")
            .write_all(contents.as_bytes())
            .expect("should write config content");
        config_path
    }

    #[test]
    fn test_load_config_without_path_is_default() {
        let config = load_config(None).expect("defaults should be valid");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(
            &temp,
            r##"
[output]
dir = "sprites"
atlas = false

[redraw]
scale = 4

[redraw.palette]
outline = "#000000"

[tinted.cast.max]
col = 2
row = 1
tint = [1.0, 1.0, 1.0]
glyph = "#FF0000"
"##,
        );

        let config = load_config(Some(&config_path)).expect("should load valid config");
        assert_eq!(config.output.dir, PathBuf::from("sprites"));
        assert!(!config.output.atlas);
        assert_eq!(config.output.idle, "chars-idle.png");
        assert_eq!(config.redraw.scale, 4);
        assert_eq!(config.redraw.palette.outline, Rgba([0, 0, 0, 255]));
        assert_eq!(config.redraw.palette.skin, Rgba([0xf0, 0xc8, 0xa0, 255]));

        let max = config.tinted.cast.get(Character::Max).expect("max entry");
        assert_eq!((max.col, max.row), (2, 1));
        assert_eq!(config.tinted.contrast, 1.08);
        assert!(config.tinted.cast.get(Character::Ghost).is_some());
    }

    #[test]
    fn test_load_config_missing_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let result = load_config(Some(&temp.path().join("nonexistent.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(&temp, "this is not valid toml {{{");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_bad_color() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(&temp, "[redraw.palette]\nskin = \"peach\"\n");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_validation_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(&temp, "[tinted]\nscale = 0\ncontrast = -1.0\n");

        match load_config(Some(&config_path)) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains("tinted.scale"));
                assert!(errors[1].contains("tinted.contrast"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_message_lists_errors() {
        let err = ConfigError::Validation(vec!["'a' bad".to_string(), "'b' worse".to_string()]);
        assert_eq!(err.to_string(), "Config validation failed:\n  - 'a' bad\n  - 'b' worse");
    }
}
