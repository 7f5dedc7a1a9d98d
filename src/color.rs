//! Hex color parsing for palettes and config tables
//!
//! Supports `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`.

use image::Rgba;
use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Input string doesn't start with '#'
    #[error("color must start with '#'")]
    MissingHash,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// Build an opaque color from a `0xRRGGBB` literal.
pub const fn rgb(hex: u32) -> Rgba<u8> {
    Rgba([(hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255])
}

/// Parse a hex color string into an RGBA color.
///
/// - `#RGB` - 3-digit hex, each digit is doubled (e.g., `#F00` -> red)
/// - `#RGBA` - 4-digit hex, each digit is doubled
/// - `#RRGGBB` - 6-digit hex, alpha defaults to 255 (opaque)
/// - `#RRGGBBAA` - 8-digit hex, explicit alpha channel
///
/// # Examples
///
/// ```
/// use charsheet::color::parse_hex_color;
///
/// assert_eq!(parse_hex_color("#F00").unwrap(), image::Rgba([255, 0, 0, 255]));
/// assert_eq!(parse_hex_color("#1a1c2c").unwrap(), image::Rgba([26, 28, 44, 255]));
/// ```
pub fn parse_hex_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    let hex = s.strip_prefix('#').ok_or(ColorError::MissingHash)?;

    let digits = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(ColorError::InvalidHex(c)))
        .collect::<Result<Vec<u8>, _>>()?;

    match digits.as_slice() {
        // Short forms double each digit
        [r, g, b] => Ok(Rgba([r * 17, g * 17, b * 17, 255])),
        [r, g, b, a] => Ok(Rgba([r * 17, g * 17, b * 17, a * 17])),
        [r1, r0, g1, g0, b1, b0] => Ok(Rgba([r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0, 255])),
        [r1, r0, g1, g0, b1, b0, a1, a0] => {
            Ok(Rgba([r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0, a1 * 16 + a0]))
        }
        _ => Err(ColorError::InvalidLength(digits.len())),
    }
}

/// Format a color as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
pub fn to_hex(color: Rgba<u8>) -> String {
    let [r, g, b, a] = color.0;
    if a == 255 {
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}

/// Serde adapter storing an `Rgba<u8>` as a hex string.
///
/// Use with `#[serde(with = "crate::color::hex")]`.
pub mod hex {
    use image::Rgba;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Rgba<u8>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rgba<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hex_color(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit() {
        assert_eq!(parse_hex_color("#f0c8a0").unwrap(), Rgba([240, 200, 160, 255]));
        assert_eq!(parse_hex_color("#9DE7FF").unwrap(), Rgba([157, 231, 255, 255]));
    }

    #[test]
    fn test_parse_with_alpha() {
        assert_eq!(parse_hex_color("#5AAADCDC").unwrap(), Rgba([90, 170, 220, 220]));
        assert_eq!(parse_hex_color("#F008").unwrap(), Rgba([255, 0, 0, 136]));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_hex_color(""), Err(ColorError::Empty));
        assert_eq!(parse_hex_color("f0c8a0"), Err(ColorError::MissingHash));
        assert_eq!(parse_hex_color("#12345"), Err(ColorError::InvalidLength(5)));
        assert_eq!(parse_hex_color("#12G"), Err(ColorError::InvalidHex('G')));
    }

    #[test]
    fn test_rgb_literal_matches_parser() {
        assert_eq!(rgb(0x1a1c2c), parse_hex_color("#1a1c2c").unwrap());
        assert_eq!(rgb(0xffffff), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(Rgba([240, 210, 120, 255])), "#F0D278");
        assert_eq!(to_hex(Rgba([90, 170, 220, 220])), "#5AAADCDC");
        assert_eq!(parse_hex_color(&to_hex(Rgba([1, 2, 3, 4]))).unwrap(), Rgba([1, 2, 3, 4]));
    }
}
