//! Display colors for object types.
//!
//! Catalog files store colors as `#rrggbb`. Parsing is more lenient and also
//! accepts `#rgb`, `#aarrggbb` and a few SVG color names.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0-255), 255 is opaque
    pub a: u8,
}

const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::rgb(0, 0, 0)),
    ("white", Color::rgb(255, 255, 255)),
    ("red", Color::rgb(255, 0, 0)),
    ("green", Color::rgb(0, 128, 0)),
    ("lime", Color::rgb(0, 255, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("gray", Color::rgb(128, 128, 128)),
    ("grey", Color::rgb(128, 128, 128)),
    ("orange", Color::rgb(255, 165, 0)),
    ("purple", Color::rgb(128, 0, 128)),
    ("transparent", Color::rgba(0, 0, 0, 0)),
];

impl Color {
    /// Opaque color from RGB channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA channels.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a color string.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidColor`] when the string is neither a known
    /// color name nor a `#`-prefixed hex color of 3, 6 or 8 digits.
    pub fn parse(value: &str) -> CoreResult<Self> {
        let trimmed = value.trim();
        let invalid = |reason: &str| CoreError::InvalidColor {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let Some(hex) = trimmed.strip_prefix('#') else {
            let lower = trimmed.to_ascii_lowercase();
            return NAMED_COLORS
                .iter()
                .find(|(name, _)| *name == lower)
                .map(|(_, color)| *color)
                .ok_or_else(|| invalid("unknown color name"));
        };

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("contains non-hex characters"));
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid("bad channel"));

        match hex.len() {
            3 => {
                let mut out = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let v = channel(&c.to_string())?;
                    out[i] = v * 17;
                }
                Ok(Self::rgb(out[0], out[1], out[2]))
            }
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            8 => Ok(Self::rgba(
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                channel(&hex[6..8])?,
                channel(&hex[0..2])?,
            )),
            _ => Err(invalid("expected 3, 6 or 8 hex digits")),
        }
    }

    /// Lowercase `#rrggbb` form written to catalog files.
    ///
    /// Alpha is dropped, so a translucent color reads back opaque.
    #[must_use]
    pub fn name(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Color {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
