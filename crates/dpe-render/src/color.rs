//! Hex color parsing and tint blending.

use std::fmt;
use std::str::FromStr;

/// Error returned for malformed color strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid color {0:?}: expected #RRGGBB")]
    InvalidColor(String),
}

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a `#RRGGBB` string. Hex digits may be upper- or lowercase.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidColor(hex.to_owned());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Encode as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Move each channel toward white by `fraction` (0 = unchanged, 1 = white).
    #[must_use]
    pub fn lighten(self, fraction: f64) -> Self {
        Self {
            r: lighten_channel(self.r, fraction),
            g: lighten_channel(self.g, fraction),
            b: lighten_channel(self.b, fraction),
        }
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Lighten a `#RRGGBB` color toward white.
///
/// # Examples
///
/// ```
/// use dpe_render::lighten;
///
/// assert_eq!(lighten("#000000", 0.5).unwrap(), "#808080");
/// assert_eq!(lighten("#5590ee", 0.0).unwrap(), "#5590ee");
/// ```
pub fn lighten(hex: &str, fraction: f64) -> Result<String, ColorError> {
    Ok(Rgb::from_hex(hex)?.lighten(fraction).to_hex())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lighten_channel(channel: u8, fraction: f64) -> u8 {
    let c = f64::from(channel);
    (c + (255.0 - c) * fraction).round().clamp(0.0, 255.0) as u8
}
