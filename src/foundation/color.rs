use std::{fmt, str::FromStr};

use crate::foundation::error::{ShapefieldError, ShapefieldResult};

/// Straight (non-premultiplied) RGBA8 color.
///
/// Serialized as a hex string: `#RRGGBB` when opaque, `#RRGGBBAA` otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`; the `#` is optional and digits are case-insensitive.
    pub fn from_hex(s: &str) -> ShapefieldResult<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> ShapefieldResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| ShapefieldError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        if !digits.is_ascii() {
            return Err(ShapefieldError::validation(format!(
                "invalid color \"{s}\""
            )));
        }

        match digits.len() {
            6 => Ok(Self::rgb(
                hex_byte(&digits[0..2])?,
                hex_byte(&digits[2..4])?,
                hex_byte(&digits[4..6])?,
            )),
            8 => Ok(Self::rgba(
                hex_byte(&digits[0..2])?,
                hex_byte(&digits[2..4])?,
                hex_byte(&digits[4..6])?,
                hex_byte(&digits[6..8])?,
            )),
            _ => Err(ShapefieldError::validation(format!(
                "color \"{s}\" must be #RRGGBB or #RRGGBBAA"
            ))),
        }
    }

    /// `#rrggbb` without alpha, as used by SVG `fill`.
    pub fn rgb_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha channel normalized to `0..=1`.
    pub fn alpha(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl FromStr for Color {
    type Err = ShapefieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

const PASTEL: [Color; 6] = [
    Color::rgb(0xE8, 0xE6, 0xD9),
    Color::rgb(0xF2, 0xEF, 0xE5),
    Color::rgb(0xEB, 0xDC, 0xE1),
    Color::rgb(0xD9, 0xE4, 0xDD),
    Color::rgb(0xCE, 0xDF, 0xE6),
    Color::rgb(0xF5, 0xE6, 0xCA),
];

const VIVID: [Color; 20] = [
    Color::rgb(0xFF, 0x6B, 0x6B),
    Color::rgb(0x4E, 0xCD, 0xC4),
    Color::rgb(0x45, 0xB7, 0xD1),
    Color::rgb(0x96, 0xCE, 0xB4),
    Color::rgb(0xFE, 0xCA, 0x57),
    Color::rgb(0xFF, 0x9F, 0xF3),
    Color::rgb(0x54, 0xA0, 0xFF),
    Color::rgb(0x5F, 0x27, 0xCD),
    Color::rgb(0x00, 0xD2, 0xD3),
    Color::rgb(0xFF, 0x9F, 0x43),
    Color::rgb(0xC4, 0x45, 0x69),
    Color::rgb(0x40, 0x40, 0x7A),
    Color::rgb(0x70, 0x6F, 0xD3),
    Color::rgb(0xF8, 0xEF, 0xBA),
    Color::rgb(0x12, 0x89, 0xA7),
    Color::rgb(0xD9, 0x80, 0xFA),
    Color::rgb(0xB5, 0x34, 0x71),
    Color::rgb(0xFF, 0xC3, 0x12),
    Color::rgb(0xC4, 0x45, 0x69),
    Color::rgb(0x6C, 0x5C, 0xE7),
];

/// Ordered, non-empty list of colors that new shapes draw from.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Palette(Vec<Color>);

impl Palette {
    /// Build a palette; an empty list is rejected since there is no sensible default color.
    pub fn new(colors: Vec<Color>) -> ShapefieldResult<Self> {
        if colors.is_empty() {
            return Err(ShapefieldError::validation("palette must contain at least one color"));
        }
        Ok(Self(colors))
    }

    /// Parse a palette from hex strings.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> ShapefieldResult<Self> {
        let parsed = colors
            .iter()
            .map(|c| Color::from_hex(c.as_ref()))
            .collect::<ShapefieldResult<Vec<_>>>()?;
        Self::new(parsed)
    }

    /// Soft background pastels.
    pub fn pastel() -> Self {
        Self(PASTEL.to_vec())
    }

    /// Saturated light accents.
    pub fn vivid() -> Self {
        Self(VIVID.to_vec())
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Color at `index`, wrapping around the palette length.
    pub fn get(&self, index: usize) -> Color {
        self.0[index % self.0.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::pastel()
    }
}

impl<'de> serde::Deserialize<'de> for Palette {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let colors = Vec::<Color>::deserialize(deserializer)?;
        Self::new(colors).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
