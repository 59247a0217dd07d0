use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ColorError;

/// A 24-bit RGB color, decoded into its three 8-bit channels.
///
/// The packed form (`0xRRGGBB`, red in the most significant byte) is what
/// [`Spectrum::color`](crate::Spectrum::color) and
/// [`Blender::color`](crate::Blender::color) return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorSource", into = "u32")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    /// Decodes a packed `0xRRGGBB` value. Bits above the low 24 are ignored.
    pub const fn from_rgb24(packed: u32) -> Self {
        Color {
            red: ((packed >> 16) & 0xFF) as u8,
            green: ((packed >> 8) & 0xFF) as u8,
            blue: (packed & 0xFF) as u8,
        }
    }

    pub const fn to_rgb24(self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }

    pub fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    pub fn from_channels([red, green, blue]: [u8; 3]) -> Self {
        Color { red, green, blue }
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Color::from_rgb24(packed)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> u32 {
        color.to_rgb24()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parses `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`.
    fn from_str(s: &str) -> Result<Color, ColorError> {
        let invalid = || ColorError::InvalidHex(s.to_string());
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let packed = match digits.len() {
            6 => u32::from_str_radix(digits, 16).map_err(|_| invalid())?,
            // #RGB expands each nibble, so F becomes FF
            3 => digits
                .chars()
                .filter_map(|c| c.to_digit(16))
                .fold(0, |acc, d| (acc << 8) | (d * 0x11)),
            _ => return Err(invalid()),
        };

        Ok(Color::from_rgb24(packed))
    }
}

/// How a color may be written in a spectrum description.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorSource {
    Packed(u64),
    Hex(String),
}

impl TryFrom<ColorSource> for Color {
    type Error = ColorError;

    fn try_from(source: ColorSource) -> Result<Color, ColorError> {
        match source {
            ColorSource::Packed(packed) if packed > 0xFF_FFFF => Err(ColorError::OutOfRange(packed)),
            ColorSource::Packed(packed) => Ok(Color::from_rgb24(packed as u32)),
            ColorSource::Hex(hex) => hex.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_red_in_the_high_byte() {
        let c = Color::from_rgb24(0x12_34_56);
        assert_eq!(c, Color::rgb(0x12, 0x34, 0x56));
        assert_eq!(c.to_rgb24(), 0x12_34_56);
        assert_eq!(c.channels(), [0x12, 0x34, 0x56]);
    }

    #[test]
    fn ignores_bits_above_24() {
        assert_eq!(Color::from(0xAB_FF_00_01u32), Color::rgb(0xFF, 0x00, 0x01));
    }

    #[test]
    fn parses_hex() {
        assert_eq!("#FF8000".parse::<Color>(), Ok(Color::rgb(0xFF, 0x80, 0x00)));
        assert_eq!("00ff00".parse::<Color>(), Ok(Color::rgb(0x00, 0xFF, 0x00)));
        assert_eq!("#F0A".parse::<Color>(), Ok(Color::rgb(0xFF, 0x00, 0xAA)));
        assert!(matches!("#GG0000".parse::<Color>(), Err(ColorError::InvalidHex(_))));
        assert!(matches!("#+FFFFF".parse::<Color>(), Err(ColorError::InvalidHex(_))));
        assert!(matches!("#FFFF".parse::<Color>(), Err(ColorError::InvalidHex(_))));
    }

    #[test]
    fn displays_as_hex() {
        assert_eq!(Color::rgb(0x0A, 0xBC, 0xFF).to_string(), "#0ABCFF");
    }

    #[test]
    fn deserializes_packed_and_hex() {
        let colors: Vec<Color> = serde_json::from_str(r##"[16711680, "#00FF00", "00f"]"##).unwrap();
        assert_eq!(colors, vec![
            Color::rgb(0xFF, 0, 0),
            Color::rgb(0, 0xFF, 0),
            Color::rgb(0, 0, 0xFF),
        ]);

        assert!(serde_json::from_str::<Color>("16777216").is_err());
        assert_eq!(serde_json::to_string(&Color::rgb(0xFF, 0, 0)).unwrap(), "16711680");
    }
}
