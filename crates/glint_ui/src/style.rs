//! Colors carried by render commands.
//!
//! Colors are straight (non-premultiplied) RGBA in 0..=1. In config files
//! they are written as `"#RRGGBB"` or `"#RRGGBBAA"` strings.

use serde::{Deserialize, Serialize};

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Fully transparent; fills in this color are skipped.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white, the default text color.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from 8-bit channels.
    #[must_use]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let unit = |c: u8| f32::from(c) / 255.0;
        Self::rgba(unit(r), unit(g), unit(b), unit(a))
    }

    /// Creates a color from a packed `0xRRGGBBAA` value.
    #[must_use]
    pub fn hex(packed: u32) -> Self {
        let [r, g, b, a] = packed.to_be_bytes();
        Self::from_rgba8(r, g, b, a)
    }

    /// Packs the color into `0xRRGGBBAA`, rounding each channel.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_hex(self) -> u32 {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        u32::from_be_bytes([byte(self.r), byte(self.g), byte(self.b), byte(self.a)])
    }

    /// True if drawing in this color has no visible effect.
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }

    /// Vertex attribute layout.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        let digits = text
            .strip_prefix('#')
            .ok_or_else(|| format!("color `{text}` must start with '#'"))?;
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| format!("color `{text}` is not hexadecimal"))?;
        match digits.len() {
            6 => Ok(Self::hex(packed << 8 | 0xFF)),
            8 => Ok(Self::hex(packed)),
            _ => Err(format!("color `{text}` must be #RRGGBB or #RRGGBBAA")),
        }
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        format!("#{:08X}", color.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Color::hex(0xFFFF_FFFF), Color::WHITE);
        assert_eq!(Color::hex(0x0000_00FF), Color::BLACK);
        let c = Color::hex(0xFF00_0080);
        assert!((c.r - 1.0).abs() < f32::EPSILON);
        assert!((c.a - 128.0 / 255.0).abs() < f32::EPSILON);
        assert_eq!(c.to_hex(), 0xFF00_0080);
    }

    #[test]
    fn test_parse_color_strings() {
        assert_eq!(Color::try_from("#FFFFFF".to_string()), Ok(Color::WHITE));
        assert_eq!(
            Color::try_from("#00000000".to_string()),
            Ok(Color::TRANSPARENT)
        );
        assert!(Color::try_from("FFFFFF".to_string()).is_err());
        assert!(Color::try_from("#FFF".to_string()).is_err());
        assert!(Color::try_from("#GGGGGG".to_string()).is_err());
        assert_eq!(String::from(Color::BLACK), "#000000FF");
    }

    #[test]
    fn test_transparency() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(!Color::WHITE.is_transparent());
    }
}
