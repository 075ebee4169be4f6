//! Colors, fonts and alignment shared by paragraphs and tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGB color with components in `0.0..=1.0`.
///
/// Serialized as a `#RRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    /// `#808080`
    pub const GREY: Color = Color::rgb(0.501_96, 0.501_96, 0.501_96);
    /// `#F5F5F5`
    pub const WHITESMOKE: Color = Color::rgb(0.960_78, 0.960_78, 0.960_78);
    /// `#F5F5DC`
    pub const BEIGE: Color = Color::rgb(0.960_78, 0.960_78, 0.862_75);

    /// Create a color from float components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit components.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parse a `#RRGGBB` (or `RRGGBB`) hex string.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Components rounded to 8 bits.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (quantize(self.r), quantize(self.g), quantize(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.to_rgb8();
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or_else(|| format!("invalid color: {}", value))
    }
}

/// The standard Type1 fonts the engine can set text in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardFont {
    /// Helvetica (regular)
    #[default]
    #[serde(rename = "Helvetica")]
    Helvetica,
    /// Helvetica Bold
    #[serde(rename = "Helvetica-Bold")]
    HelveticaBold,
}

impl StandardFont {
    /// All fonts, in resource order.
    pub const ALL: [StandardFont; 2] = [StandardFont::Helvetica, StandardFont::HelveticaBold];

    /// PostScript base font name.
    pub fn postscript_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Name of the font in page resource dictionaries.
    pub fn resource_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "F1",
            StandardFont::HelveticaBold => "F2",
        }
    }

    /// Check if this is a bold face.
    pub fn is_bold(self) -> bool {
        matches!(self, StandardFont::HelveticaBold)
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex_roundtrip() {
        let navy = Color::from_hex("#003366").unwrap();
        assert_eq!(navy.to_rgb8(), (0x00, 0x33, 0x66));
        assert_eq!(navy.to_string(), "#003366");
        assert_eq!(Color::BEIGE.to_string(), "#F5F5DC");
    }

    #[test]
    fn test_color_invalid_hex() {
        assert!(Color::from_hex("#0033").is_none());
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }

    #[test]
    fn test_color_serde() {
        let json = serde_json::to_string(&Color::GREY).unwrap();
        assert_eq!(json, "\"#808080\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_rgb8(), (0x80, 0x80, 0x80));
    }

    #[test]
    fn test_font_names() {
        assert_eq!(StandardFont::HelveticaBold.postscript_name(), "Helvetica-Bold");
        assert_eq!(StandardFont::Helvetica.resource_name(), "F1");
        assert!(StandardFont::HelveticaBold.is_bold());
    }
}
