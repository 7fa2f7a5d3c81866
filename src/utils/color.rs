//! Color utilities
//!
//! Line colours travel through config files as "#RRGGBB" strings and are
//! kept as plain RGB triples once parsed.

use serde::{Deserialize, Serialize};

/// Parse hex color string to RGB tuple
///
/// Accepts formats: "#RRGGBB" or "RRGGBB"
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim().trim_start_matches('#');

    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Opaque RGB colour of a line stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl LineColor {
    pub const BLACK: LineColor = LineColor::rgb(0, 0, 0);
    pub const WHITE: LineColor = LineColor::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed 0xRRGGBB value
    pub const fn from_u32(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        parse_hex_color(hex).map(|(r, g, b)| Self::rgb(r, g, b))
    }

    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }
}

impl Default for LineColor {
    fn default() -> Self {
        LineColor::BLACK
    }
}

impl TryFrom<String> for LineColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        LineColor::from_hex(&value).ok_or_else(|| format!("invalid hex colour: {value:?}"))
    }
}

impl From<LineColor> for String {
    fn from(color: LineColor) -> Self {
        color.to_hex()
    }
}

impl From<LineColor> for egui::Color32 {
    fn from(color: LineColor) -> Self {
        egui::Color32::from_rgb(color.r, color.g, color.b)
    }
}
