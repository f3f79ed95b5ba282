//! sRGB color type
//!
//! sRGB is the encoding every color enters and leaves the pipeline in: hex
//! strings in the configuration, decoded image pixels and the manifest output.

use std::fmt;
use std::str::FromStr;

use super::linear_rgb::{linear_to_srgb, LinearRgb};
use crate::palette::ParseColorError;

/// A color in sRGB color space.
///
/// Channels are gamma-encoded floats in `0.0..=1.0` (mapping to 0..255 for
/// 8-bit). Every public operation in this crate that produces a color
/// returns it [quantized](Srgb::quantize) to 8 bits, so two results that
/// print the same hex string also compare equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-encoded, 0.0..=1.0)
    pub r: f64,
    /// Green channel (gamma-encoded, 0.0..=1.0)
    pub g: f64,
    /// Blue channel (gamma-encoded, 0.0..=1.0)
    pub b: f64,
}

impl Srgb {
    /// Create a new Srgb color from float values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use splash_palette::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Create an Srgb color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Rounds and clamps values to the 0..=255 range.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Snap the channels to the nearest 8-bit value.
    #[inline]
    pub fn quantize(self) -> Self {
        Self::from_bytes(self.to_bytes())
    }

    /// Lowercase `#rrggbb` representation.
    ///
    /// ```
    /// use splash_palette::Srgb;
    /// assert_eq!(Srgb::from_u8(0x6a, 0x22, 0xd9).to_hex(), "#6a22d9");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl From<LinearRgb> for Srgb {
    /// Gamma-encode linear light, clamping out-of-gamut channels first.
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: linear_to_srgb(linear.r.clamp(0.0, 1.0)),
            g: linear_to_srgb(linear.g.clamp(0.0, 1.0)),
            b: linear_to_srgb(linear.b.clamp(0.0, 1.0)),
        }
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`. Parsing is
    /// case-insensitive and surrounding whitespace is trimmed.
    ///
    /// ```
    /// use splash_palette::Srgb;
    ///
    /// let white: Srgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.r, 1.0);
    ///
    /// let red: Srgb = "#F00".parse().unwrap();
    /// assert_eq!(red.to_hex(), "#ff0000");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_u8(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
