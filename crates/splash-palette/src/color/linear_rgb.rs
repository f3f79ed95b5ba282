//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate.
//! Cluster centroids, luminance and the XYZ matrix all operate on it.

use super::srgb::Srgb;

/// IEC 61966-2-1 transfer function: sRGB to linear.
#[inline]
pub fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// IEC 61966-2-1 transfer function: linear to sRGB.
#[inline]
pub fn linear_to_srgb(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// A color in linear RGB color space.
///
/// Values are typically in `0.0..=1.0` but may leave that range after a
/// Lab round-trip of an out-of-gamut color. Converting back to [`Srgb`]
/// clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// u8 -> Srgb -> LinearRgb -> Srgb -> u8 must be lossless.
    #[test]
    fn test_round_trip_is_lossless() {
        for i in 0..=255u8 {
            let original = Srgb::from_u8(i, i, i);
            let back = Srgb::from(LinearRgb::from(original));
            assert_eq!(back.to_bytes(), [i, i, i], "round-trip failed for {i}");
        }
    }

    #[test]
    fn test_known_gamma_values() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-12);

        // ((0.5 + 0.055) / 1.055)^2.4 = 0.214041...
        assert!((srgb_to_linear(0.5) - 0.214041).abs() < 1e-5);
        // 1.055 * 0.5^(1/2.4) - 0.055 = 0.735356...
        assert!((linear_to_srgb(0.5) - 0.735356).abs() < 1e-5);
    }

    #[test]
    fn test_out_of_gamut_clamps_on_encode() {
        let hot = LinearRgb::new(1.7, -0.2, 0.5);
        let encoded = Srgb::from(hot).to_bytes();
        assert_eq!(encoded[0], 255);
        assert_eq!(encoded[1], 0);
    }
}
