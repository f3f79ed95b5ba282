//! HSL cylindrical representation of sRGB.
//!
//! Used for the saturation ceiling in refinement and for sorting extracted
//! pixels into lightness/saturation bands.

use super::srgb::Srgb;

/// Hue (degrees, `0.0..360.0`), saturation and lightness (`0.0..=1.0`).
///
/// For achromatic colors hue is 0.0 and saturation is 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Scale saturation toward zero by `amount` (0 = unchanged, 1 = grey),
    /// keeping hue and lightness.
    #[inline]
    pub fn desaturate(self, amount: f64) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        Self {
            s: self.s * (1.0 - amount),
            ..self
        }
    }
}

impl From<Srgb> for Hsl {
    fn from(c: Srgb) -> Self {
        let max = c.r.max(c.g).max(c.b);
        let min = c.r.min(c.g).min(c.b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let sector = if max == c.r {
            ((c.g - c.b) / delta).rem_euclid(6.0)
        } else if max == c.g {
            (c.b - c.r) / delta + 2.0
        } else {
            (c.r - c.g) / delta + 4.0
        };

        Hsl {
            h: sector * 60.0,
            s,
            l,
        }
    }
}

impl From<Hsl> for Srgb {
    /// Converts back to an 8-bit quantized color.
    fn from(hsl: Hsl) -> Self {
        let c = (1.0 - (2.0 * hsl.l - 1.0).abs()) * hsl.s;
        let hp = hsl.h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
        let (r1, g1, b1) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = hsl.l - c / 2.0;
        Srgb::new(r1 + m, g1 + m, b1 + m).quantize()
    }
}

/// HSL saturation of an sRGB color, in `0.0..=1.0`.
pub fn saturation_hsl(color: Srgb) -> f64 {
    Hsl::from(color).s
}

/// Reduce HSL saturation by `amount` (fraction, `0.0..=1.0`), preserving
/// hue and lightness.
pub fn desaturate(color: Srgb, amount: f64) -> Srgb {
    Srgb::from(Hsl::from(color).desaturate(amount))
}
