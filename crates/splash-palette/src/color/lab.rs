//! CIE L*a*b* color space
//!
//! Lab is the space in which colors are compared (ΔE) and blended. The
//! conversion goes sRGB → linear → XYZ (D65) → Lab and back.
//!
//! # References
//!
//! Bruce Lindbloom, "RGB/XYZ Matrices" and "XYZ to Lab"
//! <http://www.brucelindbloom.com/>

use super::linear_rgb::LinearRgb;
use super::srgb::Srgb;

/// D65 reference white (2° observer), Y normalized to 1.
const WHITE_X: f64 = 0.95047;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.08883;

/// CIE standard: 216 / 24389
const EPSILON: f64 = 216.0 / 24389.0;
/// CIE standard: 24389 / 27
const KAPPA: f64 = 24389.0 / 27.0;

/// A color in CIE L*a*b* (D65).
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green (negative) to red (positive)
/// - `b`: Blue (negative) to yellow (positive)
///
/// Values are not clamped; only the conversion back to [`Srgb`] clips to
/// the displayable gamut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// CIE76 color difference: Euclidean distance in Lab.
    ///
    /// ```
    /// use splash_palette::Lab;
    ///
    /// let grey = Lab::new(50.0, 0.0, 0.0);
    /// assert_eq!(grey.delta_e(grey), 0.0);
    /// assert_eq!(Lab::new(0.0, 3.0, 4.0).delta_e(Lab::new(0.0, 0.0, 0.0)), 5.0);
    /// ```
    #[inline]
    pub fn delta_e(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Linear interpolation of the three coordinates; `t = 0` is `self`.
    #[inline]
    pub fn lerp(self, other: Lab, t: f64) -> Lab {
        Lab {
            l: self.l + (other.l - self.l) * t,
            a: self.a + (other.a - self.a) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_f_inv(f: f64) -> f64 {
    let cubed = f * f * f;
    if cubed > EPSILON {
        cubed
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}

impl From<LinearRgb> for Lab {
    fn from(rgb: LinearRgb) -> Self {
        // Linear sRGB to XYZ (D65)
        let x = 0.4124564 * rgb.r + 0.3575761 * rgb.g + 0.1804375 * rgb.b;
        let y = 0.2126729 * rgb.r + 0.7151522 * rgb.g + 0.0721750 * rgb.b;
        let z = 0.0193339 * rgb.r + 0.1191920 * rgb.g + 0.9503041 * rgb.b;

        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y / WHITE_Y);
        let fz = lab_f(z / WHITE_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Lab> for LinearRgb {
    /// Not clamped: out-of-gamut Lab colors produce channels outside 0..=1.
    fn from(lab: Lab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = fy + lab.a / 500.0;
        let fz = fy - lab.b / 200.0;

        let yr = if lab.l > KAPPA * EPSILON {
            fy * fy * fy
        } else {
            lab.l / KAPPA
        };

        let x = lab_f_inv(fx) * WHITE_X;
        let y = yr * WHITE_Y;
        let z = lab_f_inv(fz) * WHITE_Z;

        LinearRgb {
            r: 3.2404542 * x - 1.5371385 * y - 0.4985314 * z,
            g: -0.9692660 * x + 1.8760108 * y + 0.0415560 * z,
            b: 0.0556434 * x - 0.2040259 * y + 1.0572252 * z,
        }
    }
}

impl From<Srgb> for Lab {
    #[inline]
    fn from(srgb: Srgb) -> Self {
        Lab::from(LinearRgb::from(srgb))
    }
}

impl From<Lab> for Srgb {
    /// Converts back to a displayable, 8-bit quantized color.
    #[inline]
    fn from(lab: Lab) -> Self {
        Srgb::from(LinearRgb::from(lab)).quantize()
    }
}

/// Perceptual distance (CIE76) between two sRGB colors.
pub fn delta_e(a: Srgb, b: Srgb) -> f64 {
    Lab::from(a).delta_e(Lab::from(b))
}

/// Interpolate from `a` (t = 0) to `b` (t = 1) in Lab, clipped back into
/// the sRGB gamut.
///
/// ```
/// use splash_palette::{blend_lab, Srgb};
///
/// let red = Srgb::from_u8(255, 0, 0);
/// let black = Srgb::from_u8(0, 0, 0);
/// assert_eq!(blend_lab(red, black, 0.0), red);
/// assert_eq!(blend_lab(red, black, 1.0), black);
/// ```
pub fn blend_lab(a: Srgb, b: Srgb, t: f64) -> Srgb {
    let t = t.clamp(0.0, 1.0);
    Srgb::from(Lab::from(a).lerp(Lab::from(b), t))
}
