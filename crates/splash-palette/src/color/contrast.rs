//! WCAG 2.x relative luminance and contrast ratio.

use super::srgb::Srgb;

/// Channel linearization as written in WCAG 2.x (note the 0.03928 knee,
/// which differs slightly from the IEC 0.04045).
#[inline]
fn wcag_linear(channel: f64) -> f64 {
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `0.0..=1.0`.
pub fn relative_luminance(color: Srgb) -> f64 {
    0.2126 * wcag_linear(color.r) + 0.7152 * wcag_linear(color.g) + 0.0722 * wcag_linear(color.b)
}

/// Contrast ratio `(L1 + 0.05) / (L2 + 0.05)` with `L1 >= L2`.
///
/// Always in `1.0..=21.0` and independent of argument order.
///
/// ```
/// use splash_palette::{contrast_ratio, Srgb};
///
/// let white = Srgb::from_u8(255, 255, 255);
/// let black = Srgb::from_u8(0, 0, 0);
/// assert_eq!(contrast_ratio(white, black), 21.0);
/// ```
pub fn contrast_ratio(a: Srgb, b: Srgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}
