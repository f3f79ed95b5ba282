//! Brand refinement of extracted colors.
//!
//! A raw swatch goes through three steps, in order:
//!
//! 1. **Contrast fix**: if its WCAG contrast against the background is under
//!    the threshold, it is replaced by the Lab midpoint between itself and
//!    the background. This is a single correction; the result is not
//!    re-checked.
//! 2. **Snap**: the (possibly blended) color is replaced by the brand
//!    palette entry with the smallest ΔE, earliest entry on ties.
//! 3. **De-neon**: if the snapped color's HSL saturation exceeds the
//!    saturation threshold it is fully desaturated. This is all-or-nothing.
//!
//! The output is therefore always a brand color or the grey of a brand color.

use crate::color::{blend_lab, contrast_ratio, desaturate, saturation_hsl, Srgb};
use crate::palette::BrandPalette;

/// Thresholds for [`Refiner`].
///
/// # Defaults
///
/// - contrast threshold: `4.5` (WCAG AA for body text)
/// - saturation threshold: `0.8`
///
/// ```
/// use splash_palette::RefineOptions;
///
/// let options = RefineOptions::new().contrast_threshold(3.0);
/// assert_eq!(options.contrast_threshold, 3.0);
/// assert_eq!(options.saturation_threshold, 0.8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefineOptions {
    /// Minimum contrast ratio against the background before blending kicks in.
    pub contrast_threshold: f64,
    /// Maximum HSL saturation a snapped color may keep.
    pub saturation_threshold: f64,
}

impl Default for RefineOptions {
    fn default() -> Self {
        Self {
            contrast_threshold: 4.5,
            saturation_threshold: 0.8,
        }
    }
}

impl RefineOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contrast_threshold(mut self, ratio: f64) -> Self {
        self.contrast_threshold = ratio;
        self
    }

    #[inline]
    pub fn saturation_threshold(mut self, saturation: f64) -> Self {
        self.saturation_threshold = saturation;
        self
    }
}

/// Refines candidate colors against a brand palette and a background.
///
/// # Example
///
/// ```
/// use splash_palette::{BrandPalette, RefineOptions, Refiner, Srgb};
///
/// let palette = BrandPalette::from_hex(&["#71baed", "#815117"]).unwrap();
/// let refiner = Refiner::new(palette, Srgb::from_u8(0, 0, 0), RefineOptions::new());
///
/// // A light sky blue easily clears 4.5:1 on black and snaps to #71baed
/// let refined = refiner.refine(Srgb::from_u8(0x80, 0xc0, 0xf0));
/// assert_eq!(refined.to_hex(), "#71baed");
/// ```
#[derive(Debug, Clone)]
pub struct Refiner {
    palette: BrandPalette,
    background: Srgb,
    options: RefineOptions,
}

impl Refiner {
    pub fn new(palette: BrandPalette, background: Srgb, options: RefineOptions) -> Self {
        Self {
            palette,
            background,
            options,
        }
    }

    pub fn palette(&self) -> &BrandPalette {
        &self.palette
    }

    pub fn background(&self) -> Srgb {
        self.background
    }

    pub fn options(&self) -> RefineOptions {
        self.options
    }

    /// Run contrast fix, snap and de-neon on `candidate`.
    pub fn refine(&self, candidate: Srgb) -> Srgb {
        refine(candidate, &self.palette, self.background, &self.options)
    }
}

/// Stateless form of [`Refiner::refine`].
pub fn refine(
    candidate: Srgb,
    palette: &BrandPalette,
    background: Srgb,
    options: &RefineOptions,
) -> Srgb {
    let mut color = candidate;

    if contrast_ratio(color, background) < options.contrast_threshold {
        color = blend_lab(color, background, 0.5);
    }

    let snapped = palette.nearest(color);

    if saturation_hsl(snapped) > options.saturation_threshold {
        desaturate(snapped, 1.0)
    } else {
        snapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand() -> BrandPalette {
        BrandPalette::from_hex(&[
            "#6a22d9", "#4e4aa5", "#71baed", "#c97f24", "#815117", "#ebcf8c",
        ])
        .unwrap()
    }

    fn black() -> Srgb {
        Srgb::from_u8(0, 0, 0)
    }

    #[test]
    fn test_high_contrast_candidate_snaps_directly() {
        let refined = refine(
            Srgb::from_u8(0xe0, 0xd0, 0x90),
            &brand(),
            black(),
            &RefineOptions::new(),
        );
        assert_eq!(refined.to_hex(), "#ebcf8c");
    }

    #[test]
    fn test_brand_member_passes_through_unchanged() {
        // #71baed: saturation ~0.77, contrast on black ~10:1
        let c: Srgb = "#71baed".parse().unwrap();
        assert_eq!(refine(c, &brand(), black(), &RefineOptions::new()), c);
    }

    #[test]
    fn test_low_contrast_candidate_is_blended_before_snapping() {
        // Dark red has < 4.5:1 against black; the midpoint with black is
        // darker still, which pulls the snap toward the dark brown.
        let refined = refine(
            Srgb::from_u8(0x90, 0x40, 0x10),
            &brand(),
            black(),
            &RefineOptions::new(),
        );
        assert_eq!(refined.to_hex(), "#815117");
    }

    #[test]
    fn test_oversaturated_snap_is_fully_desaturated() {
        let palette = BrandPalette::from_hex(&["#ff0000"]).unwrap();
        let refined = refine(
            Srgb::from_u8(250, 20, 20),
            &palette,
            Srgb::from_u8(255, 255, 255),
            &RefineOptions::new(),
        );
        assert_eq!(saturation_hsl(refined), 0.0);
        assert_eq!(refined, desaturate(Srgb::from_u8(255, 0, 0), 1.0));
    }

    #[test]
    fn test_saturation_threshold_is_exclusive() {
        // #ff0000 has saturation exactly 1.0; a threshold of 1.0 keeps it
        let palette = BrandPalette::from_hex(&["#ff0000"]).unwrap();
        let options = RefineOptions::new().saturation_threshold(1.0);
        let refined = refine(Srgb::from_u8(255, 0, 0), &palette, black(), &options);
        assert_eq!(refined.to_hex(), "#ff0000");
    }

    #[test]
    fn test_refiner_wraps_free_function() {
        let refiner = Refiner::new(brand(), black(), RefineOptions::new());
        let c = Srgb::from_u8(0x30, 0x30, 0x80);
        assert_eq!(
            refiner.refine(c),
            refine(c, &brand(), black(), &RefineOptions::new())
        );
    }
}
