//! Fixed, ordered set of approved brand colors with nearest-color lookup.

use super::error::PaletteError;
use crate::color::{Lab, Srgb};

/// An ordered, non-empty list of brand colors.
///
/// Lab coordinates are precomputed once at construction, since the palette
/// never changes and every refined swatch is matched against all of it.
/// Declaration order is significant: ties in [`BrandPalette::nearest`] go to
/// the earliest entry. Duplicates are allowed and simply never win a tie.
///
/// # Example
///
/// ```
/// use splash_palette::{BrandPalette, Srgb};
///
/// let palette = BrandPalette::from_hex(&["#000000", "#ffffff"]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.nearest(Srgb::from_u8(30, 30, 30)), Srgb::from_u8(0, 0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct BrandPalette {
    srgb: Vec<Srgb>,
    lab: Vec<Lab>,
}

impl BrandPalette {
    /// Create a palette from sRGB colors.
    ///
    /// # Errors
    ///
    /// [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: &[Srgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let srgb: Vec<Srgb> = colors.iter().map(|c| c.quantize()).collect();
        let lab = srgb.iter().map(|&c| Lab::from(c)).collect();

        Ok(Self { srgb, lab })
    }

    /// Create a palette from hex strings such as `"#6a22d9"`.
    ///
    /// # Errors
    ///
    /// [`PaletteError::EmptyPalette`] for an empty list,
    /// [`PaletteError::ParseColor`] naming the first malformed entry.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        let parsed = colors
            .iter()
            .enumerate()
            .map(|(index, s)| {
                s.as_ref()
                    .parse::<Srgb>()
                    .map_err(|source| PaletteError::ParseColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&parsed)
    }

    /// Number of colors in the palette. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.srgb.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.srgb.is_empty()
    }

    /// The color at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Srgb> {
        self.srgb.get(index).copied()
    }

    /// Colors in declaration order.
    pub fn colors(&self) -> &[Srgb] {
        &self.srgb
    }

    /// Index of the entry with minimum ΔE (CIE76) to `color`; ties resolve
    /// to the earliest entry.
    pub fn nearest_index(&self, color: Srgb) -> usize {
        let target = Lab::from(color);
        let mut best_index = 0;
        let mut best_distance = f64::INFINITY;

        for (i, &entry) in self.lab.iter().enumerate() {
            let distance = target.delta_e(entry);
            if distance < best_distance {
                best_distance = distance;
                best_index = i;
            }
        }

        best_index
    }

    /// The entry with minimum ΔE to `color`.
    #[inline]
    pub fn nearest(&self, color: Srgb) -> Srgb {
        self.srgb[self.nearest_index(color)]
    }
}
