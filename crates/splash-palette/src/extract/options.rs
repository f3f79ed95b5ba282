//! Extraction options.

/// Tuning for [`extract`](super::extract).
///
/// # Defaults
///
/// - 5 bits per channel histogram (32768 bins)
/// - vibrant/muted split at HSL saturation `0.35`
/// - dark band below lightness `0.4`, light band above `0.6`
/// - pixels darker than `0.05` or lighter than `0.95` are ignored
/// - 12 hue sectors of 30°
/// - a cluster needs `0.5%` of the counted pixels
///
/// ```
/// use splash_palette::ExtractOptions;
///
/// let options = ExtractOptions::new().min_population(0.01);
/// assert_eq!(options.min_population, 0.01);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Histogram precision per channel, `1..=8`.
    pub quantize_bits: u8,
    /// Saturation at or above which a bin is vibrant.
    pub vibrant_min_saturation: f64,
    /// Lightness below which a bin belongs to a dark band.
    pub dark_max_lightness: f64,
    /// Lightness above which a bin belongs to a light band.
    pub light_min_lightness: f64,
    /// Bins at or below this lightness are treated as black and skipped.
    pub black_max_lightness: f64,
    /// Bins at or above this lightness are treated as white and skipped.
    pub white_min_lightness: f64,
    /// Number of hue sectors a band is split into when picking its dominant hue.
    pub hue_sectors: u16,
    /// Fraction of counted pixels a cluster needs to be reported.
    pub min_population: f64,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            quantize_bits: 5,
            vibrant_min_saturation: 0.35,
            dark_max_lightness: 0.4,
            light_min_lightness: 0.6,
            black_max_lightness: 0.05,
            white_min_lightness: 0.95,
            hue_sectors: 12,
            min_population: 0.005,
        }
    }
}

impl ExtractOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn quantize_bits(mut self, bits: u8) -> Self {
        self.quantize_bits = bits.clamp(1, 8);
        self
    }

    #[inline]
    pub fn min_population(mut self, fraction: f64) -> Self {
        self.min_population = fraction.clamp(0.0, 1.0);
        self
    }

    #[inline]
    pub fn vibrant_min_saturation(mut self, saturation: f64) -> Self {
        self.vibrant_min_saturation = saturation;
        self
    }

    #[inline]
    pub fn hue_sectors(mut self, sectors: u16) -> Self {
        self.hue_sectors = sectors.max(1);
        self
    }
}
