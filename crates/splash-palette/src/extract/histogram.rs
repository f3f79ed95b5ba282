//! Histogram binning and band clustering.

use super::options::ExtractOptions;
use super::swatch::{RawSwatch, SwatchKind, Swatches};
use crate::color::{Hsl, LinearRgb, Srgb};

/// Accumulated pixels: count and summed linear light.
#[derive(Debug, Clone, Copy, Default)]
struct Bin {
    count: u32,
    sum: [f64; 3],
}

impl Bin {
    #[inline]
    fn add(&mut self, color: LinearRgb) {
        self.count += 1;
        self.sum[0] += color.r;
        self.sum[1] += color.g;
        self.sum[2] += color.b;
    }

    #[inline]
    fn merge(&mut self, other: &Bin) {
        self.count += other.count;
        self.sum[0] += other.sum[0];
        self.sum[1] += other.sum[1];
        self.sum[2] += other.sum[2];
    }

    /// Centroid in linear light. Only meaningful for `count > 0`.
    #[inline]
    fn mean(&self) -> LinearRgb {
        let n = self.count as f64;
        LinearRgb::new(self.sum[0] / n, self.sum[1] / n, self.sum[2] / n)
    }
}

fn classify(hsl: Hsl, options: &ExtractOptions) -> SwatchKind {
    let vibrant = hsl.s >= options.vibrant_min_saturation;
    let dark = hsl.l < options.dark_max_lightness;
    let light = hsl.l > options.light_min_lightness;

    match (vibrant, dark, light) {
        (true, true, _) => SwatchKind::DarkVibrant,
        (true, _, true) => SwatchKind::LightVibrant,
        (true, _, _) => SwatchKind::Vibrant,
        (false, true, _) => SwatchKind::DarkMuted,
        (false, _, true) => SwatchKind::LightMuted,
        (false, _, _) => SwatchKind::Muted,
    }
}

/// Extract up to six named swatches from a pixel buffer.
///
/// Pixel order does not matter. Transparent pixels must be removed by the
/// caller. Returns an empty set when no pixel survives the black/white
/// filter or no cluster reaches the population threshold.
///
/// # Example
///
/// ```
/// use splash_palette::{extract, ExtractOptions, Srgb, SwatchKind};
///
/// let pixels = vec![Srgb::from_u8(220, 30, 40); 100];
/// let swatches = extract(&pixels, &ExtractOptions::new());
///
/// assert_eq!(swatches.len(), 1);
/// assert_eq!(swatches.color(SwatchKind::Vibrant), Some(Srgb::from_u8(220, 30, 40)));
/// ```
pub fn extract(pixels: &[Srgb], options: &ExtractOptions) -> Swatches {
    let bits = options.quantize_bits.clamp(1, 8);
    let shift = 8 - bits;
    let side = 1usize << bits;

    let mut bins = vec![Bin::default(); side * side * side];
    for &pixel in pixels {
        let [r, g, b] = pixel.to_bytes();
        let index = (((r >> shift) as usize * side) + (g >> shift) as usize) * side
            + (b >> shift) as usize;
        bins[index].add(LinearRgb::from(pixel));
    }

    let sectors = options.hue_sectors.max(1) as usize;
    let mut clusters = vec![vec![Bin::default(); sectors]; SwatchKind::ALL.len()];
    let mut counted: u64 = 0;

    for bin in bins.iter().filter(|b| b.count > 0) {
        let hsl = Hsl::from(Srgb::from(bin.mean()));
        if hsl.l <= options.black_max_lightness || hsl.l >= options.white_min_lightness {
            continue;
        }

        counted += bin.count as u64;
        let kind = classify(hsl, options);
        let sector = ((hsl.h / 360.0) * sectors as f64) as usize % sectors;
        clusters[kind.index()][sector].merge(bin);
    }

    let mut swatches = Swatches::new();
    if counted == 0 {
        return swatches;
    }

    let threshold = ((counted as f64 * options.min_population).ceil() as u64).max(1);

    for kind in SwatchKind::ALL {
        // Most populous hue sector; first sector wins ties
        let mut best: Option<&Bin> = None;
        for cluster in &clusters[kind.index()] {
            if cluster.count > best.map_or(0, |b| b.count) {
                best = Some(cluster);
            }
        }

        if let Some(cluster) = best.filter(|c| c.count as u64 >= threshold) {
            swatches.insert(RawSwatch {
                kind,
                color: Srgb::from(cluster.mean()).quantize(),
                population: cluster.count,
            });
        }
    }

    swatches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repeat(color: (u8, u8, u8), n: usize) -> Vec<Srgb> {
        vec![Srgb::from_u8(color.0, color.1, color.2); n]
    }

    #[test]
    fn test_empty_input_yields_no_swatches() {
        assert!(extract(&[], &ExtractOptions::new()).is_empty());
    }

    #[test]
    fn test_black_and_white_only_yields_no_swatches() {
        let mut pixels = repeat((0, 0, 0), 50);
        pixels.extend(repeat((255, 255, 255), 50));
        assert!(extract(&pixels, &ExtractOptions::new()).is_empty());
    }

    #[test]
    fn test_band_classification() {
        let cases = [
            ((255, 0, 0), SwatchKind::Vibrant),
            ((0, 0, 100), SwatchKind::DarkVibrant),
            ((150, 200, 255), SwatchKind::LightVibrant),
            ((128, 128, 128), SwatchKind::Muted),
            ((60, 55, 50), SwatchKind::DarkMuted),
            ((230, 220, 210), SwatchKind::LightMuted),
        ];

        for (rgb, expected) in cases {
            let swatches = extract(&repeat(rgb, 20), &ExtractOptions::new());
            assert_eq!(swatches.len(), 1, "{rgb:?} should give one swatch");
            let swatch = swatches.iter().next().unwrap();
            assert_eq!(swatch.kind, expected, "{rgb:?}");
            assert_eq!(swatch.color, Srgb::from_u8(rgb.0, rgb.1, rgb.2));
            assert_eq!(swatch.population, 20);
        }
    }

    #[test]
    fn test_dominant_hue_wins_within_band() {
        let mut pixels = repeat((255, 0, 0), 60);
        pixels.extend(repeat((0, 255, 0), 40));

        let swatches = extract(&pixels, &ExtractOptions::new());
        let vibrant = swatches.get(SwatchKind::Vibrant).unwrap();
        assert_eq!(vibrant.color, Srgb::from_u8(255, 0, 0));
        assert_eq!(vibrant.population, 60);
    }

    #[test]
    fn test_small_clusters_are_omitted() {
        let mut pixels = repeat((255, 0, 0), 1000);
        pixels.extend(repeat((230, 220, 210), 2));

        let swatches = extract(&pixels, &ExtractOptions::new());
        assert!(swatches.get(SwatchKind::Vibrant).is_some());
        assert!(swatches.get(SwatchKind::LightMuted).is_none());

        let lenient = extract(&pixels, &ExtractOptions::new().min_population(0.0));
        assert!(lenient.get(SwatchKind::LightMuted).is_some());
    }

    #[test]
    fn test_pixel_order_does_not_matter() {
        let mut pixels = repeat((255, 0, 0), 30);
        pixels.extend(repeat((0, 0, 100), 20));
        pixels.extend(repeat((128, 128, 128), 10));

        let forward = extract(&pixels, &ExtractOptions::new());
        pixels.reverse();
        let backward = extract(&pixels, &ExtractOptions::new());
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_centroid_averages_in_linear_light() {
        // Two reds in the same bin and sector, both above the dark band
        let mut pixels = repeat((224, 0, 0), 10);
        pixels.extend(repeat((230, 0, 0), 10));

        let swatches = extract(&pixels, &ExtractOptions::new());
        let vibrant = swatches.get(SwatchKind::Vibrant).unwrap();
        let [r, g, b] = vibrant.color.to_bytes();
        assert!((224..=230).contains(&r), "{r}");
        assert_eq!((g, b), (0, 0));
        assert_eq!(vibrant.population, 20);
    }

    #[test]
    fn test_coarser_bins_merge_across_bands() {
        // 200 is dark, 250 is not; at 5 bits they land in separate bins
        let mut pixels = repeat((200, 0, 0), 10);
        pixels.extend(repeat((250, 0, 0), 10));

        let fine = extract(&pixels, &ExtractOptions::new());
        assert_eq!(fine.get(SwatchKind::DarkVibrant).unwrap().population, 10);
        assert_eq!(fine.get(SwatchKind::Vibrant).unwrap().population, 10);

        // At 2 bits both share a bin whose linear-light mean is not dark
        let coarse = extract(&pixels, &ExtractOptions::new().quantize_bits(2));
        assert_eq!(coarse.len(), 1);
        let vibrant = coarse.get(SwatchKind::Vibrant).unwrap();
        assert_eq!(vibrant.population, 20);
        let [r, _, _] = vibrant.color.to_bytes();
        assert!(r > 225, "{r}");

        assert_eq!(ExtractOptions::new().quantize_bits(0).quantize_bits, 1);
        assert_eq!(ExtractOptions::new().quantize_bits(12).quantize_bits, 8);
    }

    #[test]
    fn test_vibrant_saturation_threshold() {
        // HSL saturation ≈ 0.24
        let pixels = repeat((160, 120, 100), 20);

        let default = extract(&pixels, &ExtractOptions::new());
        assert!(default.get(SwatchKind::Muted).is_some());
        assert!(default.get(SwatchKind::Vibrant).is_none());

        let lenient = extract(&pixels, &ExtractOptions::new().vibrant_min_saturation(0.2));
        assert!(lenient.get(SwatchKind::Vibrant).is_some());
        assert!(lenient.get(SwatchKind::Muted).is_none());
    }

    #[test]
    fn test_single_hue_sector_pools_band() {
        let mut pixels = repeat((255, 0, 0), 60);
        pixels.extend(repeat((0, 255, 0), 40));

        let pooled = extract(&pixels, &ExtractOptions::new().hue_sectors(1));
        let vibrant = pooled.get(SwatchKind::Vibrant).unwrap();
        assert_eq!(vibrant.population, 100);
        let [r, g, b] = vibrant.color.to_bytes();
        assert!(r > 0 && g > 0 && b == 0, "{:?}", (r, g, b));

        assert_eq!(ExtractOptions::new().hue_sectors(0).hue_sectors, 1);
    }
}
