//! splash-palette: color analysis for splash-screen theming
//!
//! This library turns the pixels of a candidate hero image into a handful of
//! named dominant colors and refines them into a small, contrast-aware,
//! brand-consistent palette.
//!
//! # Quick Start
//!
//! ```
//! use splash_palette::{extract, BrandPalette, ExtractOptions, RefineOptions, Refiner, Srgb, SwatchKind};
//!
//! let pixels = vec![Srgb::from_u8(120, 190, 235); 64];
//! let swatches = extract(&pixels, &ExtractOptions::new());
//!
//! let brand = BrandPalette::from_hex(&["#6a22d9", "#71baed", "#c97f24"]).unwrap();
//! let refiner = Refiner::new(brand, Srgb::from_u8(0, 0, 0), RefineOptions::new());
//!
//! let light = swatches.color(SwatchKind::LightVibrant).unwrap();
//! assert_eq!(refiner.refine(light).to_hex(), "#71baed");
//! ```
//!
//! # Color Spaces
//!
//! | Color Space | Used For |
//! |-------------|----------|
//! | [`Srgb`] | Input/output: hex strings, decoded pixels, manifest colors |
//! | [`LinearRgb`] | Cluster centroids, luminance, XYZ conversion |
//! | [`Lab`] | ΔE (CIE76) for snapping, midpoint blending |
//! | [`Hsl`] | Saturation ceiling, vibrant/muted banding |
//!
//! Contrast follows WCAG 2.x: relative luminance from the gamma-decoded
//! channels, ratio `(L1 + 0.05) / (L2 + 0.05)` with the lighter color on top,
//! so the ratio is symmetric and lies in `1..=21`.
//!
//! ## Distance Metric
//!
//! ΔE is plain CIE76, the Euclidean distance in Lab. It is used everywhere a
//! distance is needed, so "nearest brand color" means the same thing in
//! every part of the pipeline.
//!
//! ## Quantization
//!
//! Colors leaving any public operation are quantized to 8 bits per channel.
//! Equality between two results is therefore equality of their hex strings,
//! which the slot-assignment rules downstream compare on.

pub mod color;
pub mod extract;
pub mod palette;
pub mod refine;


pub use color::{
    blend_lab, contrast_ratio, delta_e, desaturate, relative_luminance, saturation_hsl, Hsl, Lab,
    LinearRgb, Srgb,
};
pub use extract::{extract, ExtractOptions, RawSwatch, SwatchKind, Swatches};
pub use palette::{BrandPalette, PaletteError, ParseColorError};
pub use refine::{refine, RefineOptions, Refiner};
