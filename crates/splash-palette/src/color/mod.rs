//! Color types and conversion utilities
//!
//! Colors enter and leave as [`Srgb`] (hex strings). Arithmetic that must be
//! physically meaningful goes through [`LinearRgb`]; perceptual comparison
//! and blending go through [`Lab`]; saturation is judged in [`Hsl`].
//!
//! # Example
//!
//! ```
//! use splash_palette::{delta_e, Lab, Srgb};
//!
//! let brand: Srgb = "#6a22d9".parse().unwrap();
//! let lab = Lab::from(brand);
//! assert_eq!(Srgb::from(lab), brand);
//! assert_eq!(delta_e(brand, brand), 0.0);
//! ```

mod contrast;
mod hsl;
mod lab;
mod linear_rgb;
mod srgb;

pub use contrast::{contrast_ratio, relative_luminance};
pub use hsl::{desaturate, saturation_hsl, Hsl};
pub use lab::{blend_lab, delta_e, Lab};
pub use linear_rgb::{linear_to_srgb, srgb_to_linear, LinearRgb};
pub use srgb::Srgb;
