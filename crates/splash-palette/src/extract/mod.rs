//! Dominant-color extraction.
//!
//! Pixels are binned into a coarse RGB histogram, each bin is sorted into
//! one of six lightness/saturation bands, and each band yields at most one
//! [`RawSwatch`]: the population-weighted centroid of its most populous hue
//! sector. Bands whose winning cluster is too small are left empty.
//!
//! | Band | Saturation | Lightness |
//! |------|------------|-----------|
//! | [`SwatchKind::Vibrant`] | high | mid |
//! | [`SwatchKind::DarkVibrant`] | high | dark |
//! | [`SwatchKind::LightVibrant`] | high | light |
//! | [`SwatchKind::Muted`] | low | mid |
//! | [`SwatchKind::DarkMuted`] | low | dark |
//! | [`SwatchKind::LightMuted`] | low | light |

mod histogram;
mod options;
mod swatch;

pub use histogram::extract;
pub use options::ExtractOptions;
pub use swatch::{RawSwatch, SwatchKind, Swatches};
