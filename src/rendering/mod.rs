pub mod pixels;

pub use pixels::{probe_dimensions, sample_pixels, SourceKind};
