pub mod config;
pub mod image;
pub mod manifest;

pub use config::{Pipeline, SplashConfig};
pub use image::{ImageColors, ImageResult, Orientation};
pub use manifest::{join_path, GalleryEntry, ImageSet, ManifestEntry};
