pub mod gallery;
pub mod image_analyzer;
pub mod manifest_builder;
pub mod manifest_writer;
pub mod set_assembler;

pub use gallery::build_gallery;
pub use image_analyzer::{analyze_bytes, assign_slots, ImageAnalyzer};
pub use manifest_builder::{list_set_folders, ManifestBuilder};
pub use manifest_writer::{to_json, write_atomic, write_json};
pub use set_assembler::{assemble, SetAssembler};
