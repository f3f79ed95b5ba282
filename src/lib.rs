//! splash-manifest - themed splash-image manifests
//!
//! Analyzes folders of candidate hero images and writes the manifest a
//! front-end uses to pick a desktop image, a mobile image and a matching
//! brand-safe color theme.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
