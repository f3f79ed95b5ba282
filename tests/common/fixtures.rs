//! Test fixtures: synthetic images and splash folder trees.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{ImageFormat, Rgba, RgbaImage};
use splash_manifest::models::{Pipeline, SplashConfig};
use tempfile::TempDir;

/// Colors the fixtures paint with
pub mod colors {
    /// Brand orange, vibrant; refines to itself
    pub const ORANGE: [u8; 3] = [0xc9, 0x7f, 0x24];
    /// Neutral grey, muted; refines to #71baed
    pub const GREY: [u8; 3] = [0x80, 0x80, 0x80];
    /// Brand purple
    pub const PURPLE: [u8; 3] = [0x6a, 0x22, 0xd9];
}

/// Encode a PNG whose left half is `left` and right half is `right`.
pub fn two_tone_png(width: u32, height: u32, left: [u8; 3], right: [u8; 3]) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |x, _| {
        let c = if x < width / 2 { left } else { right };
        Rgba([c[0], c[1], c[2], 255])
    });
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

/// Encode a single-color PNG.
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    two_tone_png(width, height, rgb, rgb)
}

/// Resolved default configuration with a fixed worker count.
pub fn pipeline(workers: usize) -> Arc<Pipeline> {
    let config = SplashConfig {
        workers: Some(workers),
        ..Default::default()
    };
    Arc::new(config.resolve().expect("default config resolves"))
}

/// A temporary splash root with numbered set folders.
pub struct SplashTree {
    dir: TempDir,
}

impl SplashTree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Root as the string manifest paths are joined under.
    pub fn root_str(&self) -> String {
        self.root().to_string_lossy().into_owned()
    }

    /// Create (if needed) and return a set folder.
    pub fn folder(&self, name: &str) -> PathBuf {
        let path = self.root().join(name);
        std::fs::create_dir_all(&path).expect("create folder");
        path
    }

    /// Write raw bytes into a set folder.
    pub fn file(&self, folder: &str, name: &str, data: &[u8]) -> &Self {
        std::fs::write(self.folder(folder).join(name), data).expect("write file");
        self
    }

    /// 160x90 landscape: orange and grey halves.
    pub fn landscape(&self, folder: &str, name: &str) -> &Self {
        self.file(folder, name, &two_tone_png(160, 90, colors::ORANGE, colors::GREY))
    }

    /// 90x160 portrait in plain orange.
    pub fn portrait(&self, folder: &str, name: &str) -> &Self {
        self.file(folder, name, &solid_png(90, 160, colors::ORANGE))
    }

    /// 100x100 square in plain purple.
    pub fn square(&self, folder: &str, name: &str) -> &Self {
        self.file(folder, name, &solid_png(100, 100, colors::PURPLE))
    }

    /// Path string the way the manifest spells it.
    pub fn manifest_path(&self, folder: &str, file: &str) -> String {
        format!("{}/{folder}/{file}", self.root_str())
    }
}
