//! Image bytes to dimensions and color samples.
//!
//! Raster formats go through the `image` crate; SVG documents are parsed
//! with usvg and rasterized with resvg into a transparent pixmap.

use std::io::Cursor;

use image::{DynamicImage, ImageReader};
use resvg::usvg::{self, Transform};
use splash_palette::Srgb;
use tiny_skia::Pixmap;

use crate::error::AnalysisError;

/// Pixels less opaque than this are ignored for color extraction.
pub const MIN_ALPHA: u8 = 125;

/// How to decode a file's bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Raster,
    Svg,
}

impl SourceKind {
    /// Pick the decoder from the file name's extension.
    pub fn from_file_name(name: &str) -> Self {
        let is_svg = std::path::Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
        if is_svg {
            SourceKind::Svg
        } else {
            SourceKind::Raster
        }
    }
}

/// Read the width and height without decoding pixel data where possible.
pub fn probe_dimensions(data: &[u8], kind: SourceKind) -> Result<(u32, u32), AnalysisError> {
    match kind {
        SourceKind::Raster => {
            let reader = ImageReader::new(Cursor::new(data)).with_guessed_format()?;
            Ok(reader.into_dimensions()?)
        }
        SourceKind::Svg => {
            let size = parse_svg(data)?.size();
            Ok((
                size.width().round() as u32,
                size.height().round() as u32,
            ))
        }
    }
}

/// Decode the image and return its opaque pixels, reduced so the longest
/// edge is at most `max_edge`.
pub fn sample_pixels(
    data: &[u8],
    kind: SourceKind,
    max_edge: u32,
) -> Result<Vec<Srgb>, AnalysisError> {
    match kind {
        SourceKind::Raster => {
            let image = image::load_from_memory(data)?;
            Ok(raster_pixels(&image, max_edge))
        }
        SourceKind::Svg => {
            let pixmap = rasterize_svg(data, max_edge)?;
            Ok(pixmap_pixels(&pixmap))
        }
    }
}

fn raster_pixels(image: &DynamicImage, max_edge: u32) -> Vec<Srgb> {
    let rgba = if image.width() > max_edge || image.height() > max_edge {
        image.thumbnail(max_edge, max_edge).to_rgba8()
    } else {
        image.to_rgba8()
    };

    rgba.pixels()
        .filter(|p| p.0[3] >= MIN_ALPHA)
        .map(|p| Srgb::from_u8(p.0[0], p.0[1], p.0[2]))
        .collect()
}

fn parse_svg(data: &[u8]) -> Result<usvg::Tree, AnalysisError> {
    usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|e| AnalysisError::Svg(e.to_string()))
}

/// Rasterize an SVG so its longest edge is `max_edge` pixels.
fn rasterize_svg(data: &[u8], max_edge: u32) -> Result<Pixmap, AnalysisError> {
    let tree = parse_svg(data)?;

    let svg_size = tree.size();
    let longest = svg_size.width().max(svg_size.height());
    let scale = max_edge as f32 / longest;

    let width = ((svg_size.width() * scale).round() as u32).clamp(1, max_edge);
    let height = ((svg_size.height() * scale).round() as u32).clamp(1, max_edge);

    let mut pixmap = Pixmap::new(width, height).ok_or(AnalysisError::PixmapAllocation)?;

    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    Ok(pixmap)
}

fn pixmap_pixels(pixmap: &Pixmap) -> Vec<Srgb> {
    pixmap
        .pixels()
        .iter()
        .filter(|p| p.alpha() >= MIN_ALPHA)
        .map(|p| {
            let c = p.demultiply();
            Srgb::from_u8(c.red(), c.green(), c.blue())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};

    fn png_bytes(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba(pixel));
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    const SVG_RECT: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="300" height="100">
  <rect width="300" height="100" fill="#c97f24"/>
</svg>"##;

    #[test]
    fn test_source_kind_from_file_name() {
        assert_eq!(SourceKind::from_file_name("logo.svg"), SourceKind::Svg);
        assert_eq!(SourceKind::from_file_name("LOGO.SVG"), SourceKind::Svg);
        assert_eq!(SourceKind::from_file_name("hero.png"), SourceKind::Raster);
        assert_eq!(SourceKind::from_file_name("noext"), SourceKind::Raster);
    }

    #[test]
    fn test_probe_png_dimensions() {
        let data = png_bytes(40, 20, [10, 20, 30, 255]);
        assert_eq!(probe_dimensions(&data, SourceKind::Raster).unwrap(), (40, 20));
    }

    #[test]
    fn test_probe_garbage_fails() {
        let result = probe_dimensions(b"definitely not an image", SourceKind::Raster);
        assert!(result.is_err());
    }

    #[test]
    fn test_probe_svg_dimensions() {
        let dims = probe_dimensions(SVG_RECT.as_bytes(), SourceKind::Svg).unwrap();
        assert_eq!(dims, (300, 100));
    }

    #[test]
    fn test_probe_invalid_svg_fails() {
        let result = probe_dimensions(b"<svg", SourceKind::Svg);
        assert!(matches!(result, Err(AnalysisError::Svg(_))));
    }

    #[test]
    fn test_sample_pixels_thumbnails_large_images() {
        let data = png_bytes(400, 100, [200, 40, 40, 255]);
        let pixels = sample_pixels(&data, SourceKind::Raster, 100).unwrap();

        assert!(pixels.len() <= 100 * 100);
        assert!(!pixels.is_empty());
        assert_eq!(pixels[0], Srgb::from_u8(200, 40, 40));
    }

    #[test]
    fn test_sample_pixels_skips_transparent() {
        let data = png_bytes(10, 10, [200, 40, 40, 100]);
        let pixels = sample_pixels(&data, SourceKind::Raster, 200).unwrap();
        assert!(pixels.is_empty());
    }

    #[test]
    fn test_sample_svg_pixels() {
        let pixels = sample_pixels(SVG_RECT.as_bytes(), SourceKind::Svg, 60).unwrap();

        assert_eq!(pixels.len(), 60 * 20);
        assert!(pixels.iter().all(|&p| p == Srgb::from_u8(0xc9, 0x7f, 0x24)));
    }
}
