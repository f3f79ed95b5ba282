use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use splash_palette::{extract, Refiner, Srgb, SwatchKind, Swatches};

use crate::error::AnalysisError;
use crate::models::{ImageColors, ImageResult, Orientation, Pipeline};
use crate::rendering::{probe_dimensions, sample_pixels, SourceKind};

/// Analyzes single image files: orientation plus a three-slot palette.
///
/// Never fails. Unreadable or unprobeable files come back as
/// [`ImageResult::failed`], extraction problems as empty colors.
#[derive(Debug, Clone)]
pub struct ImageAnalyzer {
    pipeline: Arc<Pipeline>,
}

impl ImageAnalyzer {
    pub fn new(pipeline: Arc<Pipeline>) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Read and analyze the file at `path`.
    ///
    /// The read is bounded by the configured I/O timeout; decoding and
    /// clustering run on the blocking pool.
    pub async fn analyze(&self, path: &Path) -> ImageResult {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let data = match read_with_timeout(path, self.pipeline.io_timeout).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(file = %filename, error = %e, "Could not read image");
                return ImageResult::failed(filename);
            }
        };

        let pipeline = self.pipeline.clone();
        let name = filename.clone();
        let task = tokio::task::spawn_blocking(move || analyze_bytes(&name, &data, &pipeline));

        match task.await {
            Ok(result) => result,
            Err(e) => {
                let e = AnalysisError::Join(e.to_string());
                tracing::warn!(file = %filename, error = %e, "Could not analyze image");
                ImageResult::failed(filename)
            }
        }
    }
}

async fn read_with_timeout(path: &Path, limit: Duration) -> Result<Vec<u8>, AnalysisError> {
    match tokio::time::timeout(limit, tokio::fs::read(path)).await {
        Ok(read) => Ok(read?),
        Err(_) => Err(AnalysisError::Timeout(limit)),
    }
}

/// Analyze an image already in memory. `filename` picks the decoder and
/// labels the result.
pub fn analyze_bytes(filename: &str, data: &[u8], pipeline: &Pipeline) -> ImageResult {
    let kind = SourceKind::from_file_name(filename);

    let (width, height) = match probe_dimensions(data, kind) {
        Ok(dims) => dims,
        Err(e) => {
            tracing::warn!(file = %filename, error = %e, "Could not get dimensions");
            return ImageResult::failed(filename);
        }
    };
    let orientation = Orientation::from_dimensions(width, height);
    tracing::debug!(file = %filename, width, height, ?orientation, "Probed image");

    let colors = match extract_colors(filename, data, kind, pipeline) {
        Ok(colors) => colors,
        Err(e) => {
            tracing::warn!(file = %filename, error = %e, "Could not extract colors");
            ImageColors::default()
        }
    };

    tracing::debug!(
        file = %filename,
        primary = %hex_or_none(colors.primary),
        secondary = %hex_or_none(colors.secondary),
        accent = %hex_or_none(colors.accent),
        "Image colors"
    );

    ImageResult::new(filename, orientation, colors)
}

fn extract_colors(
    filename: &str,
    data: &[u8],
    kind: SourceKind,
    pipeline: &Pipeline,
) -> Result<ImageColors, AnalysisError> {
    let pixels = sample_pixels(data, kind, pipeline.sample_size)?;
    let swatches = extract(&pixels, &pipeline.extract);

    tracing::debug!(
        file = %filename,
        sampled = pixels.len(),
        swatches = ?swatches
            .iter()
            .map(|s| format!("{}={}", s.kind, s.color))
            .collect::<Vec<_>>(),
        "Extracted swatches"
    );

    Ok(assign_slots(&swatches, &pipeline.refiner))
}

fn hex_or_none(color: Option<Srgb>) -> String {
    color.map_or_else(|| "none".to_string(), |c| c.to_hex())
}

/// Fill primary, secondary and accent from the extracted swatches.
///
/// Only the first-choice swatch of each slot goes through the refiner;
/// fallback swatches are used as extracted. Slots still empty after the
/// priority rules are topped up from the remaining swatches in extraction
/// order.
pub fn assign_slots(swatches: &Swatches, refiner: &Refiner) -> ImageColors {
    let mut colors = ImageColors {
        primary: swatches
            .color(SwatchKind::Vibrant)
            .map(|c| refiner.refine(c))
            .or_else(|| swatches.color(SwatchKind::DarkVibrant)),
        secondary: swatches
            .color(SwatchKind::Muted)
            .map(|c| refiner.refine(c))
            .or_else(|| swatches.color(SwatchKind::DarkMuted)),
        accent: None,
    };

    colors.accent = match swatches.color(SwatchKind::LightVibrant) {
        Some(c) => Some(refiner.refine(c)),
        None => swatches
            .color(SwatchKind::LightMuted)
            .filter(|&c| !colors.used_by_primary_or_secondary(c))
            .or_else(|| {
                swatches
                    .color(SwatchKind::DarkVibrant)
                    .filter(|&c| !colors.used_by_primary_or_secondary(c))
            }),
    };

    let available: Vec<Srgb> = swatches.iter().map(|s| s.color).collect();
    top_up(&mut colors, &available);
    colors
}

fn top_up(colors: &mut ImageColors, available: &[Srgb]) {
    let Some(&first) = available.first() else {
        return;
    };

    if colors.primary.is_none() {
        colors.primary = Some(first);
    }

    if colors.secondary.is_none() {
        colors.secondary = available
            .iter()
            .copied()
            .find(|&c| colors.primary != Some(c))
            .or_else(|| available.get(1).copied());
    }

    if colors.accent.is_none() {
        colors.accent = available
            .iter()
            .copied()
            .find(|&c| !colors.used_by_primary_or_secondary(c))
            .or_else(|| available.get(2).copied())
            .or_else(|| {
                available
                    .get(1)
                    .copied()
                    .filter(|&c| colors.primary != Some(c))
            })
            .or_else(|| Some(first).filter(|&c| !colors.used_by_primary_or_secondary(c)));
    }
}
