use serde::{Deserialize, Serialize};
use splash_palette::{BrandPalette, ExtractOptions, RefineOptions, Refiner, Srgb};
use std::path::Path;
use std::time::Duration;

use crate::error::BuildError;

/// Build configuration loaded from config.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplashConfig {
    /// Approved colors every extracted color is snapped to, in tie-break order
    #[serde(default = "default_brand_palette")]
    pub brand_palette: Vec<String>,

    /// Color the front-end draws accents against
    #[serde(default = "default_background")]
    pub background: String,

    /// Minimum WCAG contrast before a candidate is blended toward the background
    #[serde(default = "default_contrast_threshold")]
    pub contrast_threshold: f64,

    /// HSL saturation above which a refined color is fully desaturated
    #[serde(default = "default_saturation_threshold")]
    pub saturation_threshold: f64,

    /// File extensions (without dot, case-insensitive) treated as images
    #[serde(default = "default_image_extensions")]
    pub image_extensions: Vec<String>,

    /// Concurrent analyses per folder (defaults to available parallelism)
    #[serde(default)]
    pub workers: Option<usize>,

    /// Per-file read timeout in seconds
    #[serde(default = "default_io_timeout_secs")]
    pub io_timeout_secs: u64,

    /// Longest edge images are reduced to before color extraction
    #[serde(default = "default_sample_size")]
    pub sample_size: u32,

    /// Fraction of counted pixels a color cluster needs to qualify
    #[serde(default = "default_min_population")]
    pub min_population: f64,
}

fn default_brand_palette() -> Vec<String> {
    ["#6a22d9", "#4e4aa5", "#71baed", "#c97f24", "#815117", "#ebcf8c"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_background() -> String {
    "#000000".to_string()
}

fn default_contrast_threshold() -> f64 {
    4.5
}

fn default_saturation_threshold() -> f64 {
    0.8
}

fn default_image_extensions() -> Vec<String> {
    ["jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "svg"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_io_timeout_secs() -> u64 {
    10
}

fn default_sample_size() -> u32 {
    200
}

fn default_min_population() -> f64 {
    0.005
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            brand_palette: default_brand_palette(),
            background: default_background(),
            contrast_threshold: default_contrast_threshold(),
            saturation_threshold: default_saturation_threshold(),
            image_extensions: default_image_extensions(),
            workers: None,
            io_timeout_secs: default_io_timeout_secs(),
            sample_size: default_sample_size(),
            min_population: default_min_population(),
        }
    }
}

impl SplashConfig {
    /// Load configuration from `path`, or the built-in defaults when no path
    /// is given or the file does not exist. Unreadable or malformed files
    /// are an error.
    pub fn load(path: Option<&Path>) -> Result<Self, BuildError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            BuildError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_yaml(&content)?;

        tracing::info!(
            path = %path.display(),
            brand_colors = config.brand_palette.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, BuildError> {
        serde_yaml::from_str(content)
            .map_err(|e| BuildError::Configuration(format!("invalid config: {e}")))
    }

    pub fn to_yaml(&self) -> Result<String, BuildError> {
        serde_yaml::to_string(self).map_err(|e| BuildError::Configuration(e.to_string()))
    }

    /// Validate and turn into the value the pipeline runs on.
    pub fn resolve(&self) -> Result<Pipeline, BuildError> {
        let palette = BrandPalette::from_hex(&self.brand_palette)?;
        let background: Srgb = self.background.parse().map_err(|e| {
            BuildError::Configuration(format!("invalid background color {:?}: {e}", self.background))
        })?;

        if !(self.contrast_threshold.is_finite() && self.contrast_threshold >= 1.0) {
            return Err(BuildError::Configuration(format!(
                "contrast_threshold must be at least 1.0, got {}",
                self.contrast_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.saturation_threshold) {
            return Err(BuildError::Configuration(format!(
                "saturation_threshold must be within 0..=1, got {}",
                self.saturation_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.min_population) {
            return Err(BuildError::Configuration(format!(
                "min_population must be within 0..=1, got {}",
                self.min_population
            )));
        }
        if self.sample_size == 0 {
            return Err(BuildError::Configuration(
                "sample_size must be positive".to_string(),
            ));
        }
        if self.io_timeout_secs == 0 {
            return Err(BuildError::Configuration(
                "io_timeout_secs must be positive".to_string(),
            ));
        }

        let workers = match self.workers {
            Some(0) => {
                return Err(BuildError::Configuration(
                    "workers must be positive".to_string(),
                ))
            }
            Some(n) => n,
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
        };

        let refine = RefineOptions::new()
            .contrast_threshold(self.contrast_threshold)
            .saturation_threshold(self.saturation_threshold);

        Ok(Pipeline {
            refiner: Refiner::new(palette, background, refine),
            extract: ExtractOptions::new().min_population(self.min_population),
            extensions: self
                .image_extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            workers,
            io_timeout: Duration::from_secs(self.io_timeout_secs),
            sample_size: self.sample_size,
        })
    }
}

/// Validated, read-only settings shared by every analysis of a build.
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub refiner: Refiner,
    pub extract: ExtractOptions,
    /// Lower-case, without leading dot
    pub extensions: Vec<String>,
    pub workers: usize,
    pub io_timeout: Duration,
    pub sample_size: u32,
}

impl Pipeline {
    /// Whether `file_name` has one of the configured image extensions.
    pub fn accepts(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|known| *known == ext)
            })
            .unwrap_or(false)
    }
}
