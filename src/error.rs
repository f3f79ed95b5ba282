use std::path::PathBuf;
use std::time::Duration;

use splash_palette::PaletteError;
use thiserror::Error;

/// Failure while analyzing a single image.
///
/// Never escapes the analyzer: every variant degrades the result and is
/// logged with the file name.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Read error: {0}")]
    Read(#[from] std::io::Error),

    #[error("Timed out after {0:?} reading file")]
    Timeout(Duration),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("SVG parse error: {0}")]
    Svg(String),

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("Analysis task failed: {0}")]
    Join(String),
}

impl From<image::ImageError> for AnalysisError {
    fn from(e: image::ImageError) -> Self {
        AnalysisError::Decode(e.to_string())
    }
}

/// Fatal failure of a build. Aborts with a non-zero exit status.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Cannot read directory {}: {source}", path.display())]
    RootRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<PaletteError> for BuildError {
    fn from(e: PaletteError) -> Self {
        BuildError::Configuration(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_error_timeout() {
        let error = AnalysisError::Timeout(Duration::from_secs(10));
        assert_eq!(error.to_string(), "Timed out after 10s reading file");

        let error = AnalysisError::Timeout(Duration::from_millis(200));
        assert_eq!(error.to_string(), "Timed out after 200ms reading file");
    }

    #[test]
    fn test_analysis_error_decode() {
        let error = AnalysisError::Decode("unexpected EOF".to_string());
        assert_eq!(error.to_string(), "Decode error: unexpected EOF");
    }

    #[test]
    fn test_analysis_error_svg() {
        let error = AnalysisError::Svg("missing root".to_string());
        assert_eq!(error.to_string(), "SVG parse error: missing root");
    }

    #[test]
    fn test_analysis_error_pixmap_allocation() {
        let error = AnalysisError::PixmapAllocation;
        assert_eq!(error.to_string(), "Failed to allocate pixmap");
    }

    #[test]
    fn test_analysis_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: AnalysisError = io.into();
        match error {
            AnalysisError::Read(_) => {}
            _ => panic!("Expected Read variant"),
        }
    }

    #[test]
    fn test_build_error_from_palette_error() {
        let error: BuildError = PaletteError::EmptyPalette.into();
        assert_eq!(
            error.to_string(),
            "Configuration error: brand palette cannot be empty"
        );
    }

    #[test]
    fn test_build_error_write() {
        let error = BuildError::Write {
            path: PathBuf::from("out/image_data.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(error.to_string(), "Cannot write out/image_data.json: denied");
    }

    #[test]
    fn test_build_error_root_read() {
        let error = BuildError::RootRead {
            path: PathBuf::from("splash-images"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            error.to_string(),
            "Cannot read directory splash-images: missing"
        );
    }
}
