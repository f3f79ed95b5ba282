use serde::{Serialize, Serializer};
use splash_palette::Srgb;

/// Orientation of an image, from its probed dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
    /// Dimensions could not be probed
    Unknown,
}

impl Orientation {
    /// Classify by comparing width and height.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        use std::cmp::Ordering;

        match width.cmp(&height) {
            Ordering::Greater => Orientation::Landscape,
            Ordering::Less => Orientation::Portrait,
            Ordering::Equal => Orientation::Square,
        }
    }
}

/// The three-slot palette of one image, or the theme of one set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ImageColors {
    #[serde(serialize_with = "serialize_hex")]
    pub primary: Option<Srgb>,
    #[serde(serialize_with = "serialize_hex")]
    pub secondary: Option<Srgb>,
    #[serde(serialize_with = "serialize_hex")]
    pub accent: Option<Srgb>,
}

impl ImageColors {
    /// True when no slot is set.
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none() && self.accent.is_none()
    }

    /// Whether `color` already occupies the primary or secondary slot.
    pub(crate) fn used_by_primary_or_secondary(&self, color: Srgb) -> bool {
        self.primary == Some(color) || self.secondary == Some(color)
    }
}

pub(crate) fn serialize_hex<S: Serializer>(
    color: &Option<Srgb>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match color {
        Some(c) => serializer.serialize_str(&c.to_hex()),
        None => serializer.serialize_none(),
    }
}

/// Outcome of analyzing one file. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageResult {
    pub filename: String,
    pub orientation: Orientation,
    pub colors: ImageColors,
    /// Set when the file could not be read or its dimensions not probed
    pub failed: bool,
}

impl ImageResult {
    pub fn new(filename: impl Into<String>, orientation: Orientation, colors: ImageColors) -> Self {
        Self {
            filename: filename.into(),
            orientation,
            colors,
            failed: false,
        }
    }

    /// Result for a file that could not be read or probed.
    pub fn failed(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            orientation: Orientation::Unknown,
            colors: ImageColors::default(),
            failed: true,
        }
    }

    /// Whether the set assembler may pick this image for a slot.
    pub fn is_eligible(&self) -> bool {
        !(self.failed && self.colors.primary.is_none())
    }
}
