use serde::Serialize;
use splash_palette::Srgb;

use super::image::{serialize_hex, ImageColors, ImageResult};

/// One folder's themed unit: a desktop image, a mobile image and the
/// colors they share.
///
/// At least one of `desktop` and `mobile` is set; sets with neither are
/// never constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSet {
    pub folder: String,
    pub desktop: Option<ImageResult>,
    pub mobile: Option<ImageResult>,
    pub theme: ImageColors,
    /// Every file in the folder, image or not, in sorted order
    pub member_files: Vec<String>,
}

impl ImageSet {
    /// Flatten into the serialized manifest form, joining paths under `root`.
    pub fn to_entry(&self, root: &str) -> ManifestEntry {
        let join = |file: &str| join_path(root, &self.folder, file);

        ManifestEntry {
            folder: self.folder.clone(),
            desktop: self.desktop.as_ref().map(|r| r.filename.clone()),
            desktop_path: self.desktop.as_ref().map(|r| join(&r.filename)),
            mobile: self.mobile.as_ref().map(|r| r.filename.clone()),
            mobile_path: self.mobile.as_ref().map(|r| join(&r.filename)),
            primary_color: self.theme.primary,
            secondary_color: self.theme.secondary,
            accent_color: self.theme.accent,
            all_images: self.member_files.iter().map(|f| join(f)).collect(),
        }
    }
}

/// `<root>/<folder>/<file>` with `/` separators, whatever the platform.
pub fn join_path(root: &str, folder: &str, file: &str) -> String {
    let root = root.trim_end_matches('/');
    if root.is_empty() {
        format!("{folder}/{file}")
    } else {
        format!("{root}/{folder}/{file}")
    }
}

/// One object of the output JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub folder: String,
    pub desktop: Option<String>,
    pub desktop_path: Option<String>,
    pub mobile: Option<String>,
    pub mobile_path: Option<String>,
    #[serde(serialize_with = "serialize_hex")]
    pub primary_color: Option<Srgb>,
    #[serde(serialize_with = "serialize_hex")]
    pub secondary_color: Option<Srgb>,
    #[serde(serialize_with = "serialize_hex")]
    pub accent_color: Option<Srgb>,
    pub all_images: Vec<String>,
}

/// One object of the flat gallery manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryEntry {
    pub filename: String,
    pub path: String,
}
