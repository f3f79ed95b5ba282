use std::path::Path;

use crate::error::BuildError;
use crate::models::GalleryEntry;

/// Extensions picked up by the flat gallery listing.
pub const GALLERY_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// List the images directly inside `dir`, sorted by file name.
///
/// Each entry's path is `<last component of dir>/<file>`, the form the
/// front-end loads them by. A missing or unreadable directory is fatal.
pub async fn build_gallery(dir: &Path) -> Result<Vec<GalleryEntry>, BuildError> {
    let root_err = |source: std::io::Error| BuildError::RootRead {
        path: dir.to_path_buf(),
        source,
    };

    let dirname = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());

    let mut entries = tokio::fs::read_dir(dir).await.map_err(root_err)?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(root_err)? {
        let Ok(name) = entry.file_name().into_string() else {
            tracing::warn!(path = %entry.path().display(), "Skipping non UTF-8 file name");
            continue;
        };
        if is_gallery_image(&name) {
            files.push(name);
        }
    }
    files.sort();

    tracing::info!(dir = %dir.display(), images = files.len(), "Scanned gallery");

    Ok(files
        .into_iter()
        .map(|filename| GalleryEntry {
            path: format!("{dirname}/{filename}"),
            filename,
        })
        .collect())
}

fn is_gallery_image(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            GALLERY_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
