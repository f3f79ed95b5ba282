use std::path::Path;
use std::sync::Arc;

use futures_util::stream::{self, StreamExt};

use crate::error::BuildError;
use crate::models::{ImageSet, ManifestEntry, Pipeline};
use crate::services::{ImageAnalyzer, SetAssembler};

/// Walks the digit-named folders under a root and assembles one
/// [`ImageSet`] per qualifying folder.
pub struct ManifestBuilder {
    analyzer: ImageAnalyzer,
}

impl ManifestBuilder {
    pub fn new(pipeline: Arc<Pipeline>) -> Self {
        Self {
            analyzer: ImageAnalyzer::new(pipeline),
        }
    }

    /// Build every set under `root`, in folder order.
    ///
    /// Only an unreadable root is an error. Folders that cannot be listed
    /// are skipped with a warning.
    pub async fn build(&self, root: &Path) -> Result<Vec<ImageSet>, BuildError> {
        let folders = list_set_folders(root).await?;
        tracing::info!(root = %root.display(), folders = folders.len(), "Scanning image sets");

        let mut sets = Vec::with_capacity(folders.len());
        for folder in folders {
            match self.build_folder(root, &folder).await {
                Ok(Some(set)) => sets.push(set),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(folder = %folder, error = %e, "Could not read folder, skipping");
                }
            }
        }

        Ok(sets)
    }

    /// Build and flatten into manifest entries with paths joined under `root`
    /// as given.
    pub async fn build_entries(&self, root: &Path) -> Result<Vec<ManifestEntry>, BuildError> {
        let sets = self.build(root).await?;
        let root = root.to_string_lossy();
        Ok(sets.iter().map(|set| set.to_entry(&root)).collect())
    }

    async fn build_folder(&self, root: &Path, folder: &str) -> std::io::Result<Option<ImageSet>> {
        let dir = root.join(folder);
        let files = list_files(&dir).await?;
        tracing::info!(folder = %folder, files = files.len(), "Processing folder");

        let pipeline = self.analyzer.pipeline();
        let analyzer = &self.analyzer;
        let candidates: Vec<_> = files
            .iter()
            .filter(|name| pipeline.accepts(name))
            .map(|name| dir.join(name))
            .collect();

        // Results come back in submission order whatever order they finish in
        let mut results = std::pin::pin!(stream::iter(candidates)
            .map(move |path| async move { analyzer.analyze(&path).await })
            .buffered(pipeline.workers));

        let mut assembler = SetAssembler::new(folder);
        while let Some(result) = results.next().await {
            if assembler.offer(result) {
                break;
            }
        }

        Ok(assembler.finish(files))
    }
}

/// Names of the all-digit subdirectories of `root`, by numeric value.
pub async fn list_set_folders(root: &Path) -> Result<Vec<String>, BuildError> {
    let root_err = |source: std::io::Error| BuildError::RootRead {
        path: root.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(root).await.map_err(root_err)?;
    let mut folders = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(root_err)? {
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !is_set_folder_name(&name) {
            continue;
        }
        let is_dir = tokio::fs::metadata(entry.path())
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if is_dir {
            folders.push(name);
        }
    }

    folders.sort_by(|a, b| numeric_key(a).cmp(&numeric_key(b)).then_with(|| a.cmp(b)));
    Ok(folders)
}

fn is_set_folder_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}

/// Orders digit strings by value without parsing, so any length works.
fn numeric_key(name: &str) -> (usize, &str) {
    let digits = name.trim_start_matches('0');
    (digits.len(), digits)
}

/// Regular files directly inside `dir`, sorted by name.
async fn list_files(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let Ok(name) = entry.file_name().into_string() else {
            tracing::warn!(path = %entry.path().display(), "Skipping non UTF-8 file name");
            continue;
        };
        match tokio::fs::metadata(entry.path()).await {
            Ok(meta) if meta.is_file() => files.push(name),
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(
                    path = %entry.path().display(),
                    error = %e,
                    "Could not stat file, leaving it out"
                );
            }
        }
    }
    files.sort();
    Ok(files)
}
