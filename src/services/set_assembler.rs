use crate::models::{ImageColors, ImageResult, ImageSet, Orientation};

/// Picks a folder's desktop and mobile image from analysis results offered
/// one at a time, in listing order.
///
/// First match wins and an assigned slot is never replaced.
#[derive(Debug)]
pub struct SetAssembler {
    folder: String,
    desktop: Option<ImageResult>,
    mobile: Option<ImageResult>,
}

impl SetAssembler {
    pub fn new(folder: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            desktop: None,
            mobile: None,
        }
    }

    /// Both slots are filled; further results cannot change the set.
    pub fn is_complete(&self) -> bool {
        self.desktop.is_some() && self.mobile.is_some()
    }

    /// Consider one result. Returns [`is_complete`](Self::is_complete).
    pub fn offer(&mut self, result: ImageResult) -> bool {
        if !result.is_eligible() {
            tracing::debug!(folder = %self.folder, file = %result.filename, "Skipping failed image");
            return self.is_complete();
        }

        match result.orientation {
            Orientation::Landscape if self.desktop.is_none() => {
                tracing::info!(folder = %self.folder, file = %result.filename, "Assigned desktop image");
                self.desktop = Some(result);
            }
            Orientation::Portrait if self.mobile.is_none() => {
                tracing::info!(folder = %self.folder, file = %result.filename, "Assigned mobile image");
                self.mobile = Some(result);
            }
            Orientation::Square if self.desktop.is_none() => {
                tracing::info!(folder = %self.folder, file = %result.filename, "Assigned square image as desktop");
                self.desktop = Some(result);
            }
            Orientation::Square if self.mobile.is_none() => {
                tracing::info!(folder = %self.folder, file = %result.filename, "Assigned square image as mobile");
                self.mobile = Some(result);
            }
            _ => {}
        }

        self.is_complete()
    }

    /// Close the folder. `None` when neither slot was filled.
    pub fn finish(self, member_files: Vec<String>) -> Option<ImageSet> {
        if self.desktop.is_none() && self.mobile.is_none() {
            tracing::warn!(folder = %self.folder, "No suitable desktop or mobile image, dropping folder");
            return None;
        }
        if self.desktop.is_none() {
            tracing::warn!(folder = %self.folder, "No suitable landscape image");
        }
        if self.mobile.is_none() {
            tracing::warn!(folder = %self.folder, "No suitable portrait image");
        }

        let theme = self
            .desktop
            .as_ref()
            .or(self.mobile.as_ref())
            .map(|r| r.colors)
            .unwrap_or_else(ImageColors::default);

        Some(ImageSet {
            folder: self.folder,
            desktop: self.desktop,
            mobile: self.mobile,
            theme,
            member_files,
        })
    }
}

/// Assemble a set from results that are already all available.
pub fn assemble(
    folder: &str,
    results: impl IntoIterator<Item = ImageResult>,
    member_files: Vec<String>,
) -> Option<ImageSet> {
    let mut assembler = SetAssembler::new(folder);
    for result in results {
        if assembler.offer(result) {
            break;
        }
    }
    assembler.finish(member_files)
}
