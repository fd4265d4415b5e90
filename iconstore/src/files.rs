use crate::errors::{Result, StoreError};
use std::path::{Path, PathBuf};

/// Derives the expected local file name for an icon. Must match the
/// naming convention used when the SVGs were downloaded.
pub fn icon_file_name(icon_name: &str, style_suffix: &str) -> String {
    format!("{icon_name}-{style_suffix}.svg")
}

/// The local directory of already-downloaded SVG files. Read-only:
/// this system only checks for the presence of derived file names.
#[derive(Debug, Clone)]
pub struct LocalIconDir {
    root: PathBuf,
}

impl LocalIconDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The directory must exist before any catalog entry is processed;
    /// a missing directory would silently skip every entry.
    pub fn ensure_exists(&self) -> Result<()> {
        if !self.root.exists() {
            return Err(StoreError::Config(format!(
                "output directory '{}' does not exist; make sure all SVGs are already downloaded there",
                self.root.display()
            )));
        }
        Ok(())
    }

    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.path_of(file_name).exists()
    }
}
