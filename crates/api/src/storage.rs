//! Filesystem storage for raw video files.
//!
//! One flat directory holds every stored asset. Filenames embed the asset
//! id (see `vportal_core::video::stored_filename`), so uploads sharing a
//! title cannot collide. Paths are composed with `PathBuf::join`, never
//! with separator string manipulation.

use std::path::{Path, PathBuf};

/// Store/delete primitives over a single storage root.
#[derive(Debug)]
pub struct VideoStorage {
    root: PathBuf,
}

impl VideoStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The storage root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute-or-relative path of a stored file with the given filename.
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    /// Write `bytes` under `filename`, creating the root directory on first
    /// use. Returns the path written.
    pub async fn store(&self, filename: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
        tokio::fs::create_dir_all(&self.root).await?;
        let path = self.path_for(filename);
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }

    /// Remove the stored file with the given filename.
    pub async fn delete(&self, filename: &str) -> std::io::Result<()> {
        tokio::fs::remove_file(self.path_for(filename)).await
    }

    /// Whether a stored file with the given filename exists on disk.
    pub async fn exists(&self, filename: &str) -> bool {
        tokio::fs::try_exists(self.path_for(filename))
            .await
            .unwrap_or(false)
    }
}
