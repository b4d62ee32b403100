use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};

use crate::application::labels::file_names::{is_safe_file_name, qr_image_file_name};
use crate::application::ports::{ArtifactStore, StorageError};

/// Flat local directory holding generated documents and their temporary
/// QR images
pub struct LocalOutputDirectory {
    root: PathBuf,
}

impl LocalOutputDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the directory if needed
    pub async fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).await?;
        info!("Output directory ready: {:?}", self.root);
        Ok(())
    }
}

impl ArtifactStore for LocalOutputDirectory {
    fn document_path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    fn qr_image_path(&self, base_identifier: &str, sheet_title: &str) -> PathBuf {
        self.root.join(qr_image_file_name(base_identifier, sheet_title))
    }

    fn remove(&self, path: &Path) -> Result<bool, StorageError> {
        match std::fs::remove_file(path) {
            Ok(()) => {
                debug!("Removed {:?}", path);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn size_of(&self, path: &Path) -> Result<u64, StorageError> {
        match std::fs::metadata(path) {
            Ok(meta) => Ok(meta.len()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StorageError::NotFound(path.display().to_string()))
            }
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn resolve_download(&self, file_name: &str) -> Result<PathBuf, StorageError> {
        if !is_safe_file_name(file_name) {
            return Err(StorageError::InvalidName(file_name.to_string()));
        }

        let path = self.root.join(file_name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(StorageError::NotFound(file_name.to_string()))
        }
    }
}
