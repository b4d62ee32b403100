#[cfg(test)]
use mockall::{automock, predicate::*};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid file name: {0}")]
    InvalidName(String),
}

/// Port for the output directory holding generated documents and their
/// temporary QR images
#[cfg_attr(test, automock)]
pub trait ArtifactStore: Send + Sync {
    /// Location of a generated document named `file_name`
    fn document_path(&self, file_name: &str) -> PathBuf;

    /// Location of the temporary QR raster for one sheet
    fn qr_image_path(&self, base_identifier: &str, sheet_title: &str) -> PathBuf;

    /// Delete a file. Returns `false` when it was already gone.
    fn remove(&self, path: &Path) -> Result<bool, StorageError>;

    /// Size of a file in bytes
    fn size_of(&self, path: &Path) -> Result<u64, StorageError>;

    /// Resolve a client-supplied file name to an existing document.
    ///
    /// Only bare file names are accepted; anything with a path separator
    /// or a parent reference is `InvalidName`.
    fn resolve_download(&self, file_name: &str) -> Result<PathBuf, StorageError>;
}
