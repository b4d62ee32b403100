#[cfg(test)]
use mockall::{automock, predicate::*};
use std::path::Path;
use thiserror::Error;

use crate::domain::entities::Document;

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),
}

/// Port for persisting a built document as a single file
#[cfg_attr(test, automock)]
pub trait DocumentWriter: Send + Sync {
    /// Write every sheet of `document` to `path`.
    ///
    /// On failure no partial file may remain at `path`.
    fn write(&self, document: &Document, path: &Path) -> Result<(), SerializationError>;
}
