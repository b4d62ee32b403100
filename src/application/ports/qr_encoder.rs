use std::io::Cursor;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{GrayImage, ImageError, ImageFormat};
#[cfg(test)]
use mockall::{automock, predicate::*};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QrEncodingError {
    #[error("Payload cannot be encoded as a QR symbol: {0}")]
    Unencodable(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ImageError> for QrEncodingError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::IoError(e) => QrEncodingError::Io(e),
            other => QrEncodingError::Image(other.to_string()),
        }
    }
}

/// Port for rendering text into a QR raster.
///
/// Implementations must be deterministic: the same text always yields a
/// bit-identical image.
#[cfg_attr(test, automock)]
pub trait QrEncoder: Send + Sync {
    /// Render `text` (UTF-8 bytes) into a grayscale raster
    fn encode(&self, text: &str) -> Result<GrayImage, QrEncodingError>;

    /// PNG bytes of the symbol
    fn encode_png(&self, text: &str) -> Result<Vec<u8>, QrEncodingError> {
        let image = self.encode(text)?;
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png)?;
        Ok(buffer.into_inner())
    }

    /// Base64 of the PNG, for inline previews
    fn encode_to_base64(&self, text: &str) -> Result<String, QrEncodingError> {
        Ok(STANDARD.encode(self.encode_png(text)?))
    }

    /// Write the PNG to `path`, replacing any existing file
    fn encode_to_file(&self, text: &str, path: &Path) -> Result<(), QrEncodingError> {
        let image = self.encode(text)?;
        image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}
