use image::{imageops, GrayImage, Luma};
use qrcode::{EcLevel, QrCode};

use crate::application::ports::{QrEncoder, QrEncodingError};

const WHITE: Luma<u8> = Luma([255]);

/// QR encoder backed by the `qrcode` crate.
///
/// Error correction level L, automatic version selection, black modules on
/// a white quiet zone `border` modules wide.
#[derive(Debug, Clone, Copy)]
pub struct QrCodeEncoder {
    module_size: u32,
    border: u32,
}

impl Default for QrCodeEncoder {
    fn default() -> Self {
        Self::new(10, 2)
    }
}

impl QrCodeEncoder {
    /// `module_size` is the pixel edge of one module and is at least 1
    pub fn new(module_size: u32, border: u32) -> Self {
        Self {
            module_size: module_size.max(1),
            border,
        }
    }

    pub fn module_size(&self) -> u32 {
        self.module_size
    }

    pub fn border(&self) -> u32 {
        self.border
    }
}

impl QrEncoder for QrCodeEncoder {
    fn encode(&self, text: &str) -> Result<GrayImage, QrEncodingError> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::L)
            .map_err(|e| QrEncodingError::Unencodable(e.to_string()))?;

        let symbol = code
            .render::<Luma<u8>>()
            .quiet_zone(false)
            .module_dimensions(self.module_size, self.module_size)
            .build();

        let margin = self.border * self.module_size;
        let mut canvas = GrayImage::from_pixel(
            symbol.width() + 2 * margin,
            symbol.height() + 2 * margin,
            WHITE,
        );
        imageops::replace(&mut canvas, &symbol, i64::from(margin), i64::from(margin));
        Ok(canvas)
    }
}
