//! QR code rendering of the share link.
//!
//! The encoder is optional: builds without the `qr` feature have no
//! [`QrEncoder`] and the generator skips the image.

use std::path::Path;

use crate::error::RenderError;

/// Turns a string into a scannable image file.
pub trait QrEncoder: Send + Sync {
    fn encode_to_file(&self, data: &str, path: &Path) -> Result<(), RenderError>;
}

/// The encoder compiled into this build, if any.
pub fn default_encoder() -> Option<Box<dyn QrEncoder>> {
    #[cfg(feature = "qr")]
    {
        Some(Box::new(PngQrEncoder::default()))
    }
    #[cfg(not(feature = "qr"))]
    {
        None
    }
}

/// PNG output, error correction level L, 4-module quiet zone.
#[cfg(feature = "qr")]
#[derive(Debug, Clone, Copy)]
pub struct PngQrEncoder {
    /// Edge length of one module in pixels.
    pub module_px: u32,
}

#[cfg(feature = "qr")]
impl Default for PngQrEncoder {
    fn default() -> Self {
        Self { module_px: 10 }
    }
}

#[cfg(feature = "qr")]
impl QrEncoder for PngQrEncoder {
    fn encode_to_file(&self, data: &str, path: &Path) -> Result<(), RenderError> {
        use image::Luma;
        use qrcode::{EcLevel, QrCode};

        let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::L)
            .map_err(|e| RenderError::Qr(e.to_string()))?;
        let image = code
            .render::<Luma<u8>>()
            .quiet_zone(true)
            .module_dimensions(self.module_px, self.module_px)
            .build();
        image
            .save(path)
            .map_err(|e| RenderError::Qr(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), width = image.width(), "qr code written");
        Ok(())
    }
}
