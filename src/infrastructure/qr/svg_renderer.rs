//! SVG QR renderer built on the `qrcode` crate.

use qrcode::QrCode;
use qrcode::render::svg;

use crate::domain::ports::{QrRenderError, QrRenderer};

/// MIME type of rendered images.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Renders QR codes as standalone SVG documents.
pub struct SvgQrRenderer {
    min_size: u32,
}

impl SvgQrRenderer {
    pub fn new(min_size: u32) -> Self {
        Self { min_size }
    }
}

impl Default for SvgQrRenderer {
    fn default() -> Self {
        Self::new(256)
    }
}

impl QrRenderer for SvgQrRenderer {
    fn content_type(&self) -> &'static str {
        SVG_CONTENT_TYPE
    }

    fn render(&self, content: &str) -> Result<Vec<u8>, QrRenderError> {
        let code = QrCode::new(content.as_bytes()).map_err(|e| QrRenderError(e.to_string()))?;

        let image = code
            .render::<svg::Color>()
            .min_dimensions(self.min_size, self.min_size)
            .build();

        Ok(image.into_bytes())
    }
}
