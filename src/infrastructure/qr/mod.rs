//! QR image rendering.

mod svg_renderer;

pub use svg_renderer::{SVG_CONTENT_TYPE, SvgQrRenderer};
