//! Decode and encode services.
//!
//! Decode goes through the `image` crate and always lands in RGBA8. Encode
//! dispatches on [`OutputFormat`]: PNG via `image` (lossless, no quality
//! knob), WebP via the `webp` crate because the `image` crate only encodes
//! lossless WebP and both the 640×360 delivery and the size-budget fallback
//! need lossy output.

use crate::targets::OutputFormat;
use image::{ExtendedColorType, ImageEncoder, RgbaImage, codecs::png::PngEncoder};
use std::io::Cursor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Lossy encoding quality on a 0.0–1.0 scale, clamped on construction.
///
/// The default is 0.75, libwebp's own default quality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quality(f32);

impl Quality {
    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(0.75)
    }
}

/// Decode an image from raw bytes into RGBA8.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage, RenderError> {
    let img = image::load_from_memory(bytes).map_err(|e| RenderError::Decode(e.to_string()))?;
    Ok(img.to_rgba8())
}

/// Encode an RGBA canvas to the target format.
///
/// `quality` applies to WebP only; PNG ignores it. A `None` quality means
/// the encoder default.
pub fn encode(
    image: &RgbaImage,
    format: OutputFormat,
    quality: Option<Quality>,
) -> Result<Vec<u8>, RenderError> {
    match format {
        OutputFormat::Png => {
            let mut buf = Vec::new();
            PngEncoder::new(Cursor::new(&mut buf))
                .write_image(
                    image.as_raw(),
                    image.width(),
                    image.height(),
                    ExtendedColorType::Rgba8,
                )
                .map_err(|e| RenderError::Encode(e.to_string()))?;
            Ok(buf)
        }
        OutputFormat::Webp => {
            let quality = quality.unwrap_or_default();
            let encoder = webp::Encoder::from_rgba(image.as_raw(), image.width(), image.height());
            Ok(encoder.encode(quality.value() * 100.0).to_vec())
        }
    }
}
