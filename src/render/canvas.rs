//! The compositing surface.
//!
//! A [`Canvas`] is an RGBA8 buffer sized to one delivery target. Backdrops
//! and logos are drawn into it with Lanczos3 resampling (the "high quality
//! smoothing" every frame gets) and source-over alpha blending; draw
//! rectangles may overflow the canvas and are clipped. Uncovered pixels
//! stay transparent black.

use super::codec::{self, Quality, RenderError};
use super::geometry::DrawRect;
use crate::targets::OutputFormat;
use image::imageops::{self, FilterType};
use image::RgbaImage;

pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocate a transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Draw `src` scaled into `rect`, clipping whatever falls outside the
    /// canvas.
    pub fn draw_image(&mut self, src: &RgbaImage, rect: DrawRect) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        if src.dimensions() == (rect.width, rect.height) {
            imageops::overlay(&mut self.image, src, rect.x, rect.y);
        } else {
            let scaled = imageops::resize(src, rect.width, rect.height, FilterType::Lanczos3);
            imageops::overlay(&mut self.image, &scaled, rect.x, rect.y);
        }
    }

    /// Copy out a rectangular region, clamped to the canvas bounds.
    pub fn region(&self, x: u32, y: u32, width: u32, height: u32) -> RgbaImage {
        let x = x.min(self.width());
        let y = y.min(self.height());
        let w = width.min(self.width() - x);
        let h = height.min(self.height() - y);
        imageops::crop_imm(&self.image, x, y, w, h).to_image()
    }

    /// Encode the canvas to the target format.
    pub fn encode(
        &self,
        format: OutputFormat,
        quality: Option<Quality>,
    ) -> Result<Vec<u8>, RenderError> {
        codec::encode(&self.image, format, quality)
    }
}
