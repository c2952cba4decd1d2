//! Frame rendering — one (backdrop, target) pairing, start to encoded bytes.
//!
//! Orchestrates the per-frame pipeline: resolve geometry, draw the backdrop,
//! gate the hero-only steps (gradient in primary mode, cover-fill geometry
//! in alternate mode, logo when eligible and present), then encode under the
//! size budget.
//!
//! The size budget applies to WebP frames only: anything over 150 KiB is
//! re-encoded once at quality 0.9 and that result is kept, bigger or not.
//! There is no iterative quality search.

use super::canvas::Canvas;
use super::codec::{Quality, RenderError};
use super::geometry;
use super::logo;
use super::overlay;
use crate::targets::{OperatingMode, OutputFormat, TargetSpec};
use image::RgbaImage;

/// Byte budget for encoded WebP frames.
pub const WEBP_BUDGET_BYTES: usize = 150 * 1024;
/// Quality used for the single over-budget re-encode.
pub const BUDGET_FALLBACK_QUALITY: f32 = 0.9;

/// Render one frame and encode it.
pub fn render_frame(
    backdrop: &RgbaImage,
    logo_image: Option<&RgbaImage>,
    target: &TargetSpec,
    mode: OperatingMode,
    generic: bool,
) -> Result<Vec<u8>, RenderError> {
    let mut canvas = Canvas::new(target.width, target.height);

    let placement = geometry::placement_for(target, mode, generic);
    let rect = geometry::resolve(backdrop.dimensions(), target.dimensions(), placement);
    canvas.draw_image(backdrop, rect);

    if target.is_hero() && mode == OperatingMode::Primary {
        overlay::apply_legibility_gradient(&mut canvas);
    }

    if target.logo_eligible && mode == OperatingMode::Primary {
        if let Some(logo_image) = logo_image {
            logo::composite_logo(&mut canvas, logo_image);
        }
    }

    encode_with_budget(&canvas, target)
}

/// Whether an encoding of `encoded_len` bytes busts the budget.
pub fn needs_reencode(format: OutputFormat, encoded_len: usize) -> bool {
    format == OutputFormat::Webp && encoded_len > WEBP_BUDGET_BYTES
}

/// Encode the canvas, falling back once to the budget quality if the first
/// pass comes out too large.
pub fn encode_with_budget(canvas: &Canvas, target: &TargetSpec) -> Result<Vec<u8>, RenderError> {
    let bytes = canvas.encode(target.format, None)?;
    if needs_reencode(target.format, bytes.len()) {
        return canvas.encode(target.format, Some(Quality::new(BUDGET_FALLBACK_QUALITY)));
    }
    Ok(bytes)
}
