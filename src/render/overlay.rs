//! The hero frame's legibility gradient.
//!
//! A horizontal ramp of black is painted over the composed backdrop before
//! the logo lands, so captions and logos on the left stay readable against
//! bright imagery. The ramp spans `[0, 0.68 × width]`: fully opaque through
//! the first half of the span, a linear fade to transparent at its end, and
//! no effect past it. Applied only to the 1280×480 target in primary mode;
//! the frame renderer owns that gate.

use super::canvas::Canvas;

/// Fraction of the canvas width covered by the gradient ramp.
pub const GRADIENT_SPAN: f64 = 0.68;

/// Paint the gradient over the whole canvas, source-over.
pub fn apply_legibility_gradient(canvas: &mut Canvas) {
    let width = canvas.width();
    if width == 0 {
        return;
    }
    let span = GRADIENT_SPAN * width as f64;

    let alphas: Vec<f32> = (0..width).map(|x| column_alpha(x, span)).collect();

    let image = canvas.image_mut();
    for (x, _, pixel) in image.enumerate_pixels_mut() {
        let alpha = alphas[x as usize];
        if alpha <= 0.0 {
            continue;
        }
        let [r, g, b, a] = pixel.0;
        let keep = 1.0 - alpha;
        pixel.0 = [
            (r as f32 * keep).round() as u8,
            (g as f32 * keep).round() as u8,
            (b as f32 * keep).round() as u8,
            (alpha * 255.0 + a as f32 * keep).round() as u8,
        ];
    }
}

/// Gradient alpha for one pixel column.
fn column_alpha(x: u32, span: f64) -> f32 {
    let t = x as f64 / span;
    if t <= 0.5 {
        1.0
    } else if t < 1.0 {
        (2.0 * (1.0 - t)) as f32
    } else {
        0.0
    }
}
