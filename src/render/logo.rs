//! Logo compositing with contrast-based color adaptation.
//!
//! The logo lands in the hero frame's bottom-left corner at a fixed size:
//! 400 px wide, height clamped to 180 px (width re-derived when the clamp
//! kicks in). Before drawing, the logo is compared against the pixels
//! already on the canvas beneath it; if the two are too close in average
//! luminance, or the logo is effectively solid black, its color channels
//! are replaced with white while its alpha mask is kept. Dark logos dropped
//! onto the dark gradient region stay visible that way.

use super::canvas::Canvas;
use super::geometry::DrawRect;
use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Logos are scaled to this width first.
pub const LOGO_TARGET_WIDTH: u32 = 400;
/// If the width-derived height exceeds this, height wins and width re-derives.
pub const LOGO_MAX_HEIGHT: u32 = 180;
/// Fixed left inset of the logo rectangle.
pub const LOGO_MARGIN_LEFT: i64 = 50;
/// Fixed gap between the logo and the bottom canvas edge.
pub const LOGO_MARGIN_BOTTOM: i64 = 40;

/// Minimum average-luminance difference for the logo to keep its colors.
pub const CONTRAST_THRESHOLD: f64 = 2.0;
/// A logo counts as black when every pixel's R, G and B are all at or
/// below this value.
pub const BLACK_CHANNEL_MAX: u8 = 50;

/// Final logo dimensions for a source logo, preserving aspect ratio.
pub fn scaled_logo_size(logo: (u32, u32)) -> (u32, u32) {
    let (w, h) = (logo.0 as f64, logo.1 as f64);
    let mut draw_w = LOGO_TARGET_WIDTH as f64;
    let mut draw_h = draw_w / w * h;
    if draw_h > LOGO_MAX_HEIGHT as f64 {
        draw_h = LOGO_MAX_HEIGHT as f64;
        draw_w = draw_h / h * w;
    }
    (
        draw_w.round().max(1.0) as u32,
        draw_h.round().max(1.0) as u32,
    )
}

/// Where the scaled logo sits on the canvas.
pub fn placement(logo_size: (u32, u32), canvas_height: u32) -> DrawRect {
    DrawRect {
        x: LOGO_MARGIN_LEFT,
        y: canvas_height as i64 - logo_size.1 as i64 - LOGO_MARGIN_BOTTOM,
        width: logo_size.0,
        height: logo_size.1,
    }
}

/// Average Rec. 709 luminance over every pixel, transparent ones included.
pub fn average_luminance(image: &RgbaImage) -> f64 {
    let count = (image.width() as u64 * image.height() as u64) as f64;
    if count == 0.0 {
        return 0.0;
    }
    let sum: f64 = image
        .pixels()
        .map(|p| 0.2126 * p.0[0] as f64 + 0.7152 * p.0[1] as f64 + 0.0722 * p.0[2] as f64)
        .sum();
    sum / count
}

/// True when every pixel's color channels are all ≤ [`BLACK_CHANNEL_MAX`].
/// Alpha is ignored, so a black shape on a transparent background counts.
pub fn is_effectively_black(image: &RgbaImage) -> bool {
    image.pixels().all(|p| {
        p.0[0] <= BLACK_CHANNEL_MAX && p.0[1] <= BLACK_CHANNEL_MAX && p.0[2] <= BLACK_CHANNEL_MAX
    })
}

/// Replace color channels with solid white, keeping the alpha mask.
pub fn recolor_white(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        pixel.0 = [255, 255, 255, pixel.0[3]];
    }
}

/// Composite the logo into the canvas.
///
/// Scales the logo, samples the canvas region beneath the placement
/// rectangle, applies the recolor rule, and draws. The caller gates this on
/// target eligibility and operating mode.
pub fn composite_logo(canvas: &mut Canvas, logo: &RgbaImage) {
    let size = scaled_logo_size(logo.dimensions());
    let rect = placement(size, canvas.height());

    let mut buffer = imageops::resize(logo, size.0, size.1, FilterType::Lanczos3);
    let beneath = canvas.region(rect.x.max(0) as u32, rect.y.max(0) as u32, size.0, size.1);

    let contrast = (average_luminance(&buffer) - average_luminance(&beneath)).abs();
    if contrast < CONTRAST_THRESHOLD || is_effectively_black(&buffer) {
        recolor_white(&mut buffer);
    }

    canvas.draw_image(&buffer, rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(w: u32, h: u32, rgba: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba(rgba))
    }

    // =========================================================================
    // Sizing and placement
    // =========================================================================

    #[test]
    fn wide_logo_keeps_the_target_width() {
        assert_eq!(scaled_logo_size((800, 200)), (400, 100));
    }

    #[test]
    fn tall_logo_is_clamped_by_height() {
        // 800x400 → width-first gives 400x200, clamp re-derives 360x180
        assert_eq!(scaled_logo_size((800, 400)), (360, 180));
    }

    #[test]
    fn square_logo_clamps_to_a_square() {
        assert_eq!(scaled_logo_size((100, 100)), (180, 180));
    }

    #[test]
    fn exactly_max_height_is_not_clamped() {
        // 400x180 maps straight through
        assert_eq!(scaled_logo_size((400, 180)), (400, 180));
    }

    #[test]
    fn placement_sits_in_the_bottom_left() {
        let rect = placement((360, 180), 480);
        assert_eq!(rect, DrawRect { x: 50, y: 260, width: 360, height: 180 });
    }

    // =========================================================================
    // Contrast decision inputs
    // =========================================================================

    #[test]
    fn luminance_weights_sum_to_full_scale() {
        let white = average_luminance(&solid(4, 4, [255, 255, 255, 255]));
        assert!((white - 255.0).abs() < 1e-9);
        assert_eq!(average_luminance(&solid(4, 4, [0, 0, 0, 255])), 0.0);
    }

    #[test]
    fn luminance_is_green_weighted() {
        let green = average_luminance(&solid(2, 2, [0, 255, 0, 255]));
        let red = average_luminance(&solid(2, 2, [255, 0, 0, 255]));
        let blue = average_luminance(&solid(2, 2, [0, 0, 255, 255]));
        assert!((green - 182.376).abs() < 1e-9);
        assert!((red - 54.213).abs() < 1e-9);
        assert!((blue - 18.411).abs() < 1e-9);
    }

    #[test]
    fn luminance_counts_transparent_pixels() {
        // Half white-opaque, half transparent black → average halves
        let mut img = solid(2, 1, [255, 255, 255, 255]);
        img.put_pixel(1, 0, Rgba([0, 0, 0, 0]));
        assert!((average_luminance(&img) - 127.5).abs() < 1e-9);
    }

    #[test]
    fn black_check_boundary_is_inclusive() {
        assert!(is_effectively_black(&solid(3, 3, [50, 50, 50, 255])));
        assert!(!is_effectively_black(&solid(3, 3, [51, 50, 50, 255])));
    }

    #[test]
    fn black_check_fails_on_a_single_bright_channel() {
        let mut img = solid(4, 4, [10, 10, 10, 255]);
        img.put_pixel(3, 3, Rgba([10, 80, 10, 255]));
        assert!(!is_effectively_black(&img));
    }

    #[test]
    fn black_check_ignores_alpha() {
        // Fully transparent but bright pixels still disqualify
        assert!(!is_effectively_black(&solid(2, 2, [200, 200, 200, 0])));
    }

    #[test]
    fn recolor_preserves_the_alpha_mask() {
        let mut img = solid(2, 2, [30, 30, 30, 255]);
        img.put_pixel(1, 1, Rgba([30, 30, 30, 0]));
        recolor_white(&mut img);
        assert_eq!(img.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
        assert_eq!(img.get_pixel(1, 1), &Rgba([255, 255, 255, 0]));
    }

    // =========================================================================
    // Compositing
    // =========================================================================

    #[test]
    fn dark_logo_is_recolored_white() {
        // Canvas left as transparent black (the dark case); logo well above
        // the contrast threshold but judged black → recolor still fires.
        let mut canvas = Canvas::new(1280, 480);
        let logo = solid(400, 180, [40, 40, 40, 255]);
        composite_logo(&mut canvas, &logo);

        // Inside the placement rect (50..450, 260..440)
        assert_eq!(canvas.image().get_pixel(100, 300), &Rgba([255, 255, 255, 255]));
        // Outside stays transparent
        assert_eq!(canvas.image().get_pixel(600, 300), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn low_contrast_logo_is_recolored_white() {
        let mut canvas = Canvas::new(1280, 480);
        for pixel in canvas.image_mut().pixels_mut() {
            pixel.0 = [100, 100, 100, 255];
        }
        // Average luminance 101 vs 100 → contrast 1 < 2
        let logo = solid(400, 180, [101, 101, 101, 255]);
        composite_logo(&mut canvas, &logo);
        assert_eq!(canvas.image().get_pixel(100, 300), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn contrasting_logo_keeps_its_colors() {
        let mut canvas = Canvas::new(1280, 480);
        let logo = solid(400, 180, [200, 120, 60, 255]);
        composite_logo(&mut canvas, &logo);
        assert_eq!(canvas.image().get_pixel(100, 300), &Rgba([200, 120, 60, 255]));
    }

    #[test]
    fn oversized_logo_is_scaled_before_drawing() {
        let mut canvas = Canvas::new(1280, 480);
        let logo = solid(1600, 1600, [220, 220, 220, 255]);
        composite_logo(&mut canvas, &logo);

        // 1600x1600 → 180x180 at (50, 260)
        assert_eq!(canvas.image().get_pixel(60, 270), &Rgba([220, 220, 220, 255]));
        assert_eq!(canvas.image().get_pixel(240, 270), &Rgba([0, 0, 0, 0]));
    }
}
