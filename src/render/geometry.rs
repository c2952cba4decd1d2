//! Geometry resolution — pure placement math, no pixels.
//!
//! Given a source image and a target canvas, compute where the backdrop is
//! drawn. Two placements exist:
//!
//! - [`Placement::RightAnchoredFit`] — the default for every target. One
//!   dimension fills the canvas exactly (no letterbox bars); the drawn
//!   image hugs the right edge, so an overflowing width crops off the left.
//! - [`Placement::CenteredCoverFill`] — the hero frame in alternate mode.
//!   The image covers the whole canvas, centered, optionally pushed down by
//!   a fixed bias; overflow is clipped at draw time.
//!
//! All math is f64 and rounded once at the edge, into an integer
//! [`DrawRect`] that may extend outside the canvas.

use crate::targets::{OperatingMode, TargetSpec};

/// Fixed downward bias for cover-fill placement, in pixels.
///
/// Applied unless the batch's generic flag is set; keeps the subject of a
/// typical wide backdrop out of the hero frame's caption area.
pub const COVER_FILL_BIAS: f64 = 80.0;

/// Integer draw rectangle. May overflow the canvas on any side; the canvas
/// clips when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl DrawRect {
    /// X coordinate one past the right edge.
    pub fn right(&self) -> i64 {
        self.x + self.width as i64
    }
}

/// How a backdrop is placed on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Fit one dimension exactly, anchor the drawn image to the right edge,
    /// center (or top-align) the other dimension.
    RightAnchoredFit,
    /// Scale so the image covers the whole canvas, center both axes.
    /// `lowered` adds [`COVER_FILL_BIAS`] to the Y offset.
    CenteredCoverFill { lowered: bool },
}

/// Pick the placement for one (target, mode) pairing.
///
/// Only the hero target in alternate mode uses cover-fill; everything else
/// takes the right-anchored fit. `generic` suppresses the downward bias.
pub fn placement_for(target: &TargetSpec, mode: OperatingMode, generic: bool) -> Placement {
    if mode == OperatingMode::Alternate && target.is_hero() {
        Placement::CenteredCoverFill { lowered: !generic }
    } else {
        Placement::RightAnchoredFit
    }
}

/// Resolve the draw rectangle for a source image on a canvas.
///
/// Source and canvas dimensions must be non-zero.
///
/// ```
/// use backplate::render::geometry::{resolve, DrawRect, Placement};
///
/// // A 2:1 source on a square canvas fits the width and centers vertically.
/// let rect = resolve((200, 100), (100, 100), Placement::RightAnchoredFit);
/// assert_eq!(rect, DrawRect { x: 0, y: 25, width: 100, height: 50 });
/// ```
pub fn resolve(source: (u32, u32), canvas: (u32, u32), placement: Placement) -> DrawRect {
    let (sw, sh) = (source.0 as f64, source.1 as f64);
    let (cw, ch) = (canvas.0 as f64, canvas.1 as f64);

    match placement {
        Placement::RightAnchoredFit => {
            let src_aspect = sw / sh;
            let canvas_aspect = cw / ch;

            // Ties take the width-fit branch; both branches agree there.
            if src_aspect >= canvas_aspect {
                let draw_h = (cw / src_aspect).round().max(1.0) as u32;
                DrawRect {
                    x: 0,
                    y: ((ch - draw_h as f64) / 2.0).round() as i64,
                    width: canvas.0,
                    height: draw_h,
                }
            } else {
                let draw_w = (ch * src_aspect).round().max(1.0) as u32;
                DrawRect {
                    // Right edge touches the canvas edge exactly.
                    x: canvas.0 as i64 - draw_w as i64,
                    y: 0,
                    width: draw_w,
                    height: canvas.1,
                }
            }
        }
        Placement::CenteredCoverFill { lowered } => {
            let scale = (cw / sw).max(ch / sh);
            let draw_w = sw * scale;
            let draw_h = sh * scale;
            let x = cw / 2.0 - (sw / 2.0) * scale;
            let mut y = ch / 2.0 - (sh / 2.0) * scale;
            if lowered {
                y += COVER_FILL_BIAS;
            }
            DrawRect {
                x: x.round() as i64,
                y: y.round() as i64,
                width: draw_w.round().max(1.0) as u32,
                height: draw_h.round().max(1.0) as u32,
            }
        }
    }
}
