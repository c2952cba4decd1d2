//! The per-frame rendering pipeline.
//!
//! | Stage | Module |
//! |---|---|
//! | **Placement math** | [`geometry`] — pure, no pixels |
//! | **Decode / encode** | [`codec`] — `image` for decode + PNG, `webp` for lossy WebP |
//! | **Compositing surface** | [`canvas`] — RGBA draw with clipping, region reads |
//! | **Legibility gradient** | [`overlay`] — hero frame, primary mode |
//! | **Logo adaptation** | [`logo`] — contrast decision, white recolor |
//! | **Per-frame orchestration** | [`frame`] — geometry → draw → overlay → logo → encode budget |
//!
//! The split mirrors the data flow: pure calculations at the bottom, pixel
//! work in the middle, a thin combining layer on top. Everything here is
//! per-frame; batching, naming and packaging live a level up.

pub mod canvas;
pub mod codec;
pub mod frame;
pub mod geometry;
pub mod logo;
pub mod overlay;

pub use canvas::Canvas;
pub use codec::{Quality, RenderError};
pub use frame::render_frame;
pub use geometry::{DrawRect, Placement};
