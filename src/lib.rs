//! # Backplate
//!
//! A batch renderer for backdrop artwork. Feed it full-size backdrop images
//! and it produces the four fixed display frames every backdrop needs —
//! thumbnail, card, hero banner, and a WebP variant — then packages them into
//! a single zip archive.
//!
//! # Architecture: Decode → Compose → Encode → Package
//!
//! Each backdrop flows through the same sequential pipeline:
//!
//! ```text
//! 1. Decode    bytes            →  RGBA pixels
//! 2. Compose   pixels + target  →  canvas (fit/cover, gradient, logo)
//! 3. Encode    canvas           →  PNG / WebP bytes
//! 4. Package   frames           →  processed_images.zip
//! ```
//!
//! The composition stage is pure: given the same inputs, [`render::render_frame`]
//! produces byte-identical output, so the whole batch is deterministic and unit
//! tests can assert on exact pixels and exact archive bytes.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`targets`] | The fixed four-entry output table — dimensions, formats, layout |
//! | [`render`] | Per-frame composition: geometry, canvas, gradient, logo, codecs |
//! | [`naming`] | Output file names: sanitized stem + `{width}x{height}` label |
//! | [`batch`] | The sequential batch loop, progress reporting, result summary |
//! | [`archive`] | Deterministic zip packaging of rendered frames |
//! | [`output`] | CLI output formatting — progress lines and the batch summary |
//!
//! # Design Decisions
//!
//! ## Fixed Target Table
//!
//! The four output frames are a constant table ([`targets::TARGETS`]), not
//! configuration. Every consumer of these images expects exactly these
//! dimensions; making them configurable would only invite mismatched assets.
//! Geometry, naming, and the batch loop all read from the table.
//!
//! ## Right-Anchored Composition
//!
//! Backdrops are composed against the right edge of the canvas rather than
//! centered. Display surfaces overlay text and a logo on the left side of the
//! hero banner, so the subject of the artwork must survive on the right. The
//! hero frame additionally gets a left-to-right black gradient for text
//! legibility and an automatically recolored logo — see [`render::geometry`],
//! [`render::overlay`], and [`render::logo`].
//!
//! ## Pure-Rust Imaging
//!
//! Decoding, resampling (Lanczos3), and PNG encoding use the `image` crate;
//! lossy WebP uses the `webp` crate. No system dependencies: the binary is
//! fully self-contained.
//!
//! ## Deterministic Archives
//!
//! Zip entries are written in render order with a fixed timestamp, so running
//! the same batch twice yields byte-identical archives. This makes output
//! diffable and lets integration tests compare whole runs.

pub mod archive;
pub mod batch;
pub mod naming;
pub mod output;
pub mod render;
pub mod targets;
