//! The fixed set of output targets.
//!
//! Every backdrop is rendered into the same four frames, in the order they
//! appear in [`TARGETS`]. The table is the single source of truth: geometry,
//! naming, encoding and the batch loop all read from it rather than carrying
//! their own dimension constants.

use std::fmt;

use serde::Serialize;

/// Container format of an encoded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Webp,
}

impl OutputFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Webp => "webp",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// How a target composes its canvas.
///
/// Standard targets fit the backdrop inside the canvas; the hero target
/// additionally takes a legibility gradient and a logo, and switches to
/// cover-fill in alternate mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Standard,
    Hero,
}

/// Batch-wide rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingMode {
    /// Right-anchored fit everywhere, gradient and logo on the hero frame.
    Primary,
    /// Cover-fill hero, no gradient, no logo.
    Alternate,
}

/// One entry of the output table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSpec {
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
    /// Whether a logo may be composited onto this frame (primary mode only).
    pub logo_eligible: bool,
    pub layout: LayoutMode,
}

impl TargetSpec {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// `{width}x{height}`, as used in output file names.
    pub fn label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    pub fn is_hero(&self) -> bool {
        self.layout == LayoutMode::Hero
    }
}

/// All output targets, in render order.
pub const TARGETS: [TargetSpec; 4] = [
    TargetSpec {
        width: 240,
        height: 135,
        format: OutputFormat::Png,
        logo_eligible: false,
        layout: LayoutMode::Standard,
    },
    TargetSpec {
        width: 800,
        height: 450,
        format: OutputFormat::Png,
        logo_eligible: false,
        layout: LayoutMode::Standard,
    },
    TargetSpec {
        width: 1280,
        height: 480,
        format: OutputFormat::Png,
        logo_eligible: true,
        layout: LayoutMode::Hero,
    },
    TargetSpec {
        width: 640,
        height: 360,
        format: OutputFormat::Webp,
        logo_eligible: false,
        layout: LayoutMode::Standard,
    },
];
