//! Batch orchestration.
//!
//! Runs the full input set through the renderer: backdrops outer, the four
//! delivery targets inner, strictly sequentially and in fixed order, so
//! frames, previews and progress reports come out deterministically.
//!
//! The orchestrator talks to the outside world through two seams:
//! [`ProgressSink`] (percentage + status line, called once at 0%, once per
//! frame, once at completion) and [`Notifier`] (fire-and-forget user
//! messages). Console implementations live in [`crate::output`]; tests use
//! recording ones.
//!
//! Failure policy is fail-fast: a decode or encode error anywhere aborts
//! the remainder of the batch with no partial output. Only the empty-input
//! check happens before any work starts.

use crate::naming;
use crate::render::codec::{self, RenderError};
use crate::render::frame;
use crate::targets::{OperatingMode, OutputFormat, TARGETS, TargetSpec};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("no backdrop images supplied")]
    EmptyInput,
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// One undecoded input: a file name and its bytes.
#[derive(Debug, Clone)]
pub struct SourceBlob {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Everything one batch needs, passed explicitly — no ambient state.
///
/// Logos pair with backdrops by position; a missing logo at some position
/// simply means "no logo for that backdrop". In alternate mode the logo
/// list is ignored entirely.
#[derive(Debug, Clone)]
pub struct BatchContext {
    pub mode: OperatingMode,
    /// Suppresses the fixed vertical bias in alternate-mode hero frames.
    pub generic: bool,
    pub backdrops: Vec<SourceBlob>,
    pub logos: Vec<SourceBlob>,
}

/// One encoded output frame.
#[derive(Debug, Clone)]
pub struct RenderedFrame {
    /// Sanitized backdrop stem this frame came from.
    pub source: String,
    pub file_name: String,
    pub target: TargetSpec,
    pub bytes: Vec<u8>,
}

/// A hero frame retained for previewing.
#[derive(Debug, Clone)]
pub struct Preview {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// All frames of a completed batch, in render order, plus the hero frames
/// retained for preview.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub frames: Vec<RenderedFrame>,
    pub previews: Vec<Preview>,
}

impl BatchResult {
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            total_frames: self.frames.len(),
            frames: self
                .frames
                .iter()
                .map(|f| FrameSummary {
                    file_name: f.file_name.clone(),
                    source: f.source.clone(),
                    width: f.target.width,
                    height: f.target.height,
                    format: f.target.format,
                    bytes: f.bytes.len(),
                    preview: f.target.is_hero(),
                })
                .collect(),
        }
    }
}

/// Serializable description of a batch, written by `--manifest`.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub total_frames: usize,
    pub frames: Vec<FrameSummary>,
}

#[derive(Debug, Serialize)]
pub struct FrameSummary {
    pub file_name: String,
    pub source: String,
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
    pub bytes: usize,
    pub preview: bool,
}

/// Receives progress updates. Percentages are non-decreasing within a batch.
pub trait ProgressSink {
    fn progress(&mut self, percent: u8, status: &str);
}

/// Receives user-facing messages. Fire-and-forget.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Progress percentage after `processed` of `total` frames.
pub fn percent_done(processed: usize, total: usize) -> u8 {
    ((processed as f64 / total as f64) * 100.0).round() as u8
}

/// Run one batch to completion.
///
/// An empty backdrop list aborts before any rendering with exactly one
/// notifier message. Render failures are notified and propagated; no
/// partial result escapes.
pub fn run_batch(
    ctx: &BatchContext,
    progress: &mut dyn ProgressSink,
    notifier: &mut dyn Notifier,
) -> Result<BatchResult, BatchError> {
    if ctx.backdrops.is_empty() {
        notifier.notify("No backdrop images supplied — nothing to render");
        return Err(BatchError::EmptyInput);
    }

    notifier.notify("Processing images");
    match render_all(ctx, progress) {
        Ok(result) => Ok(result),
        Err(err) => {
            notifier.notify(&err.to_string());
            Err(err)
        }
    }
}

fn render_all(
    ctx: &BatchContext,
    progress: &mut dyn ProgressSink,
) -> Result<BatchResult, BatchError> {
    let total = ctx.backdrops.len() * TARGETS.len();
    let mut processed = 0usize;
    let mut result = BatchResult::default();

    progress.progress(0, "Starting processing");

    for (i, source) in ctx.backdrops.iter().enumerate() {
        let backdrop = codec::decode(&source.bytes)?;

        let logo = if ctx.mode == OperatingMode::Primary {
            match ctx.logos.get(i) {
                Some(blob) => Some(codec::decode(&blob.bytes)?),
                None => None,
            }
        } else {
            None
        };

        let stem = naming::sanitize_stem(&source.name);

        for target in &TARGETS {
            let bytes =
                frame::render_frame(&backdrop, logo.as_ref(), target, ctx.mode, ctx.generic)?;
            let file_name = naming::frame_file_name(&stem, target);

            if target.is_hero() {
                result.previews.push(Preview {
                    file_name: file_name.clone(),
                    bytes: bytes.clone(),
                });
            }

            result.frames.push(RenderedFrame {
                source: stem.clone(),
                file_name,
                target: *target,
                bytes,
            });

            processed += 1;
            progress.progress(
                percent_done(processed, total),
                &format!("Processing: {processed}/{total} images"),
            );
        }
    }

    progress.progress(100, "Processing complete");
    Ok(result)
}
