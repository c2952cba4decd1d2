//! Console output for the CLI.
//!
//! Format functions are pure — they return strings and never touch stdout —
//! so they are unit-testable; thin `print_*` wrappers and the console sink
//! implementations do the I/O.
//!
//! The batch summary is information-first: frames are grouped under the
//! backdrop they came from, with the archive entry name, encoded size and
//! preview marker as context lines:
//!
//! ```text
//! show (4 frames)
//!     show_240x135.png (18.2 KiB)
//!     show_800x450.png (161.0 KiB)
//!     show_1280x480.png (402.7 KiB) [preview]
//!     show_640x360.webp (96.4 KiB)
//! ```

use crate::batch::{BatchResult, Notifier, ProgressSink};
use crate::targets::{TARGETS, TargetSpec};

/// `[ 42%] Processing: 3/8 images`
pub fn format_progress(percent: u8, status: &str) -> String {
    format!("[{percent:>3}%] {status}")
}

/// One line of the target table: `1280x480 png (hero, logo)`.
pub fn format_target_line(target: &TargetSpec) -> String {
    let mut line = format!("{} {}", target.label(), target.format);
    let mut traits = Vec::new();
    if target.is_hero() {
        traits.push("hero");
    }
    if target.logo_eligible {
        traits.push("logo");
    }
    if !traits.is_empty() {
        line.push_str(&format!(" ({})", traits.join(", ")));
    }
    line
}

fn format_kib(len: usize) -> String {
    format!("{:.1} KiB", len as f64 / 1024.0)
}

/// Format the batch summary, grouped by source backdrop.
pub fn format_summary(result: &BatchResult) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_source: Option<&str> = None;

    for frame in &result.frames {
        if current_source != Some(frame.source.as_str()) {
            current_source = Some(frame.source.as_str());
            let count = result
                .frames
                .iter()
                .filter(|f| f.source == frame.source)
                .count();
            lines.push(format!("{} ({} frames)", frame.source, count));
        }
        let marker = if frame.target.is_hero() { " [preview]" } else { "" };
        lines.push(format!(
            "    {} ({}){}",
            frame.file_name,
            format_kib(frame.bytes.len()),
            marker
        ));
    }

    lines
}

pub fn print_summary(result: &BatchResult) {
    for line in format_summary(result) {
        println!("{line}");
    }
}

pub fn print_targets() {
    for target in &TARGETS {
        println!("{}", format_target_line(target));
    }
}

/// Progress sink that writes one line per update.
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn progress(&mut self, percent: u8, status: &str) {
        println!("{}", format_progress(percent, status));
    }
}

/// Notifier that prints stage-header style messages.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, message: &str) {
        println!("==> {message}");
    }
}
