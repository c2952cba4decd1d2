//! Output file naming.
//!
//! Every rendered frame is named `{stem}_{width}x{height}.{ext}`, where the
//! stem comes from the backdrop's file name: everything before the first `.`
//! with spaces replaced by underscores.
//!
//! Two different uploads can sanitize to the same stem (`a.png` and `a.jpg`
//! both become `a`), in which case their archive entries collide and the
//! last one wins. Known limitation; the batch summary lists every frame so
//! collisions are visible.

use crate::targets::TargetSpec;

/// Sanitize a backdrop file name into an archive stem.
///
/// Splits at the first dot (so `poster.v2.png` → `poster`, matching the
/// delivery convention callers already rely on) and replaces spaces with
/// underscores.
///
/// ```
/// use backplate::naming::sanitize_stem;
/// assert_eq!(sanitize_stem("Night Show.png"), "Night_Show");
/// assert_eq!(sanitize_stem("poster.v2.png"), "poster");
/// ```
pub fn sanitize_stem(file_name: &str) -> String {
    let base = file_name.split('.').next().unwrap_or(file_name);
    base.replace(' ', "_")
}

/// Build the archive entry name for one (source, target) pairing.
pub fn frame_file_name(stem: &str, target: &TargetSpec) -> String {
    format!(
        "{}_{}x{}.{}",
        stem,
        target.width,
        target.height,
        target.format.extension()
    )
}
