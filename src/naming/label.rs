use std::path::Path;

use crate::foundation::core::format_rate;

/// Display name used when the host supplies none.
pub const DEFAULT_DISPLAY_NAME: &str = "CSV_Shape_Key_Action";

/// `"<base>_<rate>"`, e.g. `"session01_30"` or `"session01_29.97"`.
pub fn track_label(base: &str, fps: f64) -> String {
    format!("{base}_{}", format_rate(fps))
}

/// Base name for a track imported from `path`: the file stem, or the default
/// when the path has none.
pub fn display_name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_DISPLAY_NAME)
        .to_owned()
}

#[cfg(test)]
#[path = "../../tests/unit/naming/label.rs"]
mod tests;
