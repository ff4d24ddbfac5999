/// Tracking-system names that keep their `Left`/`Right` spelling (whole-jaw and
/// whole-mouth shifts, not one side of a mirrored pair).
pub const SIDE_SUFFIX_EXCEPTIONS: [&str; 4] = ["jawLeft", "jawRight", "mouthLeft", "mouthRight"];

/// Map a raw header name onto the `_L`/`_R` shape-key convention.
///
/// Every occurrence of `Left` becomes `_L`, then every `Right` becomes `_R`.
/// The replacement is a plain substring rewrite, so `LeftField` turns into
/// `_LField` as well.
pub fn normalize_channel_name(name: &str) -> String {
    if SIDE_SUFFIX_EXCEPTIONS.contains(&name) {
        return name.to_owned();
    }
    name.replace("Left", "_L").replace("Right", "_R")
}

/// Normalize a whole header row, preserving column order.
pub fn normalize_header(header: &[String]) -> Vec<String> {
    header.iter().map(|h| normalize_channel_name(h)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/naming/normalize.rs"]
mod tests;
