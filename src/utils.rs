//! Text helpers shared by every extraction strategy.

use crate::constants::{CODE_MARKERS, ZERO_WIDTH_CHARS};

/// Canonicalize a raw text fragment.
///
/// Strips zero-width and BOM characters, collapses every whitespace run to a
/// single space and trims both ends. Empty input yields an empty string.
///
/// ```rust
/// use specsieve::normalize_text;
///
/// assert_eq!(normalize_text("  Weight\u{200B}\n\t 250 g "), "Weight 250 g");
/// assert_eq!(normalize_text(""), "");
/// ```
pub fn normalize_text(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !ZERO_WIDTH_CHARS.contains(c))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-insensitive, whitespace-insensitive substring test used for
/// "element has text" matching.
pub fn contains_text(haystack: &str, needle: &str) -> bool {
    let needle = normalize_text(needle).to_lowercase();
    if needle.is_empty() {
        return true;
    }
    normalize_text(haystack).to_lowercase().contains(&needle)
}

/// Whether a rendered line looks like a remnant of inline script.
pub fn looks_like_code(line: &str) -> bool {
    CODE_MARKERS.iter().any(|marker| line.contains(marker))
}
