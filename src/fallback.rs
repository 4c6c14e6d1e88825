//! Plain-text fallback for sources without a DOM (e.g. text pulled out of a PDF).
//!
//! Nothing is scored here: the block that starts at the marker word and runs
//! to the next blank line is taken as-is.

use regex::RegexBuilder;

const MIN_BLOCK_CHARS: usize = 10;

/// Find the specification block in plain text using `marker`.
///
/// The block starts at the first case-insensitive occurrence of `marker` and
/// ends before the next blank line (or at the end of the text). Blocks of ten
/// characters or fewer are treated as not found.
///
/// ```rust
/// use specsieve::scan_plain_text_with;
///
/// let text = "Intro\n\nSpecifications\nWeight: 2 kg\n\nFooter";
/// assert_eq!(
///     scan_plain_text_with(text, "specifications").as_deref(),
///     Some("Specifications\nWeight: 2 kg")
/// );
/// ```
pub fn scan_plain_text_with(text: &str, marker: &str) -> Option<String> {
    if marker.is_empty() {
        return None;
    }
    let pattern = RegexBuilder::new(&regex::escape(marker))
        .case_insensitive(true)
        .build()
        .ok()?;
    let start = pattern.find(text)?.start();
    let tail = &text[start..];
    let end = tail.find("\n\n").unwrap_or(tail.len());
    let block = &tail[..end];

    (block.chars().count() > MIN_BLOCK_CHARS).then(|| block.to_string())
}

/// [`scan_plain_text_with`] using the default marker, `"характеристики"`.
pub fn scan_plain_text(text: &str) -> Option<String> {
    scan_plain_text_with(text, crate::constants::TEXT_BLOCK_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_block_case_insensitively() {
        let text = "Паспорт изделия\n\nТЕХНИЧЕСКИЕ ХАРАКТЕРИСТИКИ\nМасса: 3 кг\nЦвет: серый\n\nГарантия";
        assert_eq!(
            scan_plain_text(text).as_deref(),
            Some("ХАРАКТЕРИСТИКИ\nМасса: 3 кг\nЦвет: серый")
        );
    }

    #[test]
    fn block_runs_to_end_without_blank_line() {
        let text = "Характеристики: мощность 2 кВт";
        assert_eq!(scan_plain_text(text).as_deref(), Some(text));
    }

    #[test]
    fn short_or_missing_blocks_are_rejected() {
        assert_eq!(scan_plain_text_with("Specs\n\nWeight: 2 kg", "specs"), None);
        assert_eq!(scan_plain_text("no marker at all\n\n"), None);
        assert_eq!(scan_plain_text_with("anything", ""), None);
    }
}
