//! Main [`SpecExtractor`] struct tying reveal, discovery, scoring and ranking together.
//!
//! ## Example
//!
//! ```rust
//! use specsieve::{to_map, SpecExtractor, SpecOptions};
//!
//! let html = r#"
//!     <table class="specs">
//!         <tr><td>Weight</td><td>250g</td></tr>
//!         <tr><td>Color</td><td>Black</td></tr>
//!         <tr><td>Material</td><td>Steel</td></tr>
//!     </table>
//! "#;
//!
//! let extractor = SpecExtractor::new(SpecOptions::default())?;
//! let lines = extractor.extract_html(html);
//! assert_eq!(lines[0].as_str(), "Weight: 250g");
//!
//! let specs = to_map(&lines);
//! assert_eq!(specs.get("Color"), Some(" Black"));
//! # Ok::<(), specsieve::SpecError>(())
//! ```

use crate::dom_utils::{parse_selector, remove_matching};
use crate::error::Result;
use crate::fallback::scan_plain_text_with;
use crate::options::SpecOptions;
use crate::page::Page;
use crate::reveal::{reveal, RevealOutcome};
use crate::scoring::{collect_candidates, rank, select_best, Candidate};
use crate::spec_line::SpecLine;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};

static DEFAULT_EXTRACTOR: Lazy<SpecExtractor> = Lazy::new(|| {
    SpecExtractor::new(SpecOptions::default()).expect("default selectors are valid")
});

/// Heuristic specification extractor.
///
/// Holds validated options and the compiled selectors derived from them. One
/// extractor can serve any number of pages; each call works on its own copy of
/// the document.
pub struct SpecExtractor {
    options: SpecOptions,
    noise: Selector,
    containers: Selector,
}

/// The first source in a cascade that produced specification lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceHit {
    /// Position of the source in the input sequence
    pub index: usize,
    pub lines: Vec<SpecLine>,
}

impl SpecExtractor {
    /// Create an extractor, validating every configured selector.
    pub fn new(options: SpecOptions) -> Result<Self> {
        parse_selector(&options.clickable_selector)?;
        for target in options.tab_targets.iter().chain(&options.accordion_targets) {
            parse_selector(&target.selector)?;
        }
        let noise = parse_selector(&options.noise_selector)?;
        let containers = parse_selector(&options.container_selector)?;

        Ok(Self {
            options,
            noise,
            containers,
        })
    }

    pub fn options(&self) -> &SpecOptions {
        &self.options
    }

    /// Extract the best specification block from a document.
    ///
    /// Returns an empty vector when no region yields enough lines.
    pub fn extract(&self, document: &Html) -> Vec<SpecLine> {
        select_best(self.scan(document))
    }

    /// Parse `html` and extract from it.
    pub fn extract_html(&self, html: &str) -> Vec<SpecLine> {
        self.extract(&Html::parse_document(html))
    }

    /// All qualifying candidates, best first.
    pub fn candidates(&self, document: &Html) -> Vec<Candidate> {
        rank(self.scan(document))
    }

    fn scan(&self, document: &Html) -> Vec<Candidate> {
        let mut working = document.clone();
        let removed = remove_matching(&mut working, &self.noise);
        let candidates = collect_candidates(&working, &self.containers, &self.options);
        debug!(
            noise_removed = removed,
            candidates = candidates.len(),
            "Scored specification regions"
        );
        candidates
    }

    /// Run the reveal heuristic on a live page.
    pub fn reveal<P: Page>(&self, page: &mut P) -> RevealOutcome {
        reveal(page, &self.options)
    }

    /// Reveal hidden content, then extract from the page's current markup.
    pub fn process_page<P: Page>(&self, page: &mut P) -> Vec<SpecLine> {
        self.reveal(page);
        match page.content() {
            Ok(html) => self.extract_html(&html),
            Err(e) => {
                warn!(error = %e, "Could not read page content");
                Vec::new()
            }
        }
    }

    /// Process pages in order until one yields specification lines.
    ///
    /// Pages after the first hit are never touched.
    pub fn first_with_specs<P, I>(&self, pages: I) -> Option<SourceHit>
    where
        P: Page,
        I: IntoIterator<Item = P>,
    {
        for (index, mut page) in pages.into_iter().enumerate() {
            let lines = self.process_page(&mut page);
            if lines.is_empty() {
                info!(source = index, "Specifications not found on source");
                continue;
            }
            info!(source = index, lines = lines.len(), "Extracted specifications");
            return Some(SourceHit { index, lines });
        }
        None
    }

    /// Plain-text fallback using the configured marker.
    pub fn scan_text(&self, text: &str) -> Option<String> {
        scan_plain_text_with(text, &self.options.text_block_marker)
    }
}

/// Extract specification lines from `html` with default options.
///
/// ```rust
/// use specsieve::extract_specs;
///
/// let html = "<dl><dt>Brand</dt><dd>Acme</dd><dt>Model</dt><dd>X1</dd><dt>Year</dt><dd>2024</dd></dl>";
/// let lines: Vec<String> = extract_specs(html).into_iter().map(|l| l.into_string()).collect();
/// assert_eq!(lines, vec!["Brand: Acme", "Model: X1", "Year: 2024"]);
/// ```
pub fn extract_specs(html: &str) -> Vec<SpecLine> {
    DEFAULT_EXTRACTOR.extract_html(html)
}
