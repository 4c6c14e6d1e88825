//! # specsieve
//!
//! Heuristic extraction of product specification blocks from arbitrary HTML pages.
//!
//! ## Overview
//!
//! Given a product page with no known template, specsieve finds the region most
//! likely to hold the product's specifications and turns it into an ordered list
//! of `"key: value"` lines. The region may be a table, a definition list, a
//! bulleted list, a grid of row `div`s or a plain block of text; its shape is
//! inferred from content signals rather than selectors written for one site.
//!
//! ## Key Features
//!
//! - **Reveal Heuristic**: clicks "show all specifications" buttons, tabs and accordions before extraction
//! - **Region Scoring**: ranks candidate containers by keyword presence and structural yield
//! - **Five Extraction Strategies**: tables, definition lists, item lists, explicit key/value rows, free text
//! - **Key/Value Mapping**: turns the winning lines into a [`SpecMap`]
//! - **Plain-Text Fallback**: finds the specification block in text extracted from documents without a DOM
//!
//! ## Basic Usage
//!
//! ```rust
//! use specsieve::{extract_specs, to_map};
//!
//! let html = r#"
//!     <div class="product-specs">
//!         <div class="row"><span class="label">Weight</span><span class="value">250g</span></div>
//!         <div class="row"><span class="label">Color</span><span class="value">Black</span></div>
//!         <div class="row"><span class="label">Warranty</span><span class="value">2 years</span></div>
//!     </div>
//! "#;
//!
//! let lines = extract_specs(html);
//! let specs = to_map(&lines);
//! assert_eq!(specs.get("Weight"), Some(" 250g"));
//! ```
//!
//! ## Live Pages
//!
//! Anything that can query, click and serialize a rendered document can drive
//! the reveal step by implementing [`Page`]. [`StaticPage`] does so for an HTML
//! snapshot.
//!
//! ```rust
//! use specsieve::{RevealOutcome, SpecExtractor, SpecOptions, StaticPage};
//!
//! let mut page = StaticPage::new("<button>Все характеристики</button>");
//! let extractor = SpecExtractor::new(SpecOptions::default()).unwrap();
//!
//! assert!(extractor.reveal(&mut page).clicked());
//! assert!(extractor.process_page(&mut page).is_empty());
//! ```
//!
//! ## Algorithm
//!
//! The reveal step tries keyword-labelled triggers, then tab widgets, then
//! accordions, and stops after the first click that succeeds. Extraction then
//! removes scripts, navigation and banners from a copy of the document and
//! collects every container whose tag or class/id suggests specifications. Each
//! container gets a keyword score and is handed to the strategy for its tag;
//! the strategy's lines add their own per-line score. Containers with two lines
//! or fewer are discarded, and the highest-scoring remaining container wins,
//! with ties going to the one found first.

mod constants;
mod dom_utils;
mod error;
mod extractor;
mod fallback;
mod options;
mod page;
mod record;
mod reveal;
mod scoring;
mod spec_line;
mod strategies;
mod utils;

// Public exports
pub use error::{Result, SpecError};
pub use extractor::{extract_specs, SourceHit, SpecExtractor};
pub use fallback::{scan_plain_text, scan_plain_text_with};
pub use options::{RevealTarget, ScoreGroup, SpecOptions, SpecOptionsBuilder};
pub use page::{ClickOptions, ClickRecord, ElementHandle, Page, StaticPage};
pub use record::{ProductRecord, NOT_FOUND_LINE};
pub use reveal::{reveal, RevealOutcome, RevealStrategy};
pub use scoring::{keyword_score, Candidate};
pub use spec_line::{to_map, SpecLine, SpecMap};
pub use strategies::RegionKind;
pub use utils::normalize_text;
