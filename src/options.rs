//! Configuration options for specification extraction.
//!
//! This module provides [`SpecOptions`] and [`SpecOptionsBuilder`] for tuning
//! the reveal heuristic, region scoring and line bounds.
//!
//! ## Example
//!
//! ```rust
//! use specsieve::{SpecExtractor, SpecOptions};
//!
//! // Using default options
//! let extractor = SpecExtractor::new(SpecOptions::default()).unwrap();
//!
//! // Using builder for custom options
//! let options = SpecOptions::builder()
//!     .min_candidate_lines(4)
//!     .max_key_len(80)
//!     .build();
//!
//! let extractor = SpecExtractor::new(options).unwrap();
//! ```

use crate::constants;
use std::time::Duration;

/// A group of interchangeable terms that adds `weight` to a region's score
/// when any one of them occurs in the region's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreGroup {
    /// Lower-case terms, matched as substrings
    pub terms: Vec<String>,
    /// Score added once per group, regardless of how many terms match
    pub weight: i64,
}

impl ScoreGroup {
    pub fn new<I, S>(terms: I, weight: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(|t| t.into().to_lowercase()).collect(),
            weight,
        }
    }
}

/// A CSS selector, optionally narrowed to elements whose visible text
/// contains `text` (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTarget {
    pub selector: String,
    pub text: Option<String>,
}

impl RevealTarget {
    pub fn new(selector: impl Into<String>, text: Option<&str>) -> Self {
        Self {
            selector: selector.into(),
            text: text.map(str::to_string),
        }
    }
}

impl std::fmt::Display for RevealTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{} (\"{}\")", self.selector, text),
            None => f.write_str(&self.selector),
        }
    }
}

/// Configuration options for the extractor.
///
/// The defaults reproduce the heuristic as tuned for product pages; every
/// threshold and keyword set can be replaced through [`SpecOptions::builder`].
#[derive(Debug, Clone)]
pub struct SpecOptions {
    /// Trigger phrases searched by the keyword reveal strategy, in priority order.
    ///
    /// Default: Russian storefront phrases followed by English equivalents
    pub expand_keywords: Vec<String>,

    /// Elements that may carry a keyword-labelled trigger.
    ///
    /// Default: `button, a, div[role="button"]`
    pub clickable_selector: String,

    /// Tab widgets tried when no keyword trigger was clicked.
    pub tab_targets: Vec<RevealTarget>,

    /// Accordion and disclosure widgets tried last.
    pub accordion_targets: Vec<RevealTarget>,

    /// Timeout handed to every click.
    ///
    /// Default: `2s`
    pub click_timeout: Duration,

    /// Pause after a successful keyword or tab click.
    ///
    /// Default: `1.5s`
    pub settle_delay: Duration,

    /// Pause after a successful accordion click.
    ///
    /// Default: `1s`
    pub accordion_settle_delay: Duration,

    /// Subtrees removed before scoring (scripts, navigation, banners).
    pub noise_selector: String,

    /// Regions considered as candidates.
    pub container_selector: String,

    /// Keyword groups for the base score of each region.
    pub score_groups: Vec<ScoreGroup>,

    /// A line's key must be shorter than this many characters.
    ///
    /// Default: `150`
    pub max_key_len: usize,

    /// A line's value must be shorter than this many characters.
    ///
    /// Default: `500`
    pub max_value_len: usize,

    /// A region becomes a candidate only with more lines than this.
    ///
    /// Default: `2`
    pub min_candidate_lines: usize,

    /// Marker that opens the specification block in plain text.
    ///
    /// Default: `"характеристики"`
    pub text_block_marker: String,
}

impl Default for SpecOptions {
    fn default() -> Self {
        let targets = |list: &[(&str, Option<&str>)]| -> Vec<RevealTarget> {
            list.iter()
                .map(|(selector, text)| RevealTarget::new(*selector, *text))
                .collect()
        };

        Self {
            expand_keywords: constants::EXPAND_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            clickable_selector: constants::CLICKABLE_SELECTOR.to_string(),
            tab_targets: targets(constants::TAB_TARGETS),
            accordion_targets: targets(constants::ACCORDION_TARGETS),
            click_timeout: Duration::from_millis(2000),
            settle_delay: Duration::from_millis(1500),
            accordion_settle_delay: Duration::from_millis(1000),
            noise_selector: constants::NOISE_SELECTOR.to_string(),
            container_selector: constants::CONTAINER_SELECTOR.to_string(),
            score_groups: constants::SCORE_GROUPS
                .iter()
                .map(|(terms, weight)| ScoreGroup::new(terms.iter().copied(), *weight))
                .collect(),
            max_key_len: 150,
            max_value_len: 500,
            min_candidate_lines: 2,
            text_block_marker: constants::TEXT_BLOCK_MARKER.to_string(),
        }
    }
}

impl SpecOptions {
    /// Creates a new builder for SpecOptions
    pub fn builder() -> SpecOptionsBuilder {
        SpecOptionsBuilder::default()
    }
}

/// Builder for [`SpecOptions`].
///
/// ```rust
/// use specsieve::{ScoreGroup, SpecOptions};
///
/// let options = SpecOptions::builder()
///     .expand_keywords(vec!["specifications".to_string()])
///     .score_groups(vec![ScoreGroup::new(["specification"], 10)])
///     .build();
/// assert_eq!(options.expand_keywords.len(), 1);
/// ```
#[derive(Default)]
pub struct SpecOptionsBuilder {
    expand_keywords: Option<Vec<String>>,
    clickable_selector: Option<String>,
    tab_targets: Option<Vec<RevealTarget>>,
    accordion_targets: Option<Vec<RevealTarget>>,
    click_timeout: Option<Duration>,
    settle_delay: Option<Duration>,
    accordion_settle_delay: Option<Duration>,
    noise_selector: Option<String>,
    container_selector: Option<String>,
    score_groups: Option<Vec<ScoreGroup>>,
    max_key_len: Option<usize>,
    max_value_len: Option<usize>,
    min_candidate_lines: Option<usize>,
    text_block_marker: Option<String>,
}

impl SpecOptionsBuilder {
    /// Set the trigger phrases for the keyword reveal strategy
    pub fn expand_keywords(mut self, keywords: Vec<String>) -> Self {
        self.expand_keywords = Some(keywords);
        self
    }

    /// Set the selector for keyword-labelled triggers
    pub fn clickable_selector(mut self, selector: impl Into<String>) -> Self {
        self.clickable_selector = Some(selector.into());
        self
    }

    /// Set tab widget targets
    pub fn tab_targets(mut self, targets: Vec<RevealTarget>) -> Self {
        self.tab_targets = Some(targets);
        self
    }

    /// Set accordion widget targets
    pub fn accordion_targets(mut self, targets: Vec<RevealTarget>) -> Self {
        self.accordion_targets = Some(targets);
        self
    }

    /// Set the per-click timeout
    pub fn click_timeout(mut self, timeout: Duration) -> Self {
        self.click_timeout = Some(timeout);
        self
    }

    /// Set the pause after keyword and tab clicks
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = Some(delay);
        self
    }

    /// Set the pause after accordion clicks
    pub fn accordion_settle_delay(mut self, delay: Duration) -> Self {
        self.accordion_settle_delay = Some(delay);
        self
    }

    /// Set the selector of subtrees removed before scoring
    pub fn noise_selector(mut self, selector: impl Into<String>) -> Self {
        self.noise_selector = Some(selector.into());
        self
    }

    /// Set the selector of candidate regions
    pub fn container_selector(mut self, selector: impl Into<String>) -> Self {
        self.container_selector = Some(selector.into());
        self
    }

    /// Set keyword scoring groups
    pub fn score_groups(mut self, groups: Vec<ScoreGroup>) -> Self {
        self.score_groups = Some(groups);
        self
    }

    /// Set the exclusive upper bound on key length
    pub fn max_key_len(mut self, len: usize) -> Self {
        self.max_key_len = Some(len);
        self
    }

    /// Set the exclusive upper bound on value length
    pub fn max_value_len(mut self, len: usize) -> Self {
        self.max_value_len = Some(len);
        self
    }

    /// Set how many lines a region must exceed to become a candidate
    pub fn min_candidate_lines(mut self, lines: usize) -> Self {
        self.min_candidate_lines = Some(lines);
        self
    }

    /// Set the plain-text block marker
    pub fn text_block_marker(mut self, marker: impl Into<String>) -> Self {
        self.text_block_marker = Some(marker.into());
        self
    }

    /// Build the SpecOptions
    pub fn build(self) -> SpecOptions {
        let defaults = SpecOptions::default();
        SpecOptions {
            expand_keywords: self.expand_keywords.unwrap_or(defaults.expand_keywords),
            clickable_selector: self
                .clickable_selector
                .unwrap_or(defaults.clickable_selector),
            tab_targets: self.tab_targets.unwrap_or(defaults.tab_targets),
            accordion_targets: self
                .accordion_targets
                .unwrap_or(defaults.accordion_targets),
            click_timeout: self.click_timeout.unwrap_or(defaults.click_timeout),
            settle_delay: self.settle_delay.unwrap_or(defaults.settle_delay),
            accordion_settle_delay: self
                .accordion_settle_delay
                .unwrap_or(defaults.accordion_settle_delay),
            noise_selector: self.noise_selector.unwrap_or(defaults.noise_selector),
            container_selector: self
                .container_selector
                .unwrap_or(defaults.container_selector),
            score_groups: self.score_groups.unwrap_or(defaults.score_groups),
            max_key_len: self.max_key_len.unwrap_or(defaults.max_key_len),
            max_value_len: self.max_value_len.unwrap_or(defaults.max_value_len),
            min_candidate_lines: self
                .min_candidate_lines
                .unwrap_or(defaults.min_candidate_lines),
            text_block_marker: self
                .text_block_marker
                .unwrap_or(defaults.text_block_marker),
        }
    }
}
