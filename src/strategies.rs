//! Per-region extraction strategies.
//!
//! Every container is classified by its tag into a [`RegionKind`] and exactly
//! one strategy runs on it. A strategy yields the region's lines together with
//! the score those lines contribute; structural matches score higher than
//! free-text pattern matches.

use crate::constants::{
    PATTERNS, LIST_KEY_SELECTOR, LIST_VALUE_SELECTOR, PAIR_KEY_SELECTOR, PAIR_SELECTOR,
    PAIR_VALUE_SELECTOR,
};
use crate::dom_utils::{inner_text, query_all, query_first, tag_name, text_content};
use crate::options::SpecOptions;
use crate::spec_line::SpecLine;
use crate::utils::{looks_like_code, normalize_text};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

pub const TABLE_ROW_SCORE: i64 = 5;
pub const DEFINITION_SCORE: i64 = 4;
pub const EXPLICIT_PAIR_SCORE: i64 = 3;
pub const LIST_PATTERN_SCORE: i64 = 2;
pub const TEXT_PATTERN_SCORE: i64 = 1;

struct StrategySelectors {
    row: Selector,
    cell: Selector,
    term: Selector,
    description: Selector,
    list_item: Selector,
    list_key: Selector,
    list_value: Selector,
    pair: Selector,
    pair_key: Selector,
    pair_value: Selector,
}

static SELECTORS: Lazy<StrategySelectors> = Lazy::new(|| StrategySelectors {
    row: Selector::parse("tr").unwrap(),
    cell: Selector::parse("td, th").unwrap(),
    term: Selector::parse("dt").unwrap(),
    description: Selector::parse("dd").unwrap(),
    list_item: Selector::parse("li").unwrap(),
    list_key: Selector::parse(LIST_KEY_SELECTOR).unwrap(),
    list_value: Selector::parse(LIST_VALUE_SELECTOR).unwrap(),
    pair: Selector::parse(PAIR_SELECTOR).unwrap(),
    pair_key: Selector::parse(PAIR_KEY_SELECTOR).unwrap(),
    pair_value: Selector::parse(PAIR_VALUE_SELECTOR).unwrap(),
});

/// Structural role of a candidate region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Table,
    DefinitionList,
    ItemList,
    Generic,
}

impl RegionKind {
    pub fn of(element: ElementRef) -> Self {
        match tag_name(element).as_str() {
            "table" => RegionKind::Table,
            "dl" => RegionKind::DefinitionList,
            "ul" | "ol" => RegionKind::ItemList,
            _ => RegionKind::Generic,
        }
    }
}

/// Lines produced by one strategy and the score they add.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrategyYield {
    pub lines: Vec<SpecLine>,
    pub score: i64,
}

impl StrategyYield {
    fn push(&mut self, line: SpecLine, score: i64) {
        self.lines.push(line);
        self.score += score;
    }
}

/// Run the strategy matching the region's kind.
pub fn extract_region(kind: RegionKind, container: ElementRef, options: &SpecOptions) -> StrategyYield {
    match kind {
        RegionKind::Table => extract_table(container, options),
        RegionKind::DefinitionList => extract_definition_list(container, options),
        RegionKind::ItemList => extract_item_list(container, options),
        RegionKind::Generic => extract_generic(container, options),
    }
}

fn bounded(key: &str, value: &str, options: &SpecOptions) -> Option<SpecLine> {
    SpecLine::bounded(key, value, options.max_key_len, options.max_value_len)
}

/// First two cells of every row.
pub fn extract_table(table: ElementRef, options: &SpecOptions) -> StrategyYield {
    let mut out = StrategyYield::default();
    for row in query_all(table, &SELECTORS.row) {
        let cells = query_all(row, &SELECTORS.cell);
        if cells.len() < 2 {
            continue;
        }
        let key = normalize_text(&text_content(cells[0]));
        let value = normalize_text(&text_content(cells[1]));
        if let Some(line) = bounded(&key, &value, options) {
            out.push(line, TABLE_ROW_SCORE);
        }
    }
    out
}

/// `dt` paired with the `dd` at the same index.
pub fn extract_definition_list(list: ElementRef, options: &SpecOptions) -> StrategyYield {
    let mut out = StrategyYield::default();
    let descriptions = query_all(list, &SELECTORS.description);
    for (i, term) in query_all(list, &SELECTORS.term).into_iter().enumerate() {
        let key = normalize_text(&text_content(term));
        let value = descriptions
            .get(i)
            .map(|dd| normalize_text(&text_content(*dd)))
            .unwrap_or_default();
        if let Some(line) = bounded(&key, &value, options) {
            out.push(line, DEFINITION_SCORE);
        }
    }
    out
}

/// Explicit key/value children per `li`, falling back to the free-text pattern.
pub fn extract_item_list(list: ElementRef, options: &SpecOptions) -> StrategyYield {
    let mut out = StrategyYield::default();
    for item in query_all(list, &SELECTORS.list_item) {
        let key_el = query_first(item, &SELECTORS.list_key);
        let value_el = query_first(item, &SELECTORS.list_value);

        if let (Some(key_el), Some(value_el)) = (key_el, value_el) {
            let key = normalize_text(&text_content(key_el));
            let value = normalize_text(&text_content(value_el));
            if let Some(line) = bounded(&key, &value, options) {
                out.push(line, EXPLICIT_PAIR_SCORE);
            }
        } else if let Some(line) = match_list_pair(&normalize_text(&text_content(item)), options) {
            out.push(line, LIST_PATTERN_SCORE);
        }
    }
    out
}

/// Explicit row pairs first; rendered-text lines only when none were found.
pub fn extract_generic(container: ElementRef, options: &SpecOptions) -> StrategyYield {
    let mut out = StrategyYield::default();
    for pair in query_all(container, &SELECTORS.pair) {
        let key_el = query_first(pair, &SELECTORS.pair_key);
        let value_el = query_first(pair, &SELECTORS.pair_value);
        let (Some(key_el), Some(value_el)) = (key_el, value_el) else {
            continue;
        };
        let key = normalize_text(&text_content(key_el));
        let value = normalize_text(&text_content(value_el));
        if let Some(line) = bounded(&key, &value, options) {
            out.push(line, EXPLICIT_PAIR_SCORE);
        }
    }

    if out.lines.is_empty() {
        for raw in inner_text(container).split('\n') {
            if let Some(line) = match_text_line(&normalize_text(raw), options) {
                out.push(line, TEXT_PATTERN_SCORE);
            }
        }
    }
    out
}

/// Free-text match for a whole list item.
pub fn match_list_pair(text: &str, options: &SpecOptions) -> Option<SpecLine> {
    let caps = PATTERNS.list_pair.captures(text)?;
    let label = caps.get(1)?.as_str().trim();
    let value = caps.get(2)?.as_str().trim();
    bounded(label, value, options)
}

/// Free-text match for one rendered line of a generic container.
///
/// Stricter than [`match_list_pair`]: the label is length-bounded, the value
/// must be longer than one character and script-looking lines are rejected.
pub fn match_text_line(line: &str, options: &SpecOptions) -> Option<SpecLine> {
    if looks_like_code(line) {
        return None;
    }
    let caps = PATTERNS.row_pair.captures(line)?;
    let label = caps.get(1)?.as_str().trim();
    let value = caps.get(3)?.as_str();
    if value.chars().count() <= 1 {
        return None;
    }
    bounded(label, value.trim(), options)
}
