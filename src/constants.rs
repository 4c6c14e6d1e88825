//! Default keyword sets, selectors and compiled patterns.
//!
//! The defaults target Russian-language storefronts first, with English
//! equivalents appended, since that is where the heuristic was tuned.

use once_cell::sync::Lazy;
use regex::Regex;

/// Phrases that label a control hiding the specification block, most specific first.
pub const EXPAND_KEYWORDS: &[&str] = &[
    "все характеристики",
    "полные характеристики",
    "показать характеристики",
    "технические характеристики",
    "показать все",
    "характеристики",
    "развернуть",
    "подробнее",
    "смотреть все",
    "читать далее",
    "full specifications",
    "show specifications",
    "technical specifications",
    "specifications",
    "expand",
    "read more",
    "see all",
];

/// Elements that can carry a keyword-labelled trigger.
pub const CLICKABLE_SELECTOR: &str = r#"button, a, div[role="button"]"#;

/// `(selector, required text)` pairs for tab widgets.
pub const TAB_TARGETS: &[(&str, Option<&str>)] = &[
    (r#"[role="tab"]"#, Some("Характеристики")),
    (r#"[role="tab"]"#, Some("Описание")),
    (".tab", Some("Характеристики")),
    (r#"a[href*="specs"]"#, None),
    (r#"a[href*="характеристик"]"#, None),
];

/// `(selector, required text)` pairs for accordion and disclosure widgets.
pub const ACCORDION_TARGETS: &[(&str, Option<&str>)] = &[
    (".accordion", Some("Характеристики")),
    (r#"[class*="accordion"]"#, Some("Характеристики")),
    ("details summary", Some("Характеристики")),
];

/// Subtrees removed before any container is scored.
pub const NOISE_SELECTOR: &str = r#"script, style, nav, footer, header, .ad, .banner, iframe, noscript, [class*="cookie"], [class*="popup"]"#;

/// Regions that plausibly hold a specification block.
pub const CONTAINER_SELECTOR: &str = r#"table, dl, ul.specs, ul[class*="spec"], ul[class*="characteristic"], ul[class*="attribute"],
    div[class*="specs"], div[class*="spec"], div[class*="характерист"],
    div[class*="attributes"], div[class*="properties"], div[class*="params"],
    section[class*="spec"], section[class*="detail"], section[class*="info"],
    .product-info, .product-details, .product-specs, .product-attributes,
    .characteristics, .tech-specs, .technical-info,
    [id*="spec"], [id*="characteristic"], [id*="detail"]"#;

pub const LIST_KEY_SELECTOR: &str =
    r#"[class*="name"], [class*="key"], [class*="label"], [class*="title"]"#;
pub const LIST_VALUE_SELECTOR: &str = r#"[class*="value"], [class*="val"], [class*="data"]"#;

pub const PAIR_SELECTOR: &str =
    r#"[class*="row"], [class*="item"], [class*="line"], [class*="param"], [class*="attr"]"#;
pub const PAIR_KEY_SELECTOR: &str = r#"[class*="name"], [class*="key"], [class*="label"], [class*="title"], [class*="prop"]"#;
pub const PAIR_VALUE_SELECTOR: &str =
    r#"[class*="value"], [class*="val"], [class*="data"], [class*="content"]"#;

/// Keyword groups and the weight each adds when any of its terms appears.
pub const SCORE_GROUPS: &[(&[&str], i64)] = &[
    (&["характерист", "свойства"], 10),
    (&["specification", "features"], 10),
    (&["вес", "weight"], 3),
    (&["размер", "габарит", "size"], 3),
    (&["цвет", "color"], 2),
    (&["материал", "material"], 2),
    (&["гарантия", "warranty"], 2),
    (&["производитель", "бренд"], 2),
];

/// Marker that opens the specification block in plain extracted text.
pub const TEXT_BLOCK_MARKER: &str = "характеристики";

/// Substrings that mark a rendered line as leftover script.
pub const CODE_MARKERS: &[&str] = &["{", "function", "var ", "return"];

/// Characters stripped by text normalization.
pub const ZERO_WIDTH_CHARS: &[char] = &['\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}'];

/// Compiled free-text patterns
pub struct Patterns {
    /// `label <sep> value` for a list item's whole text.
    pub list_pair: Regex,
    /// `label <sep> value` for one rendered line of a generic container; the
    /// label is length-bounded and the separator is captured.
    pub row_pair: Regex,
}

pub static PATTERNS: Lazy<Patterns> = Lazy::new(|| Patterns {
    list_pair: Regex::new(r"^([\wа-яА-Я\s().,%№+\-]+?)\s*(?:[:.—\-]+|\s{3,})\s*(.{1,300})$")
        .expect("valid list pair regex"),
    row_pair: Regex::new(r"^([\wа-яА-Я\s().,%№+\-]{2,50}?)\s*([:.—\-]+|\s{3,})\s*(.{1,300})$")
        .expect("valid row pair regex"),
});
