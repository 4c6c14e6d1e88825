//! DOM helpers over `scraper` trees.

use crate::error::{Result, SpecError};
use scraper::node::{Element, Node};
use scraper::{ElementRef, Html, Selector};

/// Tags whose boundaries start a new rendered line.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "caption", "dd", "details", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "form", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "li",
    "main", "ol", "p", "pre", "section", "summary", "table", "tbody", "tfoot", "thead", "tr", "ul",
];

/// Tags whose content never renders.
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "template", "head"];

/// Parse a selector, mapping failures to [`SpecError::InvalidSelector`].
pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| SpecError::InvalidSelector(format!("{}: {:?}", selector, e)))
}

/// Concatenated text of every descendant text node.
pub fn text_content(element: ElementRef) -> String {
    element.text().collect()
}

/// First descendant (excluding `element` itself) matching `selector`.
pub fn query_first<'a>(element: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    element
        .select(selector)
        .find(|candidate| candidate.id() != element.id())
}

/// All descendants (excluding `element` itself) matching `selector`, in document order.
pub fn query_all<'a>(element: ElementRef<'a>, selector: &Selector) -> Vec<ElementRef<'a>> {
    element
        .select(selector)
        .filter(|candidate| candidate.id() != element.id())
        .collect()
}

/// Detach every subtree matching `selector` from the document.
///
/// Returns how many subtrees were removed.
pub fn remove_matching(document: &mut Html, selector: &Selector) -> usize {
    let ids: Vec<_> = document
        .root_element()
        .select(selector)
        .map(|el| el.id())
        .collect();
    let mut removed = 0;
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
            removed += 1;
        }
    }
    removed
}

/// Approximation of the browser's rendered text for `element`.
///
/// Whitespace inside text nodes collapses to single spaces, so source
/// indentation never splits a line. Block-level boundaries and `<br>` become
/// line breaks, table cells are separated by tabs, and hidden subtrees are
/// left out.
pub fn inner_text(element: ElementRef) -> String {
    let mut out = String::new();
    collect_rendered(element, &mut out);
    out
}

fn collect_rendered(element: ElementRef, out: &mut String) {
    let closed_details = is_closed_details(element.value());
    for child in element.children() {
        match child.value() {
            Node::Text(text) if !closed_details => push_collapsed(text, out),
            Node::Element(el) => {
                if hides_subtree(el) || (closed_details && el.name() != "summary") {
                    continue;
                }
                let name = el.name();
                if name == "br" {
                    out.push('\n');
                    continue;
                }
                let Some(child_ref) = ElementRef::wrap(child) else {
                    continue;
                };
                let block = BLOCK_TAGS.contains(&name);
                if block {
                    out.push('\n');
                }
                collect_rendered(child_ref, out);
                if block {
                    out.push('\n');
                } else if name == "td" || name == "th" {
                    out.push('\t');
                }
            }
            _ => {}
        }
    }
}

fn push_collapsed(text: &str, out: &mut String) {
    let mut in_space = out.ends_with(' ');
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
        } else {
            out.push(c);
            in_space = false;
        }
    }
}

/// Whether the element's own tag, attributes or inline style keep it and its
/// subtree off screen.
fn hides_subtree(el: &Element) -> bool {
    if SKIPPED_TAGS.contains(&el.name()) || el.attr("hidden").is_some() {
        return true;
    }
    if el
        .attr("aria-hidden")
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    {
        return true;
    }
    el.attr("style").is_some_and(|style| {
        let style = style
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        style.contains("display:none") || style.contains("visibility:hidden")
    })
}

fn is_closed_details(el: &Element) -> bool {
    el.name() == "details" && el.attr("open").is_none()
}

/// Visibility as far as markup can tell: nothing on the element or any
/// ancestor hides it, and it is not inside a closed `<details>` body.
pub fn is_rendered(element: ElementRef) -> bool {
    let mut child_on_path: Option<ElementRef> = None;
    let chain = std::iter::once(element).chain(element.ancestors().filter_map(ElementRef::wrap));

    for node in chain {
        let el = node.value();
        if hides_subtree(el) {
            return false;
        }
        if is_closed_details(el) && !child_on_path.is_some_and(|c| c.value().name() == "summary") {
            return false;
        }
        child_on_path = Some(node);
    }
    true
}

/// Lower-case tag name of an element.
pub fn tag_name(element: ElementRef) -> String {
    element.value().name().to_ascii_lowercase()
}
