//! Region discovery, keyword scoring and candidate ranking.

use crate::dom_utils::text_content;
use crate::options::{ScoreGroup, SpecOptions};
use crate::spec_line::SpecLine;
use crate::strategies::{extract_region, RegionKind};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

/// A scored region competing to be the page's specification block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub kind: RegionKind,
    /// Tag name and class of the region, for diagnostics
    pub label: String,
    pub score: i64,
    pub lines: Vec<SpecLine>,
}

/// Keyword score of a region's text.
///
/// Each group adds its weight once when any of its terms occurs in the
/// lower-cased text. Groups are additive and uncapped.
pub fn keyword_score(text: &str, groups: &[ScoreGroup]) -> i64 {
    let lower = text.to_lowercase();
    groups
        .iter()
        .filter(|group| group.terms.iter().any(|term| lower.contains(term.as_str())))
        .map(|group| group.weight)
        .sum()
}

/// Score one region and run its extraction strategy.
///
/// Returns `None` when the region yields too few lines to be a candidate.
pub fn score_region(container: ElementRef, options: &SpecOptions) -> Option<Candidate> {
    let kind = RegionKind::of(container);
    let base = keyword_score(&text_content(container), &options.score_groups);
    let extracted = extract_region(kind, container, options);
    let label = describe(container);

    if extracted.lines.len() <= options.min_candidate_lines {
        trace!(
            region = %label,
            lines = extracted.lines.len(),
            "Region below candidate threshold"
        );
        return None;
    }

    Some(Candidate {
        kind,
        label,
        score: base + extracted.score,
        lines: extracted.lines,
    })
}

/// Score every region matching `containers`, in document order.
pub fn collect_candidates(
    document: &Html,
    containers: &Selector,
    options: &SpecOptions,
) -> Vec<Candidate> {
    document
        .root_element()
        .select(containers)
        .filter_map(|container| score_region(container, options))
        .collect()
}

/// Order candidates by descending score; equal scores keep discovery order.
pub fn rank(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates
}

/// The top-ranked candidate's lines, or nothing.
pub fn select_best(candidates: Vec<Candidate>) -> Vec<SpecLine> {
    match rank(candidates).into_iter().next() {
        Some(best) => {
            debug!(
                region = %best.label,
                kind = ?best.kind,
                score = best.score,
                lines = best.lines.len(),
                "Selected specification region"
            );
            best.lines
        }
        None => Vec::new(),
    }
}

fn describe(element: ElementRef) -> String {
    let el = element.value();
    match el.attr("class") {
        Some(class) if !class.trim().is_empty() => format!("{}.{}", el.name(), class.trim()),
        _ => el.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(label: &str, score: i64) -> Candidate {
        Candidate {
            kind: RegionKind::Generic,
            label: label.to_string(),
            score,
            lines: vec![SpecLine::bounded(label, "x", 150, 500).unwrap()],
        }
    }

    #[test]
    fn keyword_groups_count_once() {
        let groups = SpecOptions::default().score_groups;
        assert_eq!(keyword_score("Weight weight WEIGHT", &groups), 3);
        assert_eq!(keyword_score("Технические характеристики: вес, цвет", &groups), 15);
        assert_eq!(keyword_score("nothing relevant", &groups), 0);
    }

    #[test]
    fn keyword_score_is_uncapped() {
        let groups = SpecOptions::default().score_groups;
        let text = "specification характеристики weight size color material warranty бренд";
        assert_eq!(keyword_score(text, &groups), 34);
    }

    #[test]
    fn rank_is_stable_on_ties() {
        let ranked = rank(vec![candidate("a", 5), candidate("b", 9), candidate("c", 5)]);
        let order: Vec<_> = ranked.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn region_needs_more_than_threshold_lines() {
        let doc = Html::parse_fragment(
            "<table><tr><td>Specification weight</td><td>1</td></tr><tr><td>Color</td><td>Red</td></tr></table>",
        );
        let sel = Selector::parse("table").unwrap();
        assert!(collect_candidates(&doc, &sel, &SpecOptions::default()).is_empty());
    }

    #[test]
    fn removed_regions_are_not_collected() {
        let mut doc = Html::parse_document(
            "<html><body><footer><table>\
             <tr><td>Weight</td><td>Delivery</td></tr>\
             <tr><td>Size</td><td>Returns</td></tr>\
             <tr><td>Color</td><td>Contacts</td></tr>\
             </table></footer></body></html>",
        );
        let tables = Selector::parse("table").unwrap();
        let options = SpecOptions::default();
        assert_eq!(collect_candidates(&doc, &tables, &options).len(), 1);

        crate::dom_utils::remove_matching(&mut doc, &Selector::parse("footer").unwrap());
        assert!(collect_candidates(&doc, &tables, &options).is_empty());
    }

    #[test]
    fn select_best_empty() {
        assert!(select_best(Vec::new()).is_empty());
    }
}
