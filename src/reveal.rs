//! Pre-extraction step that exposes specification content hidden behind UI.
//!
//! Three strategies run in strict order and the pass stops at the first click
//! that succeeds:
//!
//! 1. elements whose text contains one of the expand keywords,
//! 2. tab widgets,
//! 3. accordion and disclosure widgets.
//!
//! Every failure on the way (selector errors, invisible elements, clicks that
//! time out or hit an overlay) is logged and skipped.

use crate::options::{RevealTarget, SpecOptions};
use crate::page::{ClickOptions, Page};
use crate::utils::contains_text;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Which reveal strategy produced a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStrategy {
    Keyword,
    Tab,
    Accordion,
}

/// Result of one reveal pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealOutcome {
    /// An element was clicked and the page given time to settle
    Clicked {
        strategy: RevealStrategy,
        /// The keyword or target that matched
        target: String,
    },
    /// Nothing visible matched; the page is unchanged
    Nothing,
}

impl RevealOutcome {
    pub fn clicked(&self) -> bool {
        matches!(self, RevealOutcome::Clicked { .. })
    }
}

type Step<P> = fn(&mut P, &SpecOptions) -> Option<String>;

/// Try to expose hidden specification content on `page`.
pub fn reveal<P: Page>(page: &mut P, options: &SpecOptions) -> RevealOutcome {
    let steps: [(RevealStrategy, Step<P>); 3] = [
        (RevealStrategy::Keyword, click_keyword_trigger::<P>),
        (RevealStrategy::Tab, click_tab::<P>),
        (RevealStrategy::Accordion, click_accordion::<P>),
    ];

    for (strategy, step) in steps {
        if let Some(target) = step(page, options) {
            return RevealOutcome::Clicked { strategy, target };
        }
    }

    debug!("No reveal trigger found");
    RevealOutcome::Nothing
}

fn click_keyword_trigger<P: Page>(page: &mut P, options: &SpecOptions) -> Option<String> {
    let handles = match page.query_all(&options.clickable_selector) {
        Ok(handles) => handles,
        Err(e) => {
            warn!(selector = %options.clickable_selector, error = %e, "Clickable query failed");
            return None;
        }
    };

    let labelled: Vec<(P::Handle, String)> = handles
        .into_iter()
        .filter_map(|h| page.text(&h).ok().map(|text| (h, text)))
        .collect();

    let click = ClickOptions::new(options.click_timeout).forced();
    for keyword in &options.expand_keywords {
        for (handle, text) in &labelled {
            if !contains_text(text, keyword) || !page.is_visible(handle).unwrap_or(false) {
                continue;
            }
            info!(keyword = %keyword, "Clicking reveal trigger");
            match page.click(handle, click) {
                Ok(()) => {
                    page.settle(options.settle_delay);
                    return Some(keyword.clone());
                }
                Err(e) => warn!(keyword = %keyword, error = %e, "Reveal click failed"),
            }
        }
    }
    None
}

fn click_tab<P: Page>(page: &mut P, options: &SpecOptions) -> Option<String> {
    click_first_target(page, &options.tab_targets, options.click_timeout, options.settle_delay)
}

fn click_accordion<P: Page>(page: &mut P, options: &SpecOptions) -> Option<String> {
    click_first_target(
        page,
        &options.accordion_targets,
        options.click_timeout,
        options.accordion_settle_delay,
    )
}

/// For each target, consider only its first matching element.
fn click_first_target<P: Page>(
    page: &mut P,
    targets: &[RevealTarget],
    timeout: Duration,
    settle: Duration,
) -> Option<String> {
    for target in targets {
        let Some(handle) = first_match(page, target) else {
            continue;
        };
        if !page.is_visible(&handle).unwrap_or(false) {
            continue;
        }
        info!(target = %target, "Clicking reveal widget");
        match page.click(&handle, ClickOptions::new(timeout)) {
            Ok(()) => {
                page.settle(settle);
                return Some(target.to_string());
            }
            Err(e) => warn!(target = %target, error = %e, "Reveal click failed"),
        }
    }
    None
}

fn first_match<P: Page>(page: &mut P, target: &RevealTarget) -> Option<P::Handle> {
    let handles = match page.query_all(&target.selector) {
        Ok(handles) => handles,
        Err(e) => {
            warn!(selector = %target.selector, error = %e, "Reveal query failed");
            return None;
        }
    };
    match &target.text {
        None => handles.into_iter().next(),
        Some(text) => handles.into_iter().find(|h| {
            page.text(h)
                .map(|content| contains_text(&content, text))
                .unwrap_or(false)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::StaticPage;

    fn options() -> SpecOptions {
        SpecOptions::default()
    }

    #[test]
    fn keyword_order_wins_over_document_order() {
        let mut page = StaticPage::new(
            r##"<a href="#">Подробнее</a><button>Все характеристики</button>"##,
        );
        let outcome = reveal(&mut page, &options());
        assert_eq!(
            outcome,
            RevealOutcome::Clicked {
                strategy: RevealStrategy::Keyword,
                target: "все характеристики".to_string(),
            }
        );
        assert_eq!(page.clicks()[0].tag, "button");
        assert!(page.clicks()[0].force);
        assert_eq!(page.settled(), Duration::from_millis(1500));
    }

    #[test]
    fn invisible_keyword_match_is_skipped() {
        let mut page = StaticPage::new(
            r#"<button style="display:none">Характеристики</button><div role="button">Развернуть</div>"#,
        );
        let outcome = reveal(&mut page, &options());
        assert_eq!(
            outcome,
            RevealOutcome::Clicked {
                strategy: RevealStrategy::Keyword,
                target: "развернуть".to_string(),
            }
        );
    }

    #[test]
    fn failed_click_moves_to_next_element() {
        let mut page = StaticPage::new(
            r#"<button class="covered">Характеристики</button><a href="/x">Характеристики</a>"#,
        );
        page.fail_clicks_on(".covered").unwrap();
        let outcome = reveal(&mut page, &options());
        assert!(outcome.clicked());
        assert_eq!(page.clicks().len(), 1);
        assert_eq!(page.clicks()[0].tag, "a");
    }

    #[test]
    fn tab_strategy_runs_when_no_keyword_matches() {
        let mut page = StaticPage::new(
            r#"<div role="tab">Описание</div><div role="tab">Характеристики</div>"#,
        );
        let outcome = reveal(&mut page, &options());
        match outcome {
            RevealOutcome::Clicked { strategy, target } => {
                assert_eq!(strategy, RevealStrategy::Tab);
                assert!(target.contains("Характеристики"));
            }
            RevealOutcome::Nothing => panic!("expected a tab click"),
        }
        assert_eq!(page.clicks()[0].text, "Характеристики");
        assert!(!page.clicks()[0].force);
    }

    #[test]
    fn accordion_strategy_is_last_resort() {
        let mut page = StaticPage::new(
            "<details><summary>Характеристики</summary><p>Вес: 1 кг</p></details>",
        );
        let outcome = reveal(&mut page, &options());
        assert_eq!(
            outcome,
            RevealOutcome::Clicked {
                strategy: RevealStrategy::Accordion,
                target: "details summary (\"Характеристики\")".to_string(),
            }
        );
        assert_eq!(page.settled(), Duration::from_millis(1000));
    }

    #[test]
    fn nothing_visible_is_a_no_op() {
        let mut page = StaticPage::new("<p>Plain product page</p>");
        assert_eq!(reveal(&mut page, &options()), RevealOutcome::Nothing);
        assert!(page.clicks().is_empty());
        assert_eq!(page.settled(), Duration::ZERO);
    }
}
