//! The interaction seam between the heuristic and a rendered document.
//!
//! [`Page`] is what the reveal step needs from a live browser tab: query
//! elements, read their text, test visibility, click, and wait for the page to
//! settle. [`StaticPage`] implements it over a parsed HTML snapshot.

use crate::dom_utils::{is_rendered, parse_selector, text_content};
use crate::error::{Result, SpecError};
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;

/// How a click should be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOptions {
    /// Give up after this long
    pub timeout: Duration,
    /// Skip actionability checks (enabled, not obscured)
    pub force: bool,
}

impl ClickOptions {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            force: false,
        }
    }

    pub fn forced(mut self) -> Self {
        self.force = true;
        self
    }
}

/// A rendered document the reveal heuristic can interact with.
///
/// Implementations own the exclusive handle on one page for the duration of a
/// pass. Errors returned from any method are treated as "this element did not
/// work" by the caller and never abort the pass.
pub trait Page {
    /// Opaque reference to an element in the page
    type Handle: Clone;

    /// All elements matching a CSS selector, in document order.
    fn query_all(&mut self, selector: &str) -> Result<Vec<Self::Handle>>;

    /// Text content of an element.
    fn text(&mut self, handle: &Self::Handle) -> Result<String>;

    /// Whether the element is currently rendered and visible.
    fn is_visible(&mut self, handle: &Self::Handle) -> Result<bool>;

    /// Click an element.
    fn click(&mut self, handle: &Self::Handle, options: ClickOptions) -> Result<()>;

    /// Let the page react to a preceding interaction.
    fn settle(&mut self, delay: Duration);

    /// Serialized markup of the page in its current state.
    fn content(&mut self) -> Result<String>;
}

/// Handle into a [`StaticPage`]: the element's position in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(usize);

/// A click performed on a [`StaticPage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickRecord {
    pub tag: String,
    pub text: String,
    pub force: bool,
}

/// [`Page`] over an HTML snapshot.
///
/// Clicks are recorded rather than executed and settling only accumulates the
/// requested delay, so a pass over a `StaticPage` is instant and observable.
///
/// ```rust
/// use specsieve::{Page, StaticPage};
///
/// let mut page = StaticPage::new(r#"<button hidden>Specs</button><a href="/specs">Specs</a>"#);
/// let links = page.query_all("button, a").unwrap();
/// assert!(!page.is_visible(&links[0]).unwrap());
/// assert!(page.is_visible(&links[1]).unwrap());
/// ```
pub struct StaticPage {
    document: Html,
    clicks: Vec<ClickRecord>,
    settled: Duration,
    failing: Vec<Selector>,
}

impl StaticPage {
    pub fn new(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
            clicks: Vec::new(),
            settled: Duration::ZERO,
            failing: Vec::new(),
        }
    }

    /// Make clicks on elements matching `selector` fail, as if obstructed.
    pub fn fail_clicks_on(&mut self, selector: &str) -> Result<()> {
        self.failing.push(parse_selector(selector)?);
        Ok(())
    }

    /// Clicks performed so far, in order.
    pub fn clicks(&self) -> &[ClickRecord] {
        &self.clicks
    }

    /// Total settle time requested so far.
    pub fn settled(&self) -> Duration {
        self.settled
    }

    pub fn document(&self) -> &Html {
        &self.document
    }

    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
    }

    fn resolve(&self, handle: &ElementHandle) -> Result<ElementRef<'_>> {
        self.elements().nth(handle.0).ok_or(SpecError::Detached)
    }
}

impl Page for StaticPage {
    type Handle = ElementHandle;

    fn query_all(&mut self, selector: &str) -> Result<Vec<ElementHandle>> {
        let selector = parse_selector(selector)?;
        Ok(self
            .elements()
            .enumerate()
            .filter(|(_, el)| selector.matches(el))
            .map(|(i, _)| ElementHandle(i))
            .collect())
    }

    fn text(&mut self, handle: &ElementHandle) -> Result<String> {
        Ok(text_content(self.resolve(handle)?))
    }

    fn is_visible(&mut self, handle: &ElementHandle) -> Result<bool> {
        Ok(is_rendered(self.resolve(handle)?))
    }

    fn click(&mut self, handle: &ElementHandle, options: ClickOptions) -> Result<()> {
        let element = self.resolve(handle)?;
        if self.failing.iter().any(|sel| sel.matches(&element)) {
            return Err(SpecError::Interaction(format!(
                "<{}> is obscured by another element",
                element.value().name()
            )));
        }
        if !options.force && element.value().attr("disabled").is_some() {
            return Err(SpecError::Timeout(options.timeout.as_millis()));
        }
        let record = ClickRecord {
            tag: element.value().name().to_string(),
            text: crate::utils::normalize_text(&text_content(element)),
            force: options.force,
        };
        self.clicks.push(record);
        Ok(())
    }

    fn settle(&mut self, delay: Duration) {
        self.settled += delay;
    }

    fn content(&mut self) -> Result<String> {
        Ok(self.document.html())
    }
}
