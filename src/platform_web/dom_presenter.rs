use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::core::{Deck, SlideKind, SlideVisualState};
use crate::error::{DeckError, DeckResult};
use crate::render::{ControlState, DeckFrame, DotIndicator, Presenter};

use super::js_error;

const SLIDE_SELECTOR: &str = ".slide";
const TITLE_SLIDE_CLASS: &str = "slide--title";
const ROOT_SELECTOR: &str = ".presentation";
const ON_DARK_CLASS: &str = "on-dark-slide";
const ACTIVE_CLASS: &str = "active";
const PREV_CLASS: &str = "prev";

/// DOM surface of the deck.
///
/// Optional chrome elements (counter, progress bar, controls, dots) are
/// skipped when absent from the page.
pub struct DomPresenter {
    document: Document,
    slides: Vec<Element>,
    root: Option<Element>,
    counter: Option<Element>,
    progress_bar: Option<HtmlElement>,
    prev_button: Option<HtmlElement>,
    next_button: Option<HtmlElement>,
    dots_container: Option<Element>,
    dots: Vec<Element>,
}

impl DomPresenter {
    pub fn from_document(document: Document) -> DeckResult<Self> {
        let list = document
            .query_selector_all(SLIDE_SELECTOR)
            .map_err(|err| js_error("failed to query slides", &err))?;
        let slides: Vec<Element> = (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();
        if slides.is_empty() {
            return Err(DeckError::InvalidDeck(format!(
                "page has no `{SLIDE_SELECTOR}` elements"
            )));
        }

        let root = document.query_selector(ROOT_SELECTOR).ok().flatten();
        let html = |id: &str| {
            document
                .get_element_by_id(id)
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        };

        Ok(Self {
            counter: document.get_element_by_id("slideCounter"),
            progress_bar: html("progressBar"),
            prev_button: html("prevBtn"),
            next_button: html("nextBtn"),
            dots_container: document.get_element_by_id("slideDots"),
            dots: Vec::new(),
            root,
            slides,
            document,
        })
    }

    /// Reads slide count and title flags from the page.
    pub fn read_deck(&self) -> DeckResult<Deck> {
        Deck::from_kinds(self.slides.iter().map(|slide| {
            if slide.class_list().contains(TITLE_SLIDE_CLASS) {
                SlideKind::Title
            } else {
                SlideKind::Content
            }
        }))
    }

    pub(crate) fn prev_button(&self) -> Option<&HtmlElement> {
        self.prev_button.as_ref()
    }

    pub(crate) fn next_button(&self) -> Option<&HtmlElement> {
        self.next_button.as_ref()
    }

    pub(crate) fn dot_elements(&self) -> &[Element] {
        &self.dots
    }
}

fn apply_opacity(element: Option<&HtmlElement>, control: ControlState) -> DeckResult<()> {
    let Some(element) = element else {
        return Ok(());
    };
    element
        .style()
        .set_property("opacity", &control.opacity.to_string())
        .map_err(|err| js_error("failed to set control opacity", &err))
}

impl Presenter for DomPresenter {
    fn mount_dots(&mut self, dots: &[DotIndicator]) -> DeckResult<()> {
        let Some(container) = &self.dots_container else {
            return Ok(());
        };
        for dot in dots {
            let element = self
                .document
                .create_element("button")
                .map_err(|err| js_error("failed to create dot", &err))?;
            element.set_class_name(if dot.slide == 1 { "dot active" } else { "dot" });
            element
                .set_attribute("aria-label", &dot.aria_label)
                .map_err(|err| js_error("failed to label dot", &err))?;
            container
                .append_child(&element)
                .map_err(|err| js_error("failed to mount dot", &err))?;
            self.dots.push(element);
        }
        Ok(())
    }

    fn present(&mut self, frame: &DeckFrame) -> DeckResult<()> {
        frame.validate()?;
        let class_error = |err| js_error("failed to update slide classes", &err);

        for (slide, state) in self.slides.iter().zip(&frame.slide_states) {
            let classes = slide.class_list();
            classes.remove_2(ACTIVE_CLASS, PREV_CLASS).map_err(class_error)?;
            match state {
                SlideVisualState::Active => classes.add_1(ACTIVE_CLASS).map_err(class_error)?,
                SlideVisualState::Prev => classes.add_1(PREV_CLASS).map_err(class_error)?,
                SlideVisualState::Default => {}
            }
        }

        if let Some(counter) = &self.counter {
            counter.set_text_content(Some(&frame.counter_text));
        }
        if let Some(progress_bar) = &self.progress_bar {
            progress_bar
                .style()
                .set_property("width", &frame.progress_css_width())
                .map_err(|err| js_error("failed to set progress width", &err))?;
        }
        for (index, dot) in self.dots.iter().enumerate() {
            dot.class_list()
                .toggle_with_force(ACTIVE_CLASS, index + 1 == frame.active_dot)
                .map_err(class_error)?;
        }
        apply_opacity(self.prev_button.as_ref(), frame.prev_control)?;
        apply_opacity(self.next_button.as_ref(), frame.next_control)?;
        if let Some(root) = &self.root {
            root.class_list()
                .toggle_with_force(ON_DARK_CLASS, frame.on_dark)
                .map_err(class_error)?;
        }
        Ok(())
    }
}
