//! Counter card DOM binding.
//!
//! [`BrowserCounter`] wires a [`Counter`] to a `.card` element: the
//! `.increase` and `.decrease` buttons drive the value, the `.count` element
//! displays it, and an optional `.save-btn` simulates persisting the value.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use girare_core::Counter;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::events::listen;
use super::{dom, markers};

/// Why a counter could not be attached to a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// The card has no count display.
    MissingCount,
    /// The card is missing an increment or decrement button.
    MissingControls,
}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCount => write!(f, "card has no count element"),
            Self::MissingControls => write!(f, "card is missing counter buttons"),
        }
    }
}

impl std::error::Error for CardError {}

/// A counter bound to a card in the live document.
pub struct BrowserCounter {
    state: Rc<RefCell<Counter>>,
    /// Listener closures kept alive for the lifetime of the binding.
    _closures: Vec<Closure<dyn FnMut(web_sys::Event)>>,
}

impl BrowserCounter {
    /// Attach to a `.card` element.
    ///
    /// The card must hold a `.count` display plus `.increase` and
    /// `.decrease` buttons. The label comes from the card's `h3` heading and
    /// the save button is optional; both are skipped when absent.
    pub fn mount(card: &Element) -> Result<Self, CardError> {
        let count_el =
            dom::query(card, &markers::selector(markers::COUNT)).ok_or(CardError::MissingCount)?;
        let increase = dom::query(card, &markers::selector(markers::INCREASE))
            .ok_or(CardError::MissingControls)?;
        let decrease = dom::query(card, &markers::selector(markers::DECREASE))
            .ok_or(CardError::MissingControls)?;
        let save = dom::query(card, &markers::selector(markers::SAVE));
        let label = dom::query(card, "h3")
            .and_then(|el| el.text_content())
            .unwrap_or_default();

        let state = Rc::new(RefCell::new(Counter::new(label)));
        let mut closures = Vec::new();

        let cx = state.clone();
        let display = count_el.clone();
        listen(
            &increase,
            "click",
            move |_e| {
                cx.borrow_mut().increment();
                render_count(&display, &cx.borrow());
            },
            &mut closures,
        );

        let cx = state.clone();
        let display = count_el.clone();
        listen(
            &decrease,
            "click",
            move |_e| {
                cx.borrow_mut().decrement();
                render_count(&display, &cx.borrow());
            },
            &mut closures,
        );

        if let Some(save) = save {
            let cx = state.clone();
            listen(&save, "click", move |_e| save_counter(&cx.borrow()), &mut closures);
        }

        // The markup may carry a stale server-rendered value.
        render_count(&count_el, &state.borrow());

        Ok(Self {
            state,
            _closures: closures,
        })
    }

    /// Current value.
    pub fn value(&self) -> u32 {
        self.state.borrow().value()
    }

    /// Label taken from the card heading at mount time.
    pub fn label(&self) -> String {
        self.state.borrow().label().to_owned()
    }
}

/// Write the value into the count display.
fn render_count(display: &Element, counter: &Counter) {
    display.set_text_content(Some(&counter.value().to_string()));
}

/// Simulate persisting the counter: log the JSON payload and confirm.
fn save_counter(counter: &Counter) {
    let payload = serde_json::to_string(&counter.save_payload()).unwrap_or_default();
    web_sys::console::log_1(&JsValue::from_str(&format!("Simulated backend send: {payload}")));
    if let Some(window) = web_sys::window() {
        window
            .alert_with_message(&format!("Saved: {} = {}", counter.label(), counter.value()))
            .ok();
    }
}

// ============================================================================
// Browser tests
// ============================================================================

#[cfg(test)]
mod wasm_tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn card(label: Option<&str>, save: bool) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_class_name(markers::CARD);
        let mut html = String::new();
        if let Some(label) = label {
            html.push_str(&format!("<h3>{label}</h3>"));
        }
        html.push_str(&format!("<span class=\"{}\">42</span>", markers::COUNT));
        html.push_str(&format!("<button class=\"{}\"></button>", markers::INCREASE));
        html.push_str(&format!("<button class=\"{}\"></button>", markers::DECREASE));
        if save {
            html.push_str(&format!("<button class=\"{}\"></button>", markers::SAVE));
        }
        root.set_inner_html(&html);
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    fn click(root: &Element, class: &str) {
        let el = dom::query(root, &markers::selector(class)).unwrap();
        dom::as_html(&el).unwrap().click();
    }

    fn count_text(root: &Element) -> String {
        dom::query(root, &markers::selector(markers::COUNT))
            .unwrap()
            .text_content()
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn mount_requires_count() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_class_name(markers::CARD);
        let err = BrowserCounter::mount(&root).unwrap_err();
        assert_eq!(err, CardError::MissingCount);
    }

    #[wasm_bindgen_test]
    fn mount_requires_both_buttons() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_class_name(markers::CARD);
        root.set_inner_html(&format!(
            "<span class=\"{}\"></span><button class=\"{}\"></button>",
            markers::COUNT,
            markers::INCREASE
        ));
        let err = BrowserCounter::mount(&root).unwrap_err();
        assert_eq!(err, CardError::MissingControls);
    }

    #[wasm_bindgen_test]
    fn mount_replaces_stale_display() {
        let root = card(Some("Visits"), true);
        let counter = BrowserCounter::mount(&root).unwrap();
        assert_eq!(counter.value(), 0);
        assert_eq!(count_text(&root), "0");
        assert_eq!(counter.label(), "Visits");
        root.remove();
    }

    #[wasm_bindgen_test]
    fn clicks_drive_the_value() {
        let root = card(Some("Visits"), false);
        let counter = BrowserCounter::mount(&root).unwrap();
        click(&root, markers::INCREASE);
        click(&root, markers::INCREASE);
        assert_eq!(counter.value(), 2);
        assert_eq!(count_text(&root), "2");
        click(&root, markers::DECREASE);
        assert_eq!(counter.value(), 1);
        assert_eq!(count_text(&root), "1");
        root.remove();
    }

    #[wasm_bindgen_test]
    fn decrement_floors_at_zero() {
        let root = card(None, false);
        let counter = BrowserCounter::mount(&root).unwrap();
        click(&root, markers::DECREASE);
        assert_eq!(counter.value(), 0);
        assert_eq!(count_text(&root), "0");
        root.remove();
    }

    #[wasm_bindgen_test]
    fn missing_heading_defaults_to_empty_label() {
        let root = card(None, false);
        let counter = BrowserCounter::mount(&root).unwrap();
        assert_eq!(counter.label(), "");
        root.remove();
    }

    #[wasm_bindgen_test]
    fn save_click_does_not_disturb_the_value() {
        let root = card(Some("Visits"), true);
        let counter = BrowserCounter::mount(&root).unwrap();
        click(&root, markers::INCREASE);
        click(&root, markers::SAVE);
        assert_eq!(counter.value(), 1);
        root.remove();
    }
}
