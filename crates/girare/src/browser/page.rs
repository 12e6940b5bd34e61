//! Page bootstrap.
//!
//! [`Page`] is the JavaScript entry point: constructing one scans the
//! document for widget containers and mounts a binding on each. Malformed
//! containers are logged and skipped so one bad block never takes down the
//! rest of the page.

use girare_core::CarouselConfig;
use wasm_bindgen::prelude::*;
use web_sys::console;

use super::carousel::BrowserCarousel;
use super::counter::BrowserCounter;
use super::{dom, markers};

/// All widget bindings mounted on the current document.
#[wasm_bindgen]
pub struct Page {
    carousels: Vec<BrowserCarousel>,
    counters: Vec<BrowserCounter>,
}

#[wasm_bindgen]
impl Page {
    /// Scan the document and mount every carousel and counter card found.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Page, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;

        let mut carousels = Vec::new();
        for container in scan(&document, markers::SLIDER) {
            match BrowserCarousel::mount(&container, CarouselConfig::default()) {
                Ok(carousel) => carousels.push(carousel),
                Err(e) => {
                    console::warn_1(&JsValue::from_str(&format!("girare: skipping slider: {e}")));
                }
            }
        }

        let mut counters = Vec::new();
        for card in scan(&document, markers::CARD) {
            match BrowserCounter::mount(&card) {
                Ok(counter) => counters.push(counter),
                Err(e) => {
                    console::warn_1(&JsValue::from_str(&format!("girare: skipping card: {e}")));
                }
            }
        }

        Ok(Page {
            carousels,
            counters,
        })
    }

    /// Number of carousels that mounted successfully.
    pub fn carousel_count(&self) -> usize {
        self.carousels.len()
    }

    /// Number of counter cards that mounted successfully.
    pub fn counter_count(&self) -> usize {
        self.counters.len()
    }

    /// Subscribe to slide changes on every mounted carousel. The callback
    /// receives a JSON string with the new index.
    pub fn on_slide_change(&self, callback: js_sys::Function) {
        for carousel in &self.carousels {
            carousel.on_change(callback.clone());
        }
    }
}

fn scan(document: &web_sys::Document, class: &str) -> Vec<web_sys::Element> {
    document
        .query_selector_all(&markers::selector(class))
        .map(|list| dom::elements(&list))
        .unwrap_or_default()
}

/// Install the panic hook when the module loads.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}
