//! Whole-page bootstrap tests, run in a browser.

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used)]

use girare::browser::markers;
use girare::Page;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

const SLIDER_HTML: &str = r#"<div class="slider">
  <div class="slider__track">
    <div class="slider__slide"></div>
    <div class="slider__slide"></div>
    <div class="slider__slide"></div>
  </div>
  <button class="slider__arrow--prev"></button>
  <button class="slider__arrow--next"></button>
  <button class="slider__dot"></button>
  <button class="slider__dot"></button>
  <button class="slider__dot"></button>
</div>"#;

const CARD_HTML: &str = r#"<div class="card">
  <h3>Leads</h3>
  <span class="count">0</span>
  <button class="increase">+</button>
  <button class="decrease">-</button>
  <button class="save-btn">Save</button>
</div>"#;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Remove widget containers left by earlier tests so document-wide scans
/// stay exact.
fn clear_page() {
    let document = document();
    for selector in [
        markers::selector(markers::SLIDER),
        markers::selector(markers::CARD),
    ] {
        if let Ok(list) = document.query_selector_all(&selector) {
            for i in 0..list.length() {
                if let Some(node) = list.get(i) {
                    if let Ok(el) = node.dyn_into::<Element>() {
                        el.remove();
                    }
                }
            }
        }
    }
}

fn append_html(html: &str) {
    let document = document();
    let holder = document.create_element("div").unwrap();
    holder.set_inner_html(html);
    document.body().unwrap().append_child(&holder).unwrap();
}

#[wasm_bindgen_test]
fn page_mounts_all_widgets() {
    clear_page();
    append_html(SLIDER_HTML);
    append_html(SLIDER_HTML);
    append_html(CARD_HTML);
    let page = Page::new().unwrap();
    assert_eq!(page.carousel_count(), 2);
    assert_eq!(page.counter_count(), 1);
}

#[wasm_bindgen_test]
fn page_skips_malformed_containers() {
    clear_page();
    append_html(SLIDER_HTML);
    append_html(r#"<div class="slider"><p>no track here</p></div>"#);
    append_html(r#"<div class="card"><span class="count">1</span></div>"#);
    append_html(CARD_HTML);
    let page = Page::new().unwrap();
    assert_eq!(page.carousel_count(), 1);
    assert_eq!(page.counter_count(), 1);
}

#[wasm_bindgen_test]
fn page_on_empty_document_mounts_nothing() {
    clear_page();
    let page = Page::new().unwrap();
    assert_eq!(page.carousel_count(), 0);
    assert_eq!(page.counter_count(), 0);
}

#[wasm_bindgen_test]
fn page_prepares_keyboard_navigation() {
    clear_page();
    append_html(SLIDER_HTML);
    let _page = Page::new().unwrap();
    let slider = document().query_selector(".slider").unwrap().unwrap();
    assert_eq!(slider.get_attribute("tabindex").as_deref(), Some("0"));
}

#[wasm_bindgen_test]
fn page_slide_change_fans_out() {
    clear_page();
    append_html(SLIDER_HTML);
    let page = Page::new().unwrap();
    let callback =
        js_sys::Function::new_with_args("json", "globalThis.pageSlidePayload = json;");
    page.on_slide_change(callback);

    let next = document()
        .query_selector(&markers::selector(markers::ARROW_NEXT))
        .unwrap()
        .unwrap();
    next.dyn_into::<HtmlElement>().unwrap().click();

    let payload = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("pageSlidePayload"))
        .unwrap();
    assert_eq!(payload.as_string().as_deref(), Some("{\"index\":1}"));
}
