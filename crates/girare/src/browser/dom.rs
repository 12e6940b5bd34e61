//! Small query helpers over `web_sys`.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, NodeList};

/// First descendant of `root` matching `selector`, if any.
pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// All descendants of `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

/// Collect a `NodeList` into the elements it contains.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// View an element as an `HtmlElement`, if it is one.
pub fn as_html(element: &Element) -> Option<HtmlElement> {
    element.clone().dyn_into::<HtmlElement>().ok()
}
