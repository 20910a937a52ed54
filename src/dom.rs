//! Shared `web-sys` helpers for behavior wiring.
//!
//! Every behavior queries elements, registers long-lived listeners, and
//! writes inline styles; the helpers here keep that boilerplate (and its
//! error discipline) in one place. Failures from the JS boundary are logged
//! and swallowed — a styling or listener hiccup must never take down the
//! page (or another behavior).

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement};

/// Query the first element matching `selector`, as an [`HtmlElement`].
#[must_use]
pub fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Query all elements matching `selector`, keeping those backed by
/// [`HtmlElement`].
#[must_use]
pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    collect_html_elements(&list)
}

/// Query all descendants of `root` matching `selector`.
#[must_use]
pub fn query_all_within(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    collect_html_elements(&list)
}

fn collect_html_elements(list: &web_sys::NodeList) -> Vec<HtmlElement> {
    let mut out = Vec::new();
    for index in 0..list.length() {
        if let Some(node) = list.item(index) {
            if let Ok(el) = node.dyn_into::<HtmlElement>() {
                out.push(el);
            }
        }
    }
    out
}

/// Register `callback` for `event` on `target`, leaking the closure so it
/// lives as long as the page does.
///
/// Handlers attach once at page load and are never removed, so the leak is
/// bounded and matches the page lifetime.
pub fn listen(target: &EventTarget, event: &str, callback: Closure<dyn FnMut(web_sys::Event)>) {
    if target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to attach {event} listener");
    }
    callback.forget();
}

/// Set an inline style property, logging on failure instead of propagating.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if el.style().set_property(property, value).is_err() {
        log::warn!("failed to set inline style {property}");
    }
}
