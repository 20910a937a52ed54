//! Header-compensated smooth scrolling for same-page anchor links.
//!
//! Default navigation is intercepted for every `a[href^="#"]`. When the
//! fragment resolves to an element, the viewport animates to the element's
//! top minus the fixed header's current height; the header is re-measured on
//! every click so responsive height changes stay accounted for. A fragment
//! that resolves to nothing is a silent no-op — no scroll, no navigation.

#[cfg(test)]
#[path = "nav_scroll_test.rs"]
mod nav_scroll_test;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom;
use crate::hooks;

/// Extract the fragment id from a same-page anchor href.
///
/// Returns `None` for hrefs that do not start with `#` and for a bare `#`
/// (which names no element and must stay a no-op).
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Scroll destination for a target at `target_top`, compensating for the
/// fixed header. May be negative for targets near the top of the page; the
/// browser clamps the actual scroll position.
#[must_use]
pub fn scroll_offset(target_top: f64, header_height: f64) -> f64 {
    target_top - header_height
}

fn header_height(document: &Document) -> f64 {
    dom::query(document, hooks::PAGE_HEADER).map_or(0.0, |header| f64::from(header.offset_height()))
}

/// Wire every same-page anchor link on the page.
///
/// Returns `false` when the page has no anchor links at all.
pub fn attach(document: &Document, window: &Window) -> bool {
    let links = dom::query_all(document, hooks::ANCHOR_LINKS);
    if links.is_empty() {
        return false;
    }

    for link in links {
        let document = document.clone();
        let window = window.clone();
        let anchor = link.clone();
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            event.prevent_default();

            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(id) = anchor_target(&href) else {
                return;
            };
            let Some(target) = document.get_element_by_id(id) else {
                return;
            };
            let Some(target) = target.dyn_ref::<HtmlElement>() else {
                return;
            };

            // Header height is read per click, not cached at attach time.
            let top = scroll_offset(f64::from(target.offset_top()), header_height(&document));

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
        dom::listen(&link, "click", on_click);
    }

    true
}
