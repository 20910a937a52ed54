//! Scroll-triggered reveal of content cards and images.
//!
//! At attach time every matching element is hidden (transparent and shifted
//! 30 px down) with a transition declared, then handed to one shared
//! intersection observer. Crossing the 10% visibility threshold — with the
//! viewport's bottom edge pulled in 50 px so the reveal lands slightly
//! early — restores full opacity and zero offset.
//!
//! Elements stay observed after revealing. The revealed state is idempotent,
//! so redundant re-fires have no visible effect; this is the deliberate
//! counterpart to [`crate::lazy_images`], which unobserves one-shot targets.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::dom;
use crate::hooks;

/// Visibility fraction at which the reveal fires.
pub const THRESHOLD: f64 = 0.1;

/// Pulls the viewport's bottom edge in 50 px so elements reveal just before
/// they are fully on screen.
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Transition declared on every observed element at registration.
pub const TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

const HIDDEN: (&str, &str) = ("0", "translateY(30px)");
const VISIBLE: (&str, &str) = ("1", "translateY(0)");

/// `(opacity, transform)` pair for an element's reveal state.
#[must_use]
pub fn styles(revealed: bool) -> (&'static str, &'static str) {
    if revealed { VISIBLE } else { HIDDEN }
}

/// All reveal selectors joined into one query.
#[must_use]
pub fn combined_selector() -> String {
    hooks::REVEAL_TARGETS.join(", ")
}

fn apply(el: &HtmlElement, revealed: bool) {
    let (opacity, transform) = styles(revealed);
    dom::set_style(el, "opacity", opacity);
    dom::set_style(el, "transform", transform);
}

/// Hide and observe every reveal target on the page.
///
/// Returns `false` when no targets match or the observer cannot be built.
pub fn attach(document: &Document) -> bool {
    let targets = dom::query_all(document, &combined_selector());
    if targets.is_empty() {
        return false;
    }

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Some(el) = entry.target().dyn_ref::<HtmlElement>() {
                    apply(el, true);
                }
                // The element stays observed; revealing twice is harmless.
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    let Ok(observer) =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
    else {
        return false;
    };
    on_intersect.forget();

    for el in targets {
        apply(&el, false);
        dom::set_style(&el, "transition", TRANSITION);
        observer.observe(&el);
    }

    true
}
