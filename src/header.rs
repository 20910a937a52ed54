//! Scroll-depth-dependent header drop shadow.
//!
//! The shadow is a pure function of the vertical scroll offset, recomputed
//! on every scroll event with no debouncing (the handler is two property
//! reads and one style write). The boundary is inclusive on the low side:
//! exactly 100 px keeps the resting shadow.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use wasm_bindgen::closure::Closure;
use web_sys::{Document, Window};

use crate::dom;
use crate::hooks;

/// Scroll depth (CSS pixels) beyond which the heavier shadow applies.
pub const SHADOW_AT: f64 = 100.0;

/// Shadow at or above the top of the page.
pub const SHADOW_RESTING: &str = "0 2px 8px rgba(139, 69, 19, 0.1)";

/// Shadow once the page has scrolled past [`SHADOW_AT`].
pub const SHADOW_SCROLLED: &str = "0 4px 16px rgba(139, 69, 19, 0.15)";

/// Box shadow for a given vertical scroll offset.
#[must_use]
pub fn shadow_for(scroll_y: f64) -> &'static str {
    if scroll_y > SHADOW_AT {
        SHADOW_SCROLLED
    } else {
        SHADOW_RESTING
    }
}

/// Wire the header shadow to the window's scroll events.
///
/// Returns `false` when the page has no header element.
pub fn attach(document: &Document, window: &Window) -> bool {
    let Some(header) = dom::query(document, hooks::PAGE_HEADER) else {
        return false;
    };

    let window_in_handler = window.clone();
    let on_scroll = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event| {
        let scroll_y = window_in_handler.scroll_y().unwrap_or(0.0);
        dom::set_style(&header, "box-shadow", shadow_for(scroll_y));
    });
    dom::listen(window, "scroll", on_scroll);

    true
}
