//! Mobile menu controller.
//!
//! The hamburger button toggles the `active` class on the mobile navigation
//! panel and rotates the three hamburger bars 45° while the panel is open.
//! Clicking any link inside the panel forces it closed and resets the bars.
//! The panel's open state lives only in the DOM class list; this module
//! keeps no mirror of it.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement};

use crate::dom;
use crate::hooks;

/// Transform applied while the panel is open.
pub const BAR_OPEN: &str = "rotate(45deg)";

/// Transform applied while the panel is closed.
pub const BAR_CLOSED: &str = "rotate(0deg)";

/// Hamburger bar rotation for a given panel state.
#[must_use]
pub fn bar_transform(open: bool) -> &'static str {
    if open { BAR_OPEN } else { BAR_CLOSED }
}

fn style_bars(button: &HtmlElement, open: bool) {
    for bar in dom::query_all_within(button, hooks::MENU_BARS) {
        dom::set_style(&bar, "transform", bar_transform(open));
    }
}

/// Wire the mobile menu.
///
/// Returns `false` without attaching anything when the trigger button or the
/// panel is missing from the page.
pub fn attach(document: &Document) -> bool {
    let Some(button) = dom::query(document, hooks::MENU_BUTTON) else {
        return false;
    };
    let Some(panel) = dom::query(document, hooks::MENU_PANEL) else {
        return false;
    };

    {
        let button_in_toggle = button.clone();
        let panel = panel.clone();
        let toggle = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event| {
            let open = panel
                .class_list()
                .toggle(hooks::MENU_OPEN_CLASS)
                .unwrap_or(false);
            style_bars(&button_in_toggle, open);
        });
        dom::listen(&button, "click", toggle);
    }

    for link in dom::query_all(document, hooks::MENU_LINKS) {
        let button = button.clone();
        let panel = panel.clone();
        let close = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event| {
            let _ = panel.class_list().remove_1(hooks::MENU_OPEN_CLASS);
            style_bars(&button, false);
        });
        dom::listen(&link, "click", close);
    }

    true
}
