//! Entry point: logging init, document readiness, and behavior attachment.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Window};

use crate::{clipboard, dom, header, lazy_images, menu, nav_scroll, reveal};

/// Attach every site behavior to `document`, independently.
///
/// Each behavior checks for its own structural hooks; one behavior skipping
/// (or a hook being absent from a trimmed-down page) never affects the
/// others.
pub fn attach_all(document: &Document, window: &Window) {
    let results = [
        ("mobile-menu", menu::attach(document)),
        ("nav-scroll", nav_scroll::attach(document, window)),
        ("copy-email", clipboard::attach(document, window)),
        ("reveal", reveal::attach(document)),
        ("header-shadow", header::attach(document, window)),
        ("lazy-images", lazy_images::attach(document)),
    ];
    for (name, attached) in results {
        if attached {
            log::debug!("{name}: attached");
        } else {
            log::debug!("{name}: skipped");
        }
    }
    log::info!("Sweet Dreams Bakery enhancements loaded");
}

/// WASM entry point, invoked by the module loader.
///
/// Defers attachment until `DOMContentLoaded` when the document is still
/// parsing, mirroring how the page's own scripts wait for the initial
/// markup to exist.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let document_at_ready = document.clone();
        let window_at_ready = window.clone();
        let on_ready = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event| {
            attach_all(&document_at_ready, &window_at_ready);
        });
        dom::listen(&document, "DOMContentLoaded", on_ready);
    } else {
        attach_all(&document, &window);
    }
}
