//! Lazy-image fallback for browsers without native deferred loading.
//!
//! When the runtime's image element exposes a `loading` property, the
//! browser already defers off-screen images and this module only logs that
//! fact. Otherwise every `img[loading="lazy"]` is handed to a
//! default-option intersection observer that, on first intersection,
//! promotes the staged `data-src` into the live `src`, drops the `lazy`
//! marker class, and unobserves the image.
//!
//! Unobserving here is deliberate and contrasts with [`crate::reveal`]:
//! source promotion is a one-shot resource resolution, not a repeatable
//! presentation state.

#[cfg(test)]
#[path = "lazy_images_test.rs"]
mod lazy_images_test;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};

use crate::dom;
use crate::hooks;

/// Final `src` for a lazy image: the staged source when one is present and
/// non-empty, otherwise the current source unchanged.
#[must_use]
pub fn promoted_src(staged: Option<&str>, current: &str) -> String {
    match staged {
        Some(s) if !s.is_empty() => s.to_owned(),
        _ => current.to_owned(),
    }
}

/// Whether this runtime's image element supports native lazy loading.
#[must_use]
pub fn native_lazy_supported(document: &Document) -> bool {
    let Ok(probe) = document.create_element("img") else {
        return false;
    };
    js_sys::Reflect::has(probe.as_ref(), &JsValue::from_str("loading")).unwrap_or(false)
}

fn resolve(img: &HtmlImageElement) {
    let staged = img.dataset().get(hooks::STAGED_SRC_KEY);
    img.set_src(&promoted_src(staged.as_deref(), &img.src()));
    let _ = img.class_list().remove_1(hooks::LAZY_CLASS);
}

/// Attach the fallback observer when native lazy loading is unavailable.
///
/// Returns `false` when the browser handles lazy loading itself or when no
/// images are tagged for it.
pub fn attach(document: &Document) -> bool {
    if native_lazy_supported(document) {
        log::debug!("native image lazy loading supported; fallback not needed");
        return false;
    }

    let images: Vec<HtmlImageElement> = dom::query_all(document, hooks::LAZY_IMAGES)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlImageElement>().ok())
        .collect();
    if images.is_empty() {
        return false;
    }

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let Ok(img) = entry.target().dyn_into::<HtmlImageElement>() else {
                    continue;
                };
                resolve(&img);
                // One-shot: once the real source is in place there is
                // nothing left to watch for.
                observer.unobserve(&img);
            }
        },
    );

    let Ok(observer) = IntersectionObserver::new(on_intersect.as_ref().unchecked_ref()) else {
        return false;
    };
    on_intersect.forget();

    for img in &images {
        observer.observe(img);
    }
    log::debug!("lazy-loading fallback observing {} images", images.len());

    true
}
