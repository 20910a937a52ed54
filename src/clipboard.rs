//! Copy-email button with a legacy fallback and timed confirmation.
//!
//! The click handler reads the displayed address and tries the async
//! clipboard API first, gated on the API being present in a secure context.
//! When the gate fails or the write is rejected, a legacy path takes over: an off-screen
//! `<textarea>` is injected, selected, copied with `execCommand("copy")`,
//! and removed again on every exit path. If even that fails, the
//! confirmation message carries the address itself so the user can copy it
//! by hand.
//!
//! The confirmation overwrites the button's label and background for
//! [`CONFIRM_RESET_MS`] before restoring the pre-click values. The restore
//! timer is cancel-and-restart: re-triggering mid-countdown drops the
//! pending timer and starts a fresh one, and [`Feedback`] captures the
//! originals only on the idle edge, so a fast double click still restores
//! the true pre-confirmation label.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, HtmlDocument, HtmlElement, HtmlTextAreaElement, Window};

use crate::dom;
use crate::hooks;

/// Button background while a confirmation is showing.
pub const CONFIRM_BACKGROUND: &str = "#4CAF50";

/// How long a confirmation stays on the button before restoring.
pub const CONFIRM_RESET_MS: u32 = 2000;

/// Why a copy attempt fell back or failed outright.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CopyError {
    /// The async clipboard is unusable here (insecure context, missing
    /// `<body>`, or a DOM mutation was refused).
    #[error("async clipboard unavailable")]
    Unavailable,
    /// The legacy `execCommand("copy")` reported failure.
    #[error("legacy copy command failed")]
    CommandFailed,
}

/// What a finished copy attempt tells the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The address reached the clipboard, by either path.
    Copied,
    /// Every path failed; the user must copy this text by hand.
    Manual(String),
}

impl CopyOutcome {
    /// Confirmation text shown on the trigger button.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Copied => "Email copied to clipboard!".to_owned(),
            Self::Manual(email) => format!("Please copy manually: {email}"),
        }
    }
}

/// Label/background pair captured before a confirmation overwrites them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
    pub label: String,
    pub background: String,
}

/// Confirmation state machine: idle → showing → idle.
///
/// The originals are captured only on the idle → showing edge. A re-trigger
/// while showing would otherwise capture the confirmation text as the
/// "original" and restore that instead of the real label.
#[derive(Debug, Default)]
pub struct Feedback {
    saved: Option<Saved>,
}

impl Feedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a confirmation is currently on the button.
    #[must_use]
    pub fn showing(&self) -> bool {
        self.saved.is_some()
    }

    /// Enter (or stay in) the showing state. `label` and `background` become
    /// the restore target only when currently idle.
    pub fn begin(&mut self, label: String, background: String) {
        if self.saved.is_none() {
            self.saved = Some(Saved { label, background });
        }
    }

    /// Leave the showing state, yielding the values to restore. `None` when
    /// already idle.
    pub fn restore(&mut self) -> Option<Saved> {
        self.saved.take()
    }
}

/// Whether the async clipboard path may be taken at all.
///
/// Both halves matter: a secure context does not guarantee the async API
/// exists, and calling `write_text` on an absent `navigator.clipboard`
/// throws instead of rejecting, which would break the click handler rather
/// than fall back.
#[must_use]
pub fn async_clipboard_usable(secure_context: bool, clipboard_present: bool) -> bool {
    secure_context && clipboard_present
}

fn has_async_clipboard(window: &Window) -> bool {
    js_sys::Reflect::get(window.navigator().as_ref(), &JsValue::from_str("clipboard"))
        .map_or(false, |value| !value.is_undefined() && !value.is_null())
}

/// Wire the copy-email button.
///
/// Returns `false` when either the button or the email element is missing.
pub fn attach(document: &Document, window: &Window) -> bool {
    let Some(button) = dom::query(document, hooks::COPY_BUTTON) else {
        return false;
    };
    let Some(email_el) = dom::query(document, hooks::EMAIL_TEXT) else {
        return false;
    };

    let feedback = Rc::new(RefCell::new(Feedback::new()));
    let timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let document = document.clone();
    let window = window.clone();
    let button_in_handler = button.clone();
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event| {
        let email = email_el.text_content().unwrap_or_default();

        if async_clipboard_usable(window.is_secure_context(), has_async_clipboard(&window)) {
            let promise = window.navigator().clipboard().write_text(&email);
            let document = document.clone();
            let button = button_in_handler.clone();
            let feedback = Rc::clone(&feedback);
            let timer = Rc::clone(&timer);
            spawn_local(async move {
                let outcome = match JsFuture::from(promise).await {
                    Ok(_) => CopyOutcome::Copied,
                    Err(_) => legacy_copy(&document, &email),
                };
                show_confirmation(&button, &feedback, &timer, &outcome);
            });
        } else {
            let outcome = legacy_copy(&document, &email);
            show_confirmation(&button_in_handler, &feedback, &timer, &outcome);
        }
    });
    dom::listen(&button, "click", on_click);

    true
}

/// Legacy selection-and-copy path, with the failure surfaced as a manual
/// copy message rather than an error.
fn legacy_copy(document: &Document, email: &str) -> CopyOutcome {
    match copy_via_textarea(document, email) {
        Ok(()) => CopyOutcome::Copied,
        Err(err) => {
            log::warn!("copy fallback failed: {err}");
            CopyOutcome::Manual(email.to_owned())
        }
    }
}

fn copy_via_textarea(document: &Document, email: &str) -> Result<(), CopyError> {
    // execCommand lives on the HTML document interface, not Document.
    let Some(html_document) = document.dyn_ref::<HtmlDocument>() else {
        return Err(CopyError::Unavailable);
    };
    let Some(body) = document.body() else {
        return Err(CopyError::Unavailable);
    };

    let surface: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(|_| CopyError::Unavailable)?
        .dyn_into()
        .map_err(|_| CopyError::Unavailable)?;
    surface.set_value(email);
    // Parked off-screen so selecting it never scrolls or flashes the page.
    dom::set_style(&surface, "position", "fixed");
    dom::set_style(&surface, "left", "-999999px");
    dom::set_style(&surface, "top", "-999999px");

    body.append_child(&surface)
        .map_err(|_| CopyError::Unavailable)?;

    let _ = surface.focus();
    surface.select();
    let copied = html_document.exec_command("copy");

    // The surface comes out before the verdict so a failed copy still
    // cleans up after itself.
    let _ = body.remove_child(&surface);

    match copied {
        Ok(true) => Ok(()),
        Ok(false) | Err(_) => Err(CopyError::CommandFailed),
    }
}

fn show_confirmation(
    button: &HtmlElement,
    feedback: &Rc<RefCell<Feedback>>,
    timer: &Rc<RefCell<Option<Timeout>>>,
    outcome: &CopyOutcome,
) {
    feedback.borrow_mut().begin(
        button.text_content().unwrap_or_default(),
        button
            .style()
            .get_property_value("background-color")
            .unwrap_or_default(),
    );

    button.set_text_content(Some(&outcome.message()));
    dom::set_style(button, "background-color", CONFIRM_BACKGROUND);

    let button = button.clone();
    let feedback_at_reset = Rc::clone(feedback);
    let reset = Timeout::new(CONFIRM_RESET_MS, move || {
        if let Some(saved) = feedback_at_reset.borrow_mut().restore() {
            button.set_text_content(Some(&saved.label));
            if saved.background.is_empty() {
                let _ = button.style().remove_property("background-color");
            } else {
                dom::set_style(&button, "background-color", &saved.background);
            }
        }
    });
    // Replacing the slot drops, and thereby cancels, any countdown that is
    // already running.
    *timer.borrow_mut() = Some(reset);
}
