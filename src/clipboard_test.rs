use super::*;

// =============================================================
// Confirmation messages
// =============================================================

#[test]
fn success_message_is_the_confirmation_literal() {
    assert_eq!(CopyOutcome::Copied.message(), "Email copied to clipboard!");
}

#[test]
fn manual_message_contains_the_address() {
    let outcome = CopyOutcome::Manual("hello@bakery.test".to_owned());
    let message = outcome.message();
    assert!(message.contains("hello@bakery.test"));
    assert!(message.starts_with("Please copy manually:"));
}

#[test]
fn confirmation_timing_and_color() {
    assert_eq!(CONFIRM_RESET_MS, 2000);
    assert_eq!(CONFIRM_BACKGROUND, "#4CAF50");
}

// =============================================================
// CopyError taxonomy
// =============================================================

#[test]
fn copy_errors_describe_themselves() {
    assert_eq!(
        CopyError::Unavailable.to_string(),
        "async clipboard unavailable"
    );
    assert_eq!(
        CopyError::CommandFailed.to_string(),
        "legacy copy command failed"
    );
}

// =============================================================
// Async-path gate
// =============================================================

#[test]
fn async_path_needs_secure_context_and_api() {
    assert!(async_clipboard_usable(true, true));
}

#[test]
fn insecure_context_takes_the_fallback() {
    assert!(!async_clipboard_usable(false, true));
}

#[test]
fn secure_context_without_the_api_takes_the_fallback() {
    // Secure context alone is not enough: write_text on an absent
    // navigator.clipboard throws rather than rejecting, so the gate must
    // check for the API itself too.
    assert!(!async_clipboard_usable(true, false));
    assert!(!async_clipboard_usable(false, false));
}

// =============================================================
// Feedback state machine: idle → showing → idle
// =============================================================

#[test]
fn begin_captures_originals_when_idle() {
    let mut feedback = Feedback::new();
    assert!(!feedback.showing());

    feedback.begin("Copy email".to_owned(), String::new());
    assert!(feedback.showing());

    let saved = feedback.restore().unwrap();
    assert_eq!(saved.label, "Copy email");
    assert_eq!(saved.background, "");
    assert!(!feedback.showing());
}

#[test]
fn restore_when_idle_yields_nothing() {
    let mut feedback = Feedback::new();
    assert_eq!(feedback.restore(), None);
}

#[test]
fn retrigger_while_showing_keeps_first_capture() {
    // Documents the resolution of the uncancelled-timer ambiguity in the
    // original behavior: the wiring cancels and restarts the timer, and the
    // state machine refuses to capture the confirmation text as an
    // "original". A fast double trigger therefore always restores the true
    // pre-click label, by construction rather than by overwrite order.
    let mut feedback = Feedback::new();
    feedback.begin("Copy email".to_owned(), String::new());

    // Second trigger lands while the confirmation text is on the button.
    feedback.begin("Email copied to clipboard!".to_owned(), "#4CAF50".to_owned());

    let saved = feedback.restore().unwrap();
    assert_eq!(saved.label, "Copy email");
    assert_eq!(saved.background, "");
}

#[test]
fn state_machine_cycles_cleanly() {
    let mut feedback = Feedback::new();
    for _ in 0..3 {
        feedback.begin("Copy email".to_owned(), "beige".to_owned());
        let saved = feedback.restore().unwrap();
        assert_eq!(saved.label, "Copy email");
        assert_eq!(saved.background, "beige");
        assert!(!feedback.showing());
    }
}
