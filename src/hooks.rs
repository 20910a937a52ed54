//! Structural hooks — the selectors, class names, and data keys that bind
//! this crate to the page markup.
//!
//! The markup and stylesheet own these names; changing one here without
//! changing the page silently detaches the corresponding behavior.

// ── Mobile menu ─────────────────────────────────────────────────

/// Hamburger trigger button.
pub const MENU_BUTTON: &str = ".mobile-menu-btn";

/// Slide-down navigation panel.
pub const MENU_PANEL: &str = ".nav-mobile";

/// Links inside the mobile panel; clicking one closes the panel.
pub const MENU_LINKS: &str = ".nav-link-mobile";

/// The three decorative bars inside the trigger button.
pub const MENU_BARS: &str = ".hamburger-line";

/// Class on the panel while it is open.
pub const MENU_OPEN_CLASS: &str = "active";

// ── Navigation / header ─────────────────────────────────────────

/// Every same-page anchor link, desktop and mobile.
pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";

/// The fixed page header whose height offsets scroll targets and whose
/// shadow deepens on scroll.
pub const PAGE_HEADER: &str = ".header";

// ── Copy email ──────────────────────────────────────────────────

/// Trigger button for the copy-email behavior.
pub const COPY_BUTTON: &str = ".copy-email-btn";

/// Element whose text content is the address to copy.
pub const EMAIL_TEXT: &str = ".contact-email";

// ── Scroll reveal ───────────────────────────────────────────────

/// Content cards and images animated into view on first scroll-by.
pub const REVEAL_TARGETS: [&str; 5] = [
    ".highlight-card",
    ".menu-card",
    ".testimonial-card",
    ".about-img",
    ".gallery-img",
];

// ── Lazy images ─────────────────────────────────────────────────

/// Images opted into lazy loading by the markup.
pub const LAZY_IMAGES: &str = "img[loading=\"lazy\"]";

/// Marker class removed once an image's source is resolved.
pub const LAZY_CLASS: &str = "lazy";

/// Dataset key holding the staged source (`data-src` in the markup).
pub const STAGED_SRC_KEY: &str = "src";
