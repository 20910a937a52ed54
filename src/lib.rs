//! Progressive-enhancement layer for the Sweet Dreams Bakery static site.
//!
//! This crate is compiled to WebAssembly and loaded by the otherwise static
//! page. It attaches six independent behaviors to the rendered markup: the
//! mobile menu toggle, smooth in-page scrolling, the copy-email button,
//! scroll-triggered reveal animations, the header shadow, and a lazy-image
//! fallback for browsers without native deferred loading. Behaviors share
//! nothing but the document itself; each one checks for its own structural
//! hooks and skips attachment when they are absent, so a partial page never
//! breaks the rest.
//!
//! Behavior logic that does not need a live DOM (thresholds, style mappings,
//! the copy-confirmation state machine) lives in plain functions and types so
//! it can be tested natively, with the `web-sys` wiring kept thin on top.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`boot`] | Entry point, logging init, and attach-all orchestration |
//! | [`hooks`] | Selectors, class names, and data keys binding to the markup |
//! | [`dom`] | Shared `web-sys` query/listener/style helpers |
//! | [`menu`] | Mobile menu toggle and hamburger bar rotation |
//! | [`nav_scroll`] | Header-compensated smooth scrolling for anchor links |
//! | [`clipboard`] | Copy-email button with legacy fallback and confirmation |
//! | [`reveal`] | Scroll-triggered fade/slide reveal of content cards |
//! | [`header`] | Scroll-depth-dependent header drop shadow |
//! | [`lazy_images`] | Staged-source promotion when native lazy loading is absent |

pub mod boot;
pub mod clipboard;
pub mod dom;
pub mod header;
pub mod hooks;
pub mod lazy_images;
pub mod menu;
pub mod nav_scroll;
pub mod reveal;
