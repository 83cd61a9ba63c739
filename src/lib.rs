//! Site Behaviors - landing page script in Rust
//!
//! Attaches four independent behaviors to a static page when the wasm module
//! loads:
//! - Footer year: writes the current year into `#year`
//! - Reveal-on-scroll: flags `.scroll-reveal` elements `visible` once they
//!   enter the viewport
//! - Anchor smooth-scroll: animates same-page `#hash` links to their target
//! - Theme toggle: flips `dark-mode` on `<body>` and persists the choice
//!
//! plus an `iosAlert()` placeholder action for the page's own markup.
//!
//! The behaviors are written against the [`dom::Host`] seam and tested
//! natively; the browser binding lives in `web` (wasm32 only).

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

pub mod behaviors;
pub mod config;
pub mod dom;
pub mod error;
pub mod site;

// Browser-only modules (excluded from native builds and tests)
#[cfg(target_arch = "wasm32")]
pub mod logging;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use behaviors::{ClickOutcome, Theme};
pub use config::SiteConfig;
pub use error::SiteError;
pub use site::{BootReport, Site};
