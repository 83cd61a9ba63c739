//! Host-agnostic page behaviors.
//!
//! Each behavior is independent of the others; `crate::site::Site` wires them
//! to a page.

pub mod alert;
pub mod anchors;
pub mod footer;
pub mod reveal;
pub mod theme;

pub use anchors::ClickOutcome;
pub use reveal::{Intersection, RevealState};
pub use theme::Theme;
