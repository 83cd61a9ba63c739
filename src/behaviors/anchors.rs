//! Same-page anchor smooth scrolling.

use std::borrow::Cow;

use tracing::debug;

use crate::config::AnchorConfig;
use crate::dom::Host;

/// What a click on a hash link resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Bare `#` (or not a hash link): browser default applies
    Ignored,
    /// Target found and scrolled into view
    Scrolled,
    /// Navigation suppressed but no element carries the referenced id
    TargetMissing,
}

impl ClickOutcome {
    /// Whether the click's default navigation must be cancelled
    pub fn prevents_default(self) -> bool {
        !matches!(self, ClickOutcome::Ignored)
    }
}

/// Element id referenced by a same-page href, percent-decoded.
///
/// Returns `None` for a bare `#`, an empty href, or a non-hash href.
pub fn fragment_id(href: &str) -> Option<Cow<'_, str>> {
    let raw = href.strip_prefix('#')?;
    if raw.is_empty() {
        return None;
    }
    // Undecodable fragments are looked up verbatim
    Some(urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw)))
}

/// Resolve a click on a link with the given `href` attribute.
pub fn handle_click<H: Host>(host: &H, config: &AnchorConfig, href: Option<&str>) -> ClickOutcome {
    let Some(id) = href.and_then(fragment_id) else {
        return ClickOutcome::Ignored;
    };

    match host.element_by_id(&id) {
        Some(target) => {
            host.scroll_into_view(&target, config.behavior);
            ClickOutcome::Scrolled
        }
        None => {
            debug!("Anchor: no element with id {:?}", id);
            ClickOutcome::TargetMissing
        }
    }
}
