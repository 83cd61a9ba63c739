//! Reveal-on-scroll controller.
//!
//! Each watched element moves `Unrevealed -> Revealed` exactly once. The
//! host's intersection observer feeds entries in; the controller flags the
//! element and hands back the targets the observer must stop watching.

use tracing::{debug, warn};

use crate::config::RevealConfig;
use crate::dom::Host;
use crate::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Unrevealed,
    Revealed,
}

/// One observer report for one element
#[derive(Debug, Clone)]
pub struct Intersection<E> {
    pub target: E,
    pub is_intersecting: bool,
    /// Visible fraction of the element
    pub ratio: f64,
}

pub fn state<H: Host>(host: &H, config: &RevealConfig, element: &H::Element) -> RevealState {
    if host.has_class(element, &config.visible_class) {
        RevealState::Revealed
    } else {
        RevealState::Unrevealed
    }
}

/// Marked elements that still need observing. Elements already carrying the
/// visible class (e.g. server-rendered) are skipped.
pub fn targets<H: Host>(host: &H, config: &RevealConfig) -> Result<Vec<H::Element>, SiteError> {
    let marked = host.query_all(&config.selector)?;
    let total = marked.len();
    let pending: Vec<_> = marked
        .into_iter()
        .filter(|el| state(host, config, el) == RevealState::Unrevealed)
        .collect();
    debug!(
        "Reveal: {} marked element(s), {} pending",
        total,
        pending.len()
    );
    Ok(pending)
}

/// Apply a batch of observer entries. Returns the elements that were revealed
/// and must be unobserved.
pub fn handle_entries<H, I>(host: &H, config: &RevealConfig, entries: I) -> Vec<H::Element>
where
    H: Host,
    I: IntoIterator<Item = Intersection<H::Element>>,
{
    let mut revealed = Vec::new();
    for entry in entries {
        if !entry.is_intersecting {
            continue;
        }
        match host.add_class(&entry.target, &config.visible_class) {
            Ok(()) => {
                debug!("Reveal: element entered viewport (ratio {:.2})", entry.ratio);
                revealed.push(entry.target);
            }
            // Left observed so a later entry can retry
            Err(e) => warn!("Reveal: failed to flag element: {}", e),
        }
    }
    revealed
}

/// Reveal every marked element at once. Used when the host cannot observe
/// intersections, so content is never left hidden.
pub fn reveal_all<H: Host>(host: &H, config: &RevealConfig) -> Result<usize, SiteError> {
    let pending = targets(host, config)?;
    let count = pending.len();
    for el in &pending {
        host.add_class(el, &config.visible_class)?;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::{FakePage, NodeId};

    fn entry(target: NodeId, is_intersecting: bool) -> Intersection<NodeId> {
        Intersection {
            target,
            is_intersecting,
            ratio: if is_intersecting { 0.25 } else { 0.0 },
        }
    }

    #[test]
    fn test_targets_skip_already_visible() {
        let page = FakePage::new();
        let config = RevealConfig::default();
        let a = page.add("section", None, &["scroll-reveal"]);
        let _b = page.add("section", None, &["scroll-reveal", "visible"]);
        let _other = page.add("section", None, &[]);

        assert_eq!(targets(&page, &config).unwrap(), vec![a]);
    }

    #[test]
    fn test_unrevealed_until_intersecting() {
        let page = FakePage::new();
        let config = RevealConfig::default();
        let el = page.add("section", None, &["scroll-reveal"]);

        let unobserve = handle_entries(&page, &config, [entry(el, false)]);
        assert!(unobserve.is_empty());
        assert_eq!(state(&page, &config, &el), RevealState::Unrevealed);

        let unobserve = handle_entries(&page, &config, [entry(el, true)]);
        assert_eq!(unobserve, vec![el]);
        assert_eq!(state(&page, &config, &el), RevealState::Revealed);
    }

    #[test]
    fn test_revealed_is_permanent() {
        let page = FakePage::new();
        let config = RevealConfig::default();
        let el = page.add("section", None, &["scroll-reveal"]);

        handle_entries(&page, &config, [entry(el, true)]);
        handle_entries(&page, &config, [entry(el, false)]);
        assert_eq!(state(&page, &config, &el), RevealState::Revealed);
        assert!(page.classes(el).contains(&"visible".to_string()));
    }

    #[test]
    fn test_batch_only_reveals_intersecting() {
        let page = FakePage::new();
        let config = RevealConfig::default();
        let a = page.add("section", None, &["scroll-reveal"]);
        let b = page.add("section", None, &["scroll-reveal"]);
        let c = page.add("section", None, &["scroll-reveal"]);

        let unobserve = handle_entries(
            &page,
            &config,
            [entry(a, true), entry(b, false), entry(c, true)],
        );
        assert_eq!(unobserve, vec![a, c]);
        assert_eq!(state(&page, &config, &b), RevealState::Unrevealed);
    }

    #[test]
    fn test_reveal_all_fallback() {
        let page = FakePage::new();
        let config = RevealConfig::default();
        let a = page.add("section", None, &["scroll-reveal"]);
        let b = page.add("section", None, &["scroll-reveal"]);

        assert_eq!(reveal_all(&page, &config).unwrap(), 2);
        assert_eq!(state(&page, &config, &a), RevealState::Revealed);
        assert_eq!(state(&page, &config, &b), RevealState::Revealed);
        // Nothing left to reveal
        assert_eq!(reveal_all(&page, &config).unwrap(), 0);
    }
}
