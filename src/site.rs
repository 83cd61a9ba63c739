//! Site controller.
//!
//! `Site` owns the page handle, the preference store and the config. It is
//! constructed once at startup; event handlers share it and call back into
//! it. Every failure is logged here and never escapes to the page.

use tracing::{debug, info, warn};

use crate::behaviors::{alert, anchors, footer, reveal, theme};
use crate::behaviors::{ClickOutcome, Intersection, Theme};
use crate::config::SiteConfig;
use crate::dom::{Host, PreferenceStore};
use crate::error::SiteError;

/// What the load-time steps did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootReport {
    /// Year written to the footer, if the element exists
    pub footer_year: Option<i32>,
    /// Theme applied from the stored preference
    pub theme: Theme,
}

pub struct Site<H: Host, S: PreferenceStore> {
    host: H,
    store: S,
    config: SiteConfig,
}

impl<H: Host, S: PreferenceStore> Site<H, S> {
    pub fn new(host: H, store: S, config: SiteConfig) -> Self {
        Self {
            host,
            store,
            config,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Run the load-time steps: footer year and stored theme.
    pub fn boot(&self) -> BootReport {
        let footer_year = self.write_footer_year();
        let theme = self.init_theme();
        info!(
            "Page behaviors ready (footer year: {:?}, theme: {})",
            footer_year, theme
        );
        BootReport { footer_year, theme }
    }

    pub fn write_footer_year(&self) -> Option<i32> {
        let year = footer::current_year();
        let result = footer::write_year(&self.host, &self.config.year_element_id, year);
        log_failure("footer year", result).map(|()| year)
    }

    pub fn init_theme(&self) -> Theme {
        let result = theme::apply_stored(&self.host, &self.store, &self.config.theme);
        log_failure("theme init", result).unwrap_or_default()
    }

    pub fn toggle_theme(&self) -> Option<Theme> {
        let result = theme::toggle(&self.host, &self.store, &self.config.theme);
        log_failure("theme toggle", result)
    }

    pub fn current_theme(&self) -> Theme {
        theme::current_theme(&self.host, &self.config.theme)
    }

    /// The toggle button, if the page has one
    pub fn theme_button(&self) -> Option<H::Element> {
        let found = self.host.element_by_id(&self.config.theme.button_id);
        if found.is_none() {
            debug!(
                "theme toggle: {}",
                SiteError::not_found(format!("#{}", self.config.theme.button_id))
            );
        }
        found
    }

    pub fn reveal_targets(&self) -> Vec<H::Element> {
        log_failure("reveal", reveal::targets(&self.host, &self.config.reveal)).unwrap_or_default()
    }

    /// Apply observer entries; returns the elements to unobserve
    pub fn on_intersections<I>(&self, entries: I) -> Vec<H::Element>
    where
        I: IntoIterator<Item = Intersection<H::Element>>,
    {
        reveal::handle_entries(&self.host, &self.config.reveal, entries)
    }

    pub fn reveal_all(&self) -> usize {
        let result = reveal::reveal_all(&self.host, &self.config.reveal);
        log_failure("reveal fallback", result).unwrap_or_default()
    }

    pub fn anchors(&self) -> Vec<H::Element> {
        log_failure("anchors", self.host.query_all(&self.config.anchors.selector))
            .unwrap_or_default()
    }

    /// Resolve a click on `anchor`; href is read at click time
    pub fn on_anchor_click(&self, anchor: &H::Element) -> ClickOutcome {
        let href = self.host.attribute(anchor, "href");
        anchors::handle_click(&self.host, &self.config.anchors, href.as_deref())
    }

    pub fn show_coming_soon(&self) {
        let result = alert::coming_soon(&self.host, &self.config.alert_message);
        log_failure("alert", result);
    }
}

/// Missing elements are expected on pages that omit a section; anything else
/// is worth a warning.
fn log_failure<T>(step: &str, result: Result<T, SiteError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) if e.is_not_found() => {
            debug!("{}: {}", step, e);
            None
        }
        Err(e) => {
            warn!("{}: {}", step, e);
            None
        }
    }
}
