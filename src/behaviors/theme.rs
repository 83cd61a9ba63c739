//! Light/dark theme toggle with persisted preference.

use std::fmt;

use tracing::{info, warn};

use crate::config::ThemeConfig;
use crate::dom::{Host, PreferenceStore};
use crate::error::SiteError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only an exact `"dark"` selects dark mode; anything else, including no
    /// stored value, is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read the persisted preference. Storage errors count as "no preference".
pub fn stored_theme<S: PreferenceStore>(store: &S, config: &ThemeConfig) -> Theme {
    match store.get(&config.storage_key) {
        Ok(value) => Theme::from_stored(value.as_deref()),
        Err(e) => {
            warn!("Theme: could not read preference: {}", e);
            Theme::Light
        }
    }
}

/// Theme currently shown, derived from the flag on <body>
pub fn current_theme<H: Host>(host: &H, config: &ThemeConfig) -> Theme {
    match host.body() {
        Some(body) if host.has_class(&body, &config.dark_class) => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Page-load step: apply dark mode if that is the stored preference.
pub fn apply_stored<H, S>(host: &H, store: &S, config: &ThemeConfig) -> Result<Theme, SiteError>
where
    H: Host,
    S: PreferenceStore,
{
    let theme = stored_theme(store, config);
    if theme == Theme::Dark {
        let body = host.body().ok_or_else(|| SiteError::not_found("<body>"))?;
        host.add_class(&body, &config.dark_class)?;
    }
    Ok(theme)
}

/// Flip the theme flag and persist the resulting theme.
///
/// A failed write is logged; the visual change still stands.
pub fn toggle<H, S>(host: &H, store: &S, config: &ThemeConfig) -> Result<Theme, SiteError>
where
    H: Host,
    S: PreferenceStore,
{
    let body = host.body().ok_or_else(|| SiteError::not_found("<body>"))?;
    let theme = if host.toggle_class(&body, &config.dark_class)? {
        Theme::Dark
    } else {
        Theme::Light
    };

    if let Err(e) = store.set(&config.storage_key, theme.as_str()) {
        warn!("Theme: could not persist {}: {}", theme, e);
    }
    info!("Theme switched to {}", theme);
    Ok(theme)
}
