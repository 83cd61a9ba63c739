//! Configuration management
//!
//! All selectors, ids and class names the behaviors rely on live here so the
//! markup contract is stated in one place. A page may override any of them
//! with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="site-behaviors-config">
//!   { "theme": { "storage_key": "site-theme" }, "log_level": "site_behaviors=debug" }
//! </script>
//! ```

use serde::Deserialize;

use crate::error::SiteError;

/// Id of the inline JSON config element
pub const CONFIG_ELEMENT_ID: &str = "site-behaviors-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_year_element_id")]
    pub year_element_id: String,

    #[serde(default)]
    pub reveal: RevealConfig,

    #[serde(default)]
    pub anchors: AnchorConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default = "default_alert_message")]
    pub alert_message: String,

    /// tracing EnvFilter directive used by the console subscriber
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            year_element_id: default_year_element_id(),
            reveal: RevealConfig::default(),
            anchors: AnchorConfig::default(),
            theme: ThemeConfig::default(),
            alert_message: default_alert_message(),
            log_level: default_log_level(),
        }
    }
}

fn default_year_element_id() -> String {
    "year".to_string()
}

fn default_alert_message() -> String {
    "iOS Version Coming Soon! Stay polished ✨".to_string()
}

fn default_log_level() -> String {
    "site_behaviors=info".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RevealConfig {
    #[serde(default = "default_reveal_selector")]
    pub selector: String,

    #[serde(default = "default_visible_class")]
    pub visible_class: String,

    /// Fraction of the element that must be visible (0.0..=1.0)
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// CSS margin applied to the viewport; the default fires once the
    /// element is 50px above the bottom edge
    #[serde(default = "default_root_margin")]
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: default_reveal_selector(),
            visible_class: default_visible_class(),
            threshold: default_threshold(),
            root_margin: default_root_margin(),
        }
    }
}

fn default_reveal_selector() -> String {
    ".scroll-reveal".to_string()
}

fn default_visible_class() -> String {
    "visible".to_string()
}

fn default_threshold() -> f64 {
    0.1
}

fn default_root_margin() -> String {
    "0px 0px -50px 0px".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnchorConfig {
    #[serde(default = "default_anchor_selector")]
    pub selector: String,

    #[serde(default)]
    pub behavior: ScrollBehavior,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            selector: default_anchor_selector(),
            behavior: ScrollBehavior::default(),
        }
    }
}

fn default_anchor_selector() -> String {
    r##"a[href^="#"]"##.to_string()
}

/// How the viewport moves to an anchor target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
    Auto,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_button_id")]
    pub button_id: String,

    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Class set on <body> while dark mode is active
    #[serde(default = "default_dark_class")]
    pub dark_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            button_id: default_button_id(),
            storage_key: default_storage_key(),
            dark_class: default_dark_class(),
        }
    }
}

fn default_button_id() -> String {
    "theme-toggle".to_string()
}

fn default_storage_key() -> String {
    "theme".to_string()
}

fn default_dark_class() -> String {
    "dark-mode".to_string()
}

impl SiteConfig {
    /// Parse an inline JSON config. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the optional inline config text. Absent or blank text
    /// yields the defaults.
    pub fn load(raw: Option<&str>) -> Result<Self, SiteError> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(Self::default()),
            Some(raw) => Self::from_json(raw),
        }
    }

    pub fn validate(&self) -> Result<(), SiteError> {
        let threshold = self.reveal.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(SiteError::InvalidConfig(format!(
                "reveal.threshold must be within 0.0..=1.0, got {}",
                threshold
            )));
        }

        if !is_valid_root_margin(&self.reveal.root_margin) {
            return Err(SiteError::InvalidConfig(format!(
                "reveal.root_margin must be 1-4 px or % lengths, got {:?}",
                self.reveal.root_margin
            )));
        }

        for (field, value) in [
            ("year_element_id", &self.year_element_id),
            ("reveal.selector", &self.reveal.selector),
            ("reveal.visible_class", &self.reveal.visible_class),
            ("anchors.selector", &self.anchors.selector),
            ("theme.button_id", &self.theme.button_id),
            ("theme.storage_key", &self.theme.storage_key),
            ("theme.dark_class", &self.theme.dark_class),
        ] {
            if value.trim().is_empty() {
                return Err(SiteError::InvalidConfig(format!("{} must not be empty", field)));
            }
        }

        Ok(())
    }
}

/// IntersectionObserver rootMargin syntax: one to four lengths, each `0` or a
/// number with a `px` or `%` unit.
fn is_valid_root_margin(margin: &str) -> bool {
    let lengths: Vec<&str> = margin.split_whitespace().collect();
    (1..=4).contains(&lengths.len()) && lengths.iter().all(|len| is_margin_length(len))
}

fn is_margin_length(len: &str) -> bool {
    if len == "0" {
        return true;
    }
    let number = len
        .strip_suffix("px")
        .or_else(|| len.strip_suffix('%'))
        .unwrap_or("");
    // Plain decimal only; rejects "inf", "NaN" and exponents the browser refuses
    !number.is_empty()
        && number
            .trim_start_matches(['+', '-'])
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.')
        && number.parse::<f64>().is_ok_and(f64::is_finite)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_markup_contract() {
        let config = SiteConfig::default();
        assert_eq!(config.year_element_id, "year");
        assert_eq!(config.reveal.selector, ".scroll-reveal");
        assert_eq!(config.reveal.visible_class, "visible");
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.anchors.selector, r##"a[href^="#"]"##);
        assert_eq!(config.anchors.behavior, ScrollBehavior::Smooth);
        assert_eq!(config.theme.button_id, "theme-toggle");
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.theme.dark_class, "dark-mode");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_merges_with_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "theme": { "storage_key": "site-theme" }, "anchors": { "behavior": "instant" } }"#,
        )
        .unwrap();
        assert_eq!(config.theme.storage_key, "site-theme");
        assert_eq!(config.theme.button_id, "theme-toggle");
        assert_eq!(config.anchors.behavior, ScrollBehavior::Instant);
        assert_eq!(config.reveal, RevealConfig::default());
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let err = SiteConfig::from_json(r#"{ "reveal": { "threshold": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_root_margin_rejected() {
        for margin in ["banana", "", "10", "5em", "1px 2px 3px 4px 5px", "px", "--5px", "infpx"] {
            let raw = format!(r#"{{ "reveal": {{ "root_margin": {:?} }} }}"#, margin);
            let err = SiteConfig::from_json(&raw).unwrap_err();
            assert!(
                matches!(err, SiteError::InvalidConfig(_)),
                "{:?} should be rejected",
                margin
            );
        }
    }

    #[test]
    fn test_root_margin_forms_accepted() {
        for margin in ["0", "0px", "-50px", "10%", "0px 0px -50px 0px", "5px 10%", "1.5px 0 -2.5% +3px"] {
            let raw = format!(r#"{{ "reveal": {{ "root_margin": {:?} }} }}"#, margin);
            let config = SiteConfig::from_json(&raw).unwrap();
            assert_eq!(config.reveal.root_margin, margin);
        }
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let err = SiteConfig::from_json(r#"{ "year_element_id": "  " }"#).unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig(_)));
    }

    #[test]
    fn test_load_absent_or_blank_uses_defaults() {
        assert_eq!(SiteConfig::load(None).unwrap(), SiteConfig::default());
        assert_eq!(SiteConfig::load(Some("  \n ")).unwrap(), SiteConfig::default());

        let loaded = SiteConfig::load(Some(r#"{ "alert_message": "Soon" }"#)).unwrap();
        assert_eq!(loaded.alert_message, "Soon");
    }

    #[test]
    fn test_load_malformed_json() {
        let err = SiteConfig::load(Some("{ not json")).unwrap_err();
        assert!(matches!(err, SiteError::ConfigParse(_)));
    }
}
