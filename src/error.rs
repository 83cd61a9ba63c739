//! Error taxonomy for page behaviors.
//!
//! Every variant is recoverable: the page must stay usable when a behavior
//! cannot attach, so callers log these and carry on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    /// A required element is absent from the page
    #[error("element not found: {what}")]
    ElementNotFound { what: String },

    #[error("no global window (not running in a browser page)")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    /// localStorage missing or access denied (privacy mode, sandboxed iframe)
    #[error("preference storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A DOM call threw; carries the stringified exception
    #[error("DOM call failed: {0}")]
    Js(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl SiteError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::ElementNotFound { what: what.into() }
    }

    /// True for the "required element absent" class of failures, which are
    /// expected on pages that omit a section and only logged at debug.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ElementNotFound { .. })
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{:?}", value))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<SiteError> for wasm_bindgen::JsValue {
    fn from(err: SiteError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
