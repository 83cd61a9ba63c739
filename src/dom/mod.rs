//! Host environment seam.
//!
//! Behaviors talk to the page only through [`Host`] and to durable
//! preferences only through [`PreferenceStore`]. The browser implementation
//! lives in `crate::web`; unit tests run against an in-memory page.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::ScrollBehavior;
use crate::error::SiteError;

#[cfg(test)]
pub(crate) mod fake;

/// The page the behaviors attach to.
///
/// Lookups return `Option` (or an empty list); absence is a normal outcome
/// the caller decides how to treat.
pub trait Host {
    /// Handle to a DOM element
    type Element: Clone;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements matching a CSS selector, in document order
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>, SiteError>;

    fn body(&self) -> Option<Self::Element>;

    fn set_text(&self, element: &Self::Element, text: &str);

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    fn add_class(&self, element: &Self::Element, class: &str) -> Result<(), SiteError>;

    /// Flip a class, returning whether it is present afterwards
    fn toggle_class(&self, element: &Self::Element, class: &str) -> Result<bool, SiteError>;

    /// Start scrolling the element into view. Fire-and-forget.
    fn scroll_into_view(&self, element: &Self::Element, behavior: ScrollBehavior);

    /// Show a blocking informational message
    fn alert(&self, message: &str) -> Result<(), SiteError>;
}

/// Durable string key-value storage scoped to the page origin.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError>;
    fn set(&self, key: &str, value: &str) -> Result<(), SiteError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        (**self).set(key, value)
    }
}

/// Session-only store used when localStorage is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store (e.g. to simulate a returning visitor)
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
