//! `Host` and `PreferenceStore` over the real browser page.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollIntoViewOptions, Storage, Window};

use crate::config::{ScrollBehavior, CONFIG_ELEMENT_ID};
use crate::dom::{Host, PreferenceStore};
use crate::error::SiteError;

pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    pub fn new() -> Result<Self, SiteError> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let document = window.document().ok_or(SiteError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Text of the inline JSON config block, if the page has one
    pub fn inline_config(&self) -> Option<String> {
        self.document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
    }

    /// Whether the browser provides `IntersectionObserver`
    pub fn supports_intersection_observer(&self) -> bool {
        js_sys::Reflect::has(&self.window, &"IntersectionObserver".into()).unwrap_or(false)
    }
}

fn to_web_behavior(behavior: ScrollBehavior) -> web_sys::ScrollBehavior {
    match behavior {
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
    }
}

impl Host for WebHost {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>, SiteError> {
        let nodes = self.document.query_selector_all(selector)?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&self, element: &Element, class: &str) -> Result<(), SiteError> {
        element.class_list().add_1(class)?;
        Ok(())
    }

    fn toggle_class(&self, element: &Element, class: &str) -> Result<bool, SiteError> {
        Ok(element.class_list().toggle(class)?)
    }

    fn scroll_into_view(&self, element: &Element, behavior: ScrollBehavior) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(to_web_behavior(behavior));
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn alert(&self, message: &str) -> Result<(), SiteError> {
        self.window.alert_with_message(message)?;
        Ok(())
    }
}

/// `window.localStorage`
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open(window: &Window) -> Result<Self, SiteError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(SiteError::StorageUnavailable(
                "localStorage not supported".to_string(),
            )),
            // Thrown when storage is blocked (e.g. third-party iframe)
            Err(e) => Err(SiteError::StorageUnavailable(format!("{:?}", e))),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        self.storage
            .get_item(key)
            .map_err(|e| SiteError::StorageUnavailable(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| SiteError::StorageUnavailable(format!("{:?}", e)))
    }
}
