//! Browser entry point.
//!
//! `start` runs automatically when the wasm module is instantiated. It builds
//! the single `Site` for the page, runs the load-time steps, and registers
//! the event handlers.

use std::cell::OnceCell;
use std::rc::Rc;

use tracing::{info, warn};
use wasm_bindgen::prelude::*;

use crate::config::SiteConfig;
use crate::dom::{MemoryStore, PreferenceStore};
use crate::error::SiteError;
use crate::logging;
use crate::site::Site;

pub mod events;
pub mod host;

pub use host::{LocalStorage, WebHost};

pub type WebSite = Site<WebHost, Box<dyn PreferenceStore>>;

thread_local! {
    static SITE: OnceCell<Rc<WebSite>> = const { OnceCell::new() };
}

/// Attach all page behaviors. Runs once per page; later calls are no-ops.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "panic-hook")]
    console_error_panic_hook::set_once();

    if SITE.with(|cell| cell.get().is_some()) {
        return Ok(());
    }

    let host = WebHost::new()?;
    let (config, config_error) = match SiteConfig::load(host.inline_config().as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };
    logging::init(&config.log_level);
    if let Some(e) = config_error {
        warn!("Ignoring inline config: {}", e);
    }

    let store: Box<dyn PreferenceStore> = match LocalStorage::open(host.window()) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            warn!("{}; theme preference will last for this page only", e);
            Box::new(MemoryStore::new())
        }
    };

    let site = Rc::new(Site::new(host, store, config));
    attach(&site);
    SITE.with(|cell| {
        let _ = cell.set(site);
    });
    Ok(())
}

fn attach(site: &Rc<WebSite>) {
    site.boot();

    let revealing = events::observe_reveals(site);
    let anchors = events::bind_anchors(site);
    let toggle = events::bind_theme_toggle(site);
    if let Err(e) = events::expose_alert(site) {
        warn!("alert: {}", e);
    }

    info!(
        "Attached: {} reveal element(s), {} anchor(s), theme toggle {}",
        revealing,
        anchors,
        if toggle { "bound" } else { "absent" }
    );
}

/// Show the "coming soon" message for apps that are not released yet.
#[wasm_bindgen(js_name = "iosAlert")]
pub fn ios_alert() {
    let handled = SITE.with(|cell| match cell.get() {
        Some(site) => {
            site.show_coming_soon();
            true
        }
        None => false,
    });
    if handled {
        return;
    }

    // Called before start() finished: use the default message
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(&SiteConfig::default().alert_message) {
            warn!("alert: {}", SiteError::from(e));
        }
    }
}

/// Module version information.
#[must_use]
#[wasm_bindgen(js_name = "version")]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
