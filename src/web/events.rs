//! Event registration.
//!
//! Handlers are registered once and stay bound for the page lifetime, so
//! every closure is leaked with `Closure::forget` after registration.

use std::rc::Rc;

use js_sys::Array;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::WebSite;
use crate::behaviors::Intersection;
use crate::error::SiteError;

/// Bind the theme toggle button. Returns false if the page has none.
pub fn bind_theme_toggle(site: &Rc<WebSite>) -> bool {
    let Some(button) = site.theme_button() else {
        return false;
    };

    let handler_site = Rc::clone(site);
    let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        handler_site.toggle_theme();
    });

    match button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        Ok(()) => {
            on_click.forget();
            true
        }
        Err(e) => {
            warn!("theme toggle: {}", SiteError::from(e));
            false
        }
    }
}

/// Bind smooth scrolling on every same-page hash link. Returns the number of
/// links bound.
pub fn bind_anchors(site: &Rc<WebSite>) -> usize {
    let mut bound = 0;
    for anchor in site.anchors() {
        let handler_site = Rc::clone(site);
        let target = anchor.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if handler_site.on_anchor_click(&target).prevents_default() {
                event.prevent_default();
            }
        });

        match anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
            Ok(()) => {
                on_click.forget();
                bound += 1;
            }
            Err(e) => warn!("anchors: {}", SiteError::from(e)),
        }
    }
    debug!("Anchors: bound {} link(s)", bound);
    bound
}

/// Observe every pending scroll-reveal element. When the browser has no
/// observer, or refuses to build one from the configured options, all of them
/// are revealed immediately. Returns the number of elements handled.
pub fn observe_reveals(site: &Rc<WebSite>) -> usize {
    let targets = site.reveal_targets();
    if targets.is_empty() {
        return 0;
    }

    if !site.host().supports_intersection_observer() {
        let revealed = site.reveal_all();
        info!("IntersectionObserver unavailable; revealed {} element(s)", revealed);
        return revealed;
    }

    let handler_site = Rc::clone(site);
    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| Intersection {
                    target: entry.target(),
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                });
            for revealed in handler_site.on_intersections(entries) {
                observer.unobserve(&revealed);
            }
        },
    );

    let reveal = &site.config().reveal;
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(reveal.threshold));
    options.set_root_margin(&reveal.root_margin);

    let observer =
        match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                let revealed = site.reveal_all();
                warn!(
                    "reveal: observer rejected options ({}); revealed {} element(s)",
                    SiteError::from(e),
                    revealed
                );
                return revealed;
            }
        };
    for target in &targets {
        observer.observe(target);
    }
    on_intersect.forget();

    debug!("Reveal: observing {} element(s)", targets.len());
    targets.len()
}

/// Install `window.iosAlert` so inline `onclick="iosAlert()"` markup works.
pub fn expose_alert(site: &Rc<WebSite>) -> Result<(), SiteError> {
    let handler_site = Rc::clone(site);
    let on_call = Closure::<dyn Fn()>::new(move || handler_site.show_coming_soon());

    js_sys::Reflect::set(
        site.host().window(),
        &JsValue::from_str("iosAlert"),
        on_call.as_ref(),
    )?;
    on_call.forget();
    Ok(())
}
