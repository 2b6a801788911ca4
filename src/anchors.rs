use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::config;

/// Returns the selector for a same-document hash href, or `None` when the
/// href has no usable fragment (a bare `#`, or no fragment at all).
fn fragment_selector(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        None
    } else {
        Some(href)
    }
}

/// Binds a click handler to every same-page hash link that suppresses the
/// default jump and smooth-scrolls to the target instead.
///
/// A fragment that resolves to nothing (or is not a valid selector) is a
/// silent no-op; the click is still consumed but nothing scrolls.
pub fn init_anchor_scroll(document: &Document) {
    let Ok(anchors) = document.query_selector_all(config::ANCHOR_SELECTOR) else {
        return;
    };

    for index in 0..anchors.length() {
        let Some(node) = anchors.item(index) else {
            continue;
        };
        let Ok(anchor) = node.dyn_into::<Element>() else {
            continue;
        };

        let href = anchor.get_attribute("href");
        let document = document.clone();
        let callback = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            event.prevent_default();
            let Some(selector) = href.as_deref().and_then(fragment_selector) else {
                return;
            };
            if let Some(target) = document.query_selector(selector).ok().flatten() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
        let _ = anchor
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
        // Listener lives for the page lifetime.
        callback.forget();
    }

    info!("anchors: smooth scroll bound to {} links", anchors.length());
}
