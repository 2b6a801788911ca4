use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry};

use crate::config;

/// Per-element reveal state. The reveal is one-shot: once an element has
/// been revealed it stays revealed, and further intersection changes in
/// either direction are ignored. Kept free of DOM concerns so the policy
/// can be driven directly in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPolicy {
    #[default]
    Hidden,
    Revealed,
}

impl RevealPolicy {
    /// Feeds one intersection change through the policy. Returns whether
    /// the visible style should be applied now; true exactly once, on the
    /// first entry into the viewport.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> bool {
        match (*self, is_intersecting) {
            (RevealPolicy::Hidden, true) => {
                *self = RevealPolicy::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        *self == RevealPolicy::Revealed
    }
}

/// Puts an element into its pre-reveal state: transparent, nudged down, with
/// the transition that the reveal will animate through.
pub fn prepare(el: &HtmlElement) {
    let style = el.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transform", "translateY(20px)");
    let _ = style.set_property("transition", "all 0.6s ease-out");
}

/// Settles an element into its visible state. Idempotent: applying it to an
/// already-revealed element changes nothing.
pub fn reveal(el: &HtmlElement) {
    let style = el.style();
    let _ = style.set_property("opacity", "1");
    let _ = style.set_property("transform", "translateY(0)");
}

/// Watches the feature cards and terminal window and fades each one in the
/// first time it enters the viewport.
///
/// Each watched element carries its own [`RevealPolicy`]; once the policy
/// fires, the element is also unobserved, so leaving and re-entering the
/// viewport never replays the animation and never hides the element again.
pub fn init_reveal_on_scroll(document: &Document) {
    let Ok(targets) = document.query_selector_all(config::REVEAL_SELECTOR) else {
        return;
    };
    if targets.length() == 0 {
        info!("reveal: no elements match {}", config::REVEAL_SELECTOR);
        return;
    }

    let watched: Rc<RefCell<Vec<(Element, RevealPolicy)>>> = Rc::new(RefCell::new(Vec::new()));

    let states = watched.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let mut states = states.borrow_mut();
                let Some((_, policy)) = states.iter_mut().find(|(el, _)| *el == target) else {
                    continue;
                };
                if policy.on_intersection(entry.is_intersecting()) {
                    if let Some(el) = target.dyn_ref::<HtmlElement>() {
                        reveal(el);
                    }
                    observer.unobserve(&target);
                }
            }
        },
    );

    let observer = match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(_) => {
            warn!("reveal: intersection observer unavailable, skipping animations");
            return;
        }
    };
    // Observer and callback stay alive for the page lifetime.
    callback.forget();

    for index in 0..targets.length() {
        let Some(node) = targets.item(index) else {
            continue;
        };
        let Ok(el) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        prepare(&el);
        observer.observe(&el);
        watched
            .borrow_mut()
            .push((el.into(), RevealPolicy::default()));
    }

    info!("reveal: watching {} elements", watched.borrow().len());
}
