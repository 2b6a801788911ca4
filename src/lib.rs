//! Cosmetic interactivity for the static landing page: smooth-scrolling
//! anchor links, a typewriter reveal for the terminal mockup, fade-in on
//! scroll for the feature cards, and click-to-copy for the install snippet.
//!
//! The four behaviors share no state. Each one validates its own markup
//! preconditions and skips itself when they are not met, so a missing
//! element never takes the rest of the page down with it.

use log::{info, Level};
use wasm_bindgen::prelude::*;
use web_sys::Document;

mod anchors;
mod clipboard;
mod config;
mod reveal;
mod typewriter;

pub use clipboard::clipboard_payload;
pub use typewriter::Typewriter;

/// Wires every page behavior onto `document`. Called once when the page has
/// loaded; safe on any document, including one missing all target elements.
pub fn initialize(document: &Document) {
    anchors::init_anchor_scroll(document);
    typewriter::init_typewriter(document);
    reveal::init_reveal_on_scroll(document);
    clipboard::init_copy_to_clipboard(document);
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("initializing page effects");
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        initialize(&document);
    }
}
