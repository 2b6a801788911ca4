use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::config;

const FEEDBACK_CLASS: &str = "copy-feedback";

/// The text that actually lands on the clipboard: the rendered snippet with
/// every decorative cursor glyph stripped.
pub fn clipboard_payload(text: &str) -> String {
    text.replace(config::CURSOR_GLYPH, "")
}

/// Makes the code block copy its text to the clipboard on click, flashing a
/// "Copied to clipboard!" confirmation under the block for two seconds.
///
/// At most one confirmation is visible at a time: a new click removes any
/// pending one before reading the block's text. A rejected clipboard write
/// (permission denied, insecure context) is logged and swallowed.
pub fn init_copy_to_clipboard(document: &Document) {
    let Some(code_block) = document
        .query_selector(config::CODE_BLOCK_SELECTOR)
        .ok()
        .flatten()
    else {
        warn!(
            "clipboard: no element matches {}, skipping",
            config::CODE_BLOCK_SELECTOR
        );
        return;
    };

    let block = code_block.clone();
    let document = document.clone();
    let callback = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
        // Drop any confirmation still showing so it does not leak into the
        // copied text. show_feedback removes again at append time, since
        // overlapping clicks can have several writes in flight.
        remove_feedback(&block);

        let text = clipboard_payload(&block.text_content().unwrap_or_default());
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();

        let block = block.clone();
        let document = document.clone();
        spawn_local(async move {
            match JsFuture::from(clipboard.write_text(&text)).await {
                Ok(_) => show_feedback(&document, &block).await,
                Err(err) => warn!("clipboard: write failed: {:?}", err),
            }
        });
    });
    let _ = code_block
        .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
    callback.forget();

    info!("clipboard: copy handler bound");
}

fn remove_feedback(block: &Element) {
    if let Ok(Some(prev)) = block.query_selector(&format!(".{FEEDBACK_CLASS}")) {
        prev.remove();
    }
}

async fn show_feedback(document: &Document, block: &Element) {
    let Ok(feedback) = document.create_element("div") else {
        return;
    };
    feedback.set_class_name(FEEDBACK_CLASS);
    feedback.set_text_content(Some("Copied to clipboard!"));
    if let Some(el) = feedback.dyn_ref::<HtmlElement>() {
        let style = el.style();
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("bottom", "-30px");
        let _ = style.set_property("left", "50%");
        let _ = style.set_property("transform", "translateX(-50%)");
        let _ = style.set_property("color", "#10b981");
    }
    // One confirmation slot: a write that resolves while an earlier
    // confirmation is still showing replaces it.
    remove_feedback(block);
    let _ = block.append_child(&feedback);

    TimeoutFuture::new(config::FEEDBACK_VISIBLE_MS).await;
    // No-op if a later click already replaced this one.
    feedback.remove();
}
