//! Browser-side wiring tests, run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use landing_effects::initialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("test page has a document")
}

fn make_element(class: &str, text: &str) -> HtmlElement {
    let doc = document();
    let el = doc
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    el.set_class_name(class);
    el.set_text_content(Some(text));
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn initialize_without_target_elements_is_harmless() {
    // None of the expected selectors match; every behavior must skip itself.
    initialize(&document());
}

#[wasm_bindgen_test]
async fn typewriter_replays_terminal_text() {
    let terminal = make_element("terminal-body", "$ hi");
    initialize(&document());

    // Cleared synchronously at init, then rebuilt one character per tick.
    TimeoutFuture::new(500).await;
    assert_eq!(terminal.text_content().unwrap_or_default(), "$ hi");
    terminal.remove();
}

#[wasm_bindgen_test]
async fn reveal_prepares_watched_elements() {
    let card = make_element("feature-card", "fast");
    initialize(&document());

    assert_eq!(card.style().get_property_value("opacity").unwrap(), "0");
    assert_eq!(
        card.style().get_property_value("transform").unwrap(),
        "translateY(20px)"
    );

    // The card is inside the viewport of the test page, so the observer
    // should reveal it shortly after.
    TimeoutFuture::new(200).await;
    assert_eq!(card.style().get_property_value("opacity").unwrap(), "1");
    assert_eq!(
        card.style().get_property_value("transform").unwrap(),
        "translateY(0)"
    );
    card.remove();
}

#[wasm_bindgen_test]
async fn anchor_click_never_navigates() {
    let doc = document();
    let target = make_element("scroll-target", "");
    target.set_id("section-one");

    let anchor = doc
        .create_element("a")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    anchor.set_attribute("href", "#section-one").unwrap();
    doc.body().unwrap().append_child(&anchor).unwrap();

    let dangling = doc
        .create_element("a")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    dangling.set_attribute("href", "#no-such-section").unwrap();
    doc.body().unwrap().append_child(&dangling).unwrap();

    initialize(&doc);
    anchor.click();
    dangling.click();
    TimeoutFuture::new(50).await;

    // Default navigation suppressed in both cases, resolvable or not.
    let hash = web_sys::window().unwrap().location().hash().unwrap();
    assert_eq!(hash, "");

    anchor.remove();
    dangling.remove();
    target.remove();
}

#[wasm_bindgen_test]
async fn copy_click_keeps_page_alive_and_caps_feedback() {
    let doc = document();
    let block = make_element("code-block", "echo hello▋");
    initialize(&doc);

    // Two rapid clicks: whether the clipboard write succeeds or is denied,
    // nothing may escape the handler and at most one confirmation may show.
    block.click();
    block.click();
    TimeoutFuture::new(300).await;

    let feedback = doc.query_selector_all(".copy-feedback").unwrap();
    assert!(feedback.length() <= 1);

    // And the confirmation never outlives its two-second slot.
    TimeoutFuture::new(2_200).await;
    let feedback = doc.query_selector_all(".copy-feedback").unwrap();
    assert_eq!(feedback.length(), 0);

    block.remove();
}
