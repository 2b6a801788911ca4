use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::config;

/// Character-at-a-time reveal over a fixed block of text.
///
/// The cursor only moves forward, one character per tick, and never past the
/// end: once `tick` returns `None` the machine is done and stays done. Kept
/// free of DOM and timer concerns so it can be driven directly in tests.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    cursor: usize,
}

impl Typewriter {
    /// Captures the full text up front. Characters, not bytes, so multi-byte
    /// glyphs reveal atomically.
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            cursor: 0,
        }
    }

    /// The next character to append, advancing the cursor.
    pub fn tick(&mut self) -> Option<char> {
        let ch = self.chars.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(ch)
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.chars.len()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Characters not yet revealed.
    pub fn remaining(&self) -> usize {
        self.chars.len() - self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Starts the terminal typewriter animation: captures the element's text,
/// clears it, then replays it one character every 50ms.
///
/// Skips silently (with a log line) when the terminal element is missing or
/// has no text, leaving the rest of the page untouched.
pub fn init_typewriter(document: &Document) {
    let Some(terminal) = document
        .query_selector(config::TERMINAL_BODY_SELECTOR)
        .ok()
        .flatten()
    else {
        warn!(
            "typewriter: no element matches {}, skipping",
            config::TERMINAL_BODY_SELECTOR
        );
        return;
    };

    let text = terminal.text_content().unwrap_or_default();
    if text.is_empty() {
        info!("typewriter: terminal body is empty, nothing to animate");
        return;
    }
    terminal.set_text_content(Some(""));

    let mut machine = Typewriter::new(&text);
    info!("typewriter: revealing {} characters", machine.len());

    // Self-rescheduling loop: only one timer is ever pending, and the loop
    // ends when the machine runs out of characters.
    spawn_local(async move {
        let mut revealed = String::with_capacity(text.len());
        while let Some(ch) = machine.tick() {
            revealed.push(ch);
            terminal.set_text_content(Some(&revealed));
            TimeoutFuture::new(config::TYPE_INTERVAL_MS).await;
        }
    });
}
