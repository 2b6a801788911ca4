//! Page contract: the selectors and timings the effects are wired to.
//! The markup itself is owned by the static page, not by this crate.

/// Element whose text content is replayed by the typewriter.
pub const TERMINAL_BODY_SELECTOR: &str = ".terminal-body";

/// Elements faded in on first viewport entry.
pub const REVEAL_SELECTOR: &str = ".feature-card, .terminal-window";

/// Code snippet that copies itself to the clipboard on click.
pub const CODE_BLOCK_SELECTOR: &str = ".code-block";

/// Same-page hash links that get smooth scrolling.
pub const ANCHOR_SELECTOR: &str = "a[href^='#']";

/// Delay between typewriter characters.
pub const TYPE_INTERVAL_MS: u32 = 50;

/// How long the "copied" confirmation stays visible.
pub const FEEDBACK_VISIBLE_MS: u32 = 2_000;

/// Decorative blinking-cursor glyph rendered inside the code block.
/// Stripped before the text reaches the clipboard.
pub const CURSOR_GLYPH: char = '▋';
