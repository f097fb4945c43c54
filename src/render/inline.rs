//! Character-level inline formatting.
//!
//! Inline markup is applied by an ordered pipeline of passes. Precedence is
//! part of the contract:
//!
//! 1. `` `code` `` → `<code>`
//! 2. `**bold**` → `<strong>` in the accent color
//! 3. `*italic*` → `<em>`
//! 4. `42.5%` → accent-colored `<span>`
//!
//! Each pass sees the output of the previous one, but markup produced by a
//! pass is parked behind an opaque placeholder until the pipeline ends. A
//! later pass therefore never matches inside generated tags or attribute
//! values, and inline-code content (parked whole) is never touched again.
//! Bold and italic park only their tags, so their inner text is still
//! formatted by the passes that follow.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`").expect("valid regex for inline code"));

static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid regex for bold text"));

static ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*]+)\*").expect("valid regex for italic text"));

static PERCENTAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+\.?[0-9]*%").expect("valid regex for percentages"));

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x00([0-9]+)\x00").expect("valid regex for placeholders"));

const CODE_STYLE: &str = "background: #f3f4f6; color: #e83e8c; padding: 2px 6px; border-radius: 4px; font-family: Menlo, Monaco, monospace; font-size: 0.9em;";
const ITALIC_STYLE: &str = "font-style: italic;";

/// One step of the inline pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlinePass {
    /// Backtick-delimited inline code
    Code,
    /// Double-asterisk bold
    Bold,
    /// Single-asterisk italic
    Italic,
    /// Numeric percentage highlight
    Percentage,
}

impl InlinePass {
    /// The passes in precedence order.
    pub const PIPELINE: [InlinePass; 4] = [
        InlinePass::Code,
        InlinePass::Bold,
        InlinePass::Italic,
        InlinePass::Percentage,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            InlinePass::Code => &INLINE_CODE,
            InlinePass::Bold => &BOLD,
            InlinePass::Italic => &ITALIC,
            InlinePass::Percentage => &PERCENTAGE,
        }
    }

    fn apply(self, text: &str, accent: &str, stash: &mut Stash) -> String {
        self.pattern()
            .replace_all(text, |caps: &Captures| match self {
                InlinePass::Code => stash.park(format!(
                    "<code style=\"{}\">{}</code>",
                    CODE_STYLE, &caps[1]
                )),
                InlinePass::Bold => format!(
                    "{}{}{}",
                    stash.park(format!(
                        "<strong style=\"color: {}; font-weight: 700;\">",
                        accent
                    )),
                    &caps[1],
                    stash.park("</strong>".to_string())
                ),
                InlinePass::Italic => format!(
                    "{}{}{}",
                    stash.park(format!("<em style=\"{}\">", ITALIC_STYLE)),
                    &caps[1],
                    stash.park("</em>".to_string())
                ),
                InlinePass::Percentage => stash.park(format!(
                    "<span style=\"color: {}; font-weight: 600;\">{}</span>",
                    accent, &caps[0]
                )),
            })
            .into_owned()
    }
}

/// Markup fragments already emitted by earlier passes.
#[derive(Debug, Default)]
struct Stash {
    fragments: Vec<String>,
}

impl Stash {
    fn park(&mut self, markup: String) -> String {
        let token = format!("\u{0}{}\u{0}", self.fragments.len());
        self.fragments.push(markup);
        token
    }

    fn restore(&self, text: &str) -> String {
        PLACEHOLDER
            .replace_all(text, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.fragments.get(index))
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

/// Inline formatter bound to an accent color.
#[derive(Debug, Clone)]
pub struct InlineFormatter {
    accent: String,
}

impl InlineFormatter {
    /// Create a formatter using the given accent color.
    pub fn new(accent: impl Into<String>) -> Self {
        Self {
            accent: accent.into(),
        }
    }

    /// Accent color used for bold text and percentages.
    pub fn accent(&self) -> &str {
        &self.accent
    }

    /// Apply the full pipeline to a text span.
    pub fn format(&self, text: &str) -> String {
        self.format_with(text, &InlinePass::PIPELINE)
    }

    /// Apply a subset of passes, in the order given.
    ///
    /// NUL characters in the input are replaced with U+FFFD so they can never
    /// be read back as stash placeholders.
    pub fn format_with(&self, text: &str, passes: &[InlinePass]) -> String {
        let mut stash = Stash::default();
        let mut working = text.replace('\u{0}', "\u{fffd}");
        for pass in passes {
            working = pass.apply(&working, &self.accent, &mut stash);
        }
        stash.restore(&working)
    }
}

/// Format a text span with the full inline pipeline.
pub fn format_inline(text: &str, accent: &str) -> String {
    InlineFormatter::new(accent).format(text)
}
