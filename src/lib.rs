//! # mdinline
//!
//! Markdown to inline-styled HTML for rich-text editors that strip
//! stylesheets.
//!
//! Text written in a constrained Markdown dialect is normalized for
//! Chinese typography, split into blocks, and rendered into a single
//! `<section>` whose elements carry every visual property in their
//! `style` attribute. The result can be pasted into editors that accept
//! raw HTML but drop `<style>` and `class`.
//!
//! ## Quick Start
//!
//! ```
//! use mdinline::{format_text, StyleConfig};
//!
//! let style = StyleConfig::new("#333333", "#07c160", 15.0, 1.75, 0.5, 16.0);
//! let html = format_text("# Title\n\nHello **world** 42%", &style);
//!
//! assert!(html.starts_with("<section style="));
//! assert!(html.contains(">Title</h1>"));
//! ```
//!
//! ## Pipeline
//!
//! - **normalize**: quotes, ellipses, dashes and CJK/Latin spacing
//! - **parser**: line-oriented block classification with code and table modes
//! - **render**: list grouping, inline formatting and HTML emission

pub mod error;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod render;

mod syntax;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Block, Document, ListKind, StyleConfig, Table};
pub use normalize::{PunctuationNormalizer, PunctuationOptions};
pub use parser::BlockParser;
pub use render::{JsonFormat, RenderOptions, RenderResult, RenderStats};

/// Format Markdown text into inline-styled HTML.
///
/// Runs the standard punctuation passes, parses the result into blocks and
/// renders them. This never fails: unrecognized syntax falls through as
/// plain paragraphs.
pub fn format_text(text: &str, style: &StyleConfig) -> String {
    let doc = parse_text(text);
    render::to_html(&doc, style)
}

/// Normalize and parse Markdown text into a document.
///
/// # Example
///
/// ```
/// use mdinline::{parse_text, Block};
///
/// let doc = parse_text("Intro\n\n---\n\nOutro");
/// assert_eq!(doc.len(), 3);
/// assert_eq!(doc.blocks[1], Block::HorizontalRule);
/// ```
pub fn parse_text(text: &str) -> Document {
    parser::parse(&normalize::normalize(text))
}

/// Builder for configuring the full formatting pipeline.
///
/// # Example
///
/// ```
/// use mdinline::{MdInline, PunctuationOptions, StyleConfig};
///
/// let style = StyleConfig::new("#333333", "#07c160", 15.0, 1.75, 0.5, 16.0);
/// let result = MdInline::new(style)
///     .with_punctuation(PunctuationOptions::standard().with_unicode_nfc(true))
///     .with_stats(true)
///     .format("- one\n- two");
///
/// assert_eq!(result.stats.list_count, 1);
/// assert_eq!(result.stats.list_item_count, 2);
/// ```
#[derive(Debug, Clone)]
pub struct MdInline {
    style: StyleConfig,
    options: RenderOptions,
}

impl MdInline {
    /// Create a new builder with the given style.
    pub fn new(style: StyleConfig) -> Self {
        Self {
            style,
            options: RenderOptions::default(),
        }
    }

    /// Set the punctuation passes.
    pub fn with_punctuation(mut self, punctuation: PunctuationOptions) -> Self {
        self.options = self.options.with_punctuation(punctuation);
        self
    }

    /// Skip punctuation normalization entirely.
    pub fn without_normalization(mut self) -> Self {
        self.options = self.options.with_normalize(false);
        self
    }

    /// Enable or disable render statistics.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.options = self.options.with_stats(collect);
        self
    }

    /// Replace all pipeline options at once.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the style in use.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Get the pipeline options in use.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Apply the configured punctuation passes only.
    pub fn normalize(&self, text: &str) -> String {
        if self.options.normalize {
            PunctuationNormalizer::new(self.options.punctuation).process(text)
        } else {
            text.to_string()
        }
    }

    /// Normalize and parse text into a document.
    pub fn parse(&self, text: &str) -> Document {
        parser::parse(&self.normalize(text))
    }

    /// Run the full pipeline.
    ///
    /// Statistics are only filled in when enabled with [`MdInline::with_stats`].
    pub fn format(&self, text: &str) -> RenderResult {
        let doc = self.parse(text);
        if self.options.collect_stats {
            render::to_html_with_stats(&doc, &self.style)
        } else {
            RenderResult::content_only(render::to_html(&doc, &self.style))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> StyleConfig {
        StyleConfig::new("#333333", "#07c160", 15.0, 1.75, 0.5, 16.0)
    }

    #[test]
    fn test_format_text_wraps_section() {
        let html = format_text("Hello", &style());
        assert!(html.starts_with("<section style=\""));
        assert!(html.ends_with("</section>"));
        assert!(html.contains(">Hello</p>\n"));
    }

    #[test]
    fn test_parse_text_normalizes_first() {
        let doc = parse_text("He said \"hi\"");
        assert_eq!(doc.blocks[0], Block::paragraph("He said 「hi」"));
    }

    #[test]
    fn test_builder_defaults() {
        let builder = MdInline::new(style());
        assert!(builder.options().normalize);
        assert!(!builder.options().collect_stats);
        assert_eq!(builder.style().accent_color, "#07c160");
    }

    #[test]
    fn test_builder_without_normalization() {
        let builder = MdInline::new(style()).without_normalization();
        let doc = builder.parse("a -- b");
        assert_eq!(doc.blocks[0], Block::paragraph("a -- b"));
    }

    #[test]
    fn test_builder_selected_passes() {
        let builder =
            MdInline::new(style()).with_punctuation(PunctuationOptions::none().with_dashes(true));
        assert_eq!(builder.normalize("\"a\" -- b"), "\"a\" —— b");
    }

    #[test]
    fn test_builder_stats_toggle() {
        let text = "# T\n\nbody";
        let plain = MdInline::new(style()).format(text);
        assert_eq!(plain.stats, RenderStats::default());

        let counted = MdInline::new(style()).with_stats(true).format(text);
        assert_eq!(counted.stats.heading_count, 1);
        assert_eq!(counted.stats.paragraph_count, 1);
        assert_eq!(plain.content, counted.content);
    }

    #[test]
    fn test_parse_text_ignores_leading_bom() {
        let doc = parse_text("\u{feff}# Title\n\nbody");
        assert_eq!(doc.blocks[0], Block::heading(1, "Title"));
        assert_eq!(doc.blocks[1], Block::paragraph("body"));
    }

    #[test]
    fn test_builder_with_options() {
        let options = RenderOptions::new().with_normalize(false).with_stats(true);
        let builder = MdInline::new(style()).with_options(options);
        assert_eq!(builder.options(), &options);
    }
}
