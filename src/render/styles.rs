//! Inline style strings for every rendered element.

use crate::model::StyleConfig;

const FONT_STACK: &str =
    "-apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans SC', sans-serif";

/// Style attribute values computed once per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styles {
    /// Outer `<section>` container
    pub base: String,
    /// Level 1 heading
    pub h1: String,
    /// Level 2 heading
    pub h2: String,
    /// Level 3 heading
    pub h3: String,
    /// Paragraph
    pub paragraph: String,
    /// Blockquote
    pub blockquote: String,
    /// Preformatted code block
    pub code_block: String,
    /// Horizontal rule divider
    pub horizontal_rule: String,
    /// Highlight callout
    pub highlight: String,
    /// Table element
    pub table: String,
    /// Header cell
    pub header_cell: String,
    /// Data cell
    pub data_cell: String,
    /// Todo row
    pub todo: String,
    /// Open checkbox
    pub todo_box: String,
    /// Checked checkbox
    pub todo_box_done: String,
    /// List container
    pub list: String,
    /// List item
    pub list_item: String,
}

impl Styles {
    /// Build every style string from a style configuration.
    pub fn new(style: &StyleConfig) -> Self {
        let text = &style.text_color;
        let accent = &style.accent_color;

        Self {
            base: format!(
                "font-family: {}; color: {}; font-size: {}px; line-height: {}; letter-spacing: {}px;",
                FONT_STACK, text, style.font_size, style.line_height, style.letter_spacing
            ),
            h1: format!(
                "font-size: 22px; font-weight: 700; color: {}; margin-bottom: 24px; line-height: 1.4; text-align: center;",
                text
            ),
            h2: format!(
                "font-size: 18px; font-weight: 600; color: {}; margin: 24px 0 16px 0; padding-left: 12px; border-left: 4px solid {}; line-height: 1.5;",
                text, accent
            ),
            h3: format!(
                "font-size: 16px; font-weight: 600; color: {}; margin: 20px 0 12px 0;",
                text
            ),
            paragraph: format!(
                "margin-bottom: {}px; text-align: justify;",
                style.paragraph_margin
            ),
            blockquote: format!(
                "background: #f7f7f8; border-left: 4px solid {}; padding: 16px 20px; margin: 20px 0; color: #595959; font-size: 14px; line-height: 1.8;",
                accent
            ),
            code_block: "background: #1e1e1e; color: #d4d4d4; padding: 16px 20px; margin: 20px 0; border-radius: 8px; font-family: 'SF Mono', Menlo, Monaco, monospace; font-size: 13px; line-height: 1.6; overflow-x: auto; white-space: pre-wrap;".to_string(),
            horizontal_rule: format!(
                "width: 100%; height: 1px; background-color: {}; margin: 24px 0; border: none;",
                accent
            ),
            highlight: format!(
                "background: linear-gradient(to right, {accent}15, {accent}08); padding: 16px 20px; margin: 20px 0; border-radius: 8px; font-size: 15px; line-height: 1.8; color: {text};",
                accent = accent,
                text = text
            ),
            table: "width: 100%; border-collapse: collapse; margin: 20px 0; font-size: 14px;"
                .to_string(),
            header_cell: format!(
                "background: {}15; padding: 12px 16px; border: 1px solid #e5e5e5; text-align: left; font-weight: 600;",
                accent
            ),
            data_cell: "padding: 12px 16px; border: 1px solid #e5e5e5;".to_string(),
            todo: "display: flex; align-items: flex-start; gap: 8px; margin-bottom: 8px;"
                .to_string(),
            todo_box: format!(
                "width: 16px; height: 16px; border: 2px solid {}; border-radius: 3px; margin-top: 3px; flex-shrink: 0;",
                accent
            ),
            todo_box_done: format!(
                "width: 16px; height: 16px; background: {accent}; border: 2px solid {accent}; border-radius: 3px; margin-top: 3px; flex-shrink: 0; position: relative;",
                accent = accent
            ),
            list: "margin: 16px 0; padding-left: 24px;".to_string(),
            list_item: format!("margin-bottom: 8px; color: {};", text),
        }
    }

    /// Heading style for a level, clamped to 1..=3.
    pub fn heading(&self, level: u8) -> &str {
        match level {
            0 | 1 => &self.h1,
            2 => &self.h2,
            _ => &self.h3,
        }
    }
}
