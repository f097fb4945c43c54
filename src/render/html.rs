//! HTML rendering with every style inlined on its element.

use crate::model::{Block, Document, ListKind, StyleConfig, Table};

use super::grouping::{group_lists, RenderUnit};
use super::inline::InlineFormatter;
use super::styles::Styles;
use super::{RenderResult, RenderStats};

const CHECKMARK_SVG: &str = "<svg viewBox=\"0 0 12 12\" width=\"12\" height=\"12\" style=\"position:absolute;left:0;top:0;\"><path fill=\"white\" d=\"M10 3L4.5 8.5 2 6\" stroke=\"white\" stroke-width=\"2\" fill=\"none\"/></svg>";
const DONE_LABEL_STYLE: &str = "text-decoration: line-through; opacity: 0.6;";

/// Render a document to a self-contained HTML fragment.
pub fn to_html(doc: &Document, style: &StyleConfig) -> String {
    HtmlRenderer::new(style).render(doc)
}

/// Render a document to HTML with element statistics.
pub fn to_html_with_stats(doc: &Document, style: &StyleConfig) -> RenderResult {
    HtmlRenderer::new(style).render_with_stats(doc)
}

/// HTML renderer.
pub struct HtmlRenderer {
    styles: Styles,
    inline: InlineFormatter,
    stats: RenderStats,
}

impl HtmlRenderer {
    /// Create a renderer for a style configuration.
    pub fn new(style: &StyleConfig) -> Self {
        Self {
            styles: Styles::new(style),
            inline: InlineFormatter::new(style.accent_color.as_str()),
            stats: RenderStats::new(),
        }
    }

    /// Style strings used by this renderer.
    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Render a document to HTML.
    pub fn render(mut self, doc: &Document) -> String {
        self.render_internal(doc)
    }

    /// Render a document to HTML with statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> RenderResult {
        let content = self.render_internal(doc);
        RenderResult::new(content, self.stats)
    }

    fn render_internal(&mut self, doc: &Document) -> String {
        let mut output = format!("<section style=\"{}\">\n", self.styles.base);

        for unit in group_lists(&doc.blocks) {
            match unit {
                RenderUnit::Block(block) => self.render_block(&mut output, block),
                RenderUnit::List { kind, items } => self.render_list(&mut output, kind, &items),
            }
        }

        output.push_str("</section>");
        log::trace!(
            "Rendered {} blocks into {} elements ({} bytes)",
            doc.len(),
            self.stats.element_count(),
            output.len()
        );
        output
    }

    fn render_block(&mut self, output: &mut String, block: &Block) {
        match block {
            Block::Heading { level, text } => {
                self.stats.add_heading();
                let level = (*level).clamp(1, 3);
                output.push_str(&format!(
                    "<h{level} style=\"{}\">{}</h{level}>\n",
                    self.styles.heading(level),
                    self.inline.format(text),
                    level = level
                ));
            }
            Block::Paragraph { text } => {
                self.stats.add_paragraph();
                output.push_str(&format!(
                    "<p style=\"{}\">{}</p>\n",
                    self.styles.paragraph,
                    self.inline.format(text)
                ));
            }
            Block::Blockquote { text } => {
                self.stats.add_blockquote();
                output.push_str(&format!(
                    "<blockquote style=\"{}\">{}</blockquote>\n",
                    self.styles.blockquote,
                    self.inline.format(text)
                ));
            }
            Block::CodeBlock { code, .. } => {
                self.stats.add_code_block();
                output.push_str(&format!(
                    "<pre style=\"{}\">{}</pre>\n",
                    self.styles.code_block,
                    escape_html(code)
                ));
            }
            Block::HorizontalRule => {
                self.stats.add_horizontal_rule();
                output.push_str(&format!(
                    "<div style=\"{}\"></div>\n",
                    self.styles.horizontal_rule
                ));
            }
            Block::Highlight { text } => {
                self.stats.add_highlight();
                output.push_str(&format!(
                    "<div style=\"{}\">{}</div>\n",
                    self.styles.highlight,
                    self.inline.format(text)
                ));
            }
            Block::Table(table) => {
                self.stats.add_table();
                self.render_table(output, table);
            }
            Block::Todo { done, text } => {
                self.stats.add_todo();
                self.render_todo(output, *done, text);
            }
            // Folded by `group_lists`; a stray item still renders as a one-item list.
            Block::ListItem { kind, text } => self.render_list(output, *kind, &[text.as_str()]),
        }
    }

    fn render_list(&mut self, output: &mut String, kind: ListKind, items: &[&str]) {
        self.stats.add_list(items.len());
        let tag = kind.tag();

        output.push_str(&format!("<{} style=\"{}\">\n", tag, self.styles.list));
        for item in items {
            output.push_str(&format!(
                "  <li style=\"{}\">{}</li>\n",
                self.styles.list_item,
                self.inline.format(item)
            ));
        }
        output.push_str(&format!("</{}>\n", tag));
    }

    fn render_table(&self, output: &mut String, table: &Table) {
        output.push_str(&format!("<table style=\"{}\">\n", self.styles.table));

        for (row_idx, row) in table.rows.iter().enumerate() {
            let (tag, cell_style) = if row_idx == 0 {
                ("th", &self.styles.header_cell)
            } else {
                ("td", &self.styles.data_cell)
            };

            output.push_str("  <tr>\n");
            for cell in row {
                output.push_str(&format!(
                    "    <{tag} style=\"{}\">{}</{tag}>\n",
                    cell_style,
                    self.inline.format(cell),
                    tag = tag
                ));
            }
            output.push_str("  </tr>\n");
        }

        output.push_str("</table>\n");
    }

    fn render_todo(&self, output: &mut String, done: bool, text: &str) {
        let label = self.inline.format(text);
        if done {
            output.push_str(&format!(
                "<div style=\"{}\"><div style=\"{}\">{}</div><span style=\"{}\">{}</span></div>\n",
                self.styles.todo,
                self.styles.todo_box_done,
                CHECKMARK_SVG,
                DONE_LABEL_STYLE,
                label
            ));
        } else {
            output.push_str(&format!(
                "<div style=\"{}\"><div style=\"{}\"></div><span>{}</span></div>\n",
                self.styles.todo, self.styles.todo_box, label
            ));
        }
    }
}

/// Escape code block content for a `<pre>` element.
///
/// Newlines become `<br>` so the block survives editors that collapse
/// whitespace.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\n' => result.push_str("<br>"),
            _ => result.push(c),
        }
    }
    result
}
