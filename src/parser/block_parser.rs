//! Line-oriented block parser.
//!
//! A single forward pass over the physical lines. Two multi-line
//! constructs latch the parser into a mode until they end:
//!
//! - fenced code blocks (`InCode`), which swallow every line verbatim until
//!   the next fence line;
//! - pipe tables (`InTable`), which collect rows until the first line that
//!   is not wrapped in pipes.
//!
//! Every other non-blank line is classified on its own.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{split_cells, Block, Document, ListKind, Table};
use crate::syntax;

static ORDERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.\s").expect("valid regex for ordered list markers"));

/// Highlight callouts must be shorter than this many characters.
const HIGHLIGHT_MAX_CHARS: usize = 50;

/// Parser mode between two lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParserState {
    /// Classifying lines one at a time
    #[default]
    Normal,

    /// Inside a fenced code block
    InCode {
        /// Info string of the opening fence
        language: Option<String>,
        /// Lines accumulated so far, untrimmed
        lines: Vec<String>,
    },

    /// Inside a pipe table
    InTable {
        /// Data rows accumulated so far
        table: Table,
    },
}

/// Incremental block parser.
///
/// # Example
///
/// ```
/// use mdinline::parser::BlockParser;
/// use mdinline::Block;
///
/// let mut parser = BlockParser::new();
/// parser.feed_line("# Title");
/// parser.feed_line("");
/// parser.feed_line("Body text");
/// let doc = parser.finish();
///
/// assert_eq!(doc.blocks[0], Block::heading(1, "Title"));
/// assert_eq!(doc.blocks[1], Block::paragraph("Body text"));
/// ```
#[derive(Debug, Default)]
pub struct BlockParser {
    state: ParserState,
    blocks: Vec<Block>,
}

impl BlockParser {
    /// Create a new parser in the normal state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whole text into a document.
    pub fn parse(text: &str) -> Document {
        let mut parser = Self::new();
        for line in text.lines() {
            parser.feed_line(line);
        }
        parser.finish()
    }

    /// Current parser mode.
    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// Blocks emitted so far.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Consume one physical line.
    pub fn feed_line(&mut self, line: &str) {
        let trimmed = syntax::trim_line(line);

        if matches!(self.state, ParserState::InCode { .. }) {
            if syntax::fence_info(trimmed).is_some() {
                self.close_code();
            } else if let ParserState::InCode { lines, .. } = &mut self.state {
                lines.push(line.to_string());
            }
            return;
        }

        if syntax::is_pipe_wrapped(trimmed) {
            if !matches!(self.state, ParserState::InTable { .. }) {
                self.state = ParserState::InTable {
                    table: Table::new(),
                };
            }
            if !syntax::is_separator_row(trimmed) {
                if let ParserState::InTable { table } = &mut self.state {
                    table.add_row(split_cells(trimmed));
                }
            }
            return;
        }

        // The line that ends a table is classified like any other.
        if matches!(self.state, ParserState::InTable { .. }) {
            self.close_table();
        }

        if let Some(info) = syntax::fence_info(trimmed) {
            let language = (!info.is_empty()).then(|| info.to_string());
            self.state = ParserState::InCode {
                language,
                lines: Vec::new(),
            };
            return;
        }

        if trimmed.is_empty() {
            return;
        }

        let block = classify_line(trimmed);
        self.emit(block);
    }

    /// Flush any open construct and return the document.
    pub fn finish(mut self) -> Document {
        match std::mem::take(&mut self.state) {
            ParserState::Normal => {}
            ParserState::InCode { language, lines } => {
                if lines.is_empty() {
                    log::debug!("Dropping empty unterminated code fence");
                } else {
                    log::debug!(
                        "Flushing unterminated code fence with {} lines",
                        lines.len()
                    );
                    self.emit(Block::CodeBlock {
                        language,
                        code: lines.join("\n"),
                    });
                }
            }
            ParserState::InTable { table } => {
                if table.is_empty() {
                    log::debug!("Dropping table without data rows at end of input");
                } else {
                    self.emit(Block::Table(table));
                }
            }
        }
        Document::from_blocks(self.blocks)
    }

    fn close_code(&mut self) {
        if let ParserState::InCode { language, lines } = std::mem::take(&mut self.state) {
            self.emit(Block::CodeBlock {
                language,
                code: lines.join("\n"),
            });
        }
    }

    fn close_table(&mut self) {
        if let ParserState::InTable { table } = std::mem::take(&mut self.state) {
            self.emit(Block::Table(table));
        }
    }

    fn emit(&mut self, block: Block) {
        log::trace!("block #{}: {}", self.blocks.len(), block.kind_name());
        self.blocks.push(block);
    }
}

/// Classify a trimmed, non-blank line outside code and table mode.
///
/// The first matching rule wins: horizontal rule, `# `, `## `, `### `,
/// `> `, checked todo, open todo, bullet item, numbered item, short line
/// with a CJK bracket (highlight), paragraph.
pub fn classify_line(trimmed: &str) -> Block {
    if syntax::is_horizontal_rule(trimmed) {
        return Block::HorizontalRule;
    }
    if let Some(text) = trimmed.strip_prefix("# ") {
        return Block::heading(1, text);
    }
    if let Some(text) = trimmed.strip_prefix("## ") {
        return Block::heading(2, text);
    }
    if let Some(text) = trimmed.strip_prefix("### ") {
        return Block::heading(3, text);
    }
    if let Some(text) = trimmed.strip_prefix("> ") {
        return Block::Blockquote {
            text: text.to_string(),
        };
    }
    if let Some(text) = trimmed
        .strip_prefix("- [x] ")
        .or_else(|| trimmed.strip_prefix("- [X] "))
    {
        return Block::Todo {
            done: true,
            text: text.to_string(),
        };
    }
    if let Some(text) = trimmed.strip_prefix("- [ ] ") {
        return Block::Todo {
            done: false,
            text: text.to_string(),
        };
    }
    if let Some(text) = strip_bullet(trimmed) {
        return Block::list_item(ListKind::Unordered, text);
    }
    if let Some(marker) = ORDERED_MARKER.find(trimmed) {
        return Block::list_item(ListKind::Ordered, &trimmed[marker.end()..]);
    }
    if is_highlight(trimmed) {
        return Block::Highlight {
            text: trimmed.to_string(),
        };
    }
    Block::paragraph(trimmed)
}

fn strip_bullet(trimmed: &str) -> Option<&str> {
    let mut chars = trimmed.char_indices();
    let (_, marker) = chars.next()?;
    let (_, space) = chars.next()?;
    if !matches!(marker, '-' | '*') || !space.is_whitespace() {
        return None;
    }
    let rest = chars.next().map(|(i, _)| i).unwrap_or(trimmed.len());
    Some(&trimmed[rest..])
}

fn is_highlight(trimmed: &str) -> bool {
    (trimmed.contains('【') || trimmed.contains('「'))
        && trimmed.chars().count() < HIGHLIGHT_MAX_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_priority() {
        assert_eq!(classify_line("---"), Block::HorizontalRule);
        assert_eq!(classify_line("# A"), Block::heading(1, "A"));
        assert_eq!(classify_line("## A"), Block::heading(2, "A"));
        assert_eq!(classify_line("### A"), Block::heading(3, "A"));
        assert_eq!(classify_line("#### A"), Block::paragraph("#### A"));
        assert_eq!(classify_line("#A"), Block::paragraph("#A"));
    }

    #[test]
    fn test_classify_todo_before_bullet() {
        assert_eq!(
            classify_line("- [x] done"),
            Block::Todo {
                done: true,
                text: "done".into()
            }
        );
        assert_eq!(
            classify_line("- [X] done"),
            Block::Todo {
                done: true,
                text: "done".into()
            }
        );
        assert_eq!(
            classify_line("- [ ] open"),
            Block::Todo {
                done: false,
                text: "open".into()
            }
        );
    }

    #[test]
    fn test_classify_lists() {
        assert_eq!(
            classify_line("- item"),
            Block::list_item(ListKind::Unordered, "item")
        );
        assert_eq!(
            classify_line("* item"),
            Block::list_item(ListKind::Unordered, "item")
        );
        assert_eq!(
            classify_line("12. item"),
            Block::list_item(ListKind::Ordered, "item")
        );
        assert_eq!(classify_line("-item"), Block::paragraph("-item"));
        assert_eq!(classify_line("1.item"), Block::paragraph("1.item"));
    }

    #[test]
    fn test_classify_highlight() {
        assert_eq!(
            classify_line("【重点】记住这句话"),
            Block::Highlight {
                text: "【重点】记住这句话".into()
            }
        );
        let long = format!("「{}」", "长".repeat(60));
        assert_eq!(classify_line(&long), Block::paragraph(long.clone()));
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(
            classify_line("> quoted"),
            Block::Blockquote {
                text: "quoted".into()
            }
        );
    }

    #[test]
    fn test_code_fence_state() {
        let mut parser = BlockParser::new();
        parser.feed_line("```rust");
        assert!(matches!(parser.state(), ParserState::InCode { .. }));
        parser.feed_line("  let x = 1;");
        parser.feed_line("");
        parser.feed_line("```");
        assert_eq!(parser.state(), &ParserState::Normal);

        let doc = parser.finish();
        assert_eq!(
            doc.blocks,
            vec![Block::CodeBlock {
                language: Some("rust".into()),
                code: "  let x = 1;\n".into()
            }]
        );
    }

    #[test]
    fn test_code_lines_not_classified() {
        let doc = BlockParser::parse("```\n# not a heading\n| a |\n```");
        assert_eq!(doc.blocks, vec![Block::code("# not a heading\n| a |")]);
    }

    #[test]
    fn test_unterminated_code_flushed() {
        let doc = BlockParser::parse("```\nline 1\n\nline 3");
        assert_eq!(doc.blocks, vec![Block::code("line 1\n\nline 3")]);
    }

    #[test]
    fn test_empty_unterminated_code_dropped() {
        let doc = BlockParser::parse("text\n```");
        assert_eq!(doc.blocks, vec![Block::paragraph("text")]);
    }

    #[test]
    fn test_table_rows_and_separator() {
        let doc = BlockParser::parse("| a | b |\n|:---:|:-:|\n| 1 | 2 |\nafter");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Table(Table::from_rows([vec!["a", "b"], vec!["1", "2"]])),
                Block::paragraph("after"),
            ]
        );
    }

    #[test]
    fn test_table_closed_by_blank_line() {
        let doc = BlockParser::parse("| a |\n\n| b |");
        assert_eq!(doc.len(), 2);
        assert!(doc.blocks.iter().all(Block::is_table));
    }

    #[test]
    fn test_table_closed_by_fence() {
        let doc = BlockParser::parse("| a |\n```\ncode\n```");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Table(Table::from_rows([vec!["a"]])),
                Block::code("code"),
            ]
        );
    }

    #[test]
    fn test_unterminated_table_flushed() {
        let mut parser = BlockParser::new();
        parser.feed_line("| x | y | z |");
        parser.feed_line("| 1 |");
        assert!(matches!(parser.state(), ParserState::InTable { .. }));
        let doc = parser.finish();
        assert_eq!(
            doc.blocks,
            vec![Block::Table(Table::from_rows([
                vec!["x", "y", "z"],
                vec!["1"]
            ]))]
        );
    }

    #[test]
    fn test_lone_pipe_is_single_cell_table() {
        let doc = BlockParser::parse("|");
        assert_eq!(doc.blocks, vec![Block::Table(Table::from_rows([vec![""]]))]);
    }

    #[test]
    fn test_leading_bom_ignored() {
        let doc = BlockParser::parse("\u{feff}# Title\n\nbody");
        assert_eq!(
            doc.blocks,
            vec![Block::heading(1, "Title"), Block::paragraph("body")]
        );
    }

    #[test]
    fn test_blank_lines_skipped() {
        let doc = BlockParser::parse("\n\n a \n\n\n b \n");
        assert_eq!(
            doc.blocks,
            vec![Block::paragraph("a"), Block::paragraph("b")]
        );
    }
}
