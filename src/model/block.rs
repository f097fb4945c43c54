//! Block-level types.

use super::Table;
use serde::{Deserialize, Serialize};

/// Category of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// `- item` / `* item`
    Unordered,
    /// `1. item`
    Ordered,
}

impl ListKind {
    /// HTML container tag for this list category.
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// One semantic unit of a parsed document.
///
/// List items stay flat here; runs of adjacent items are folded into lists
/// only at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A horizontal rule / separator
    HorizontalRule,

    /// A heading (levels 1-3)
    Heading {
        /// Heading level
        level: u8,
        /// Heading text without the `#` prefix
        text: String,
    },

    /// A single-line quotation
    Blockquote {
        /// Quoted text without the `> ` prefix
        text: String,
    },

    /// A task list entry
    Todo {
        /// Whether the task is checked
        done: bool,
        /// Task label
        text: String,
    },

    /// A list item, either bulleted or numbered
    ListItem {
        /// List category
        kind: ListKind,
        /// Item text without the marker
        text: String,
    },

    /// A short line set off as a callout
    Highlight {
        /// Callout text
        text: String,
    },

    /// A plain paragraph
    Paragraph {
        /// Paragraph text
        text: String,
    },

    /// A fenced code block
    CodeBlock {
        /// Info string after the opening fence, if any
        language: Option<String>,
        /// Code lines joined by `\n`, verbatim
        code: String,
    },

    /// A pipe table
    Table(Table),
}

impl Block {
    /// Create a heading block.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Create a list item block.
    pub fn list_item(kind: ListKind, text: impl Into<String>) -> Self {
        Block::ListItem {
            kind,
            text: text.into(),
        }
    }

    /// Create a code block without an info string.
    pub fn code(code: impl Into<String>) -> Self {
        Block::CodeBlock {
            language: None,
            code: code.into(),
        }
    }

    /// Short name of the block kind, as used in the JSON `type` tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::HorizontalRule => "horizontal_rule",
            Block::Heading { .. } => "heading",
            Block::Blockquote { .. } => "blockquote",
            Block::Todo { .. } => "todo",
            Block::ListItem { .. } => "list_item",
            Block::Highlight { .. } => "highlight",
            Block::Paragraph { .. } => "paragraph",
            Block::CodeBlock { .. } => "code_block",
            Block::Table(_) => "table",
        }
    }

    /// Inline text of the block, if it has a single text span.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading { text, .. }
            | Block::Blockquote { text }
            | Block::Todo { text, .. }
            | Block::ListItem { text, .. }
            | Block::Highlight { text }
            | Block::Paragraph { text } => Some(text),
            Block::HorizontalRule | Block::CodeBlock { .. } | Block::Table(_) => None,
        }
    }

    /// List category if this block is a list item.
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            Block::ListItem { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Check if this block is a code block.
    pub fn is_code(&self) -> bool {
        matches!(self, Block::CodeBlock { .. })
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }
}
