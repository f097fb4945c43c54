//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered HTML
    pub content: String,

    /// Render statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self { content, stats }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            stats: RenderStats::default(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Counts of the elements emitted during rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of headings
    pub heading_count: u32,

    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of blockquotes
    pub blockquote_count: u32,

    /// Number of code blocks
    pub code_block_count: u32,

    /// Number of horizontal rules
    pub horizontal_rule_count: u32,

    /// Number of highlight callouts
    pub highlight_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Number of todo items, open or done
    pub todo_count: u32,

    /// Number of list items
    pub list_item_count: u32,

    /// Number of list containers
    pub list_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment blockquote count.
    pub fn add_blockquote(&mut self) {
        self.blockquote_count += 1;
    }

    /// Increment code block count.
    pub fn add_code_block(&mut self) {
        self.code_block_count += 1;
    }

    /// Increment horizontal rule count.
    pub fn add_horizontal_rule(&mut self) {
        self.horizontal_rule_count += 1;
    }

    /// Increment highlight count.
    pub fn add_highlight(&mut self) {
        self.highlight_count += 1;
    }

    /// Increment table count.
    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Increment todo count.
    pub fn add_todo(&mut self) {
        self.todo_count += 1;
    }

    /// Count one list container holding `items` entries.
    pub fn add_list(&mut self, items: usize) {
        self.list_count += 1;
        self.list_item_count += items as u32;
    }

    /// Total number of top-level elements inside the container.
    pub fn element_count(&self) -> u32 {
        self.heading_count
            + self.paragraph_count
            + self.blockquote_count
            + self.code_block_count
            + self.horizontal_rule_count
            + self.highlight_count
            + self.table_count
            + self.todo_count
            + self.list_count
    }
}
