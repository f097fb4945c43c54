//! Markdown block parsing module.

mod block_parser;

pub use block_parser::{classify_line, BlockParser, ParserState};

use crate::model::Document;

/// Parse already-normalized text into a document.
pub fn parse(text: &str) -> Document {
    BlockParser::parse(text)
}
