//! Document model types.
//!
//! This module defines the intermediate representation that bridges block
//! parsing and HTML rendering: a flat, ordered list of typed blocks plus
//! the caller-supplied style parameters.

mod block;
mod document;
mod style;
mod table;

pub use block::{Block, ListKind};
pub use document::Document;
pub use style::StyleConfig;
pub use table::Table;

pub(crate) use table::split_cells;
