//! Folding of adjacent list items into list containers.

use crate::model::{Block, ListKind};

/// Input unit of the HTML emitter.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderUnit<'a> {
    /// A single non-list block
    Block(&'a Block),
    /// A maximal run of same-category list items
    List {
        /// Category shared by every item in the run
        kind: ListKind,
        /// Item texts in source order
        items: Vec<&'a str>,
    },
}

impl RenderUnit<'_> {
    /// Check if this unit is a folded list.
    pub fn is_list(&self) -> bool {
        matches!(self, RenderUnit::List { .. })
    }
}

/// Fold maximal runs of same-category list items into list units.
///
/// Adjacency is positional: any other block between two items ends the
/// run, and a change of category starts a new one.
pub fn group_lists(blocks: &[Block]) -> Vec<RenderUnit<'_>> {
    let mut units: Vec<RenderUnit<'_>> = Vec::with_capacity(blocks.len());

    for block in blocks {
        let Block::ListItem { kind, text } = block else {
            units.push(RenderUnit::Block(block));
            continue;
        };

        if let Some(RenderUnit::List {
            kind: open_kind,
            items,
        }) = units.last_mut()
        {
            if *open_kind == *kind {
                items.push(text.as_str());
                continue;
            }
        }

        units.push(RenderUnit::List {
            kind: *kind,
            items: vec![text.as_str()],
        });
    }

    units
}
